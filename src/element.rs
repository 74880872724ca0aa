// This file is part of BadRed.

// BadRed is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// BadRed is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::fmt::{self, Debug};

use strum_macros::{Display, EnumIter, IntoStaticStr};

/// The closed set of element layouts a [GapBuffer](crate::GapBuffer) can hold.
///
/// `Display` gives the human readable type name used in error messages, while the
/// [typecode](ElementKind::typecode) is the single character layout code.
///
/// ### Examples
/// ```
/// use bad_gap_seq::ElementKind;
/// use strum::IntoEnumIterator;
///
/// assert_eq!(ElementKind::iter().count(), 12);
/// assert_eq!(ElementKind::I32.to_string(), "signed int");
/// assert_eq!(ElementKind::I32.typecode(), 'i');
/// assert!(ElementKind::Char.is_text());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum ElementKind {
    /// Single byte character.
    #[strum(to_string = "character")]
    ByteChar,
    /// `i8`
    #[strum(to_string = "signed character")]
    I8,
    /// `u8`
    #[strum(to_string = "unsigned character")]
    U8,
    /// Unicode scalar value.
    #[strum(to_string = "unicode character")]
    Char,
    /// `i16`
    #[strum(to_string = "signed short")]
    I16,
    /// `u16`
    #[strum(to_string = "unsigned short")]
    U16,
    /// `i32`
    #[strum(to_string = "signed int")]
    I32,
    /// `u32`
    #[strum(to_string = "unsigned int")]
    U32,
    /// `i64`
    #[strum(to_string = "signed long")]
    I64,
    /// `u64`
    #[strum(to_string = "unsigned long")]
    U64,
    /// `f32`
    #[strum(to_string = "float")]
    F32,
    /// `f64`
    #[strum(to_string = "double")]
    F64,
}

impl ElementKind {
    /// Returns the single character code identifying this layout.
    pub fn typecode(self) -> char {
        match self {
            Self::ByteChar => 'c',
            Self::I8 => 'b',
            Self::U8 => 'B',
            Self::Char => 'u',
            Self::I16 => 'h',
            Self::U16 => 'H',
            Self::I32 => 'i',
            Self::U32 => 'I',
            Self::I64 => 'l',
            Self::U64 => 'L',
            Self::F32 => 'f',
            Self::F64 => 'd',
        }
    }

    /// Whether elements of this kind are characters, enabling substring search.
    pub fn is_text(self) -> bool {
        matches!(self, Self::ByteChar | Self::Char)
    }
}

/// A single byte character, kept distinct from `u8` so byte text and small integers are never
/// confused.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct ByteChar(pub u8);

impl Debug for ByteChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0 as char)
    }
}

impl fmt::Display for ByteChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0 as char)
    }
}

impl From<u8> for ByteChar {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

/// A dynamically typed value, checked against a buffer's [ElementKind] before it is stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    /// Any integer. Only accepted by integer buffers whose range contains it.
    Int(i128),
    /// A floating point number. Only accepted by float buffers.
    Float(f64),
    /// A single byte character.
    ByteChar(u8),
    /// A unicode character.
    Char(char),
}

mod sealed {
    pub trait Sealed {}
}

/// A primitive type that can be stored in a [GapBuffer](crate::GapBuffer).
///
/// This trait is sealed; the implementors are exactly the layouts listed in [ElementKind].
pub trait Element: sealed::Sealed + Copy + Default + PartialEq + PartialOrd + Debug {
    /// The layout tag of this type.
    const KIND: ElementKind;

    /// Converts a dynamic value into this type, or `None` if it is not an instance of it.
    fn from_value(value: Value) -> Option<Self>;

    /// Converts this element into a dynamic value.
    fn into_value(self) -> Value;

    /// Appends the text encoding of `run` to `out`. Only text kinds produce output.
    #[doc(hidden)]
    fn encode_text(run: &[Self], out: &mut Vec<u8>) {
        let _ = (run, out);
    }
}

macro_rules! int_element {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Element for $ty {
                const KIND: ElementKind = ElementKind::$kind;

                fn from_value(value: Value) -> Option<Self> {
                    match value {
                        Value::Int(int) => <$ty>::try_from(int).ok(),
                        _ => None,
                    }
                }

                fn into_value(self) -> Value {
                    Value::Int(i128::from(self))
                }
            }
        )*
    };
}

int_element! {
    i8 => I8,
    u8 => U8,
    i16 => I16,
    u16 => U16,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
}

impl sealed::Sealed for f32 {}

impl Element for f32 {
    const KIND: ElementKind = ElementKind::F32;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Float(float) => Some(float as f32),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Float(f64::from(self))
    }
}

impl sealed::Sealed for f64 {}

impl Element for f64 {
    const KIND: ElementKind = ElementKind::F64;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Float(float) => Some(float),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Float(self)
    }
}

impl sealed::Sealed for ByteChar {}

impl Element for ByteChar {
    const KIND: ElementKind = ElementKind::ByteChar;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::ByteChar(byte) => Some(ByteChar(byte)),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::ByteChar(self.0)
    }

    fn encode_text(run: &[Self], out: &mut Vec<u8>) {
        out.extend(run.iter().map(|c| c.0));
    }
}

impl sealed::Sealed for char {}

impl Element for char {
    const KIND: ElementKind = ElementKind::Char;

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Char(c) => Some(c),
            _ => None,
        }
    }

    fn into_value(self) -> Value {
        Value::Char(self)
    }

    fn encode_text(run: &[Self], out: &mut Vec<u8>) {
        let mut utf8 = [0; 4];
        for c in run {
            out.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
        }
    }
}
