// This file is part of BadRed.

// BadRed is free software: you can redistribute it and/or modify it under the terms of the GNU General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
//
// BadRed is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.

use std::cmp::Ordering;

use bad_gap_seq::{
    ByteChar, Element, ElementKind, Error, GapBuffer, GapConfig, Slice, Value,
};
use pretty_assertions::assert_eq;

/// Runs `$check` once for three valid elements of every supported layout.
macro_rules! for_every_kind {
    ($check:ident) => {
        $check::<ByteChar>(vec![ByteChar(b'a'), ByteChar(b'b'), ByteChar(b'c')]);
        $check::<i8>(vec![0, 1, 2]);
        $check::<u8>(vec![0, 1, 2]);
        $check::<char>(vec!['a', 'b', 'c']);
        $check::<i16>(vec![0, 1, 2]);
        $check::<u16>(vec![0, 1, 2]);
        $check::<i32>(vec![0, 1, 2]);
        $check::<u32>(vec![0, 1, 2]);
        $check::<i64>(vec![0, 1, 2]);
        $check::<u64>(vec![0, 1, 2]);
        $check::<f32>(vec![0.0, 1.0, 2.0]);
        $check::<f64>(vec![0.0, 1.0, 2.0]);
    };
}

fn with_gap(content: impl IntoIterator<Item = i32>, gap_size: usize) -> GapBuffer<i32> {
    GapBuffer::from_vec_with_config(
        content.into_iter().collect(),
        GapConfig::default().with_min_gap_size(gap_size),
    )
}

fn doubled<T: Element>(content: &[T]) -> Vec<T> {
    content.iter().chain(content).copied().collect()
}

#[test]
fn init_every_kind() {
    fn check<T: Element>(content: Vec<T>) {
        let empty = GapBuffer::<T>::new();
        assert_eq!(empty.len(), 0);

        let buffer = GapBuffer::from(content.clone());
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer, content);
        assert_eq!(buffer.kind(), T::KIND);

        let values = content.iter().map(|item| item.into_value());
        let from_values = GapBuffer::<T>::try_from_values(values, GapConfig::default()).unwrap();
        assert_eq!(from_values, buffer);

        let collected: GapBuffer<T> = std::iter::empty().collect();
        assert!(collected.is_empty());
    }

    for_every_kind!(check);
}

#[test]
fn init_text_kinds_reject_numbers() {
    let numbers = [Value::Int(0), Value::Int(1)];

    assert_eq!(
        GapBuffer::<ByteChar>::try_from_values(numbers, GapConfig::default()).unwrap_err(),
        Error::TypeMismatch { expected: ElementKind::ByteChar }
    );
    assert_eq!(
        GapBuffer::<char>::try_from_values(numbers, GapConfig::default()).unwrap_err(),
        Error::TypeMismatch { expected: ElementKind::Char }
    );
    assert_eq!(
        GapBuffer::<char>::try_from_values([Value::ByteChar(b'a')], GapConfig::default())
            .unwrap_err(),
        Error::TypeMismatch { expected: ElementKind::Char }
    );
}

#[test]
fn type_mismatch_names_expected_kind() {
    let error = GapBuffer::<i32>::try_from_values([Value::Float(1.5)], GapConfig::default())
        .unwrap_err();

    assert_eq!(error.to_string(), "GapBuffer items must be of type signed int");
}

#[test]
fn raw_access_reads_and_edits() {
    fn check<T: Element>(content: Vec<T>) {
        let mut buffer = GapBuffer::from(content.clone());
        buffer.with_raw(|raw| assert_eq!(raw.as_slice(), content.as_slice()));

        buffer.with_raw(|raw| raw.extend_from_slice(&content));
        assert_eq!(buffer, doubled(&content));

        let mut buffer = GapBuffer::from(content.clone());
        buffer.with_raw(|raw| raw.pop());
        assert_eq!(buffer, &content[..2]);
    }

    for_every_kind!(check);
}

#[test]
fn equality_across_lengths() {
    fn check<T: Element>(content: Vec<T>) {
        let buffer = GapBuffer::from(content.clone());
        assert!(buffer.equals(content.iter().copied()));
        assert!(!buffer.equals(doubled(&content)));

        let short = GapBuffer::from(&content[..2]);
        assert!(!short.equals(content.iter().copied()));
        assert!(short != buffer);
    }

    for_every_kind!(check);
}

#[test]
fn equality_against_infinite_iterable() {
    let buffer = GapBuffer::from([9, 9, 9, 9, 9]);

    assert!(!buffer.equals(std::iter::repeat(9)));
    assert!(!buffer.equals(std::iter::repeat_with(|| 9)));
}

#[test]
fn lexicographic_ordering() {
    let abc = GapBuffer::<ByteChar>::from("abc");
    let acd = GapBuffer::<ByteChar>::from("acd");
    let ab = GapBuffer::<ByteChar>::from("ab");

    assert!(abc < acd);
    assert!(abc <= acd);
    assert!(acd > abc);
    assert!(acd >= abc);
    assert!(abc <= abc.clone());
    assert!(abc >= abc.clone());
    assert_eq!(abc.compare(ab.iter().copied()), Ordering::Greater);
    assert_eq!(ab.compare(abc.iter().copied()), Ordering::Less);
}

#[test]
fn compare_against_infinite_iterable() {
    let buffer = GapBuffer::<char>::from("aaaa");

    assert_eq!(buffer.compare(std::iter::repeat('a')), Ordering::Greater);
    assert_eq!(buffer.compare(std::iter::repeat('b')), Ordering::Greater);
}

#[test]
fn membership_of_numbers() {
    let mut buffer = GapBuffer::from([0, 1, 2, 3, 4, 5]);

    assert!((0..6).all(|i| buffer.contains(&i)));
    assert!((6..10).all(|i| !buffer.contains(&i)));
    assert!(!buffer.contains_run(&[0, 1]));

    buffer.append(6);
    assert!(buffer.contains(&6));
    buffer.pop_at(0).unwrap();
    assert!(!buffer.contains(&0));
}

#[test]
fn membership_of_text() {
    fn check<T: Element>(mut buffer: GapBuffer<T>, text: impl Fn(&str) -> Vec<T>) {
        assert!(buffer.contains_run(&text("")));
        assert!(buffer.contains_run(&text("h")));
        assert!(buffer.contains_run(&text("hello")));
        assert!(!buffer.contains_run(&text("foo")));

        assert!(!buffer.contains_run(&text("pants")));
        buffer.extend(text(" pants"));
        assert!(buffer.contains_run(&text("pants")));

        assert!(buffer.contains_run(&text("world")));
        buffer.delete_range(Slice::from(5..)).unwrap();
        assert!(!buffer.contains_run(&text("world")));
        assert_eq!(buffer.len(), 5);
    }

    check(GapBuffer::<ByteChar>::from("hello, world!"), |s| {
        s.bytes().map(ByteChar).collect()
    });
    check(GapBuffer::<char>::from("hello, world!"), |s| s.chars().collect());

    assert!(GapBuffer::<char>::new().contains_run(&[]));
    assert!(GapBuffer::<ByteChar>::new().contains_run(&[]));
}

#[test]
fn concat_and_repeat() {
    fn check<T: Element>(content: Vec<T>) {
        let buffer = GapBuffer::from(content.clone());

        assert_eq!(buffer.concat(buffer.iter().copied()), doubled(&content));
        assert_eq!(buffer.concat(content.iter().copied()), doubled(&content));

        let mut joined = buffer.clone();
        joined.concat_in_place(buffer.iter().copied());
        assert_eq!(joined, doubled(&content));

        assert!(buffer.repeat(0).is_empty());
        assert_eq!(buffer.repeat(1), content);
        assert_eq!(buffer.repeat(2), doubled(&content));

        for (count, expected) in [(0, vec![]), (1, content.clone()), (2, doubled(&content))] {
            let mut repeated = buffer.clone();
            repeated.repeat_in_place(count);
            assert_eq!(repeated, expected);
        }
    }

    for_every_kind!(check);
}

#[test]
fn length_tracks_edits() {
    let mut buffer = GapBuffer::<i32>::new();
    assert_eq!(buffer.len(), 0);

    buffer.append(0);
    assert_eq!(buffer.len(), 1);
    buffer.extend([1, 2, 3, 4]);
    assert_eq!(buffer.len(), 5);
    buffer.delete_range(..).unwrap();
    assert_eq!(buffer.len(), 0);
}

#[test]
fn min_and_max() {
    assert_eq!(GapBuffer::from([1, 2, 3, 0]).min(), Ok(0));
    assert_eq!(GapBuffer::from([0, 0, 0, 0]).min(), Ok(0));
    assert_eq!(GapBuffer::from([1, 2, 3, 0]).max(), Ok(3));
    assert_eq!(
        GapBuffer::<i32>::new().min(),
        Err(Error::Empty { operation: "min" })
    );
    assert_eq!(
        GapBuffer::<i32>::new().max(),
        Err(Error::Empty { operation: "max" })
    );
}

#[test]
fn index_and_count_every_kind() {
    fn check<T: Element>(content: Vec<T>) {
        let mut buffer = GapBuffer::from(content.clone());

        assert_eq!(buffer.index_of(&content[0], None, None), Ok(0));
        assert_eq!(buffer.count(&content[0]), 1);
        if !T::KIND.is_text() {
            assert_eq!(buffer.count_run(&[]), 0);
            assert!(!buffer.contains_run(&[]));
        }
    }

    for_every_kind!(check);
}

#[test]
fn count_text_runs() {
    let mut buffer = GapBuffer::<char>::from("abcabcab");

    assert_eq!(buffer.count_run(&['a', 'b', 'c']), 2);
    assert_eq!(buffer.count_run(&['a', 'b']), 3);
    assert_eq!(buffer.count_run(&['x', 'y']), 0);
    assert_eq!(buffer.count(&'c'), 2);
}

#[test]
fn index_with_bounds() {
    let buffer = GapBuffer::from([0, 1, 2, 3, 4, 5]);

    assert_eq!(buffer.index_of(&3, Some(2), None), Ok(3));
    assert_eq!(buffer.index_of(&3, Some(2), Some(4)), Ok(3));
    assert_eq!(buffer.index_of(&3, Some(0), Some(-4)), Err(Error::NotFound));
    assert_eq!(buffer.index_of(&0, Some(0), Some(-12)), Err(Error::NotFound));
    assert_eq!(buffer.index_of(&9, None, None), Err(Error::NotFound));

    let duplicates = GapBuffer::from([0, 1, 2, 3, 3, 5]);
    assert_eq!(duplicates.index_of(&3, None, None), Ok(3));
}

#[test]
fn get_and_set_by_index() {
    fn check<T: Element>(content: Vec<T>) {
        let mut buffer = GapBuffer::from(content.clone());
        let len = content.len() as isize;

        for i in 0..len {
            assert_eq!(buffer.get(i), Ok(content[i as usize]));
            assert_eq!(buffer.get(-i - 1), Ok(content[(len - i - 1) as usize]));
        }
        assert_eq!(
            buffer.get(len + 1),
            Err(Error::IndexOutOfRange { index: len + 1, len: 3 })
        );
        assert!(buffer.get(-(len + 1)).is_err());

        for (index, item) in content.iter().rev().enumerate() {
            buffer.set(index as isize, *item).unwrap();
            assert_eq!(buffer.get(index as isize), Ok(*item));
        }
        assert!(buffer.set(len, content[0]).is_err());
        assert!(buffer.set(-(len + 1), content[0]).is_err());
    }

    for_every_kind!(check);
}

#[test]
fn set_by_index_checks_type() {
    let mut buffer = GapBuffer::<u8>::from([0, 1, 2]);

    assert_eq!(
        buffer.set_value(0, Value::Int(256)),
        Err(Error::TypeMismatch { expected: ElementKind::U8 })
    );
    buffer.set_value(-1, Value::Int(255)).unwrap();
    assert_eq!(buffer, [0, 1, 255]);
}

#[test]
fn delete_by_index() {
    let mut buffer = GapBuffer::from([0, 1, 2, 3, 4]);

    buffer.delete(1).unwrap();
    assert_eq!(buffer, [0, 2, 3, 4]);
    buffer.delete(-1).unwrap();
    assert_eq!(buffer, [0, 2, 3]);
    assert_eq!(
        buffer.delete(3),
        Err(Error::IndexOutOfRange { index: 3, len: 3 })
    );
    assert!(buffer.delete(-4).is_err());
}

#[test]
fn get_slices() {
    let buffer = GapBuffer::from([0, 1, 2, 3, 4, 5]);

    assert_eq!(buffer.get_range(2..4).unwrap(), [2, 3]);
    assert_eq!(buffer.get_range(..).unwrap(), buffer);
    assert_eq!(buffer.get_range(Slice::from(1..).with_step(2)).unwrap(), [1, 3, 5]);
    assert_eq!(buffer.get_range(Slice::full().with_step(-2)).unwrap(), [5, 3, 1]);
    assert_eq!(buffer.get_range(Slice::from(..-1).with_step(-2)).unwrap(), Vec::<i32>::new());
    assert_eq!(buffer.get_range(10..).unwrap(), Vec::<i32>::new());
    assert_eq!(buffer.get_range(Slice::full().with_step(isize::MIN)).unwrap(), [5]);
    assert_eq!(buffer.get_range(Slice::full().with_step(isize::MAX)).unwrap(), [0]);
    assert_eq!(
        buffer.get_range(Slice::full().with_step(0)),
        Err(Error::ZeroStep)
    );
}

#[test]
fn set_slices() {
    let cases: Vec<(Slice, Vec<i32>, Vec<i32>)> = vec![
        (Slice::from(..), vec![], vec![]),
        (Slice::from(..), vec![9, 9], vec![9, 9]),
        (Slice::from(10..), vec![9], vec![0, 1, 2, 3, 4, 9]),
        (Slice::from(1..4), vec![9], vec![0, 9, 4]),
        (Slice::from(1..2), vec![9, 9, 9], vec![0, 9, 9, 9, 2, 3, 4]),
        (Slice::from(1..3), vec![9, 8], vec![0, 9, 8, 3, 4]),
        (Slice::from(2..2), vec![9, 8], vec![0, 1, 9, 8, 2, 3, 4]),
        (Slice::full().with_step(2), vec![9, 9, 9], vec![9, 1, 9, 3, 9]),
        (Slice::from(1..).with_step(2), vec![9, 9], vec![0, 9, 2, 9, 4]),
    ];

    for (slice, values, expected) in cases {
        let mut buffer = GapBuffer::from([0, 1, 2, 3, 4]);
        buffer.set_range(slice, values).unwrap();
        assert_eq!(buffer, expected);
    }
}

#[test]
fn self_slice_assignment_with_gap_in_middle() {
    let mut original = with_gap(0..8, 3);
    original.insert(4, 99);
    original.delete(4).unwrap();
    let len = original.len() as isize;

    for start in 0..=len {
        for stop in start..=len {
            let mut buffer = original.clone();
            let current = buffer.get_range(start..stop).unwrap();
            buffer.set_range(start..stop, current).unwrap();

            assert_eq!(buffer, original, "buffer[{start}..{stop}] = buffer[{start}..{stop}]");
        }
    }
}

#[test]
fn set_slice_from_iterator() {
    let mut buffer = GapBuffer::from([0, 1, 2, 3, 4]);
    buffer.set_range(1..3, (0..4).map(|i| i * 10)).unwrap();

    assert_eq!(buffer, [0, 0, 10, 20, 30, 3, 4]);
}

#[test]
fn set_extended_slice_requires_exact_length() {
    let mut buffer = GapBuffer::from([0, 1, 2, 3, 4]);

    assert_eq!(
        buffer.set_range(Slice::full().with_step(2), [9]),
        Err(Error::LengthMismatch { expected: 3, found: 1 })
    );
    assert_eq!(
        buffer.set_range(Slice::full().with_step(2), [9, 9, 9, 9]),
        Err(Error::LengthMismatch { expected: 3, found: 4 })
    );
    assert_eq!(buffer, [0, 1, 2, 3, 4]);
}

#[test]
fn delete_slices() {
    let cases: Vec<(Slice, Vec<i32>)> = vec![
        (Slice::from(1..3), vec![0, 3, 4, 5]),
        (Slice::from(..), vec![]),
        (Slice::from(10..), vec![0, 1, 2, 3, 4, 5]),
        (Slice::from(3..3), vec![0, 1, 2, 3, 4, 5]),
        (Slice::full().with_step(2), vec![1, 3, 5]),
        (Slice::from(..5).with_step(2), vec![1, 3, 5]),
        (Slice::full().with_step(-3), vec![0, 1, 3, 4]),
        (Slice::full().with_step(100), vec![1, 2, 3, 4, 5]),
    ];

    for (slice, expected) in cases {
        let mut buffer = GapBuffer::from([0, 1, 2, 3, 4, 5]);
        buffer.delete_range(slice).unwrap();
        assert_eq!(buffer, expected);
    }
}

#[test]
fn delete_slice_matches_deleting_each_index() {
    let mut sliced = with_gap(0..20, 4);
    let mut indexed = sliced.clone();

    sliced.delete_range(Slice::from(2..17).with_step(5)).unwrap();
    for index in [12, 7, 2] {
        indexed.delete(index).unwrap();
    }

    assert_eq!(sliced, indexed);
}

#[test]
fn append_and_extend() {
    let mut buffer = GapBuffer::from([0, 1, 2]);

    buffer.append(3);
    assert_eq!(buffer, [0, 1, 2, 3]);

    buffer.extend([4, 5]);
    buffer.extend(Vec::new());
    assert_eq!(buffer, [0, 1, 2, 3, 4, 5]);

    let copy: Vec<i32> = buffer.iter().copied().collect();
    buffer.extend(copy);
    assert_eq!(buffer.len(), 12);

    assert_eq!(
        buffer.extend_values([Value::Int(1), Value::Char('x')]),
        Err(Error::TypeMismatch { expected: ElementKind::I32 })
    );
    assert_eq!(buffer.len(), 12);
}

#[test]
fn append_and_extend_match_slice_assignment() {
    let mut appended = GapBuffer::from([0, 1, 2]);
    let mut assigned = appended.clone();

    appended.append(9);
    assigned.set_range(3..3, [9]).unwrap();
    assert_eq!(appended, assigned);

    appended.extend([7, 8]);
    assigned.set_range(4..4, [7, 8]).unwrap();
    assert_eq!(appended, assigned);
}

#[test]
fn insert_clamps_like_a_list() {
    let cases: Vec<(isize, Vec<i32>)> = vec![
        (0, vec![9, 0, 1, 2, 3, 4, 5]),
        (12, vec![0, 1, 2, 3, 4, 5, 9]),
        (-2, vec![0, 1, 2, 3, 9, 4, 5]),
        (-12, vec![9, 0, 1, 2, 3, 4, 5]),
    ];

    for (index, expected) in cases {
        let mut buffer = GapBuffer::from([0, 1, 2, 3, 4, 5]);
        buffer.insert(index, 9);
        assert_eq!(buffer, expected);
    }

    let mut empty = GapBuffer::<i32>::new();
    empty.insert(0, 9);
    assert_eq!(empty, [9]);
}

#[test]
fn insert_matches_empty_slice_assignment() {
    let mut inserted = GapBuffer::from([0, 1, 2, 3, 4]);
    let mut assigned = inserted.clone();

    inserted.insert(0, 9);
    assigned.set_range(0..0, [9]).unwrap();

    assert_eq!(inserted, assigned);
}

#[test]
fn pop_variants() {
    let cases: Vec<(isize, i32, Vec<i32>)> = vec![
        (-1, 5, vec![0, 1, 2, 3, 4]),
        (0, 0, vec![1, 2, 3, 4, 5]),
        (-3, 3, vec![0, 1, 2, 4, 5]),
        (3, 3, vec![0, 1, 2, 4, 5]),
    ];

    for (index, popped, expected) in cases {
        let mut buffer = GapBuffer::from([0, 1, 2, 3, 4, 5]);
        assert_eq!(buffer.pop_at(index), Ok(popped));
        assert_eq!(buffer, expected);
    }

    let mut buffer = GapBuffer::from([0, 1, 2, 3, 4]);
    assert_eq!(buffer.pop(), Ok(4));
    assert!(matches!(buffer.pop_at(5), Err(Error::IndexOutOfRange { .. })));
    assert!(matches!(buffer.pop_at(-5), Err(Error::IndexOutOfRange { .. })));
}

#[test]
fn pop_from_empty_every_kind() {
    fn check<T: Element>(_: Vec<T>) {
        let mut buffer = GapBuffer::<T>::new();
        assert_eq!(buffer.pop(), Err(Error::Empty { operation: "pop" }));
        assert_eq!(
            buffer.remove(&T::default()),
            Err(Error::Empty { operation: "remove" })
        );
        assert_eq!(
            buffer.index_of(&T::default(), None, None),
            Err(Error::Empty { operation: "index" })
        );
    }

    for_every_kind!(check);
}

#[test]
fn pop_matches_get_then_delete() {
    let mut popped = GapBuffer::from([0, 1, 2, 3, 4]);
    let mut deleted = popped.clone();

    let item = popped.pop_at(1).unwrap();
    let expected = deleted.get(1).unwrap();
    deleted.delete(1).unwrap();

    assert_eq!(item, expected);
    assert_eq!(popped, deleted);
}

#[test]
fn remove_first_match() {
    let mut buffer = GapBuffer::from([0, 1, 2, 3, 4, 3]);
    buffer.remove(&3).unwrap();

    assert_eq!(buffer.get(-1), Ok(3));
    assert_eq!(buffer, [0, 1, 2, 4, 3]);
    assert_eq!(buffer.remove(&9), Err(Error::NotFound));
}

#[test]
fn remove_matches_delete_at_index() {
    let mut removed = GapBuffer::from([0, 1, 2, 3, 4]);
    let mut deleted = removed.clone();

    removed.remove(&2).unwrap();
    let index = deleted.index_of(&2, None, None).unwrap();
    deleted.delete(index as isize).unwrap();

    assert_eq!(removed, deleted);
}

#[test]
fn reverse_in_place() {
    for content in [vec![], vec![0], vec![0, 1, 2, 3], vec![0, 1, 2], vec![0, 1, 2, 3, 4]] {
        let mut buffer = GapBuffer::from(content.clone());
        buffer.reverse();

        let expected: Vec<i32> = content.into_iter().rev().collect();
        assert_eq!(buffer, expected);
    }

    let forward = GapBuffer::from([0, 1, 2, 3, 4]);
    let mut reversed = forward.clone();
    reversed.reverse();
    assert!(reversed.equals(forward.iter().rev().copied()));
}

#[test]
fn string_conversion_every_kind() {
    fn check<T: Element>(content: Vec<T>) {
        let buffer = GapBuffer::from(content);
        let typecode = T::KIND.typecode();

        assert!(!buffer.to_string().is_empty());
        assert!(format!("{:?}", buffer).starts_with(&format!("GapBuffer({:?}, ", typecode)));
        assert_eq!(
            format!("{:?}", GapBuffer::<T>::new()),
            format!("GapBuffer({:?})", typecode)
        );
    }

    for_every_kind!(check);
}

#[test]
fn move_gap_to_end() {
    let mut buffer = with_gap(0..5, 3);
    buffer.insert(0, -1);
    buffer.extend([]);

    assert_eq!(buffer, [-1, 0, 1, 2, 3, 4]);
}

#[test]
fn move_zero_length_gap() {
    let mut buffer = with_gap(0..5, 3);
    for _ in 0..3 {
        buffer.insert(0, -1);
    }
    let copies = buffer.relocation_copies();
    buffer.extend([]);

    assert_eq!(buffer, [-1, -1, -1, 0, 1, 2, 3, 4]);
    assert_eq!(buffer.relocation_copies(), copies);
}

#[test]
fn resize_gap_on_insert() {
    let mut buffer = with_gap(0..5, 3);
    for _ in 0..4 {
        buffer.insert(0, -1);
    }

    assert_eq!(buffer, [-1, -1, -1, -1, 0, 1, 2, 3, 4]);
}

#[test]
fn resize_gap_during_extend() {
    for extra in [4, 12] {
        let mut buffer = with_gap(0..5, 3);
        buffer.extend(std::iter::repeat(-1).take(extra));

        let expected: Vec<i32> = (0..5).chain(std::iter::repeat(-1).take(extra)).collect();
        assert_eq!(buffer, expected);
    }
}

#[test]
fn front_inserts_with_any_gap_size() {
    for gap_size in [0, 1, 2, 10, 64] {
        let mut buffer = with_gap(std::iter::empty(), gap_size);
        for i in 0..200 {
            buffer.insert(0, i);
        }

        let expected: Vec<i32> = (0..200).rev().collect();
        assert_eq!(buffer, expected);
    }
}

#[test]
fn clustered_edits_only_pay_once() {
    let mut buffer = with_gap(0..1_000, 16);
    buffer.insert(500, -1);
    let copies = buffer.relocation_copies();

    for offset in 1..10 {
        buffer.insert(500 + offset, -1);
    }

    assert_eq!(buffer.relocation_copies(), copies);
    assert_eq!(buffer.len(), 1_010);
}

#[test]
fn growth_factor_sets_capacity_step() {
    for (growth_factor, capacity) in [(1.0, 32), (1.0 / 16.0, 17)] {
        let config = GapConfig::default()
            .with_min_gap_size(0)
            .with_growth_factor(growth_factor);
        let mut buffer = GapBuffer::from_vec_with_config(vec![0u8; 16], config);
        assert_eq!(buffer.capacity(), 16);

        buffer.append(1);
        assert_eq!(buffer.capacity(), capacity);
        assert_eq!(buffer.len(), 17);
        assert_eq!(buffer.get(-1), Ok(1));
    }
}

#[test]
fn unbounded_growth_factor_grows_to_fit() {
    let config = GapConfig {
        min_gap_size: 0,
        growth_factor: f64::INFINITY,
    };
    let mut buffer = GapBuffer::from_vec_with_config(vec![0u8; 16], config);

    buffer.append(1);
    assert_eq!(buffer.capacity(), 17);

    buffer.extend(2..6);
    assert_eq!(buffer, [&[0u8; 16][..], &[1, 2, 3, 4, 5]].concat());
}
