use lazyseq::prelude::*;
use lazyseq::{Either, SequenceError};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn chain_yields_concatenation() {
    init_logger();
    let parts: [Vec<i32>; 4] = [vec![1, 2], vec![], vec![3], vec![4, 5, 6]];
    let expected: Vec<i32> = parts.iter().flatten().copied().collect();

    let joined: Vec<_> = chain_all(parts.clone()).collect();
    assert_eq!(joined, expected);

    let nested: Vec<_> = lazyseq::chain!(parts[0].clone(), parts[1].clone(), 3..4, [4, 5, 6]).collect();
    assert_eq!(nested, expected);
}

#[test]
fn accumulate_examples() {
    init_logger();
    assert_eq!(accumulate([5, 6, 7, 8, 9]).collect::<Vec<_>>(), vec![5, 11, 18, 26, 35]);

    let products: Vec<_> = accumulate_with([5, 6, 7, 8], |a, b| a * b, Some(1)).collect();
    assert_eq!(products, vec![1, 5, 30, 210, 1680]);

    let only_initial: Vec<_> = accumulate_with(Vec::<i32>::new(), |a, b| a * b, Some(1)).collect();
    assert_eq!(only_initial, vec![1]);
}

#[test]
fn accumulate_length_matches_input() {
    init_logger();
    for n in 1..8 {
        let sums: Vec<_> = accumulate(1..=n).collect();
        assert_eq!(sums.len(), n as usize);
        assert_eq!(sums[0], 1);
        assert_eq!(*sums.last().unwrap(), n * (n + 1) / 2);
    }
}

#[test]
fn compress_with_cycled_selectors() {
    init_logger();
    let selectors = cycle([true, false]).take(10);
    let odds: Vec<_> = compress(1..10, selectors).collect();
    assert_eq!(odds, vec![1, 3, 5, 7, 9]);
}

#[test]
fn group_by_splits_non_adjacent_runs() {
    init_logger();
    let input = [1, 1, 1, 1, 2, 2, 2, 3, 3, 4, 1, 1, 2, 2, 2];
    let groups: Vec<_> = group_by(input, |n| *n).collected().collect();
    assert_eq!(
        groups,
        vec![
            (1, vec![1, 1, 1, 1]),
            (2, vec![2, 2, 2]),
            (3, vec![3, 3]),
            (4, vec![4]),
            (1, vec![1, 1]),
            (2, vec![2, 2, 2]),
        ]
    );
}

#[test]
fn group_by_checked_reports_the_repeat() {
    init_logger();
    let input = [1, 1, 2, 1];
    let mut groups = group_by(input, |n| *n);
    let err = loop {
        match groups.next_group_checked() {
            Ok(Some(_)) => continue,
            Ok(None) => panic!("expected an ordering error"),
            Err(err) => break err,
        }
    };
    assert_eq!(err, SequenceError::UnorderedGroupKey { key: "1".to_string(), group: 2 });
    assert_eq!(err.to_string(), "group key 1 reappeared in group 2; input is not ordered by key");
}

#[test]
fn cycle_on_empty_input_terminates() {
    init_logger();
    assert_eq!(cycle_buffered(Vec::<u8>::new()).next(), None);
    assert_eq!(cycle(Vec::<u8>::new()).next(), None);
}

#[test]
fn cycle_variants_agree() {
    init_logger();
    let replayed: Vec<_> = cycle("abc".chars()).take(8).collect();
    let buffered: Vec<_> = cycle_buffered("abc".chars()).take(8).collect();
    assert_eq!(replayed, buffered);
    assert_eq!(replayed.into_iter().collect::<String>(), "abcabcab");
}

#[test]
fn take_while_and_drop_while_are_complementary() {
    init_logger();
    let inputs: [&[i32]; 4] = [&[], &[1, 2, 3], &[5, 6, 1, 2], &[0, 9, 0]];
    for input in inputs {
        let below = |n: &&i32| **n < 4;
        let mut rebuilt: Vec<i32> = take_while(input, below).copied().collect();
        rebuilt.extend(drop_while(input, below).copied());
        assert_eq!(rebuilt, input);
    }
}

#[test]
fn repeat_n_yields_exact_copies() {
    init_logger();
    assert_eq!(repeat_n("v", 0).count(), 0);
    for n in [1, 2, 7] {
        let copies: Vec<_> = repeat_n("v", n).collect();
        assert_eq!(copies.len(), n);
        assert!(copies.iter().all(|v| *v == "v"));
    }
}

#[test]
fn chain_heterogeneous_keeps_sources_apart() {
    init_logger();
    let tagged: Vec<_> = chain_heterogeneous(8..11, "ab".chars()).collect();
    assert_eq!(
        tagged,
        vec![Either::Left(8), Either::Left(9), Either::Left(10), Either::Right('a'), Either::Right('b')]
    );

    let numbers: Vec<_> = tagged.iter().filter_map(|v| v.as_ref().left().copied()).collect();
    assert_eq!(numbers, vec![8, 9, 10]);
}

#[test]
fn star_transform_dot_product() {
    init_logger();
    let a = [1, 2, 3, 4];
    let b = [1, 0, 3, 0];
    let dot: i32 = star_transform(a.into_iter().zip(b), |x: i32, y: i32| x * y).sum();
    assert_eq!(dot, 10);
}

#[test]
fn stacked_pipeline_pulls_on_demand() {
    init_logger();
    let mut pulled = 0;
    let source = from_fn(|| {
        pulled += 1;
        Step::<_, ()>::Yielded(pulled)
    });
    let squares = transform(filter(source.into_gen(), |n| n % 3 == 0), |n| n * n);
    let first: Vec<_> = squares.take(2).collect();

    assert_eq!(first, vec![9, 36]);
    assert_eq!(pulled, 6);
}

#[test]
fn short_circuit_stops_a_fallible_pipeline() {
    init_logger();
    let parsed = transform(["4", "8", "15", "sixteen", "23"], |s| s.parse::<u32>());
    let mut totals = short_circuit(parsed);
    let seen: Vec<_> = (&mut totals).collect();

    assert_eq!(seen, vec![4, 8, 15]);
    assert!(matches!(totals.into_return(), Some(Err(_))));
}
