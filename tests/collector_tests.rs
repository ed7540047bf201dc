//! Integration tests for collectors built on the encoder and on strings.

use bitlist::collector::{Collector, FunctionCollector, Joining, MonoidCollector};
use bitlist::{Bitset, ParseError, RangeBitsetEncoder};
use rstest::{fixture, rstest};
use std::collections::{BTreeMap, BTreeSet};
use std::convert::Infallible;

#[fixture]
fn customer_names() -> Vec<&'static str> {
    vec![
        "Joe", "Steven", "Patrick", "Diana", "Chris", "Kathy", "Alice", "Andrew", "Martin", "Amy",
    ]
}

#[fixture]
fn bit_list() -> Vec<&'static str> {
    "22-24,9,42-44,11,4,46,14-17,5,2,38-40,33,50,48"
        .split(',')
        .collect()
}

// =============================================================================
// Joining
// =============================================================================

#[rstest]
fn joining_names_as_csv(customer_names: Vec<&'static str>) {
    let Ok(csv) = Joining::new(",").collect(customer_names);
    assert_eq!(csv, "Joe,Steven,Patrick,Diana,Chris,Kathy,Alice,Andrew,Martin,Amy");
}

#[rstest]
fn joining_partitioned_keeps_order(customer_names: Vec<&'static str>) {
    let partitions: Vec<Vec<&str>> = customer_names.chunks(3).map(<[&str]>::to_vec).collect();
    let Ok(csv) = Joining::new(",").collect_partitioned(partitions);
    assert_eq!(csv, "Joe,Steven,Patrick,Diana,Chris,Kathy,Alice,Andrew,Martin,Amy");
}

#[cfg(feature = "rayon")]
#[rstest]
fn joining_par_collect_keeps_order(customer_names: Vec<&'static str>) {
    let Ok(csv) = Joining::new(",").par_collect(customer_names);
    assert_eq!(csv, "Joe,Steven,Patrick,Diana,Chris,Kathy,Alice,Andrew,Martin,Amy");
}

// =============================================================================
// RangeBitsetEncoder
// =============================================================================

#[rstest]
fn encoder_collects_bit_list(bit_list: Vec<&'static str>) {
    let bits = RangeBitsetEncoder::new().collect(bit_list).unwrap();
    assert_eq!(bits, "01011000101001111000011100000000100001110111010101");
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(5)]
#[case(100)]
fn encoder_partitions_agree(bit_list: Vec<&'static str>, #[case] chunk_size: usize) {
    let encoder = RangeBitsetEncoder::new();
    let partitions: Vec<Vec<&str>> = bit_list.chunks(chunk_size).map(<[&str]>::to_vec).collect();
    assert_eq!(
        encoder.collect_partitioned(partitions).unwrap(),
        encoder.collect(bit_list).unwrap()
    );
}

#[rstest]
fn encoder_partition_error_stops_collection() {
    let encoder = RangeBitsetEncoder::new();
    let partitions = vec![vec!["1", "2"], vec!["0"], vec!["abc"]];
    let error: ParseError = encoder.collect_partitioned(partitions).unwrap_err();
    assert_eq!(error.token(), "0");
}

#[cfg(feature = "rayon")]
#[rstest]
fn encoder_par_collect_agrees(bit_list: Vec<&'static str>) {
    let encoder = RangeBitsetEncoder::new();
    assert_eq!(
        encoder.par_collect(bit_list.clone()).unwrap(),
        encoder.collect(bit_list).unwrap()
    );
}

// =============================================================================
// Ad-hoc Collectors
// =============================================================================

#[rstest]
fn function_collector_groups_names_by_initial(customer_names: Vec<&'static str>) {
    let by_initial = FunctionCollector::new(
        BTreeMap::<char, BTreeSet<&str>>::new,
        |mut map: BTreeMap<char, BTreeSet<&'static str>>, name: &'static str| {
            if let Some(initial) = name.chars().next() {
                map.entry(initial).or_default().insert(name);
            }
            Ok::<_, Infallible>(map)
        },
        |mut left: BTreeMap<char, BTreeSet<&'static str>>,
         right: BTreeMap<char, BTreeSet<&'static str>>| {
            for (initial, names) in right {
                left.entry(initial).or_default().extend(names);
            }
            left
        },
        |map: BTreeMap<char, BTreeSet<&'static str>>| map,
    );

    let partitions = customer_names.chunks(4).map(<[&str]>::to_vec);
    let Ok(groups) = by_initial.collect_partitioned(partitions);
    assert_eq!(groups[&'A'], BTreeSet::from(["Alice", "Amy", "Andrew"]));
    assert_eq!(groups[&'J'], BTreeSet::from(["Joe"]));
    assert!(!groups.contains_key(&'Z'));
}

#[rstest]
fn monoid_collector_merges_bitsets(bit_list: Vec<&'static str>) {
    let encoder = RangeBitsetEncoder::new();
    let parts: Vec<Bitset> = bit_list
        .iter()
        .map(|token| encoder.encode_bitset(token).unwrap())
        .collect();
    let Ok(merged) = MonoidCollector::<Bitset>::new().collect(parts);
    assert_eq!(
        merged.to_string(),
        "01011000101001111000011100000000100001110111010101"
    );
}
