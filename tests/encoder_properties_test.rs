use barcode_names::core::words::{ADJECTIVES, NOUNS};
use barcode_names::core::{barcode, names, rank};
use barcode_names::{convert, Rank};
use proptest::prelude::*;
use std::collections::HashSet;

fn barcode_from_bits(bits: &[bool]) -> String {
    bits.iter().map(|&bit| if bit { 'l' } else { 'i' }).collect()
}

fn bits_value(bits: &[bool]) -> u32 {
    bits.iter().fold(0, |acc, &bit| (acc << 1) | u32::from(bit))
}

proptest! {
    #[test]
    fn rank_is_binary_value_plus_length_offset(bits in prop::collection::vec(any::<bool>(), 1..=15)) {
        let input = barcode_from_bits(&bits);
        let result = convert(Some(input.as_str())).unwrap();

        let expected = (1u32 << bits.len()) - 2 + bits_value(&bits);
        prop_assert_eq!(u32::from(result.integer_value.value()), expected);
        prop_assert_eq!(result.barcode_name, input);
    }

    #[test]
    fn case_and_at_prefix_do_not_change_the_result(
        input in "[ilIL]{1,15}",
        prefixed in any::<bool>(),
    ) {
        let candidate = if prefixed { format!("@{}", input) } else { input.clone() };
        let result = convert(Some(candidate.as_str())).unwrap();
        let canonical = convert(Some(input.to_lowercase().as_str())).unwrap();

        prop_assert_eq!(result, canonical);
    }

    #[test]
    fn overlong_barcodes_are_rejected(input in "@?[ilIL]{16,40}") {
        prop_assert!(barcode::parse(Some(input.as_str())).is_none());
    }

    #[test]
    fn foreign_characters_are_rejected(
        head in "[il]{0,7}",
        bad in "[^ilIL@]",
        tail in "[il]{0,7}",
    ) {
        let input = format!("{}{}{}", head, bad, tail);
        prop_assert!(barcode::parse(Some(input.as_str())).is_none());
        prop_assert!(convert(Some(input.as_str())).unwrap_err().is_client_error());
    }

    #[test]
    fn given_name_joins_adjective_and_noun(value in any::<u16>()) {
        let rank = Rank::new(value);
        let adjective = names::title_case(ADJECTIVES.get((value >> 8) as u8));
        let noun = names::title_case(NOUNS.get((value & 0xff) as u8));

        prop_assert_eq!(names::given_name(rank), format!("{}{}", adjective, noun));
    }
}

#[test]
fn every_barcode_has_a_distinct_rank_and_the_ranks_are_dense() {
    let mut seen = HashSet::new();

    for len in 1..=15usize {
        for value in 0u32..(1 << len) {
            let bits: Vec<bool> = (0..len).rev().map(|shift| (value >> shift) & 1 == 1).collect();
            let parsed = barcode::parse(Some(barcode_from_bits(&bits).as_str())).unwrap();
            assert!(seen.insert(rank::rank(&parsed).value()), "duplicate rank for {}", parsed);
        }
    }

    assert_eq!(seen.len(), 65534);
    assert_eq!(seen.iter().min(), Some(&0));
    assert_eq!(seen.iter().max(), Some(&65533));
}

#[test]
fn given_name_is_total_over_sixteen_bits() {
    for value in 0..=u16::MAX {
        assert!(!names::given_name(Rank::new(value)).is_empty());
    }
}

#[test]
fn documented_examples() {
    let cases = [("i", 0), ("l", 1), ("ii", 2), ("il", 3), ("li", 4), ("ll", 5)];
    for (input, expected) in cases {
        assert_eq!(convert(Some(input)).unwrap().integer_value.value(), expected);
    }

    assert_eq!(convert(Some("I")).unwrap().barcode_name, "i");
    assert_eq!(convert(Some("Il")).unwrap().barcode_name, "il");
    assert_eq!(convert(Some("@lllliiii")).unwrap().barcode_name, "lllliiii");
}
