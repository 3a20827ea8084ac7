//! The Set rule.
//!
//! Three cards form a Set when, for every attribute independently, the
//! three values are either all the same or all different. Two equal values
//! and one odd value never qualify.

use rustc_hash::FxHashMap;

use crate::cards::{Attribute, AttributeValue, Card, EvaluationMark};
use crate::core::entity::CardId;

/// Number of distinct values among three.
#[must_use]
pub fn distinct_values(values: [AttributeValue; 3]) -> u32 {
    let mask = values.iter().fold(0u8, |acc, v| acc | v.bit());
    mask.count_ones()
}

/// Check that one attribute is all-same or all-different across three cards.
#[must_use]
pub fn attribute_matches(attribute: Attribute, cards: [&Card; 3]) -> bool {
    let distinct = distinct_values(cards.map(|c| c.attribute(attribute)));
    distinct == 1 || distinct == 3
}

/// Check if three cards form a Set.
///
/// ```
/// use set_engine::cards::Card;
/// use set_engine::core::CardId;
/// use set_engine::rules::is_set;
///
/// // (A0,A0,A0,A0), (A1,A1,A1,A1), (A2,A2,A2,A2)
/// let a = Card::from_id(CardId::from_digits([0, 0, 0, 0]));
/// let b = Card::from_id(CardId::from_digits([1, 1, 1, 1]));
/// let c = Card::from_id(CardId::from_digits([2, 2, 2, 2]));
/// assert!(is_set(&a, &b, &c));
/// ```
#[must_use]
pub fn is_set(a: &Card, b: &Card, c: &Card) -> bool {
    Attribute::ALL.iter().all(|&attr| attribute_matches(attr, [a, b, c]))
}

/// Evaluate a selected triple into the mark all three cards receive.
#[must_use]
pub fn evaluate(cards: [&Card; 3]) -> EvaluationMark {
    let [a, b, c] = cards;
    if is_set(a, b, c) {
        EvaluationMark::Set
    } else {
        EvaluationMark::NonSet
    }
}

/// The attribute values of the unique card completing a Set with `a` and `b`.
#[must_use]
pub fn third_card(a: &Card, b: &Card) -> [AttributeValue; 4] {
    let (va, vb) = (a.values(), b.values());
    std::array::from_fn(|i| va[i].complement(vb[i]))
}

/// Find every Set among `cards`.
///
/// Each Set is reported once, with ids in the order the cards appear.
#[must_use]
pub fn find_sets(cards: &[Card]) -> Vec<[CardId; 3]> {
    let index: FxHashMap<[AttributeValue; 4], usize> = cards
        .iter()
        .enumerate()
        .map(|(i, c)| (c.values(), i))
        .collect();

    let mut sets = Vec::new();
    for i in 0..cards.len() {
        for j in (i + 1)..cards.len() {
            let wanted = third_card(&cards[i], &cards[j]);
            if let Some(&k) = index.get(&wanted) {
                if k > j {
                    sets.push([cards[i].id, cards[j].id, cards[k].id]);
                }
            }
        }
    }
    sets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::build_deck;
    use AttributeValue::*;

    fn card(digits: [u8; 4]) -> Card {
        Card::from_id(CardId::from_digits(digits))
    }

    #[test]
    fn test_distinct_values() {
        assert_eq!(distinct_values([A0, A0, A0]), 1);
        assert_eq!(distinct_values([A0, A1, A0]), 2);
        assert_eq!(distinct_values([A2, A1, A0]), 3);
    }

    #[test]
    fn test_all_different_is_set() {
        assert!(is_set(&card([0, 0, 0, 0]), &card([1, 1, 1, 1]), &card([2, 2, 2, 2])));
    }

    #[test]
    fn test_mixed_same_and_different_is_set() {
        assert!(is_set(&card([0, 1, 2, 0]), &card([0, 2, 2, 1]), &card([0, 0, 2, 2])));
    }

    #[test]
    fn test_two_of_a_kind_is_not_set() {
        // shape: {A0, A1, A1}
        assert!(!is_set(&card([0, 0, 0, 0]), &card([1, 0, 0, 0]), &card([1, 1, 0, 0])));
    }

    #[test]
    fn test_attribute_matches() {
        let (a, b, c) = (card([0, 0, 0, 0]), card([1, 0, 0, 0]), card([1, 1, 0, 0]));

        assert!(!attribute_matches(Attribute::Shape, [&a, &b, &c]));
        assert!(!attribute_matches(Attribute::Number, [&a, &b, &c]));
        assert!(attribute_matches(Attribute::Shading, [&a, &b, &c]));
        assert!(attribute_matches(Attribute::Color, [&a, &b, &c]));
    }

    #[test]
    fn test_evaluate() {
        let (a, b, c) = (card([0, 0, 0, 0]), card([1, 1, 1, 1]), card([2, 2, 2, 2]));
        assert_eq!(evaluate([&a, &b, &c]), EvaluationMark::Set);
        // Idempotent on the same triple
        assert_eq!(evaluate([&a, &b, &c]), EvaluationMark::Set);

        let d = card([2, 2, 2, 1]);
        assert_eq!(evaluate([&a, &b, &d]), EvaluationMark::NonSet);
    }

    #[test]
    fn test_third_card() {
        let a = card([0, 1, 2, 2]);
        let b = card([0, 2, 1, 2]);
        let third = third_card(&a, &b);

        assert_eq!(third, [A0, A0, A0, A2]);
        assert!(is_set(&a, &b, &Card::from_id(CardId::from_digits([0, 0, 0, 2]))));
    }

    #[test]
    fn test_find_sets_small() {
        let cards = vec![
            card([0, 0, 0, 0]),
            card([1, 0, 0, 0]),
            card([1, 1, 1, 1]),
            card([2, 2, 2, 2]),
        ];

        let sets = find_sets(&cards);
        assert_eq!(sets, vec![[cards[0].id, cards[2].id, cards[3].id]]);
    }

    #[test]
    fn test_find_sets_full_deck() {
        // Every pair completes exactly one Set: 81 * 80 / 6 = 1080
        let sets = find_sets(&build_deck());
        assert_eq!(sets.len(), 1080);
    }

    #[test]
    fn test_find_sets_none() {
        let cards = vec![card([0, 0, 0, 0]), card([1, 0, 0, 0])];
        assert!(find_sets(&cards).is_empty());
    }
}
