//! Card instances - identity, attributes, and per-game state.
//!
//! `Card` is both the engine's storage type and the snapshot handed to
//! renderers. Attributes are fixed at construction; only the engine
//! flips `selected` and `mark`.

use serde::{Deserialize, Serialize};

use super::attributes::{Attribute, AttributeValue, EvaluationMark};
use crate::core::entity::CardId;

/// A card in a game.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Unique id, fixed at deck construction.
    pub id: CardId,

    pub shape: AttributeValue,
    pub number: AttributeValue,
    pub shading: AttributeValue,
    pub color: AttributeValue,

    /// Is the card part of the current selection?
    pub selected: bool,

    /// Outcome of the last evaluation this card took part in.
    #[serde(default)]
    pub mark: EvaluationMark,
}

impl Card {
    /// Create an unselected, unevaluated card.
    #[must_use]
    pub fn new(
        id: CardId,
        shape: AttributeValue,
        number: AttributeValue,
        shading: AttributeValue,
        color: AttributeValue,
    ) -> Self {
        Self {
            id,
            shape,
            number,
            shading,
            color,
            selected: false,
            mark: EvaluationMark::Unevaluated,
        }
    }

    /// Create the card whose attributes are encoded by its id.
    #[must_use]
    pub fn from_id(id: CardId) -> Self {
        let [shape, number, shading, color] = id.digits().map(AttributeValue::from_digit);
        Self::new(id, shape, number, shading, color)
    }

    /// Get one attribute value.
    #[must_use]
    pub fn attribute(&self, attribute: Attribute) -> AttributeValue {
        match attribute {
            Attribute::Shape => self.shape,
            Attribute::Number => self.number,
            Attribute::Shading => self.shading,
            Attribute::Color => self.color,
        }
    }

    /// All four attribute values, in `Attribute::ALL` order.
    #[must_use]
    pub fn values(&self) -> [AttributeValue; 4] {
        [self.shape, self.number, self.shading, self.color]
    }

    /// Check if the card belongs to a matched set.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.mark == EvaluationMark::Set
    }

    /// Drop selection and evaluation state.
    pub fn reset(&mut self) {
        self.selected = false;
        self.mark = EvaluationMark::Unevaluated;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use AttributeValue::*;

    #[test]
    fn test_card_new() {
        let card = Card::new(CardId(5), A0, A1, A2, A0);

        assert_eq!(card.id, CardId(5));
        assert_eq!(card.values(), [A0, A1, A2, A0]);
        assert!(!card.selected);
        assert_eq!(card.mark, EvaluationMark::Unevaluated);
    }

    #[test]
    fn test_card_from_id() {
        // 34 = 1*27 + 0*9 + 2*3 + 1
        let card = Card::from_id(CardId(34));
        assert_eq!(card.values(), [A1, A0, A2, A1]);
    }

    #[test]
    fn test_attribute_lookup() {
        let card = Card::new(CardId(0), A2, A1, A0, A1);

        for attribute in Attribute::ALL {
            assert_eq!(card.attribute(attribute), card.values()[attribute.index()]);
        }
    }

    #[test]
    fn test_reset() {
        let mut card = Card::from_id(CardId(10));
        card.selected = true;
        card.mark = EvaluationMark::Set;
        assert!(card.is_matched());

        card.reset();
        assert!(!card.selected);
        assert!(!card.is_matched());
        assert_eq!(card.mark, EvaluationMark::Unevaluated);
    }

    #[test]
    fn test_card_serialization() {
        let mut card = Card::from_id(CardId(40));
        card.selected = true;
        card.mark = EvaluationMark::NonSet;

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}
