//! Card attributes and evaluation marks.
//!
//! Every card has four visual attributes (shape, number, shading, color),
//! each taking one of three values. The engine never interprets what `A0`
//! means visually; renderers map values to diamonds, stripes, purple, etc.
//!
//! ## Types
//!
//! - `AttributeValue`: One of three states, shared by all four attributes
//! - `Attribute`: Which of the four attributes is addressed
//! - `EvaluationMark`: Outcome of evaluating a selected triple

use serde::{Deserialize, Serialize};

/// Value of a single card attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AttributeValue {
    A0,
    A1,
    A2,
}

impl AttributeValue {
    /// All values in ascending order.
    pub const ALL: [AttributeValue; 3] = [AttributeValue::A0, AttributeValue::A1, AttributeValue::A2];

    /// Decode a base-3 digit.
    ///
    /// Panics on a digit outside `0..3`; deck construction never produces one.
    #[must_use]
    pub fn from_digit(digit: u8) -> Self {
        match digit {
            0 => AttributeValue::A0,
            1 => AttributeValue::A1,
            2 => AttributeValue::A2,
            _ => panic!("Invalid attribute encoding: {}", digit),
        }
    }

    /// The base-3 digit for this value.
    #[must_use]
    pub const fn digit(self) -> u8 {
        self as u8
    }

    /// The value that differs from both `self` and `other`.
    ///
    /// When the two are equal, returns that same value: the third card of
    /// a Set must match an attribute the other two share.
    #[must_use]
    pub fn complement(self, other: AttributeValue) -> AttributeValue {
        if self == other {
            self
        } else {
            AttributeValue::from_digit(3 - self.digit() - other.digit())
        }
    }

    /// Bit used for counting distinct values.
    #[must_use]
    pub(crate) const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// One of the four visual attributes of a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Attribute {
    Shape,
    Number,
    Shading,
    Color,
}

impl Attribute {
    /// All attributes, in id digit order (most significant first).
    pub const ALL: [Attribute; 4] = [
        Attribute::Shape,
        Attribute::Number,
        Attribute::Shading,
        Attribute::Color,
    ];

    /// Position of this attribute in a card's value tuple.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Attribute::Shape => "shape",
            Attribute::Number => "number",
            Attribute::Shading => "shading",
            Attribute::Color => "color",
        };
        f.write_str(name)
    }
}

/// Result of evaluating the card as part of a selected triple.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EvaluationMark {
    /// Not part of a complete selection.
    #[default]
    Unevaluated,
    /// Part of three selected cards that do not form a Set.
    NonSet,
    /// Part of a matched Set.
    Set,
}

impl EvaluationMark {
    /// Check if the card has been evaluated either way.
    #[must_use]
    pub fn is_evaluated(self) -> bool {
        self != EvaluationMark::Unevaluated
    }
}
