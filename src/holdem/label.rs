use std::fmt;

use crate::core::{EquityError, HandCategory, HandScore, Value};

/// Human facing description of a score.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HandLabel {
    pub category: HandCategory,
    pub name: &'static str,
    pub description: String,
}

impl fmt::Display for HandLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.description)
    }
}

pub fn category_name(category: HandCategory) -> &'static str {
    match category {
        HandCategory::HighCard => "High card",
        HandCategory::OnePair => "One pair",
        HandCategory::TwoPair => "Two pair",
        HandCategory::ThreeOfAKind => "Three of a kind",
        HandCategory::Straight => "Straight",
        HandCategory::Flush => "Flush",
        HandCategory::FullHouse => "Full house",
        HandCategory::FourOfAKind => "Four of a kind",
        HandCategory::StraightFlush => "Straight flush",
    }
}

fn run(values: &[Value]) -> String {
    values
        .iter()
        .map(|v| v.short_name())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Name a score and spell out what breaks ties inside its category.
///
/// ```
/// use river_equity::core::{HandScore, Value};
/// use river_equity::holdem::label;
///
/// let score = HandScore::TwoPair {
///     high: Value::King,
///     low: Value::Two,
///     kicker: Value::Nine,
/// };
/// assert_eq!("Two pair (K and 2 + kicker 9)", label(&score).to_string());
/// ```
pub fn label(score: &HandScore) -> HandLabel {
    let description = match *score {
        HandScore::StraightFlush(Value::Ace) => "to A (royal)".to_string(),
        HandScore::StraightFlush(high) | HandScore::Straight(high) => {
            format!("to {}", high.short_name())
        }
        HandScore::FourOfAKind { quads, kicker } => {
            format!("(4x {} + kicker {})", quads.short_name(), kicker.short_name())
        }
        HandScore::FullHouse { trips, pair } => {
            format!("({} over {})", trips.short_name(), pair.short_name())
        }
        HandScore::Flush(values) | HandScore::HighCard(values) => run(&values),
        HandScore::ThreeOfAKind { trips, kickers } => {
            format!("({} + {})", trips.short_name(), run(&kickers))
        }
        HandScore::TwoPair { high, low, kicker } => format!(
            "({} and {} + kicker {})",
            high.short_name(),
            low.short_name(),
            kicker.short_name()
        ),
        HandScore::OnePair { pair, kickers } => {
            format!("({} + {})", pair.short_name(), run(&kickers))
        }
    };
    HandLabel {
        category: score.category(),
        name: category_name(score.category()),
        description,
    }
}

/// Label a score given in its flat integer form.
///
/// # Errors
///
/// `MalformedScore` when the integers don't describe a possible hand.
pub fn label_raw(raw: &[u8]) -> Result<HandLabel, EquityError> {
    let score = HandScore::try_from(raw)?;
    Ok(label(&score))
}

impl fmt::Display for HandScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", label(self))
    }
}
