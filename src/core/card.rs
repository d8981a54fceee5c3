use std::fmt;
use std::str::FromStr;

use super::EquityError;

/// Card rank or value.
/// The discriminant is the face value - 2, so the
/// ace sits at the top of the ordering.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values.
/// This is what `Value::values()` returns
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Get all of the `Value`'s that are possible, lowest first.
    pub const fn values() -> [Value; 13] {
        VALUES
    }

    /// Convert a zero based index (0 = Two, 12 = Ace) into a value.
    ///
    /// Anything past the ace is clamped to the ace.
    pub fn from_index(idx: u8) -> Value {
        VALUES[usize::from(idx.min(12))]
    }

    /// The numeric poker rank, 2 through 14.
    ///
    /// ```
    /// use river_equity::core::Value;
    ///
    /// assert_eq!(14, Value::Ace.rank());
    /// assert_eq!(2, Value::Two.rank());
    /// ```
    pub fn rank(self) -> u8 {
        self as u8 + 2
    }

    /// Inverse of `rank`. None when the number isn't 2..=14.
    pub fn from_rank(rank: u8) -> Option<Value> {
        match rank {
            2..=14 => Some(VALUES[usize::from(rank - 2)]),
            _ => None,
        }
    }

    pub fn from_char(c: char) -> Option<Value> {
        match c.to_ascii_uppercase() {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }

    /// Short name used when describing hands, "10" rather than "T".
    pub fn short_name(self) -> &'static str {
        match self {
            Value::Ace => "A",
            Value::King => "K",
            Value::Queen => "Q",
            Value::Jack => "J",
            Value::Ten => "10",
            Value::Nine => "9",
            Value::Eight => "8",
            Value::Seven => "7",
            Value::Six => "6",
            Value::Five => "5",
            Value::Four => "4",
            Value::Three => "3",
            Value::Two => "2",
        }
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Suit {
    /// Spades
    Spade = 0,
    /// Hearts
    Heart = 1,
    /// Clubs
    Club = 2,
    /// Diamonds
    Diamond = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Spade, Suit::Heart, Suit::Club, Suit::Diamond];

impl Suit {
    /// Provide all the Suit's that there are.
    pub const fn suits() -> [Suit; 4] {
        SUITS
    }

    pub fn from_index(idx: u8) -> Suit {
        SUITS[usize::from(idx & 3)]
    }

    pub fn from_char(s: char) -> Option<Suit> {
        match s.to_ascii_lowercase() {
            's' => Some(Suit::Spade),
            'h' => Some(Suit::Heart),
            'c' => Some(Suit::Club),
            'd' => Some(Suit::Diamond),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Suit::Spade => 's',
            Suit::Heart => 'h',
            Suit::Club => 'c',
            Suit::Diamond => 'd',
        }
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
#[derive(PartialEq, PartialOrd, Eq, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }
}

/// Dense index in 0..52, grouped by suit.
impl From<Card> for u8 {
    fn from(card: Card) -> Self {
        card.suit as u8 * 13 + card.value as u8
    }
}

/// Inverse of `u8::from(Card)`. Values are taken modulo 52.
impl From<u8> for Card {
    fn from(value: u8) -> Self {
        let idx = value % 52;
        Self {
            value: Value::from_index(idx % 13),
            suit: Suit::from_index(idx / 13),
        }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({})", self)
    }
}

/// Parse one card off the front of a char stream.
///
/// Accepts both `T` and `10` for tens. Returns `Ok(None)` when the
/// stream is exhausted before a card starts.
fn parse_card<I>(chars: &mut std::iter::Peekable<I>) -> Result<Option<Card>, EquityError>
where
    I: Iterator<Item = char>,
{
    // Separators between cards are allowed.
    while chars.next_if(|c| c.is_whitespace() || *c == ',').is_some() {}

    let Some(vc) = chars.next() else {
        return Ok(None);
    };

    let value = if vc == '1' {
        match chars.next() {
            Some('0') => Value::Ten,
            Some(_) => return Err(EquityError::UnexpectedValueChar),
            None => return Err(EquityError::TooFewChars),
        }
    } else {
        Value::from_char(vc).ok_or(EquityError::UnexpectedValueChar)?
    };

    let suit = chars
        .next()
        .ok_or(EquityError::TooFewChars)
        .and_then(|sc| Suit::from_char(sc).ok_or(EquityError::UnexpectedSuitChar))?;

    Ok(Some(Card { value, suit }))
}

/// Parse a run of cards such as `"AsKs"`, `"10h 9d"` or `"Qc,Jc"`.
///
/// # Errors
///
/// Any parse error, or `DuplicateCard` when the same card is listed twice.
///
/// ```
/// use river_equity::core::parse_cards;
///
/// let cards = parse_cards("AS KS 10h").unwrap();
/// assert_eq!(3, cards.len());
/// assert!(parse_cards("AsAs").is_err());
/// ```
pub fn parse_cards(s: &str) -> Result<Vec<Card>, EquityError> {
    let mut chars = s.chars().peekable();
    let mut seen = super::CardBitSet::new();
    let mut cards = Vec::with_capacity(7);
    while let Some(card) = parse_card(&mut chars)? {
        if !seen.insert(card) {
            return Err(EquityError::DuplicateCard(card));
        }
        cards.push(card);
    }
    Ok(cards)
}

impl FromStr for Card {
    type Err = EquityError;

    /// ```
    /// use river_equity::core::{Card, Suit, Value};
    ///
    /// let card: Card = "10H".parse().unwrap();
    /// assert_eq!(Card::new(Value::Ten, Suit::Heart), card);
    /// assert_eq!(card, "Th".parse().unwrap());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars().peekable();
        let card = parse_card(&mut chars)?.ok_or(EquityError::TooFewChars)?;
        if chars.next().is_some() {
            return Err(EquityError::UnparsedCharsRemaining);
        }
        Ok(card)
    }
}
