use serde::{Deserialize, Serialize};

/// One value of a three-valued card attribute.
/// Every attribute of a [`Card`] (number, shape, shading, color) is drawn from this domain.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Attribute {
    /// Ordinal 0
    First = 0,
    /// Ordinal 1
    Second,
    /// Ordinal 2
    Third,
}

impl Attribute {
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Display count for the number attribute (1, 2 or 3 symbols).
    pub fn value(self) -> u8 {
        self.ordinal() + 1
    }

    pub fn from_ordinal(v: u8) -> Option<Attribute> {
        match v {
            0 => Some(Attribute::First),
            1 => Some(Attribute::Second),
            2 => Some(Attribute::Third),
            _ => None,
        }
    }
}

pub fn all_attributes() -> [Attribute; 3] {
    [Attribute::First, Attribute::Second, Attribute::Third]
}

/// A single card of the 81-card universe.
/// Equality is structural: two cards are equal when all four attributes match.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// How many symbols are printed (1–3)
    pub number: Attribute,
    /// Symbol shape
    pub shape: Attribute,
    /// Fill: solid, striped or open
    pub shading: Attribute,
    /// Symbol color
    pub color: Attribute,
}

impl Card {
    pub fn new(number: Attribute, shape: Attribute, shading: Attribute, color: Attribute) -> Self {
        Self {
            number,
            shape,
            shading,
            color,
        }
    }

    /// Builds a card from ordinals in number, shape, shading, color order.
    /// Returns `None` if any ordinal is outside 0..=2.
    pub fn from_ordinals(ords: [u8; 4]) -> Option<Card> {
        Some(Card {
            number: Attribute::from_ordinal(ords[0])?,
            shape: Attribute::from_ordinal(ords[1])?,
            shading: Attribute::from_ordinal(ords[2])?,
            color: Attribute::from_ordinal(ords[3])?,
        })
    }

    pub fn ordinals(&self) -> [u8; 4] {
        [
            self.number.ordinal(),
            self.shape.ordinal(),
            self.shading.ordinal(),
            self.color.ordinal(),
        ]
    }
}

/// Number of distinct cards: 3 values for each of 4 attributes.
pub const UNIVERSE_SIZE: usize = 81;

/// Builds the full universe in nested number, shape, shading, color order.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(UNIVERSE_SIZE);
    for &number in &all_attributes() {
        for &shape in &all_attributes() {
            for &shading in &all_attributes() {
                for &color in &all_attributes() {
                    v.push(Card::new(number, shape, shading, color));
                }
            }
        }
    }
    v
}

/// Decides whether three cards form a Set.
///
/// For every attribute the ordinals are summed; the triple is a Set when each sum is
/// divisible by 3. With exactly three cards this means each attribute is either identical
/// on all cards or pairwise distinct. Only three-card triples are a supported call shape.
///
/// # Examples
///
/// ```
/// use setgame_engine::cards::{is_set, Attribute::*, Card};
///
/// let a = Card::new(First, First, First, First);
/// let b = Card::new(First, First, First, Second);
/// let c = Card::new(First, First, First, Third);
/// assert!(is_set(&[a, b, c]));
///
/// let d = Card::new(Second, First, First, First);
/// let e = Card::new(Second, Second, First, First);
/// assert!(!is_set(&[a, d, e]));
/// ```
pub fn is_set(cards: &[Card; 3]) -> bool {
    (0..4).all(|attr| {
        let sum: u8 = cards.iter().map(|c| c.ordinals()[attr]).sum();
        sum % 3 == 0
    })
}

/// The card that completes a Set with `a` and `b`.
/// Every pair of distinct cards has exactly one such third card.
pub fn third_card(a: &Card, b: &Card) -> Card {
    let complete = |x: Attribute, y: Attribute| {
        let ord = (6 - x.ordinal() - y.ordinal()) % 3;
        Attribute::from_ordinal(ord).unwrap_or(Attribute::First)
    };
    Card {
        number: complete(a.number, b.number),
        shape: complete(a.shape, b.shape),
        shading: complete(a.shading, b.shading),
        color: complete(a.color, b.color),
    }
}
