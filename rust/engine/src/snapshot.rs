use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::game::MatchOutcome;

/// How a card on the table should be outlined.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outline {
    Neutral,
    Selected,
    Matched,
    NotMatched,
}

/// A table card as attribute ordinals (0–2) plus its outline state.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub index: usize,
    pub number: u8,
    pub shape: u8,
    pub shading: u8,
    pub color: u8,
    pub outline: Outline,
}

impl CardView {
    pub fn new(index: usize, card: &Card, outline: Outline) -> Self {
        let [number, shape, shading, color] = card.ordinals();
        Self {
            index,
            number,
            shape,
            shading,
            color,
            outline,
        }
    }
}

/// Everything a presentation layer may read, taken at one moment.
/// Table indices (and hint indices) are only meaningful against this snapshot.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub score: u32,
    pub elapsed: u64,
    pub deck_empty: bool,
    pub deck_remaining: usize,
    pub table: Vec<CardView>,
    pub selected: Vec<Card>,
    pub evaluated: Vec<Card>,
    /// `None` while no triple is awaiting clearance
    pub outcome: Option<MatchOutcome>,
    pub hint_count: usize,
}

impl GameSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
