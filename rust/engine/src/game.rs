use std::collections::HashSet;

use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::cards::{is_set, Card, UNIVERSE_SIZE};
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hints::HintIndex;
use crate::rules::{GameConfig, Scorer, SELECTION_SIZE};
use crate::snapshot::{CardView, GameSnapshot, Outline};

/// Result of evaluating a completed selection.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    Matched,
    NotMatched,
}

/// Where the current round stands.
///
/// The selection and the evaluated triple are never populated at the same time: choosing a
/// card while a triple is evaluated first clears the evaluation.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RoundState {
    /// Nothing selected and nothing awaiting clearance
    Idle,
    /// One or two cards selected
    Selecting(Vec<Card>),
    /// Three cards were evaluated and stay on the table, flagged, until the next action
    Evaluated {
        triple: [Card; 3],
        outcome: MatchOutcome,
    },
}

/// What a successful [`SetGame::choose_card`] did.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Choice {
    Selected,
    Deselected,
    Evaluated(MatchOutcome),
}

/// A single game of Set: deck, table, selection state, score and hints.
///
/// Every instance owns its state outright; hosts that share a game between threads must
/// serialize calls themselves.
///
/// # Examples
///
/// ```
/// use setgame_engine::game::SetGame;
/// use setgame_engine::rules::GameConfig;
///
/// let mut game = SetGame::new(GameConfig::with_seed(7)).unwrap();
/// assert_eq!(game.table().len(), 12);
/// assert_eq!(game.deck_remaining(), 69);
///
/// if let Some([i, j, k]) = game.next_hint() {
///     game.choose_card(i).unwrap();
///     game.choose_card(j).unwrap();
///     game.choose_card(k).unwrap();
///     assert_eq!(game.score(), 3);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SetGame {
    config: GameConfig,
    scorer: Scorer,
    deck: Deck,
    table: Vec<Card>,
    removed: Vec<Card>,
    round: RoundState,
    score: u32,
    elapsed: u64,
    hints: HintIndex,
}

impl SetGame {
    /// Creates a game and deals the opening table.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let mut game = Self::empty(config)?;
        game.new_game();
        Ok(game)
    }

    /// Creates a game whose table holds exactly `table`, in that order.
    /// The deck holds every other card.
    pub fn with_table(config: GameConfig, table: Vec<Card>) -> Result<Self, GameError> {
        let mut game = Self::empty(config)?;
        let mut seen = HashSet::with_capacity(table.len());
        if !table.iter().all(|c| seen.insert(*c)) {
            return Err(GameError::DuplicateCard);
        }
        for card in &table {
            game.deck.remove(card);
        }
        game.table = table;
        game.hints.recompute(&game.table);
        Ok(game)
    }

    fn empty(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        tracing::debug!(seed, "creating game");
        Ok(Self {
            scorer: config.scorer(),
            deck: Deck::new_with_seed(seed),
            table: Vec::with_capacity(config.initial_table_size),
            removed: Vec::new(),
            round: RoundState::Idle,
            score: 0,
            elapsed: 0,
            hints: HintIndex::default(),
            config,
        })
    }

    /// Resets everything and deals a fresh opening table.
    pub fn new_game(&mut self) {
        self.deck.reset();
        self.table.clear();
        self.removed.clear();
        self.round = RoundState::Idle;
        self.score = 0;
        self.elapsed = 0;
        for _ in 0..self.config.initial_table_size {
            if let Some(card) = self.deck.draw_one() {
                self.table.push(card);
            }
        }
        self.hints.recompute(&self.table);
        tracing::debug!(
            table = self.table.len(),
            deck = self.deck.remaining(),
            sets = self.hints.len(),
            "new game dealt"
        );
    }

    /// Selects or deselects the card at `index`, evaluating the selection once it holds three.
    ///
    /// Starting a new selection after a matched triple first clears that triple from the
    /// table, so indices observed before this call may shift.
    ///
    /// # Errors
    ///
    /// Nothing changes when the call is rejected:
    /// - [`GameError::IndexOutOfRange`] - no card at `index`
    /// - [`GameError::CardRemoved`] - the card was already taken out of play
    /// - [`GameError::CardLocked`] - the card belongs to the evaluated triple
    pub fn choose_card(&mut self, index: usize) -> Result<Choice, GameError> {
        let card = *self.table.get(index).ok_or(GameError::IndexOutOfRange {
            index,
            len: self.table.len(),
        })?;
        if self.removed.contains(&card) {
            return Err(GameError::CardRemoved);
        }
        if let RoundState::Evaluated { triple, .. } = &self.round {
            if triple.contains(&card) {
                return Err(GameError::CardLocked);
            }
        }

        if let RoundState::Selecting(selection) = &mut self.round {
            if let Some(pos) = selection.iter().position(|c| *c == card) {
                selection.remove(pos);
                if selection.is_empty() {
                    self.round = RoundState::Idle;
                }
                tracing::debug!(index, "card deselected");
                return Ok(Choice::Deselected);
            }
        }

        let mut selection = match std::mem::replace(&mut self.round, RoundState::Idle) {
            RoundState::Selecting(selection) => selection,
            RoundState::Evaluated {
                triple,
                outcome: MatchOutcome::Matched,
            } => {
                self.clear_matched(triple);
                Vec::with_capacity(SELECTION_SIZE)
            }
            _ => Vec::with_capacity(SELECTION_SIZE),
        };
        selection.push(card);
        self.hints.recompute(&self.table);

        if selection.len() < SELECTION_SIZE {
            tracing::debug!(index, selected = selection.len(), "card selected");
            self.round = RoundState::Selecting(selection);
            return Ok(Choice::Selected);
        }

        let triple = [selection[0], selection[1], selection[2]];
        let matched = is_set(&triple);
        self.score = self.scorer.apply(self.score, matched);
        let outcome = if matched {
            MatchOutcome::Matched
        } else {
            MatchOutcome::NotMatched
        };
        tracing::debug!(?outcome, score = self.score, "selection evaluated");
        self.round = RoundState::Evaluated { triple, outcome };
        Ok(Choice::Evaluated(outcome))
    }

    /// Clears a pending matched triple from the table. Returns `false` if none was pending.
    pub fn remove_matched_from_table(&mut self) -> bool {
        match self.round {
            RoundState::Evaluated {
                triple,
                outcome: MatchOutcome::Matched,
            } => {
                self.round = RoundState::Idle;
                self.clear_matched(triple);
                self.hints.recompute(&self.table);
                true
            }
            _ => false,
        }
    }

    /// At the standard table size the triple is replaced in place by fresh cards; otherwise,
    /// or when the deck is short, it is simply removed.
    fn clear_matched(&mut self, triple: [Card; 3]) {
        let drawn = if self.table.len() == self.config.initial_table_size {
            self.deck.draw_three()
        } else {
            None
        };
        match drawn {
            Some(drawn) => {
                self.replace_on_table(&triple, drawn);
                tracing::debug!(deck = self.deck.remaining(), "matched triple replaced");
            }
            None => {
                self.table.retain(|c| !triple.contains(c));
                tracing::debug!(table = self.table.len(), "matched triple removed");
            }
        }
        self.removed.extend(triple);
    }

    fn replace_on_table(&mut self, old: &[Card; 3], new: [Card; 3]) {
        for (gone, fresh) in old.iter().zip(new) {
            if let Some(pos) = self.table.iter().position(|c| c == gone) {
                self.table[pos] = fresh;
            }
        }
    }

    /// Deals three more cards.
    ///
    /// A pending matched triple is replaced in place instead of growing the table.
    /// Hints are recomputed either way.
    ///
    /// # Errors
    ///
    /// [`GameError::DeckExhausted`] when fewer than three cards remain; the table is unchanged.
    pub fn add_three_cards(&mut self) -> Result<(), GameError> {
        let result = match self.deck.draw_three() {
            None => Err(GameError::DeckExhausted {
                remaining: self.deck.remaining(),
            }),
            Some(drawn) => {
                match self.round {
                    RoundState::Evaluated {
                        triple,
                        outcome: MatchOutcome::Matched,
                    } => {
                        self.replace_on_table(&triple, drawn);
                        self.removed.extend(triple);
                        self.round = RoundState::Idle;
                    }
                    _ => self.table.extend(drawn),
                }
                tracing::debug!(
                    table = self.table.len(),
                    deck = self.deck.remaining(),
                    "three cards added"
                );
                Ok(())
            }
        };
        self.hints.recompute(&self.table);
        result
    }

    /// Reorders the table at random. Membership, selection and score are unaffected.
    pub fn shuffle_table(&mut self) {
        self.table.shuffle(self.deck.rng_mut());
        self.hints.recompute(&self.table);
        tracing::debug!("table shuffled");
    }

    /// Next Set on the table as ascending indices, cycling through all of them.
    /// Indices are valid against the current table only.
    pub fn next_hint(&mut self) -> Option<[usize; 3]> {
        self.hints.next_hint()
    }

    /// Advances the game clock. The engine never does this on its own.
    pub fn tick(&mut self, secs: u64) {
        self.elapsed = self.elapsed.saturating_add(secs);
    }

    /// No more sets available and no way to deal more cards.
    pub fn is_over(&self) -> bool {
        self.hints.is_empty() && self.deck.remaining() < 3
    }

    pub fn score(&self) -> u32 {
        self.score
    }
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }
    pub fn table(&self) -> &[Card] {
        &self.table
    }
    pub fn removed(&self) -> &[Card] {
        &self.removed
    }
    pub fn state(&self) -> &RoundState {
        &self.round
    }
    pub fn config(&self) -> &GameConfig {
        &self.config
    }
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }
    pub fn is_deck_empty(&self) -> bool {
        self.deck.is_empty()
    }
    pub fn hint_count(&self) -> usize {
        self.hints.len()
    }
    pub fn hints(&self) -> &[[usize; 3]] {
        self.hints.triples()
    }

    pub fn selected(&self) -> &[Card] {
        match &self.round {
            RoundState::Selecting(selection) => selection,
            _ => &[],
        }
    }

    pub fn evaluated(&self) -> Option<(&[Card; 3], MatchOutcome)> {
        match &self.round {
            RoundState::Evaluated { triple, outcome } => Some((triple, *outcome)),
            _ => None,
        }
    }

    /// Read-only view for a presentation layer.
    pub fn snapshot(&self) -> GameSnapshot {
        let selected = self.selected();
        let evaluated = self.evaluated();
        let table = self
            .table
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let outline = match evaluated {
                    Some((triple, outcome)) if triple.contains(card) => match outcome {
                        MatchOutcome::Matched => Outline::Matched,
                        MatchOutcome::NotMatched => Outline::NotMatched,
                    },
                    _ if selected.contains(card) => Outline::Selected,
                    _ => Outline::Neutral,
                };
                CardView::new(index, card, outline)
            })
            .collect();
        GameSnapshot {
            score: self.score,
            elapsed: self.elapsed,
            deck_empty: self.deck.is_empty(),
            deck_remaining: self.deck.remaining(),
            table,
            selected: selected.to_vec(),
            evaluated: evaluated.map(|(t, _)| t.to_vec()).unwrap_or_default(),
            outcome: evaluated.map(|(_, o)| o),
            hint_count: self.hints.len(),
        }
    }

    /// Checks that deck, table and removed cards partition the universe and that
    /// selected and evaluated cards are on the table.
    pub fn check_invariants(&self) -> Result<(), GameError> {
        let mut seen = HashSet::with_capacity(UNIVERSE_SIZE);
        let all = self
            .deck
            .cards()
            .iter()
            .chain(&self.table)
            .chain(&self.removed);
        for card in all {
            if !seen.insert(*card) {
                return Err(GameError::DuplicateCard);
            }
        }
        if seen.len() != UNIVERSE_SIZE {
            return Err(GameError::InvariantViolated(format!(
                "{} cards accounted for, expected {}",
                seen.len(),
                UNIVERSE_SIZE
            )));
        }
        let pending = self
            .selected()
            .iter()
            .chain(self.evaluated().into_iter().flat_map(|(t, _)| t.iter()));
        for card in pending {
            if !self.table.contains(card) {
                return Err(GameError::InvariantViolated(format!(
                    "{:?} is pending but not on the table",
                    card
                )));
            }
        }
        Ok(())
    }
}
