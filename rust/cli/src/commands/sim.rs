//! Simulation command: play whole games by following hints.
//!
//! Each game repeatedly takes the next hint and selects its three cards; when the table
//! holds no Set, three cards are added. A game ends when there is no Set and the deck
//! cannot supply three more cards.

use crate::config;
use crate::error::CliError;
use setgame_engine::game::SetGame;
use setgame_engine::rules::GameConfig;
use std::io::Write;

/// Outcome of one simulated game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimResult {
    pub sets: u32,
    pub score: u32,
    pub additions: u32,
    pub cards_left: usize,
}

/// Plays one game to completion using only the engine's public operations.
pub fn play_out(config: GameConfig) -> Result<SimResult, CliError> {
    let mut game = SetGame::new(config)?;
    let mut result = SimResult {
        sets: 0,
        score: 0,
        additions: 0,
        cards_left: 0,
    };
    loop {
        game.remove_matched_from_table();
        if game.is_over() {
            break;
        }
        match game.next_hint() {
            Some([i, j, k]) => {
                game.choose_card(i)?;
                game.choose_card(j)?;
                game.choose_card(k)?;
                result.sets += 1;
            }
            None => {
                game.add_three_cards()?;
                result.additions += 1;
            }
        }
        if cfg!(debug_assertions) {
            game.check_invariants()?;
        }
    }
    result.score = game.score();
    result.cards_left = game.table().len();
    tracing::info!(
        sets = result.sets,
        score = result.score,
        cards_left = result.cards_left,
        "game finished"
    );
    Ok(result)
}

/// Handle the sim command.
///
/// Game `n` uses seed `base + n`, so a run is reproducible from its base seed.
pub fn handle_sim_command(
    games: u32,
    seed: Option<u64>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    if games == 0 {
        return Err(CliError::InvalidInput("games must be >= 1".to_string()));
    }
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let base_seed = seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut total_sets = 0u64;
    let mut total_score = 0u64;
    for n in 0..games {
        let game_cfg = GameConfig {
            seed: Some(base_seed.wrapping_add(n as u64)),
            ..cfg.clone()
        };
        let r = play_out(game_cfg)?;
        writeln!(
            out,
            "Game {}: sets={} score={} additions={} cards_left={}",
            n + 1,
            r.sets,
            r.score,
            r.additions,
            r.cards_left
        )?;
        total_sets += u64::from(r.sets);
        total_score += u64::from(r.score);
    }
    writeln!(
        out,
        "Simulated {} game(s) from seed {}: {} sets, average score {:.1}",
        games,
        base_seed,
        total_sets,
        total_score as f64 / f64::from(games)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn play_out_uses_most_of_the_deck() {
        let r = play_out(GameConfig::with_seed(11)).unwrap();
        assert_eq!(r.score, r.sets * 3);
        // Every card is either on the final table or part of a found Set.
        assert_eq!(r.cards_left + r.sets as usize * 3, 81);
    }

    #[test]
    #[serial]
    fn sim_prints_one_line_per_game_and_summary() {
        let mut out = Vec::new();
        handle_sim_command(3, Some(5), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.lines().filter(|l| l.starts_with("Game ")).count(), 3);
        assert!(output.contains("Simulated 3 game(s) from seed 5"));
    }

    #[test]
    fn sim_rejects_zero_games() {
        let mut out = Vec::new();
        let res = handle_sim_command(0, Some(1), &mut out);
        assert!(matches!(res, Err(CliError::InvalidInput(ref m)) if m == "games must be >= 1"));
        assert!(out.is_empty());
    }
}
