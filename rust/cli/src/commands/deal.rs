//! Deal command: start one game and show the opening table with its hints.

use crate::config;
use crate::error::CliError;
use crate::ui::{format_card, format_triple};
use setgame_engine::game::SetGame;
use std::io::Write;

/// Handle the deal command.
///
/// Prints one line per table card (`index: NSHC`), the deck size and every Set on the
/// table. With `json` the full snapshot is printed instead.
pub fn handle_deal_command(
    seed: Option<u64>,
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let mut cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    if seed.is_some() {
        cfg.seed = seed;
    }
    let game = SetGame::new(cfg)?;

    if json {
        let text = game
            .snapshot()
            .to_json_pretty()
            .map_err(std::io::Error::other)?;
        writeln!(out, "{}", text)?;
        return Ok(());
    }

    for (i, card) in game.table().iter().enumerate() {
        writeln!(out, "{:>2}: {}", i, format_card(card))?;
    }
    writeln!(out, "Deck: {}", game.deck_remaining())?;
    writeln!(out, "Sets: {}", game.hint_count())?;
    for hint in game.hints() {
        writeln!(out, "  {}", format_triple(hint))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn deal_lists_twelve_cards() {
        let mut out = Vec::new();
        handle_deal_command(Some(42), false, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        let card_lines = output.lines().take_while(|l| !l.starts_with("Deck:")).count();
        assert_eq!(card_lines, 12);
        assert!(output.contains("Deck: 69"));
        assert!(output.contains("Sets: "));
    }

    #[test]
    #[serial]
    fn deal_is_deterministic_with_seed() {
        let mut out1 = Vec::new();
        let mut out2 = Vec::new();
        handle_deal_command(Some(12345), false, &mut out1).unwrap();
        handle_deal_command(Some(12345), false, &mut out2).unwrap();
        assert_eq!(out1, out2, "Same seed should produce identical output");
    }

    #[test]
    #[serial]
    fn deal_json_is_a_snapshot() {
        let mut out = Vec::new();
        handle_deal_command(Some(7), true, &mut out).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["table"].as_array().unwrap().len(), 12);
        assert_eq!(v["deck_empty"], false);
    }
}
