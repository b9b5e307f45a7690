//! Terminal output helpers shared by commands.

use setgame_engine::cards::Card;
use std::io::Write;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Compact card label: one digit per attribute in number, shape, shading, color order.
pub fn format_card(card: &Card) -> String {
    let [n, s, sh, c] = card.ordinals();
    format!("{}{}{}{}", n, s, sh, c)
}

pub fn format_triple(indices: &[usize; 3]) -> String {
    format!("{} {} {}", indices[0], indices[1], indices[2])
}
