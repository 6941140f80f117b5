//! The save-string grammar.
//!
//! A save string is four `?`-separated sections: blocks, connections,
//! buildings and sign data. The whole format is regular, so acceptance is
//! decided by a single anchored regex compiled once. Decoding never runs
//! on a string this grammar has not accepted.

use once_cell::sync::Lazy;
use regex::Regex;

static SAVE_RE: Lazy<Regex> = Lazy::new(|| {
    // Optionally signed decimal; coordinates may also be omitted entirely.
    let number = r"-?\d+(?:\.\d+)?";
    let coord = r"(?:-?\d+(?:\.\d+)?)?";

    // kind is restricted to the known type codes 0..=19. state is a single
    // optional digit. The trailing field is a `+`-joined property list.
    let block = format!(r"1?\d,\d?,{coord},{coord},{coord},(?:{number}(?:\+{number})*)?");
    // At least one block; the final separator is optional on import even
    // though the encoder always writes it.
    let blocks = format!(r"{block}(?:;{block})*;?");

    // Connection endpoints are 1-based block indices, so zero is invalid.
    let index = r"[1-9]\d*";
    let pair = format!(r"{index},{index}");
    let connections = format!(r"(?:{pair}(?:;{pair})*;?)?");

    // Reserved building section: name, origin, rotation matrix, then
    // io-flag/block-index pairs.
    let name = r"[0-9A-Za-z\-]+";
    let building = format!(r"{name}(?:,{coord}){{12}}(?:,\d,{index})*");
    let buildings = format!(r"(?:{building}(?:;{building})*;?)?");

    // Sign data: one run of hex byte pairs per sign.
    let sign = r"(?:[0-9a-fA-F]{2})*";
    let signs = format!(r"(?:{sign}(?:;{sign})*)?");

    let full = format!(r"^{blocks}\?{connections}\?{buildings}\?{signs}$");
    Regex::new(&full).expect("save grammar must compile")
});

/// Whether `input` is a well-formed save string.
pub fn is_valid(input: &str) -> bool {
    SAVE_RE.is_match(input)
}
