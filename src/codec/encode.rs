use std::fmt::Write;

use indexmap::IndexMap;
use tracing::debug;

use crate::block::BlockId;
use crate::error::{Error, Result};
use crate::save::Save;

/// Formats a coordinate or property value the way the game writes it:
/// integral values without a decimal point, everything else as the
/// shortest decimal that parses back to the same `f64`.
fn fmt_number(value: f64) -> String {
    if value == 0.0 {
        // Collapses -0 to 0.
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// The grammar has no spelling for NaN or infinity, so they must never
/// reach [`fmt_number`].
fn finite(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteNumber { value })
    }
}

/// Serializes a save to a save string.
///
/// Blocks are emitted in insertion order as `kind,state,x,y,z,props;`
/// records; connections reference blocks by their 1-based emission index.
/// The building and sign-data sections are reserved and written empty, but
/// their `?` terminators are always present so a decoder can find every
/// section boundary.
pub fn encode(save: &Save) -> Result<String> {
    if save.block_count() == 0 {
        return Err(Error::EmptySave);
    }

    let mut out = String::new();
    let mut emission_index: IndexMap<BlockId, usize> = IndexMap::with_capacity(save.block_count());

    for (index, block) in save.blocks().enumerate() {
        emission_index.insert(block.id(), index);

        let pos = block.position();
        let props = match block.properties() {
            Some(values) => {
                let mut parts = Vec::with_capacity(values.len());
                for &v in values {
                    parts.push(fmt_number(finite(v)?));
                }
                parts.join("+")
            }
            None => String::new(),
        };
        let _ = write!(
            out,
            "{},{},{},{},{},{};",
            block.kind().code(),
            block.active() as u8,
            fmt_number(finite(pos.x)?),
            fmt_number(finite(pos.y)?),
            fmt_number(finite(pos.z)?),
            props
        );
    }
    out.push('?');

    for connection in save.connections() {
        let source = emission_index
            .get(&connection.source())
            .ok_or(Error::UnknownBlock)?;
        let target = emission_index
            .get(&connection.target())
            .ok_or(Error::UnknownBlock)?;
        let _ = write!(out, "{},{};", source + 1, target + 1);
    }
    out.push('?');

    // Building section (reserved).
    out.push('?');
    // Sign data section (reserved) stays empty.

    debug!(
        blocks = save.block_count(),
        connections = save.connection_count(),
        bytes = out.len(),
        "encoded save"
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_print_minimally() {
        assert_eq!(fmt_number(0.0), "0");
        assert_eq!(fmt_number(-0.0), "0");
        assert_eq!(fmt_number(3.0), "3");
        assert_eq!(fmt_number(-7.0), "-7");
        assert_eq!(fmt_number(1.5), "1.5");
        assert_eq!(fmt_number(-0.25), "-0.25");
    }

    #[test]
    fn non_finite_values_are_refused() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(finite(v), Err(Error::NonFiniteNumber { .. })));
        }
        assert_eq!(finite(1.5).unwrap(), 1.5);
    }
}
