use tracing::debug;

use crate::block::{BlockId, BlockKind};
use crate::codec::grammar;
use crate::error::{Error, Result};
use crate::save::{BlockOptions, Save};

/// Parses a save string into a [`Save`].
///
/// The string is checked against the grammar first; nothing is decoded
/// from a string the grammar rejects. Blocks are rebuilt through the
/// regular mutation API in file order, so the resulting save re-exports in
/// the same order, and connection indices are resolved against that
/// construction order.
///
/// `snap_to_grid` is applied to every block uniformly, exactly as the
/// block-creation operation would. Pass `false` (as [`Save::import`] does)
/// to preserve fractional positions.
///
/// Omitted coordinate fields decode to `0` and an empty state field
/// decodes to inactive; those are the only places the decoder fills in a
/// value. Every other coercion failure is reported with the offending
/// value and record, and no partial save is returned.
pub fn decode(input: &str, snap_to_grid: bool) -> Result<Save> {
    if !grammar::is_valid(input) {
        return Err(Error::MalformedSaveString);
    }

    let sections: Vec<&str> = input.split('?').collect();
    if sections.len() != 4 {
        return Err(Error::MalformedSaveString);
    }

    let mut save = Save::new();
    // Blocks in construction order; connection records index into this.
    let mut order: Vec<BlockId> = Vec::new();

    let blocks_section = sections[0].strip_suffix(';').unwrap_or(sections[0]);
    for (record, fields) in blocks_section.split(';').map(|r| r.split(',')).enumerate() {
        let fields: Vec<&str> = fields.collect();
        if fields.len() != 6 {
            return Err(Error::MalformedRecord { record });
        }

        let code = parse_int(fields[0], record)? as u8;
        let kind = BlockKind::from_code(code).ok_or(Error::UnknownBlockCode { code, record })?;
        let active = !matches!(fields[1], "" | "0");
        let x = parse_coord(fields[2], record)?;
        let y = parse_coord(fields[3], record)?;
        let z = parse_coord(fields[4], record)?;
        let properties = if fields[5].is_empty() {
            None
        } else {
            Some(
                fields[5]
                    .split('+')
                    .map(|v| parse_number(v, record))
                    .collect::<Result<Vec<f64>>>()?,
            )
        };

        let id = save.add_block_with(
            kind,
            (x, y, z),
            BlockOptions {
                active,
                properties,
                snap_to_grid,
            },
        );
        order.push(id);
    }

    let connections_section = sections[1].strip_suffix(';').unwrap_or(sections[1]);
    if !connections_section.is_empty() {
        for (record, pair) in connections_section.split(';').enumerate() {
            let (source, target) = pair
                .split_once(',')
                .ok_or(Error::MalformedRecord { record })?;
            let source = resolve_index(parse_int(source, record)?, &order)?;
            let target = resolve_index(parse_int(target, record)?, &order)?;
            save.add_connection(source, target)?;
        }
    }

    // Sections 2 and 3 (buildings, sign data) are grammar-checked above
    // but not materialized yet; the write side emits them empty.

    debug!(
        blocks = save.block_count(),
        connections = save.connection_count(),
        "decoded save"
    );
    Ok(save)
}

fn parse_int(field: &str, record: usize) -> Result<usize> {
    field.parse::<usize>().map_err(|_| Error::InvalidNumber {
        value: field.to_string(),
        record,
    })
}

fn parse_number(field: &str, record: usize) -> Result<f64> {
    field.parse::<f64>().map_err(|_| Error::InvalidNumber {
        value: field.to_string(),
        record,
    })
}

/// An omitted coordinate reads as 0. The game itself writes nothing for
/// coordinates it considers default, so "absent" and "zero" are already
/// conflated on the wire.
fn parse_coord(field: &str, record: usize) -> Result<f64> {
    if field.is_empty() {
        Ok(0.0)
    } else {
        parse_number(field, record)
    }
}

fn resolve_index(index: usize, order: &[BlockId]) -> Result<BlockId> {
    index
        .checked_sub(1)
        .and_then(|i| order.get(i))
        .copied()
        .ok_or(Error::ConnectionIndexOutOfRange {
            index,
            blocks: order.len(),
        })
}
