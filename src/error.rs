use thiserror::Error;

use crate::building::BuildingKind;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while mutating a [`Save`](crate::Save) or
/// running the save-string codec.
///
/// Codec errors carry the 0-based record number they were found in, so a
/// rejected import points at the offending part of the string instead of
/// failing silently. An import either succeeds completely or returns an
/// error; no partially decoded save is ever handed back.
#[derive(Error, Debug)]
pub enum Error {
    /// The string does not match the save-string grammar. Nothing was
    /// decoded.
    #[error("save string does not match the save grammar")]
    MalformedSaveString,

    /// A block record does not have the expected `kind,state,x,y,z,props`
    /// field layout.
    #[error("malformed record at index {record}")]
    MalformedRecord { record: usize },

    /// A block record's type code is not one of the known block types.
    #[error("unknown block type code {code} in record {record}")]
    UnknownBlockCode { code: u8, record: usize },

    /// A field failed numeric coercion.
    #[error("invalid number {value:?} in record {record}")]
    InvalidNumber { value: String, record: usize },

    /// A connection record references a block index outside the blocks
    /// section. Indices are 1-based.
    #[error("connection index {index} out of range (save has {blocks} blocks)")]
    ConnectionIndexOutOfRange { index: usize, blocks: usize },

    /// The referenced block does not belong to this save.
    #[error("block does not belong to this save")]
    UnknownBlock,

    /// The referenced connection does not belong to this save.
    #[error("connection does not belong to this save")]
    UnknownConnection,

    /// Exporting a save with no blocks is refused; the game does not accept
    /// an empty blocks section either.
    #[error("cannot export a save with no blocks")]
    EmptySave,

    /// A position or property value is NaN or infinite. The save grammar
    /// has no spelling for non-finite numbers, so exporting one is refused
    /// instead of emitting a string no decoder accepts.
    #[error("non-finite value {value} cannot be written to a save string")]
    NonFiniteNumber { value: f64 },

    /// No block layout has been transcribed for this building type yet.
    #[error("no block layout is defined for building type {kind:?}")]
    MissingLayout { kind: BuildingKind },
}
