//! # Circuit Maker 2 save library
//!
//! This library provides **stable data structures and a text codec** for
//! the save strings used by the Roblox game Circuit Maker 2.
//!
//! ## Disclaimer
//!
//! - This library is **not affiliated with the game developer**.
//! - The save-string format and the building block orders were
//!   **reverse-engineered from saves produced by the game**; the only full
//!   validation of an exported string is pasting it into the game.
//!
//! ## Purpose
//!
//! - [`Save`] is the root aggregate: it owns every placed block and every
//!   directed wire of one document and is the only unit the codec works on.
//! - [`Building`] expands a composite placement (memories, displays,
//!   transistors, ...) into its fixed, ordered set of pin blocks.
//! - [`codec`] converts between a [`Save`] and the game's four-section
//!   `blocks?connections?buildings?signdata` string, losslessly in both
//!   directions.
//!
//! ## Example
//! ```rust
//! use cm2save::{BlockKind, Save};
//!
//! let mut save = Save::new();
//! let a = save.add_block(BlockKind::Or, (0, 0, 0));
//! let b = save.add_block(BlockKind::Or, (2, 0, 0));
//! save.add_connection(a, b).unwrap();
//!
//! let string = save.export().unwrap();
//! assert_eq!(string, "2,0,0,0,0,;2,0,2,0,0,;?1,2;??");
//!
//! let reloaded = Save::import(&string).unwrap();
//! assert_eq!(reloaded.block_count(), 2);
//! ```

pub mod block;
pub mod building;
pub mod codec;
pub mod connection;
mod definitions;
pub mod error;
pub mod save;

pub use block::{Block, BlockId, BlockKind, Position};
pub use building::{Building, BuildingBlock, BuildingKind, IoRole, Rotation};
pub use connection::{Connection, ConnectionId};
pub use error::{Error, Result};
pub use save::{BlockOptions, Save};
