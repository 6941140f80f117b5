use indexmap::IndexMap;

use crate::block::{Block, BlockId, BlockKind, Position};
use crate::codec;
use crate::connection::{Connection, ConnectionId};
use crate::error::{Error, Result};

/// Optional arguments for [`Save::add_block_with`].
#[derive(Clone, Debug)]
pub struct BlockOptions {
    pub active: bool,
    pub properties: Option<Vec<f64>>,
    pub snap_to_grid: bool,
}

impl Default for BlockOptions {
    fn default() -> Self {
        BlockOptions {
            active: false,
            properties: None,
            snap_to_grid: true,
        }
    }
}

/// One save document: every placed block and every wire between them.
///
/// The save is the only unit the codec operates on. Block insertion order
/// is preserved and is exactly the emission order of the blocks section, so
/// connection records can reference blocks by position. Connections are
/// grouped by their target block; export walks the groups in first-use
/// order and each group in insertion order.
///
/// A `Save` is a plain value with no internal locking. Callers that share
/// one across threads must serialize access themselves.
#[derive(Debug, Default)]
pub struct Save {
    blocks: IndexMap<BlockId, Block>,
    connections: IndexMap<BlockId, Vec<Connection>>,
    connection_count: usize,
}

impl Save {
    pub fn new() -> Self {
        Save::default()
    }

    /// Adds an inactive, property-less block, snapped to the grid.
    pub fn add_block(&mut self, kind: BlockKind, pos: impl Into<Position>) -> BlockId {
        self.add_block_with(kind, pos, BlockOptions::default())
    }

    /// Adds a block with explicit activation state, properties and grid
    /// snapping. With `snap_to_grid` set, each coordinate is floored before
    /// the block is constructed; otherwise fractional positions are kept
    /// as given. An empty property list is treated as "no properties".
    pub fn add_block_with(
        &mut self,
        kind: BlockKind,
        pos: impl Into<Position>,
        opts: BlockOptions,
    ) -> BlockId {
        let mut position = pos.into();
        if opts.snap_to_grid {
            position = position.floored();
        }

        let block = Block::new(kind, position, opts.active, opts.properties);
        let id = block.id();
        self.blocks.insert(id, block);
        id
    }

    /// Wires `source` into `target`. Both blocks must belong to this save.
    /// Self-loops and parallel wires are legal; nothing is deduplicated.
    pub fn add_connection(&mut self, source: BlockId, target: BlockId) -> Result<Connection> {
        if !self.blocks.contains_key(&source) || !self.blocks.contains_key(&target) {
            return Err(Error::UnknownBlock);
        }

        let connection = Connection::new(source, target);
        self.connections.entry(target).or_default().push(connection);
        self.connection_count += 1;
        Ok(connection)
    }

    /// Removes a block and every connection it takes part in, on either
    /// end. Parallel wires between the same pair are all swept; no dangling
    /// identity survives the cascade.
    pub fn delete_block(&mut self, id: BlockId) -> Result<Block> {
        // shift_remove keeps the insertion order of the remaining blocks,
        // which the codec relies on.
        let block = self.blocks.shift_remove(&id).ok_or(Error::UnknownBlock)?;

        if let Some(group) = self.connections.shift_remove(&id) {
            self.connection_count -= group.len();
        }
        for group in self.connections.values_mut() {
            let before = group.len();
            group.retain(|c| c.source() != id);
            self.connection_count -= before - group.len();
        }
        self.connections.retain(|_, group| !group.is_empty());

        Ok(block)
    }

    /// Removes exactly the identified connection.
    pub fn delete_connection(&mut self, id: ConnectionId) -> Result<()> {
        let mut found: Option<BlockId> = None;
        for (&target, group) in self.connections.iter_mut() {
            if let Some(i) = group.iter().position(|c| c.id() == id) {
                group.remove(i);
                found = Some(target);
                break;
            }
        }

        let target = found.ok_or(Error::UnknownConnection)?;
        self.connection_count -= 1;
        if self.connections.get(&target).is_some_and(|g| g.is_empty()) {
            self.connections.shift_remove(&target);
        }
        Ok(())
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.get(&id)
    }

    pub fn block_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        self.blocks.get_mut(&id)
    }

    /// Blocks in insertion order, which is also their emission order in the
    /// exported string.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.values()
    }

    /// Connections in export order: target groups in first-use order, each
    /// group in insertion order.
    pub fn connections(&self) -> impl Iterator<Item = &Connection> {
        self.connections.values().flatten()
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn connection_count(&self) -> usize {
        self.connection_count
    }

    /// Serializes this save to a save string. Fails on a save with no
    /// blocks.
    pub fn export(&self) -> Result<String> {
        codec::encode(self)
    }

    /// Parses a save string. Positions are taken as written, without grid
    /// snapping, so an exported save always reimports to the same
    /// coordinates; use [`codec::decode`] to snap while importing.
    pub fn import(input: &str) -> Result<Save> {
        codec::decode(input, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_block_snaps_by_default() {
        let mut save = Save::new();
        let id = save.add_block(BlockKind::Or, (1.7, 2.2, -0.5));
        assert_eq!(save.block(id).unwrap().position(), Position::new(1.0, 2.0, -1.0));
    }

    #[test]
    fn add_block_without_snapping() {
        let mut save = Save::new();
        let id = save.add_block_with(
            BlockKind::Or,
            (1.7, 2.2, -0.5),
            BlockOptions {
                snap_to_grid: false,
                ..Default::default()
            },
        );
        assert_eq!(save.block(id).unwrap().position(), Position::new(1.7, 2.2, -0.5));
    }

    #[test]
    fn connection_requires_known_blocks() {
        let mut save = Save::new();
        let a = save.add_block(BlockKind::Or, (0, 0, 0));

        let mut other = Save::new();
        let foreign = other.add_block(BlockKind::Or, (0, 0, 0));

        assert!(matches!(
            save.add_connection(a, foreign),
            Err(Error::UnknownBlock)
        ));
        assert_eq!(save.connection_count(), 0);
    }

    #[test]
    fn delete_block_sweeps_parallel_edges() {
        let mut save = Save::new();
        let a = save.add_block(BlockKind::Or, (0, 0, 0));
        let b = save.add_block(BlockKind::Or, (1, 0, 0));

        save.add_connection(a, b).unwrap();
        save.add_connection(a, b).unwrap();
        save.add_connection(b, a).unwrap();
        assert_eq!(save.connection_count(), 3);

        save.delete_block(a).unwrap();
        assert_eq!(save.connection_count(), 0);
        assert_eq!(save.connections().count(), 0);
        assert_eq!(save.block_count(), 1);
    }

    #[test]
    fn delete_block_handles_self_loop() {
        let mut save = Save::new();
        let a = save.add_block(BlockKind::Or, (0, 0, 0));
        save.add_connection(a, a).unwrap();

        save.delete_block(a).unwrap();
        assert_eq!(save.connection_count(), 0);
        assert_eq!(save.block_count(), 0);
    }

    #[test]
    fn delete_connection_removes_only_its_wire() {
        let mut save = Save::new();
        let a = save.add_block(BlockKind::Or, (0, 0, 0));
        let b = save.add_block(BlockKind::Or, (1, 0, 0));

        let first = save.add_connection(a, b).unwrap();
        let second = save.add_connection(a, b).unwrap();

        save.delete_connection(first.id()).unwrap();
        assert_eq!(save.connection_count(), 1);
        assert_eq!(save.connections().next().map(|c| c.id()), Some(second.id()));

        assert!(matches!(
            save.delete_connection(first.id()),
            Err(Error::UnknownConnection)
        ));
    }

    #[test]
    fn delete_missing_block_is_an_error() {
        let mut save = Save::new();
        let a = save.add_block(BlockKind::Or, (0, 0, 0));
        save.delete_block(a).unwrap();
        assert!(matches!(save.delete_block(a), Err(Error::UnknownBlock)));
    }

    #[test]
    fn blocks_keep_insertion_order_across_deletes() {
        let mut save = Save::new();
        let a = save.add_block(BlockKind::Nor, (0, 0, 0));
        let b = save.add_block(BlockKind::And, (1, 0, 0));
        let c = save.add_block(BlockKind::Or, (2, 0, 0));

        save.delete_block(b).unwrap();
        let order: Vec<BlockId> = save.blocks().map(|b| b.id()).collect();
        assert_eq!(order, vec![a, c]);
    }
}
