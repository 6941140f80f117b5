use std::sync::atomic::{AtomicU64, Ordering};

use crate::block::BlockId;

static NEXT_CONNECTION_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque, process-unique identity of a connection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

impl ConnectionId {
    pub(crate) fn fresh() -> Self {
        ConnectionId(NEXT_CONNECTION_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A directed wire from one block to another.
///
/// Endpoints are referenced by identity, never by borrowing the blocks
/// themselves; deleting a block removes its incident connections instead of
/// leaving dangling references. Parallel wires between the same ordered
/// pair and self-loops are both legal, so each connection carries its own
/// identity for precise deletion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Connection {
    id: ConnectionId,
    source: BlockId,
    target: BlockId,
}

impl Connection {
    pub(crate) fn new(source: BlockId, target: BlockId) -> Self {
        Connection {
            id: ConnectionId::fresh(),
            source,
            target,
        }
    }

    pub fn id(&self) -> ConnectionId {
        self.id
    }

    pub fn source(&self) -> BlockId {
        self.source
    }

    pub fn target(&self) -> BlockId {
        self.target
    }
}
