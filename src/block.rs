use std::ops::{Add, Sub};
use std::sync::atomic::{AtomicU64, Ordering};

/// A point (or offset) in the grid space of a save.
///
/// Coordinates are kept as `f64` so that both grid-aligned and free-placed
/// blocks use the same representation; the codec prints integral values
/// without a decimal point.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Position { x, y, z }
    }

    /// Snap-to-grid: each coordinate floored to the nearest lower integer.
    pub fn floored(self) -> Self {
        Position {
            x: self.x.floor(),
            y: self.y.floor(),
            z: self.z.floor(),
        }
    }
}

impl Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl From<(f64, f64, f64)> for Position {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Position::new(x, y, z)
    }
}

impl From<(i32, i32, i32)> for Position {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Position::new(x as f64, y as f64, z as f64)
    }
}

impl From<[f64; 3]> for Position {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Position::new(x, y, z)
    }
}

/// Block type, with the integer codes used by the save-string format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BlockKind {
    Nor = 0,
    And = 1,
    Or = 2,
    Xor = 3,
    Button = 4,
    Flipflop = 5,
    Led = 6,
    Sound = 7,
    Conductor = 8,
    Custom = 9,
    Nand = 10,
    Xnor = 11,
    Random = 12,
    Text = 13,
    Tile = 14,
    Node = 15,
    Delay = 16,
    Antenna = 17,
    ConductorV2 = 18,
    LedMixer = 19,
}

impl BlockKind {
    /// The integer code written to the save string.
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        use BlockKind::*;

        Some(match code {
            0 => Nor,
            1 => And,
            2 => Or,
            3 => Xor,
            4 => Button,
            5 => Flipflop,
            6 => Led,
            7 => Sound,
            8 => Conductor,
            9 => Custom,
            10 => Nand,
            11 => Xnor,
            12 => Random,
            13 => Text,
            14 => Tile,
            15 => Node,
            16 => Delay,
            17 => Antenna,
            18 => ConductorV2,
            19 => LedMixer,
            _ => return None,
        })
    }
}

static NEXT_BLOCK_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque, process-unique identity of a block.
///
/// Used as the map key inside a [`Save`](crate::Save) and as the endpoint
/// reference of a [`Connection`](crate::Connection). Identities are never
/// reused within a process, so a stale id can never silently alias a newer
/// block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(u64);

impl BlockId {
    pub(crate) fn fresh() -> Self {
        BlockId(NEXT_BLOCK_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// One placed component in a save.
///
/// `kind` and `id` are fixed at construction; `position`, `active` and
/// `properties` stay mutable so circuits can be moved and re-tuned after
/// placement. Properties hold per-block numeric settings (LED colors, the
/// pitch of a sound block, ...) and are either absent or non-empty, never
/// an empty list.
#[derive(Clone, Debug)]
pub struct Block {
    id: BlockId,
    kind: BlockKind,
    position: Position,
    active: bool,
    properties: Option<Vec<f64>>,
}

impl Block {
    pub(crate) fn new(
        kind: BlockKind,
        position: Position,
        active: bool,
        properties: Option<Vec<f64>>,
    ) -> Self {
        // An empty property list means "no properties".
        let properties = properties.filter(|p| !p.is_empty());
        Block {
            id: BlockId::fresh(),
            kind,
            position,
            active,
            properties,
        }
    }

    pub fn id(&self) -> BlockId {
        self.id
    }

    pub fn kind(&self) -> BlockKind {
        self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: impl Into<Position>) {
        self.position = position.into();
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn properties(&self) -> Option<&[f64]> {
        self.properties.as_deref()
    }

    pub fn set_properties(&mut self, properties: Option<Vec<f64>>) {
        self.properties = properties.filter(|p| !p.is_empty());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_codes_round_trip() {
        for code in 0..=19u8 {
            let kind = BlockKind::from_code(code).unwrap();
            assert_eq!(kind.code(), code);
        }
        assert!(BlockKind::from_code(20).is_none());
        assert!(BlockKind::from_code(255).is_none());
    }

    #[test]
    fn floored_snaps_down() {
        let p = Position::new(1.9, -0.5, 3.0).floored();
        assert_eq!(p, Position::new(1.0, -1.0, 3.0));
    }

    #[test]
    fn empty_properties_become_none() {
        let b = Block::new(BlockKind::Led, Position::ORIGIN, false, Some(vec![]));
        assert!(b.properties().is_none());
    }

    #[test]
    fn ids_are_unique() {
        let a = Block::new(BlockKind::Or, Position::ORIGIN, false, None);
        let b = Block::new(BlockKind::Or, Position::ORIGIN, false, None);
        assert_ne!(a.id(), b.id());
    }
}
