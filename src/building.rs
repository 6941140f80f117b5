use crate::block::{BlockId, Position};
use crate::definitions;
use crate::error::{Error, Result};

/// A 3x3 rotation matrix in row-major order, applied to a building as a
/// whole when it is placed in the world.
pub type Rotation = [f64; 9];

/// Cardinal placement rotations.
pub const NORTH: Rotation = [0.0, 0.0, -1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0];
pub const EAST: Rotation = [-1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0];
pub const SOUTH: Rotation = [0.0, 0.0, 1.0, 0.0, 1.0, 0.0, -1.0, 0.0, 0.0];
pub const WEST: Rotation = [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];

/// Signal direction of a building's pin block, as seen from the building.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IoRole {
    Input,
    Output,
    Bidirectional,
}

/// Building type, with the string names used by the save-string format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuildingKind {
    AsciiKeyInput,
    Assembler,
    Divider,
    Door,
    DualMemory,
    FunctionGenerator,
    Graph,
    HugeMemory,
    IntegratedCircuit,
    KeyInput,
    LargeRgbDisplay,
    MassMemory,
    MassiveMemory,
    Multiplier,
    NTransistor,
    PTransistor,
    PixelDisplay,
    QwertyKeyInput,
    RgbDisplay,
    RealTimeClock,
    Sign,
    TextConsole,
    Divider32Bit,
    Multiplier32Bit,
}

impl BuildingKind {
    /// The name written to the building section of a save string.
    pub const fn name(self) -> &'static str {
        use BuildingKind::*;

        match self {
            AsciiKeyInput => "AsciiKeyInput",
            Assembler => "Assembler",
            Divider => "Divider",
            Door => "Door",
            DualMemory => "DualMemory",
            FunctionGenerator => "FunctionGenerator",
            Graph => "Graph",
            HugeMemory => "HugeMemory",
            IntegratedCircuit => "IntegratedCircuit",
            KeyInput => "KeyInput",
            LargeRgbDisplay => "LargeRGBDisplay",
            MassMemory => "MassMemory",
            MassiveMemory => "MassiveMemory",
            Multiplier => "Multiplier",
            NTransistor => "N-Transistor",
            PTransistor => "P-Transistor",
            PixelDisplay => "PixelDisplay",
            QwertyKeyInput => "QwertyKeyInput",
            RgbDisplay => "RGBDisplay",
            RealTimeClock => "RealTimeClock",
            Sign => "Sign",
            TextConsole => "TextConsole",
            Divider32Bit => "32BitDivider",
            Multiplier32Bit => "32BitMultiplier",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        use BuildingKind::*;

        Some(match name {
            "AsciiKeyInput" => AsciiKeyInput,
            "Assembler" => Assembler,
            "Divider" => Divider,
            "Door" => Door,
            "DualMemory" => DualMemory,
            "FunctionGenerator" => FunctionGenerator,
            "Graph" => Graph,
            "HugeMemory" => HugeMemory,
            "IntegratedCircuit" => IntegratedCircuit,
            "KeyInput" => KeyInput,
            "LargeRGBDisplay" => LargeRgbDisplay,
            "MassMemory" => MassMemory,
            "MassiveMemory" => MassiveMemory,
            "Multiplier" => Multiplier,
            "N-Transistor" => NTransistor,
            "P-Transistor" => PTransistor,
            "PixelDisplay" => PixelDisplay,
            "QwertyKeyInput" => QwertyKeyInput,
            "RGBDisplay" => RgbDisplay,
            "RealTimeClock" => RealTimeClock,
            "Sign" => Sign,
            "TextConsole" => TextConsole,
            "32BitDivider" => Divider32Bit,
            "32BitMultiplier" => Multiplier32Bit,
            _ => return None,
        })
    }
}

/// One pin block of a building.
///
/// The offset, io role and index are fixed by the building's layout table
/// at construction; only the activation state can change afterwards. The
/// block's world position is never stored here; it is derived from the
/// parent building's origin on every read, so moving the building moves
/// every pin with it.
#[derive(Clone, Debug)]
pub struct BuildingBlock {
    id: BlockId,
    offset: Position,
    io: IoRole,
    index: usize,
    active: bool,
}

impl BuildingBlock {
    fn new(offset: Position, io: IoRole, index: usize) -> Self {
        BuildingBlock {
            id: BlockId::fresh(),
            offset,
            io,
            index,
            active: false,
        }
    }

    pub fn id(&self) -> BlockId {
        self.id
    }

    /// Offset relative to the parent building's origin.
    pub fn offset(&self) -> Position {
        self.offset
    }

    pub fn io(&self) -> IoRole {
        self.io
    }

    /// Position of this block in the layout table. The table order matches
    /// the order the game itself emits building pins in, which has no
    /// geometric logic; downstream tooling addresses pins by this index.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

/// A composite placement: a rigid body expanding into a fixed, ordered set
/// of pin blocks.
///
/// Construction looks up the static layout table for the building type and
/// instantiates one [`BuildingBlock`] per entry, in table order. The type
/// and the block list cannot change afterwards.
///
/// The rotation matrix is carried for the save format but is not yet
/// applied to pin offsets when deriving positions; the game's own handling
/// of rotated building pins is still being mapped out.
#[derive(Clone, Debug)]
pub struct Building {
    kind: BuildingKind,
    origin: Position,
    rotation: Rotation,
    blocks: Vec<BuildingBlock>,
}

impl Building {
    /// Fails with [`Error::MissingLayout`] for building types whose layout
    /// table has not been transcribed yet.
    pub fn new(
        kind: BuildingKind,
        origin: impl Into<Position>,
        rotation: Rotation,
    ) -> Result<Self> {
        let layout = definitions::layout(kind).ok_or(Error::MissingLayout { kind })?;
        let blocks = layout
            .iter()
            .enumerate()
            .map(|(index, entry)| BuildingBlock::new(entry.offset, entry.io, index))
            .collect();

        Ok(Building {
            kind,
            origin: origin.into(),
            rotation,
            blocks,
        })
    }

    pub fn kind(&self) -> BuildingKind {
        self.kind
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    /// Moves the building. Every pin position derives from the origin, so
    /// the whole rigid body moves at once.
    pub fn set_origin(&mut self, origin: impl Into<Position>) {
        self.origin = origin.into();
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Pin blocks in layout-table order.
    pub fn blocks(&self) -> &[BuildingBlock] {
        &self.blocks
    }

    pub fn blocks_mut(&mut self) -> impl Iterator<Item = &mut BuildingBlock> {
        self.blocks.iter_mut()
    }

    /// World position of the pin at `index`: origin plus the pin's fixed
    /// offset, computed fresh on every call.
    pub fn block_position(&self, index: usize) -> Option<Position> {
        self.blocks.get(index).map(|b| self.origin + b.offset())
    }

    pub fn inputs(&self) -> impl Iterator<Item = &BuildingBlock> {
        self.blocks.iter().filter(|b| b.io() == IoRole::Input)
    }

    pub fn outputs(&self) -> impl Iterator<Item = &BuildingBlock> {
        self.blocks.iter().filter(|b| b.io() == IoRole::Output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expansion_is_stable_across_constructions() {
        let a = Building::new(BuildingKind::AsciiKeyInput, (0, 0, 0), NORTH).unwrap();
        let b = Building::new(BuildingKind::AsciiKeyInput, (5, 5, 5), SOUTH).unwrap();

        assert_eq!(a.blocks().len(), b.blocks().len());
        for (x, y) in a.blocks().iter().zip(b.blocks()) {
            assert_eq!(x.offset(), y.offset());
            assert_eq!(x.io(), y.io());
            assert_eq!(x.index(), y.index());
        }
    }

    #[test]
    fn indices_follow_table_order() {
        let b = Building::new(BuildingKind::Assembler, (0, 0, 0), WEST).unwrap();
        for (i, block) in b.blocks().iter().enumerate() {
            assert_eq!(block.index(), i);
        }
    }

    #[test]
    fn moving_the_origin_moves_every_pin() {
        let mut b = Building::new(BuildingKind::NTransistor, (0, 0, 0), WEST).unwrap();
        let before: Vec<Position> = (0..b.blocks().len())
            .map(|i| b.block_position(i).unwrap())
            .collect();
        let offsets: Vec<Position> = b.blocks().iter().map(|p| p.offset()).collect();

        b.set_origin((10, -2, 3));
        for (i, old) in before.iter().enumerate() {
            let moved = b.block_position(i).unwrap();
            assert_eq!(moved - *old, Position::new(10.0, -2.0, 3.0));
        }
        // Offsets themselves never move.
        let after: Vec<Position> = b.blocks().iter().map(|p| p.offset()).collect();
        assert_eq!(offsets, after);
    }

    #[test]
    fn missing_layout_is_an_error() {
        assert!(matches!(
            Building::new(BuildingKind::Divider, (0, 0, 0), NORTH),
            Err(Error::MissingLayout {
                kind: BuildingKind::Divider
            })
        ));
    }

    #[test]
    fn io_roles_match_the_table() {
        let b = Building::new(BuildingKind::AsciiKeyInput, (0, 0, 0), NORTH).unwrap();
        assert_eq!(b.outputs().count(), 11);
        assert_eq!(b.inputs().count(), 0);

        let t = Building::new(BuildingKind::NTransistor, (0, 0, 0), NORTH).unwrap();
        assert_eq!(t.inputs().count(), 1);
        assert_eq!(
            t.blocks().iter().filter(|p| p.io() == IoRole::Bidirectional).count(),
            2
        );
    }

    #[test]
    fn building_names_round_trip() {
        for kind in [
            BuildingKind::AsciiKeyInput,
            BuildingKind::NTransistor,
            BuildingKind::Divider32Bit,
            BuildingKind::LargeRgbDisplay,
        ] {
            assert_eq!(BuildingKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(BuildingKind::from_name("Elevator"), None);
    }
}
