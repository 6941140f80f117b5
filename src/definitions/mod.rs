//! Static per-building-type block layout tables.
//!
//! Each table lists the offset and io role of every pin block a building
//! expands into, in the exact order the game emits them in save strings.
//! That order is reverse-engineered and frequently has no geometric logic
//! at all; it must never be re-sorted, because tooling addresses pins by
//! their position in the list.
//!
//! TODO: transcribe the remaining tables (Divider, the memory buildings,
//! the key inputs, the displays and the 32-bit math buildings).

use crate::block::Position;
use crate::building::{BuildingKind, IoRole};

use IoRole::{Bidirectional, Input, Output};

pub(crate) struct LayoutEntry {
    pub(crate) offset: Position,
    pub(crate) io: IoRole,
}

const fn bp(x: i32, y: i32, z: i32, io: IoRole) -> LayoutEntry {
    LayoutEntry {
        offset: Position::new(x as f64, y as f64, z as f64),
        io,
    }
}

static ASCII_KEY_INPUT: &[LayoutEntry] = &[
    bp(7, 0, -3, Output),  // Ctrl
    bp(-6, 0, -3, Output), // ASCII [bit 7]
    bp(-5, 0, -3, Output), // ASCII [bit 6]
    bp(-4, 0, -3, Output), // ASCII [bit 5]
    bp(-3, 0, -3, Output), // ASCII [bit 4]
    bp(-2, 0, -3, Output), // ASCII [bit 3]
    bp(-1, 0, -3, Output), // ASCII [bit 2]
    bp(0, 0, -3, Output),  // ASCII [bit 1]
    bp(1, 0, -3, Output),  // ASCII [bit 0]
    bp(3, 0, -3, Output),  // Pressed
    bp(5, 0, -3, Output),  // Shift
];

static ASSEMBLER: &[LayoutEntry] = &[
    bp(-17, 0, 4, Input), // address [bit 11]
    bp(-8, 0, 4, Input),  // address [bit 2]
    bp(-7, 0, 4, Input),  // address [bit 1]
    bp(-6, 0, 4, Input),  // address [bit 0]
    bp(-16, 0, 4, Input), // address [bit 10]
    bp(-15, 0, 4, Input), // address [bit 9]
    bp(-14, 0, 4, Input), // address [bit 8]
    bp(-13, 0, 4, Input), // address [bit 7]
    bp(-12, 0, 4, Input), // address [bit 6]
    bp(-11, 0, 4, Input), // address [bit 5]
    bp(-10, 0, 4, Input), // address [bit 4]
    bp(-9, 0, 4, Input),  // address [bit 3]
    bp(-17, 0, -4, Output), // Byte 1 [bit 7]
    bp(-16, 0, -4, Output), // Byte 1 [bit 6]
    bp(-15, 0, -4, Output), // Byte 1 [bit 5]
    bp(-14, 0, -4, Output), // Byte 1 [bit 4]
    bp(-13, 0, -4, Output), // Byte 1 [bit 3]
    bp(-12, 0, -4, Output), // Byte 1 [bit 2]
    bp(-11, 0, -4, Output), // Byte 1 [bit 1]
    bp(-10, 0, -4, Output), // Byte 1 [bit 0]
    bp(-8, 0, -4, Output),  // Byte 2 [bit 7]
    bp(-7, 0, -4, Output),  // Byte 2 [bit 6]
    bp(-6, 0, -4, Output),  // Byte 2 [bit 5]
    bp(-5, 0, -4, Output),  // Byte 2 [bit 4]
    bp(-4, 0, -4, Output),  // Byte 2 [bit 3]
    bp(-3, 0, -4, Output),  // Byte 2 [bit 2]
    bp(-2, 0, -4, Output),  // Byte 2 [bit 1]
    bp(-1, 0, -4, Output),  // Byte 2 [bit 0]
    bp(1, 0, -4, Output),   // Byte 3 [bit 7]
    bp(2, 0, -4, Output),   // Byte 3 [bit 6]
    bp(3, 0, -4, Output),   // Byte 3 [bit 5]
    bp(4, 0, -4, Output),   // Byte 3 [bit 4]
    bp(5, 0, -4, Output),   // Byte 3 [bit 3]
    bp(6, 0, -4, Output),   // Byte 3 [bit 2]
    bp(7, 0, -4, Output),   // Byte 3 [bit 1]
    bp(8, 0, -4, Output),   // Byte 3 [bit 0]
    bp(10, 0, -4, Output),  // Byte 4 [bit 7]
    bp(11, 0, -4, Output),  // Byte 4 [bit 6]
    bp(12, 0, -4, Output),  // Byte 4 [bit 5]
    bp(13, 0, -4, Output),  // Byte 4 [bit 4]
    bp(14, 0, -4, Output),  // Byte 4 [bit 3]
    bp(15, 0, -4, Output),  // Byte 4 [bit 2]
    bp(16, 0, -4, Output),  // Byte 4 [bit 1]
    bp(17, 0, -4, Output),  // Byte 4 [bit 0]
];

static DOOR: &[LayoutEntry] = &[bp(0, 7, 0, Input)];

static DUAL_MEMORY: &[LayoutEntry] = &[
    bp(-4, 0, 2, Input),  // Save Address [bit 7]
    bp(-3, 0, 2, Input),  // Save Address [bit 6]
    bp(-2, 0, 2, Input),  // Save Address [bit 5]
    bp(-1, 0, 2, Input),  // Save Address [bit 4]
    bp(0, 0, 2, Input),   // Save Address [bit 3]
    bp(1, 0, 2, Input),   // Save Address [bit 2]
    bp(2, 0, 2, Input),   // Save Address [bit 1]
    bp(3, 0, 2, Input),   // Save Address [bit 0]
    bp(-13, 0, 2, Input), // Load Address [bit 7]
    bp(-12, 0, 2, Input), // Load Address [bit 6]
    bp(-11, 0, 2, Input), // Load Address [bit 5]
    bp(-10, 0, 2, Input), // Load Address [bit 4]
    bp(-9, 0, 2, Input),  // Load Address [bit 3]
    bp(-8, 0, 2, Input),  // Load Address [bit 2]
    bp(-7, 0, 2, Input),  // Load Address [bit 1]
    bp(-6, 0, 2, Input),  // Load Address [bit 0]
    bp(-13, 0, -2, Output), // Output [bit 7]
    bp(-12, 0, -2, Output), // Output [bit 6]
    bp(-11, 0, -2, Output), // Output [bit 5]
    bp(-10, 0, -2, Output), // Output [bit 4]
    bp(-9, 0, -2, Output),  // Output [bit 3]
    bp(-8, 0, -2, Output),  // Output [bit 2]
    bp(-7, 0, -2, Output),  // Output [bit 1]
    bp(-6, 0, -2, Output),  // Output [bit 0]
    bp(5, 0, 2, Input),   // Value [bit 7]
    bp(6, 0, 2, Input),   // Value [bit 6]
    bp(7, 0, 2, Input),   // Value [bit 5]
    bp(8, 0, 2, Input),   // Value [bit 4]
    bp(9, 0, 2, Input),   // Value [bit 3]
    bp(10, 0, 2, Input),  // Value [bit 2]
    bp(11, 0, 2, Input),  // Value [bit 1]
    bp(12, 0, 2, Input),  // Value [bit 0]
    bp(14, 0, 2, Input),  // write
];

static FUNCTION_GENERATOR: &[LayoutEntry] = &[
    bp(8, 0, 3, Input),   // Func [bit 1]
    bp(9, 0, 3, Input),   // Func [bit 0]
    bp(-1, 0, -2, Output), // Output [bit 7]
    bp(0, 0, -2, Output),  // Output [bit 6]
    bp(1, 0, -2, Output),  // Output [bit 5]
    bp(2, 0, -2, Output),  // Output [bit 4]
    bp(3, 0, -2, Output),  // Output [bit 3]
    bp(4, 0, -2, Output),  // Output [bit 2]
    bp(5, 0, -2, Output),  // Output [bit 1]
    bp(6, 0, -2, Output),  // Output [bit 0]
    bp(-1, 0, 3, Input),  // X [bit 7]
    bp(0, 0, 3, Input),   // X [bit 6]
    bp(1, 0, 3, Input),   // X [bit 5]
    bp(2, 0, 3, Input),   // X [bit 4]
    bp(3, 0, 3, Input),   // X [bit 3]
    bp(4, 0, 3, Input),   // X [bit 2]
    bp(5, 0, 3, Input),   // X [bit 1]
    bp(6, 0, 3, Input),   // X [bit 0]
];

static GRAPH: &[LayoutEntry] = &[
    bp(-4, 0, 4, Input),
    bp(-3, 0, 4, Input),
    bp(-2, 0, 4, Input),
    bp(-1, 0, 4, Input),
    bp(0, 0, 4, Input),
    bp(1, 0, 4, Input),
    bp(2, 0, 4, Input),
    bp(3, 0, 4, Input),
];

static N_TRANSISTOR: &[LayoutEntry] = &[
    bp(1, 0, 0, Bidirectional),  // Right
    bp(0, 0, 1, Input),          // Bottom
    bp(-1, 0, 0, Bidirectional), // Left
];

static P_TRANSISTOR: &[LayoutEntry] = &[
    bp(1, 0, 0, Bidirectional),  // Right
    bp(0, 0, 1, Input),          // Bottom
    bp(-1, 0, 0, Bidirectional), // Left
];

static PIXEL_DISPLAY: &[LayoutEntry] = &[
    bp(4, 0, 10, Input),  // Pixel
    bp(6, 0, 10, Input),  // Reset
    bp(8, 0, 10, Input),  // Write
    bp(-8, 0, 10, Input), // X [bit 4]
    bp(-7, 0, 10, Input), // X [bit 3]
    bp(-6, 0, 10, Input), // X [bit 2]
    bp(-5, 0, 10, Input), // X [bit 1]
    bp(-4, 0, 10, Input), // X [bit 0]
    bp(-2, 0, 10, Input), // Y [bit 4]
    bp(-1, 0, 10, Input), // Y [bit 3]
    bp(0, 0, 10, Input),  // Y [bit 2]
    bp(1, 0, 10, Input),  // Y [bit 1]
    bp(2, 0, 10, Input),  // Y [bit 0]
];

static REAL_TIME_CLOCK: &[LayoutEntry] = &[
    bp(9, 0, -1, Input),   // CHG
    bp(0, 0, -1, Input),   // +/-
    bp(12, 0, -1, Input),  // HOL
    bp(10, 0, -1, Input),  // RST
    bp(11, 0, -1, Input),  // SYN
    bp(5, 0, -1, Input),   // 1D input
    bp(4, 0, -1, Input),   // 1h input
    bp(3, 0, -1, Input),   // 1m input
    bp(2, 0, -1, Input),   // 1s input
    bp(31, 0, -1, Output), // 1D output
    bp(30, 0, -1, Output), // 1h output
    bp(29, 0, -1, Output), // 1m output
    bp(28, 0, -1, Output), // 1s output
    bp(31, 0, 4, Output),  // Timestamp [bit 0]
    bp(22, 0, 4, Output),  // Timestamp [bit 9]
    bp(21, 0, 4, Output),  // Timestamp [bit 10]
    bp(20, 0, 4, Output),  // Timestamp [bit 11]
    bp(19, 0, 4, Output),  // Timestamp [bit 12]
    bp(18, 0, 4, Output),  // Timestamp [bit 13]
    bp(17, 0, 4, Output),  // Timestamp [bit 14]
    bp(16, 0, 4, Output),  // Timestamp [bit 15]
    bp(15, 0, 4, Output),  // Timestamp [bit 16]
    bp(14, 0, 4, Output),  // Timestamp [bit 17]
    bp(13, 0, 4, Output),  // Timestamp [bit 18]
    bp(30, 0, 4, Output),  // Timestamp [bit 1]
    bp(12, 0, 4, Output),  // Timestamp [bit 19]
    bp(11, 0, 4, Output),  // Timestamp [bit 20]
    bp(10, 0, 4, Output),  // Timestamp [bit 21]
    bp(9, 0, 4, Output),   // Timestamp [bit 22]
    bp(8, 0, 4, Output),   // Timestamp [bit 23]
    bp(7, 0, 4, Output),   // Timestamp [bit 24]
    bp(6, 0, 4, Output),   // Timestamp [bit 25]
    bp(5, 0, 4, Output),   // Timestamp [bit 26]
    bp(4, 0, 4, Output),   // Timestamp [bit 27]
    bp(3, 0, 4, Output),   // Timestamp [bit 28]
    bp(29, 0, 4, Output),  // Timestamp [bit 2]
    bp(2, 0, 4, Output),   // Timestamp [bit 29]
    bp(1, 0, 4, Output),   // Timestamp [bit 30]
    bp(0, 0, 4, Output),   // Timestamp [bit 31]
    bp(28, 0, 4, Output),  // Timestamp [bit 3]
    bp(27, 0, 4, Output),  // Timestamp [bit 4]
    bp(26, 0, 4, Output),  // Timestamp [bit 5]
    bp(25, 0, 4, Output),  // Timestamp [bit 6]
    bp(24, 0, 4, Output),  // Timestamp [bit 7]
    bp(23, 0, 4, Output),  // Timestamp [bit 8]
];

static SIGN: &[LayoutEntry] = &[bp(-4, 0, -4, Input)];

static TEXT_CONSOLE: &[LayoutEntry] = &[
    bp(-1, 0, 9, Input),  // Char [bit 7]
    bp(0, 0, 9, Input),   // Char [bit 6]
    bp(1, 0, 9, Input),   // Char [bit 5]
    bp(2, 0, 9, Input),   // Char [bit 4]
    bp(3, 0, 9, Input),   // Char [bit 3]
    bp(4, 0, 9, Input),   // Char [bit 2]
    bp(5, 0, 9, Input),   // Char [bit 1]
    bp(6, 0, 9, Input),   // Char [bit 0]
    bp(8, 0, 9, Input),   // Clear
    bp(9, 0, 9, Input),   // Cursor
    bp(-10, 0, 9, Input), // Location [bit 7]
    bp(-9, 0, 9, Input),  // Location [bit 6]
    bp(-8, 0, 9, Input),  // Location [bit 5]
    bp(-7, 0, 9, Input),  // Location [bit 4]
    bp(-6, 0, 9, Input),  // Location [bit 3]
    bp(-5, 0, 9, Input),  // Location [bit 2]
    bp(-4, 0, 9, Input),  // Location [bit 1]
    bp(-3, 0, 9, Input),  // Location [bit 0]
    bp(10, 0, 9, Input),  // Write
];

/// The transcribed layout for a building type, or `None` for types whose
/// pin order has not been mapped yet.
pub(crate) fn layout(kind: BuildingKind) -> Option<&'static [LayoutEntry]> {
    use BuildingKind::*;

    Some(match kind {
        AsciiKeyInput => ASCII_KEY_INPUT,
        Assembler => ASSEMBLER,
        Door => DOOR,
        DualMemory => DUAL_MEMORY,
        FunctionGenerator => FUNCTION_GENERATOR,
        Graph => GRAPH,
        NTransistor => N_TRANSISTOR,
        PTransistor => P_TRANSISTOR,
        PixelDisplay => PIXEL_DISPLAY,
        RealTimeClock => REAL_TIME_CLOCK,
        Sign => SIGN,
        TextConsole => TEXT_CONSOLE,
        _ => return None,
    })
}
