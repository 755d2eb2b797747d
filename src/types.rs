//! Core types shared across the crate.
//! This module contains pure constants and data types with no external dependencies.

use serde::{Deserialize, Serialize};

/// Matrix dimensions. The top [`VANISH_ZONE_ROWS`] rows are the vanish zone
/// in which pieces spawn; renderers normally display only the rows below it.
pub const MATRIX_WIDTH: u8 = 10;
pub const MATRIX_HEIGHT: u8 = 22;
pub const VANISH_ZONE_ROWS: u8 = 2;

/// Spawn position (origin) for new pieces.
pub const SPAWN_POSITION: (i8, i8) = (3, 0);

/// Frame counts for the sub-timers.
pub const DAS_DELAY_FRAMES: u32 = 10;
pub const ARR_FRAMES: u32 = 2;
pub const LOCK_DELAY_FRAMES: u32 = 30;
pub const MAX_LOCK_DELAY_RESETS: u32 = 15;
pub const ENTRY_DELAY_FRAMES: u32 = 5;
pub const LINE_CLEAR_DELAY_FRAMES: u32 = 20;

/// Frames between an opponent's clear and the garbage materializing here.
pub const GARBAGE_DELAY_FRAMES: u64 = 600;

/// The preview always shows this many upcoming pieces.
pub const NUM_PREVIEW_PIECES: usize = 6;

/// Base points for clearing 0..=4 lines, multiplied by `level + 1`.
pub const LINE_CLEAR_BASE_SCORES: [u64; 5] = [0, 100, 300, 500, 800];

/// Points per row for player-driven drops.
pub const SOFT_DROP_SCORE_PER_ROW: u64 = 1;
pub const HARD_DROP_SCORE_PER_ROW: u64 = 2;

/// Garbage lines sent to the opponent for clearing 0..=4 lines at once.
pub const GARBAGE_LINES_SENT: [u32; 5] = [0, 0, 1, 2, 4];

/// Frames between gravity steps, indexed by level and clamped at the last entry.
pub const GRAVITY_DELAYS_BY_LEVEL: [u64; 13] = [60, 48, 37, 28, 21, 16, 11, 8, 6, 4, 3, 2, 1];

/// Gravity runs this many times faster while soft-dropping (delay divisor).
pub const SOFT_DROP_GRAVITY_DIVISOR: u64 = 20;

/// Tetromino piece kinds. `Garbage` only ever appears in matrix cells spawned
/// by incoming garbage rows; it is never drawn from a bag or locked by a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TetrominoType {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
    Garbage,
}

/// The seven types a bag produces, in canonical order.
pub const BAG_PIECE_TYPES: [TetrominoType; 7] = [
    TetrominoType::I,
    TetrominoType::J,
    TetrominoType::L,
    TetrominoType::O,
    TetrominoType::S,
    TetrominoType::T,
    TetrominoType::Z,
];

impl TetrominoType {
    /// Stable numeric tag used by snapshots (0 is reserved for empty cells).
    pub fn to_u8(self) -> u8 {
        match self {
            TetrominoType::I => 1,
            TetrominoType::J => 2,
            TetrominoType::L => 3,
            TetrominoType::O => 4,
            TetrominoType::S => 5,
            TetrominoType::T => 6,
            TetrominoType::Z => 7,
            TetrominoType::Garbage => 8,
        }
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(TetrominoType::I),
            2 => Some(TetrominoType::J),
            3 => Some(TetrominoType::L),
            4 => Some(TetrominoType::O),
            5 => Some(TetrominoType::S),
            6 => Some(TetrominoType::T),
            7 => Some(TetrominoType::Z),
            8 => Some(TetrominoType::Garbage),
            _ => None,
        }
    }
}

/// Rotation states (North = spawn orientation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub fn rotated_clockwise(self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    pub fn rotated_counter_clockwise(self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }
}

/// Direction of a rotation input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
}

/// Cell on the matrix (`None` = empty).
pub type Cell = Option<TetrominoType>;

/// Gameplay events delivered to the registered action handler.
///
/// Handlers are invoked synchronously inside the simulation; collaborators
/// (renderers, sound, networking) react without polling the tetrion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    RotateClockwise,
    RotateCounterClockwise,
    SoftDrop,
    HardDrop,
    /// The active piece came to rest on support.
    Touch,
    LinesCleared(u32),
    GameOver,
}
