//! Snapshot module - serializable tetrion state for observers.
//!
//! Observer tetrions never simulate; they mirror a remote player by applying
//! snapshots received from the session layer. Snapshots travel as single
//! JSON lines.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::core::tetromino::Tetromino;
use crate::types::{
    Rotation, TetrominoType, MATRIX_HEIGHT, MATRIX_WIDTH, NUM_PREVIEW_PIECES,
};

/// The active (or ghost) piece as transferred to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TetrominoSnapshot {
    #[serde(rename = "type")]
    pub tetromino_type: TetrominoType,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl From<Tetromino> for TetrominoSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            tetromino_type: value.tetromino_type,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

impl From<TetrominoSnapshot> for Tetromino {
    fn from(value: TetrominoSnapshot) -> Self {
        Self {
            tetromino_type: value.tetromino_type,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything an observer needs to mirror a tetrion at one frame.
///
/// Matrix cells use the numeric tags from [`TetrominoType::to_u8`], with 0
/// for empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TetrionSnapshot {
    pub frame: u64,
    pub cells: [[u8; MATRIX_WIDTH as usize]; MATRIX_HEIGHT as usize],
    pub active: Option<TetrominoSnapshot>,
    pub ghost: Option<TetrominoSnapshot>,
    pub hold: Option<TetrominoType>,
    pub preview: [TetrominoType; NUM_PREVIEW_PIECES],
    pub score: u64,
    pub num_lines_cleared: u32,
    pub game_over_since_frame: Option<u64>,
}

impl TetrionSnapshot {
    /// Serialize as a single JSON line (no trailing newline).
    pub fn to_json_line(&self) -> Result<String> {
        serde_json::to_string(self).context("failed to serialize tetrion snapshot")
    }

    /// Parse a JSON line produced by [`Self::to_json_line`].
    pub fn from_json_line(line: &str) -> Result<Self> {
        serde_json::from_str(line.trim())
            .map_err(|error| anyhow!("invalid tetrion snapshot: {error}"))
    }
}
