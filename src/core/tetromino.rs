//! The active falling piece.

use crate::core::pieces;
use crate::types::{Rotation, RotationDirection, TetrominoType, SPAWN_POSITION};

/// A tetromino instance: type, origin, and rotation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tetromino {
    pub tetromino_type: TetrominoType,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// A new piece at the spawn position in spawn orientation.
    pub fn spawned(tetromino_type: TetrominoType) -> Self {
        Self {
            tetromino_type,
            rotation: Rotation::North,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
        }
    }

    /// Absolute positions of the four minos.
    pub fn mino_positions(&self) -> [(i8, i8); 4] {
        pieces::mino_positions(self.tetromino_type, self.rotation, (self.x, self.y))
    }

    /// The same piece translated by (dx, dy).
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// The same piece with its rotation state advanced in `direction`.
    /// Wall kicks are the caller's concern.
    pub fn rotated(&self, direction: RotationDirection) -> Self {
        let rotation = match direction {
            RotationDirection::Clockwise => self.rotation.rotated_clockwise(),
            RotationDirection::CounterClockwise => self.rotation.rotated_counter_clockwise(),
        };
        Self { rotation, ..*self }
    }
}
