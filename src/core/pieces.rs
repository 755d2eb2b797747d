//! Pieces module - tetromino shapes and SRS wall-kick tables.
//!
//! Pure lookups over (type, rotation); nothing here touches the matrix.
//! Reference: https://tetris.wiki/SRS

use crate::types::{Rotation, RotationDirection, TetrominoType};

/// Offset of a single mino relative to the piece origin.
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from the piece origin.
pub type PieceShape = [MinoOffset; 4];

/// Get the shape (mino offsets) for a piece type and rotation.
///
/// `Garbage` never spawns as an active piece; its shape is a degenerate
/// single cell so the function stays total.
pub fn mino_offsets(piece_type: TetrominoType, rotation: Rotation) -> PieceShape {
    match piece_type {
        TetrominoType::I => i_offsets(rotation),
        TetrominoType::J => j_offsets(rotation),
        TetrominoType::L => l_offsets(rotation),
        TetrominoType::O => o_offsets(rotation),
        TetrominoType::S => s_offsets(rotation),
        TetrominoType::T => t_offsets(rotation),
        TetrominoType::Z => z_offsets(rotation),
        TetrominoType::Garbage => [(0, 0); 4],
    }
}

/// Absolute mino positions for a piece with the given origin.
pub fn mino_positions(
    piece_type: TetrominoType,
    rotation: Rotation,
    origin: (i8, i8),
) -> [(i8, i8); 4] {
    let offsets = mino_offsets(piece_type, rotation);
    offsets.map(|(dx, dy)| (origin.0 + dx, origin.1 + dy))
}

fn i_offsets(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 1), (1, 1), (2, 1), (3, 1)],
        Rotation::East => [(2, 0), (2, 1), (2, 2), (2, 3)],
        Rotation::South => [(0, 2), (1, 2), (2, 2), (3, 2)],
        Rotation::West => [(1, 0), (1, 1), (1, 2), (1, 3)],
    }
}

fn o_offsets(_rotation: Rotation) -> PieceShape {
    [(1, 0), (2, 0), (1, 1), (2, 1)]
}

fn t_offsets(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (1, 2)],
        Rotation::West => [(1, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn s_offsets(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(1, 0), (2, 0), (0, 1), (1, 1)],
        Rotation::East => [(1, 0), (1, 1), (2, 1), (2, 2)],
        Rotation::South => [(1, 1), (2, 1), (0, 2), (1, 2)],
        Rotation::West => [(0, 0), (0, 1), (1, 1), (1, 2)],
    }
}

fn z_offsets(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (1, 0), (1, 1), (2, 1)],
        Rotation::East => [(2, 0), (1, 1), (2, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (1, 2), (2, 2)],
        Rotation::West => [(1, 0), (0, 1), (1, 1), (0, 2)],
    }
}

fn j_offsets(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(0, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (2, 0), (1, 1), (1, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (2, 2)],
        Rotation::West => [(1, 0), (1, 1), (0, 2), (1, 2)],
    }
}

fn l_offsets(rotation: Rotation) -> PieceShape {
    match rotation {
        Rotation::North => [(2, 0), (0, 1), (1, 1), (2, 1)],
        Rotation::East => [(1, 0), (1, 1), (1, 2), (2, 2)],
        Rotation::South => [(0, 1), (1, 1), (2, 1), (0, 2)],
        Rotation::West => [(0, 0), (1, 0), (1, 1), (1, 2)],
    }
}

/// JLSTZ kick offsets, indexed by [`kick_index`].
const JLSTZ_KICKS: [[(i8, i8); 5]; 8] = [
    // N->E (clockwise)
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // N->W (counter-clockwise)
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // E->N (counter-clockwise)
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // E->S (clockwise)
    [(0, 0), (1, 0), (1, -1), (0, 2), (1, 2)],
    // S->E (counter-clockwise)
    [(0, 0), (-1, 0), (-1, 1), (0, -2), (-1, -2)],
    // S->W (clockwise)
    [(0, 0), (1, 0), (1, 1), (0, -2), (1, -2)],
    // W->S (counter-clockwise)
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
    // W->N (clockwise)
    [(0, 0), (-1, 0), (-1, -1), (0, 2), (-1, 2)],
];

/// I piece kick offsets (the I uses its own table).
const I_KICKS: [[(i8, i8); 5]; 8] = [
    // N->E
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // N->W
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // E->N
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // E->S
    [(0, 0), (-1, 0), (2, 0), (-1, 2), (2, -1)],
    // S->E
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
    // S->W
    [(0, 0), (2, 0), (-1, 0), (2, 1), (-1, -2)],
    // W->S
    [(0, 0), (-2, 0), (1, 0), (-2, -1), (1, 2)],
    // W->N
    [(0, 0), (1, 0), (-2, 0), (1, -2), (-2, 1)],
];

/// The O piece rotates in place: a single zero offset.
const O_KICKS: [(i8, i8); 1] = [(0, 0)];

fn kick_index(from: Rotation, direction: RotationDirection) -> usize {
    match (from, direction) {
        (Rotation::North, RotationDirection::Clockwise) => 0,
        (Rotation::North, RotationDirection::CounterClockwise) => 1,
        (Rotation::East, RotationDirection::CounterClockwise) => 2,
        (Rotation::East, RotationDirection::Clockwise) => 3,
        (Rotation::South, RotationDirection::CounterClockwise) => 4,
        (Rotation::South, RotationDirection::Clockwise) => 5,
        (Rotation::West, RotationDirection::CounterClockwise) => 6,
        (Rotation::West, RotationDirection::Clockwise) => 7,
    }
}

/// Ordered translation candidates to try when rotating `from` in `direction`.
pub fn kick_offsets(
    piece_type: TetrominoType,
    from: Rotation,
    direction: RotationDirection,
) -> &'static [(i8, i8)] {
    match piece_type {
        TetrominoType::O => &O_KICKS,
        TetrominoType::I => &I_KICKS[kick_index(from, direction)],
        _ => &JLSTZ_KICKS[kick_index(from, direction)],
    }
}
