//! Core module - the deterministic simulation.
//!
//! Everything needed to replay a game from a seed and an input event stream
//! lives here. It has zero dependencies on I/O, rendering, or networking.

pub mod bag;
pub mod garbage;
pub mod input;
pub mod matrix;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;
pub mod tetrion;
pub mod tetromino;
pub mod timers;

// Re-export commonly used types
pub use bag::{Bag, BagQueue};
pub use garbage::GarbageSendEvent;
pub use input::{Event, EventType, Key, KeyState, ALL_KEYS};
pub use matrix::Matrix;
pub use rng::Mt64;
pub use snapshot::{TetrionSnapshot, TetrominoSnapshot};
pub use tetrion::{ActionHandler, DownMovementType, Tetrion, TetrionMode};
pub use tetromino::Tetromino;
pub use timers::LineClearDelayState;
