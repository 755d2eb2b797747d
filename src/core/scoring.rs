//! Scoring module - line-clear points, level progression, gravity speed.

use crate::types::{GRAVITY_DELAYS_BY_LEVEL, LINE_CLEAR_BASE_SCORES, SOFT_DROP_GRAVITY_DIVISOR};

/// Points awarded for clearing `num_lines` rows at the given level.
pub fn score_for_lines_cleared(num_lines: usize, level: u32) -> u64 {
    if num_lines > 4 {
        return 0;
    }
    LINE_CLEAR_BASE_SCORES[num_lines] * (level as u64 + 1)
}

/// The level advances every ten cleared lines, starting at 1.
pub fn level_for_lines_cleared(num_lines_cleared: u32) -> u32 {
    1 + num_lines_cleared / 10
}

/// Frames between gravity steps at the given level, clamped at the table end.
pub fn gravity_delay_by_level(level: u32) -> u64 {
    let index = (level as usize).min(GRAVITY_DELAYS_BY_LEVEL.len() - 1);
    GRAVITY_DELAYS_BY_LEVEL[index]
}

/// Soft-dropping divides the gravity delay, never below one frame.
pub fn soft_drop_gravity_delay(delay: u64) -> u64 {
    (delay / SOFT_DROP_GRAVITY_DIVISOR).max(1)
}
