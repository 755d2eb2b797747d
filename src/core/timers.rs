//! Sub-timer state machines: DAS, lock delay, entry delay, line-clear delay.
//!
//! Each timer counts whole frames and is owned exclusively by its tetrion.
//! None of them touch the matrix; they only answer "does X happen on this
//! frame", and the tetrion performs the resulting mutation.

use arrayvec::ArrayVec;

use crate::types::{
    ARR_FRAMES, DAS_DELAY_FRAMES, ENTRY_DELAY_FRAMES, LINE_CLEAR_DELAY_FRAMES, LOCK_DELAY_FRAMES,
    MAX_LOCK_DELAY_RESETS,
};

/// Direction of a held horizontal key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDirection {
    Left,
    Right,
}

/// Delayed auto shift: after a directional key has been held for
/// [`DAS_DELAY_FRAMES`], repeat moves fire every [`ARR_FRAMES`].
///
/// The immediate move on key-down is the caller's job; the charge starts
/// counting on the following frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DelayedAutoShiftState {
    direction: Option<ShiftDirection>,
    charge_frames: u32,
}

impl DelayedAutoShiftState {
    /// A directional key went down. Replaces any previous direction.
    pub fn key_pressed(&mut self, direction: ShiftDirection) {
        self.direction = Some(direction);
        self.charge_frames = 0;
    }

    /// A directional key went up. Only clears the state if the released key
    /// matches the charging direction (the opposite key may have replaced it).
    pub fn key_released(&mut self, direction: ShiftDirection) {
        if self.direction == Some(direction) {
            self.direction = None;
            self.charge_frames = 0;
        }
    }

    /// Advance one frame of holding. Returns the direction to auto-repeat
    /// into on this frame, if the charge has matured.
    pub fn tick(&mut self) -> Option<ShiftDirection> {
        let direction = self.direction?;
        self.charge_frames += 1;
        if self.charge_frames >= DAS_DELAY_FRAMES
            && (self.charge_frames - DAS_DELAY_FRAMES) % ARR_FRAMES == 0
        {
            Some(direction)
        } else {
            None
        }
    }
}

/// Lock delay: the grace period between a piece landing on support and it
/// freezing into the matrix. Successful moves while on support reset the
/// counter, up to [`MAX_LOCK_DELAY_RESETS`] times per piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockDelayState {
    active: bool,
    counter: u32,
    moves_remaining: u32,
}

impl Default for LockDelayState {
    fn default() -> Self {
        Self {
            active: false,
            counter: 0,
            moves_remaining: MAX_LOCK_DELAY_RESETS,
        }
    }
}

impl LockDelayState {
    /// Fresh state for a newly spawned piece.
    pub fn reset_for_new_tetromino(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The piece is resting on support this frame. Returns true on the
    /// transition from airborne to supported.
    pub fn on_supported(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        self.counter = 0;
        true
    }

    /// The piece is airborne again (a move or line shift removed support).
    pub fn on_airborne(&mut self) {
        self.active = false;
        self.counter = 0;
    }

    /// A successful move or rotation happened while on support.
    pub fn on_tetromino_moved(&mut self) {
        if self.active {
            self.counter = 0;
            self.moves_remaining = self.moves_remaining.saturating_sub(1);
        }
    }

    /// Advance one supported frame. Returns true when the piece must lock.
    pub fn tick(&mut self) -> bool {
        self.counter += 1;
        self.counter >= LOCK_DELAY_FRAMES || self.moves_remaining == 0
    }
}

/// Entry delay (ARE): the pause between a lock (or line-clear resolution)
/// and the next spawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryDelay {
    counter: u32,
}

impl EntryDelay {
    pub fn start(&mut self) {
        self.counter = ENTRY_DELAY_FRAMES;
    }

    pub fn is_active(&self) -> bool {
        self.counter > 0
    }

    /// Advance one frame. Returns true on the frame the delay expires.
    pub fn tick(&mut self) -> bool {
        self.counter -= 1;
        self.counter == 0
    }
}

/// Snapshot of the line-clear delay exposed to external collaborators
/// (renderers flash the affected rows during the countdown).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineClearDelayState {
    pub lines: ArrayVec<u8, 4>,
    pub countdown: u32,
    pub delay: u32,
}

/// Line-clear delay: freezes the board while full rows are displayed before
/// removal. At most four rows clear at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineClearDelay {
    lines: ArrayVec<u8, 4>,
    countdown: u32,
}

impl LineClearDelay {
    pub fn start(&mut self, lines: ArrayVec<u8, 4>) {
        self.lines = lines;
        self.countdown = LINE_CLEAR_DELAY_FRAMES;
    }

    pub fn is_active(&self) -> bool {
        !self.lines.is_empty()
    }

    /// Advance one frame. On expiry, returns the rows to remove and resets.
    pub fn tick(&mut self) -> Option<ArrayVec<u8, 4>> {
        self.countdown -= 1;
        if self.countdown == 0 {
            return Some(std::mem::take(&mut self.lines));
        }
        None
    }

    pub fn state(&self) -> LineClearDelayState {
        LineClearDelayState {
            lines: self.lines.clone(),
            countdown: self.countdown,
            delay: LINE_CLEAR_DELAY_FRAMES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_das_fires_after_delay_then_every_arr() {
        let mut das = DelayedAutoShiftState::default();
        das.key_pressed(ShiftDirection::Left);

        let mut fired_at = Vec::new();
        for frame in 1..=16 {
            if das.tick().is_some() {
                fired_at.push(frame);
            }
        }
        assert_eq!(fired_at, vec![10, 12, 14, 16]);
    }

    #[test]
    fn test_das_opposite_press_replaces_direction() {
        let mut das = DelayedAutoShiftState::default();
        das.key_pressed(ShiftDirection::Left);
        for _ in 0..5 {
            das.tick();
        }

        das.key_pressed(ShiftDirection::Right);
        // Charge restarted: nothing fires for another DAS_DELAY frames.
        for _ in 1..DAS_DELAY_FRAMES {
            assert_eq!(das.tick(), None);
        }
        assert_eq!(das.tick(), Some(ShiftDirection::Right));
    }

    #[test]
    fn test_das_release_of_stale_direction_is_ignored() {
        let mut das = DelayedAutoShiftState::default();
        das.key_pressed(ShiftDirection::Left);
        das.key_pressed(ShiftDirection::Right);

        // Releasing the replaced key must not cancel the active one.
        das.key_released(ShiftDirection::Left);
        for _ in 1..DAS_DELAY_FRAMES {
            das.tick();
        }
        assert_eq!(das.tick(), Some(ShiftDirection::Right));

        das.key_released(ShiftDirection::Right);
        for _ in 0..20 {
            assert_eq!(das.tick(), None);
        }
    }

    #[test]
    fn test_lock_delay_expires_after_thirty_supported_frames() {
        let mut lock = LockDelayState::default();
        assert!(lock.on_supported());
        assert!(!lock.on_supported());

        for _ in 0..(LOCK_DELAY_FRAMES - 1) {
            assert!(!lock.tick());
        }
        assert!(lock.tick());
    }

    #[test]
    fn test_lock_delay_move_resets_counter() {
        let mut lock = LockDelayState::default();
        lock.on_supported();

        for _ in 0..(LOCK_DELAY_FRAMES - 1) {
            assert!(!lock.tick());
        }
        lock.on_tetromino_moved();
        for _ in 0..(LOCK_DELAY_FRAMES - 1) {
            assert!(!lock.tick());
        }
        assert!(lock.tick());
    }

    #[test]
    fn test_lock_delay_reset_budget_exhausts() {
        let mut lock = LockDelayState::default();
        lock.on_supported();

        for _ in 0..MAX_LOCK_DELAY_RESETS {
            lock.tick();
            lock.on_tetromino_moved();
        }
        // Budget exhausted: the next supported frame locks regardless.
        assert!(lock.tick());
    }

    #[test]
    fn test_entry_delay() {
        let mut entry = EntryDelay::default();
        assert!(!entry.is_active());

        entry.start();
        assert!(entry.is_active());
        for _ in 0..(ENTRY_DELAY_FRAMES - 1) {
            assert!(!entry.tick());
        }
        assert!(entry.tick());
        assert!(!entry.is_active());
    }

    #[test]
    fn test_line_clear_delay_releases_rows_on_expiry() {
        let mut delay = LineClearDelay::default();
        let mut rows = ArrayVec::<u8, 4>::new();
        rows.push(20);
        rows.push(21);
        delay.start(rows);

        assert!(delay.is_active());
        assert_eq!(delay.state().countdown, LINE_CLEAR_DELAY_FRAMES);
        assert_eq!(delay.state().delay, LINE_CLEAR_DELAY_FRAMES);

        for _ in 0..(LINE_CLEAR_DELAY_FRAMES - 1) {
            assert_eq!(delay.tick(), None);
        }
        let released = delay.tick().expect("rows released on expiry");
        assert_eq!(released.as_slice(), &[20, 21]);
        assert!(!delay.is_active());
    }
}
