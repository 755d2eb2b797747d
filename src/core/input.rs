//! Input module - keys, per-frame key state, and the input event queue.
//!
//! Inputs arrive as (key, type, frame) triples. The tetrion reconstructs a
//! [`KeyState`] snapshot per frame by folding the events for that frame onto
//! the previous state, so the queue is O(events), not O(frames).

use serde::{Deserialize, Serialize};

/// The seven gameplay keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Left,
    Right,
    /// Soft drop.
    Down,
    /// Hard drop.
    Drop,
    RotateClockwise,
    RotateCounterClockwise,
    Hold,
}

/// All keys, in wire-tag order.
pub const ALL_KEYS: [Key; 7] = [
    Key::Left,
    Key::Right,
    Key::Down,
    Key::Drop,
    Key::RotateClockwise,
    Key::RotateCounterClockwise,
    Key::Hold,
];

impl Key {
    /// Wire tag used by the packed replay format.
    pub fn to_u8(self) -> u8 {
        match self {
            Key::Left => 0,
            Key::Right => 1,
            Key::Down => 2,
            Key::Drop => 3,
            Key::RotateClockwise => 4,
            Key::RotateCounterClockwise => 5,
            Key::Hold => 6,
        }
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        ALL_KEYS.get(value as usize).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Pressed,
    Released,
}

impl EventType {
    pub fn to_u8(self) -> u8 {
        match self {
            EventType::Pressed => 0,
            EventType::Released => 1,
        }
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(EventType::Pressed),
            1 => Some(EventType::Released),
            _ => None,
        }
    }
}

/// A single key transition, effective at the given frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub key: Key,
    pub event_type: EventType,
    pub frame: u64,
}

/// Snapshot of all key levels during one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub down: bool,
    pub drop: bool,
    pub rotate_clockwise: bool,
    pub rotate_counter_clockwise: bool,
    pub hold: bool,
}

impl KeyState {
    pub fn is_pressed(&self, key: Key) -> bool {
        match key {
            Key::Left => self.left,
            Key::Right => self.right,
            Key::Down => self.down,
            Key::Drop => self.drop,
            Key::RotateClockwise => self.rotate_clockwise,
            Key::RotateCounterClockwise => self.rotate_counter_clockwise,
            Key::Hold => self.hold,
        }
    }

    pub fn set(&mut self, key: Key, pressed: bool) {
        match key {
            Key::Left => self.left = pressed,
            Key::Right => self.right = pressed,
            Key::Down => self.down = pressed,
            Key::Drop => self.drop = pressed,
            Key::RotateClockwise => self.rotate_clockwise = pressed,
            Key::RotateCounterClockwise => self.rotate_counter_clockwise = pressed,
            Key::Hold => self.hold = pressed,
        }
    }

    /// Fold an event onto this state.
    pub fn apply(&mut self, event: Event) {
        self.set(event.key, event.event_type == EventType::Pressed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_wire_tags_round_trip() {
        for key in ALL_KEYS {
            assert_eq!(Key::from_u8(key.to_u8()), Some(key));
        }
        assert_eq!(Key::from_u8(7), None);
    }

    #[test]
    fn test_key_state_apply() {
        let mut state = KeyState::default();
        assert!(!state.is_pressed(Key::Left));

        state.apply(Event {
            key: Key::Left,
            event_type: EventType::Pressed,
            frame: 0,
        });
        assert!(state.is_pressed(Key::Left));

        state.apply(Event {
            key: Key::Left,
            event_type: EventType::Released,
            frame: 1,
        });
        assert!(!state.is_pressed(Key::Left));
    }
}
