//! Replay module - the persisted input event stream.
//!
//! An event stream plus a seed reproduces a whole game, so replays are just
//! the packed event list. Each event is 10 bytes, little-endian:
//! `{ u8 key, u8 type, u64 frame }`.

use anyhow::{bail, Result};

use crate::core::input::{Event, EventType, Key};
use crate::core::tetrion::Tetrion;

/// Bytes per encoded event.
pub const ENCODED_EVENT_SIZE: usize = 10;

/// Append one event to `out` in the packed wire format.
pub fn encode_event_into(event: Event, out: &mut Vec<u8>) {
    out.push(event.key.to_u8());
    out.push(event.event_type.to_u8());
    out.extend_from_slice(&event.frame.to_le_bytes());
}

/// Encode an event stream.
pub fn encode_events(events: &[Event]) -> Vec<u8> {
    let mut out = Vec::with_capacity(events.len() * ENCODED_EVENT_SIZE);
    for &event in events {
        encode_event_into(event, &mut out);
    }
    out
}

/// Decode a packed event stream.
pub fn decode_events(bytes: &[u8]) -> Result<Vec<Event>> {
    if bytes.len() % ENCODED_EVENT_SIZE != 0 {
        bail!(
            "truncated event stream: {} bytes is not a multiple of {}",
            bytes.len(),
            ENCODED_EVENT_SIZE
        );
    }

    let mut events = Vec::with_capacity(bytes.len() / ENCODED_EVENT_SIZE);
    for (index, chunk) in bytes.chunks_exact(ENCODED_EVENT_SIZE).enumerate() {
        let Some(key) = Key::from_u8(chunk[0]) else {
            bail!("event {index}: unknown key tag {}", chunk[0]);
        };
        let Some(event_type) = EventType::from_u8(chunk[1]) else {
            bail!("event {index}: unknown event type tag {}", chunk[1]);
        };
        let mut frame_bytes = [0u8; 8];
        frame_bytes.copy_from_slice(&chunk[2..]);
        events.push(Event {
            key,
            event_type,
            frame: u64::from_le_bytes(frame_bytes),
        });
    }
    Ok(events)
}

/// Rebuild a game from its seed and packed event stream, simulated up to
/// `target_frame`.
pub fn replay_tetrion(
    seed: u64,
    start_frame: u64,
    bytes: &[u8],
    target_frame: u64,
) -> Result<Tetrion> {
    let mut tetrion = Tetrion::new(seed, start_frame, "replay");
    for event in decode_events(bytes)? {
        tetrion.enqueue_event(event);
    }
    tetrion.simulate_up_until(target_frame);
    Ok(tetrion)
}
