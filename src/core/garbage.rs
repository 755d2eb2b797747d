//! Garbage module - attack events exchanged between tetrions.

use serde::{Deserialize, Serialize};

use crate::types::GARBAGE_LINES_SENT;

/// An attack produced by one tetrion and routed to an opponent by the
/// session layer. The receiver enqueues it and materializes the rows
/// [`crate::types::GARBAGE_DELAY_FRAMES`] frames after `send_frame`; the
/// hole column is drawn from the receiver's own garbage RNG at that point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GarbageSendEvent {
    pub num_lines: u32,
    pub send_frame: u64,
}

/// Garbage lines produced by clearing `num_lines` rows at once, if any.
pub fn garbage_event_for_clear(num_lines: usize, send_frame: u64) -> Option<GarbageSendEvent> {
    let lines_sent = GARBAGE_LINES_SENT[num_lines.min(GARBAGE_LINES_SENT.len() - 1)];
    (lines_sent > 0).then_some(GarbageSendEvent {
        num_lines: lines_sent,
        send_frame,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_table() {
        assert_eq!(garbage_event_for_clear(0, 5), None);
        assert_eq!(garbage_event_for_clear(1, 5), None);
        assert_eq!(
            garbage_event_for_clear(2, 5),
            Some(GarbageSendEvent {
                num_lines: 1,
                send_frame: 5
            })
        );
        assert_eq!(
            garbage_event_for_clear(3, 5),
            Some(GarbageSendEvent {
                num_lines: 2,
                send_frame: 5
            })
        );
        assert_eq!(
            garbage_event_for_clear(4, 9),
            Some(GarbageSendEvent {
                num_lines: 4,
                send_frame: 9
            })
        );
    }
}
