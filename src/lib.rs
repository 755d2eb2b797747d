//! Deterministic simulation core of a falling-block puzzle game, built for
//! competitive multiplayer.
//!
//! Given a seed, a start frame and a time-ordered stream of input events, a
//! [`core::Tetrion`] advances one fixed-rate frame at a time and produces
//! identical output on every machine that replays the same inputs. Networked
//! sessions replay each peer's inputs locally; garbage produced by one
//! tetrion is routed to its opponent by the session layer via
//! [`core::Tetrion::receive_garbage`].
//!
//! Rendering, audio, input capture and network transport are deliberately
//! absent; collaborators drive the simulation through
//! [`core::Tetrion::simulate_up_until`] and observe it through the read
//! accessors, action callbacks, and [`core::TetrionSnapshot`]s.

pub mod core;
pub mod replay;
pub mod types;
