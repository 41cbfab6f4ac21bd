//! Platform abstraction layer
//!
//! Handles host-facing plumbing that sits around the simulation:
//! - Time: turning frame timestamps into elapsed seconds
//! - Input: pointer press/move/release mapped to spawns and explosions
//! - Repeat: the cancellable hold-to-repeat spawn schedule

pub mod input;
pub mod repeat;
pub mod time;

pub use input::{PointerAction, PointerController, SpawnSampler};
pub use repeat::{RepeatHandle, RepeatTimer};
pub use time::FrameTimer;
