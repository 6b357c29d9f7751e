//! Background Tasks Module
//!
//! Contains background tasks that run periodically during service operation.
//!
//! # Tasks
//! - Expiry sweep: removes expired charts at configured intervals

mod cleanup;

pub use cleanup::spawn_cleanup_task;
