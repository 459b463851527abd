//! Background Tasks Module
//!
//! Contains background tasks that run periodically during service operation.
//!
//! # Tasks
//! - TTL sweep: removes expired responses at a fixed interval

mod cleanup;

pub use cleanup::spawn_cleanup_task;
