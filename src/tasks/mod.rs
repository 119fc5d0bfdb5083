//! Background Tasks Module
//!
//! Contains background tasks that run periodically during service operation.
//!
//! # Tasks
//! - TTL sweep: purges expired cache entries at a configured interval

mod sweep;

pub use sweep::spawn_sweep_task;
