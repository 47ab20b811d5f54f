//! Background Tasks Module
//!
//! # Tasks
//! - Stats monitor: reports cache entry counts at a fixed interval

mod monitor;

pub use monitor::spawn_stats_monitor;
