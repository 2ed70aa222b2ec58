//! On-train journey progress.
//!
//! A command-line tool that answers: "I'm on this train, how far is it to
//! my stop?" It reads the trip and status snapshots the on-board portal
//! serves over WiFi and derives next stop, progress, countdowns and
//! remaining distance to the rider's destination.

pub mod cli;
pub mod domain;
pub mod portal;
pub mod progress;
pub mod render;
