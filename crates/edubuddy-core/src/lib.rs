//! edubuddy-core — Pure types, personas, and conversation shaping.
//!
//! No async runtime, no I/O, no HTTP dependencies.

pub mod audio;
pub mod conversation;
pub mod persona;
pub mod types;
