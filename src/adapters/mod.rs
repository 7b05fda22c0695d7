//! Adapter implementations for port traits.
//!
//! - `live`: real HTTP and filesystem access.
//! - `recording`: wraps another adapter and writes a cassette.
//! - `replaying`: serves a previously recorded cassette.

pub mod live;
pub mod recording;
pub mod replaying;
