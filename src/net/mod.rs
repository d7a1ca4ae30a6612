//! Minimal networking primitives for the example programs.
//!
//! This module provides the readiness-polled duplex loop used by the TCP
//! client, along with name resolution, adapter enumeration, and the raw
//! address plumbing they share.

pub mod adapters;
pub mod duplex;
pub mod poll;
pub mod resolve;
pub mod stdio;

mod sockaddr;

pub use adapters::Adapter;
pub use duplex::{Termination, duplex_loop};
pub use poll::PollSet;
pub use stdio::RawStdin;
