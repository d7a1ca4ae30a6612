//! Small socket programming example programs, built for learning purposes.
//!
//! Each binary in `src/bin` walks through one standard networking call
//! sequence: resolving a host name, listing local adapter addresses, running
//! an interactive TCP client, or serving a single HTTP request. The library
//! holds the shared plumbing, most notably the readiness-polled duplex loop
//! used by the client.
//!
//! Not suitable for production use.

#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

#[cfg(not(unix))]
compile_error!(
    "This crate is only compatible with Unix-like systems that provide the poll(2), getaddrinfo(3), and getifaddrs(3) interfaces."
);

pub mod error;
pub mod log;
pub mod net;

pub use error::{Error, ResolveError, Result};

pub(crate) use error::errno;
