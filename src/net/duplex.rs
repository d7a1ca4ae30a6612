//! Duplex I/O loop multiplexing one network channel and one local input
//! source.
//!
//! The loop owns neither thread nor timer: each cycle it rebuilds a
//! readiness set over the two descriptors, blocks on it for at most
//! [POLL_TIMEOUT], and services whichever side has data. Received channel
//! bytes are forwarded to an output sink; local input is written to the
//! channel. The loop ends when the peer closes the channel or the input
//! source is exhausted.

use std::io::{self, Read, Write};
use std::os::unix::io::AsRawFd;
use std::time::Duration;

use super::poll::PollSet;
use crate::Result;
use crate::info;

/// Capacity of the transfer buffer staging one read per cycle.
///
/// Bytes never accumulate across cycles: everything a read produces is
/// forwarded before the next readiness wait.
pub const TRANSFER_BUF_SIZE: usize = 4096;

/// Upper bound on a single readiness wait.
///
/// Bounds the worst-case latency for noticing a newly ready source without
/// busy-polling.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Why the duplex loop ended.
///
/// The two outcomes are mutually exclusive per run; whichever condition the
/// loop observes first wins, and the channel is always checked first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The peer closed the channel, either orderly (a zero-length read) or
    /// abruptly (a connection reset).
    PeerClosed,
    /// The local input source reached end-of-input.
    LocalEof,
}

/// Runs the duplex loop until one side terminates the session.
///
/// Each iteration performs at most one bounded read per ready source, the
/// channel always serviced before local input. Channel bytes are forwarded
/// to `output` verbatim (binary-safe, exact length). Input bytes are written
/// to the channel in full, trailing newline included; on an interactive
/// terminal the line discipline delivers input one line at a time. A short
/// channel write is retried until the whole chunk is sent.
///
/// Returns which side ended the session: [Termination::PeerClosed] when the
/// peer ends it, orderly shutdown and abrupt reset alike, or
/// [Termination::LocalEof] for end of input.
///
/// # Notes
///
/// The channel is only borrowed; closing it afterwards is the caller's
/// responsibility, on success and failure alike.
///
/// # Errors
///
/// Returns an error if the readiness poll fails or if a read or write on any
/// of the three streams fails. Peer closure, orderly or abrupt, is not an
/// error.
pub fn duplex_loop<C, I, O>(channel: &mut C, input: &mut I, output: &mut O) -> Result<Termination>
where
    C: Read + Write + AsRawFd,
    I: Read + AsRawFd,
    O: Write,
{
    let mut buf = [0u8; TRANSFER_BUF_SIZE];

    loop {
        // Rebuilt every cycle; readiness reported by an earlier wait is
        // stale the moment a read runs.
        let mut readiness = PollSet::new();
        readiness.insert(channel.as_raw_fd());
        readiness.insert(input.as_raw_fd());

        if readiness.wait(POLL_TIMEOUT)? == 0 {
            // Timeout expired with neither source ready.
            continue;
        }

        if readiness.is_readable(channel.as_raw_fd()) {
            // Orderly shutdown reads as zero bytes; a reset surfaces as an
            // error. Both are the peer ending the session.
            let nbytes = match channel.read(&mut buf) {
                Ok(0) => return Ok(Termination::PeerClosed),
                Ok(nbytes) => nbytes,
                Err(e) if is_abrupt_close(e.kind()) => return Ok(Termination::PeerClosed),
                Err(e) => return Err(e.into()),
            };

            info!("received {nbytes} bytes");

            output.write_all(&buf[..nbytes])?;
            output.flush()?;
        }

        if readiness.is_readable(input.as_raw_fd()) {
            let nbytes = input.read(&mut buf)?;
            if nbytes == 0 {
                return Ok(Termination::LocalEof);
            }

            channel.write_all(&buf[..nbytes])?;

            info!("sent {nbytes} bytes");
        }
    }
}

/// Read failures that report the peer tearing the connection down rather
/// than a fault in the loop itself.
fn is_abrupt_close(kind: io::ErrorKind) -> bool {
    matches!(kind, io::ErrorKind::ConnectionReset | io::ErrorKind::ConnectionAborted)
}
