//! Readiness polling over a small set of file descriptors.
//!
//! Wraps poll(2), the portable POSIX readiness primitive, behind a set type
//! that is rebuilt on every loop iteration. Instead of dedicating a blocking
//! read to each descriptor, callers block once on the whole set, bounded by a
//! timeout, and then act only on the descriptors reported ready.

use std::io;
use std::os::unix::io::RawFd;
use std::time::Duration;

use crate::{Error, Result, errno};

/// Readable-state event mask.
///
/// `POLLHUP` and `POLLERR` are included so a peer hangup or a pending socket
/// error wakes the caller: the read that follows observes the zero-length
/// close or the error itself.
const READABLE: libc::c_short = libc::POLLIN | libc::POLLHUP | libc::POLLERR;

/// An ephemeral set of file descriptors watched for readability.
///
/// The set is meant to be constructed fresh for each readiness wait, the way
/// select(2)-style loops rebuild their descriptor sets every cycle; it holds
/// no state worth keeping between iterations.
#[derive(Debug)]
pub struct PollSet {
    fds: Vec<libc::pollfd>,
}

impl PollSet {
    /// Creates an empty poll set.
    pub fn new() -> Self {
        Self { fds: Vec::new() }
    }

    /// Registers a file descriptor to be watched for readability.
    pub fn insert(&mut self, fd: RawFd) {
        self.fds.push(libc::pollfd {
            fd,
            events: libc::POLLIN,
            revents: 0,
        });
    }

    /// Blocks until at least one registered descriptor is ready or the
    /// timeout expires, returning the number of ready descriptors.
    ///
    /// A return value of 0 means the timeout elapsed with no descriptor
    /// ready. The timeout is rounded down to whole milliseconds and saturates
    /// at `i32::MAX` ms.
    ///
    /// # Errors
    ///
    /// Returns an error if poll(2) itself fails (including interruption by a
    /// signal), or if any registered descriptor is reported invalid
    /// (`POLLNVAL`). Neither case is retried.
    pub fn wait(&mut self, timeout: Duration) -> Result<usize> {
        let timeout_ms = i32::try_from(timeout.as_millis()).unwrap_or(i32::MAX);

        let ready = unsafe {
            libc::poll(
                self.fds.as_mut_ptr(),
                self.fds.len() as libc::nfds_t,
                timeout_ms,
            )
        };

        if ready == -1 {
            return Err(errno!("failed to poll for readiness"));
        }

        for pfd in &self.fds {
            if pfd.revents & libc::POLLNVAL != 0 {
                return Err(Error::Io(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("invalid descriptor ({}) in poll set", pfd.fd),
                )));
            }
        }

        Ok(ready as usize)
    }

    /// Returns whether the given descriptor was reported readable by the
    /// last [PollSet::wait] call.
    ///
    /// Descriptors in a hangup or error state count as readable: the
    /// subsequent read is what observes the closure or the error.
    pub fn is_readable(&self, fd: RawFd) -> bool {
        self.fds
            .iter()
            .any(|pfd| pfd.fd == fd && pfd.revents & READABLE != 0)
    }
}

impl Default for PollSet {
    fn default() -> Self {
        Self::new()
    }
}
