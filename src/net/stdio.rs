//! Unbuffered standard input for readiness-driven loops.

use std::io::{self, Read};
use std::os::unix::io::{AsRawFd, RawFd};

/// Standard input read directly through its file descriptor.
///
/// [std::io::Stdin] keeps an internal buffer, which would let bytes sit
/// invisible to a readiness poll on descriptor 0. Reading raw keeps polled
/// readiness and consumed bytes in lockstep: nothing is held back between
/// reads. On an interactive terminal the line discipline still delivers
/// input a line at a time.
///
/// The descriptor is borrowed, never closed.
#[derive(Debug)]
pub struct RawStdin;

impl Read for RawStdin {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        // SAFETY: `buf` is a live, writable region of `buf.len()` bytes.
        let nbytes = unsafe {
            libc::read(
                libc::STDIN_FILENO,
                buf.as_mut_ptr() as *mut libc::c_void,
                buf.len(),
            )
        };

        if nbytes == -1 {
            return Err(io::Error::last_os_error());
        }

        Ok(nbytes as usize)
    }
}

impl AsRawFd for RawStdin {
    fn as_raw_fd(&self) -> RawFd {
        libc::STDIN_FILENO
    }
}
