use std::{error, fmt, io, result};

/// Creates a [`crate::Error::Io`] with a custom message prefixed to the current
/// `errno` value.
macro_rules! errno {
    ($($arg:tt)+) => {{
        let errno = ::std::io::Error::last_os_error();
        let prefix = format!($($arg)+);
        let msg = format!("{prefix}: {errno}");
        $crate::Error::Io(::std::io::Error::new(errno.kind(), msg))
    }};
}
pub(crate) use errno;

/// A convenience wrapper around `Result` for [crate::Error].
pub type Result<T> = result::Result<T, Error>;

/// Represents errors that can occur while running the example programs.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred during socket communication or readiness
    /// polling.
    Io(io::Error),
    /// An error occurred resolving a host name or service name.
    Resolve(ResolveError),
}

impl error::Error for Error {}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Error {
        Error::Io(err)
    }
}

impl From<ResolveError> for Error {
    fn from(err: ResolveError) -> Error {
        Error::Resolve(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::Io(ref e) => fmt::Display::fmt(e, f),
            Error::Resolve(ref e) => fmt::Display::fmt(e, f),
        }
    }
}

/// Represents a failure reported by getaddrinfo(3).
///
/// Resolver failures carry their own `EAI_*` code namespace, separate from
/// `errno`, so they cannot be represented as a plain [`std::io::Error`].
#[derive(Debug)]
pub struct ResolveError {
    code: i32,
    reason: String,
}

impl ResolveError {
    /// Builds a `ResolveError` from a nonzero getaddrinfo(3) return value,
    /// capturing the matching gai_strerror(3) text.
    pub(crate) fn from_code(code: i32) -> Self {
        // SAFETY: `gai_strerror` returns a pointer to a static,
        // null-terminated message for every code value.
        let reason = unsafe {
            let msg = libc::gai_strerror(code);
            if msg.is_null() {
                "unknown resolver error".to_string()
            } else {
                std::ffi::CStr::from_ptr(msg).to_string_lossy().into_owned()
            }
        };

        Self { code, reason }
    }

    /// Returns the raw `EAI_*` code reported by the resolver.
    pub fn code(&self) -> i32 {
        self.code
    }
}

impl error::Error for ResolveError {}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (gai error {})", self.reason, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_error_display_includes_code() {
        let err = ResolveError::from_code(libc::EAI_FAIL);

        let msg = err.to_string();
        assert!(msg.contains(&format!("(gai error {})", libc::EAI_FAIL)));
        assert_eq!(err.code(), libc::EAI_FAIL);
    }

    #[test]
    fn errno_macro_prefixes_message() {
        // Provoke a known errno value (EBADF) so the message is predictable.
        unsafe {
            libc::close(-1);
        }

        let err = errno!("failed to frob {}", "widget");
        match err {
            Error::Io(e) => {
                assert!(e.to_string().starts_with("failed to frob widget: "));
            }
            other => panic!("expected Error::Io, got {other:?}"),
        }
    }
}
