//! Enumeration of local network adapters through getifaddrs(3).

use std::ffi::CStr;
use std::fmt;
use std::net::IpAddr;
use std::ptr;

use super::sockaddr;
use crate::{Result, errno};

/// One address bound to a local network adapter.
///
/// An adapter is reported once per address, so a single interface name may
/// repeat across entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adapter {
    /// Interface name, e.g. `eth0` or `lo`.
    pub name: String,
    /// The bound address.
    pub addr: IpAddr,
}

impl fmt::Display for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let family = match self.addr {
            IpAddr::V4(_) => "IPv4",
            IpAddr::V6(_) => "IPv6",
        };

        write!(f, "{}\t{}\t{}", self.name, family, self.addr)
    }
}

/// Returns every IPv4 and IPv6 address bound to a local network adapter.
///
/// Entries without an address, and entries of other address families (packet
/// sockets and the like), are skipped.
///
/// # Errors
///
/// Returns an error if getifaddrs(3) fails.
pub fn adapter_addrs() -> Result<Vec<Adapter>> {
    let mut list: *mut libc::ifaddrs = ptr::null_mut();

    // SAFETY: `list` receives the head of a freshly allocated interface
    // list on success.
    if unsafe { libc::getifaddrs(&raw mut list) } == -1 {
        return Err(errno!("failed to enumerate network adapters"));
    }

    let mut adapters = Vec::new();

    let mut cur = list;
    while !cur.is_null() {
        // SAFETY: `cur` points into the list returned by getifaddrs(3).
        let entry = unsafe { &*cur };

        // An interface can be reported with no address at all.
        if !entry.ifa_addr.is_null() {
            // SAFETY: A non-null `ifa_addr` points at a valid socket
            // address.
            if let Some(addr) = unsafe { sockaddr::to_socket_addr(entry.ifa_addr) } {
                // SAFETY: `ifa_name` is a live null-terminated string.
                let name = unsafe { CStr::from_ptr(entry.ifa_name) }
                    .to_string_lossy()
                    .into_owned();

                adapters.push(Adapter {
                    name,
                    addr: addr.ip(),
                });
            }
        }

        cur = entry.ifa_next;
    }

    // SAFETY: `list` came from a successful getifaddrs(3) call and is
    // released exactly once.
    unsafe { libc::freeifaddrs(list) };

    Ok(adapters)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn enumerates_at_least_the_loopback_adapter() {
        let adapters = adapter_addrs().unwrap();

        assert!(!adapters.is_empty());
        assert!(adapters.iter().all(|adapter| !adapter.name.is_empty()));
        assert!(adapters.iter().any(|adapter| adapter.addr.is_loopback()));
    }

    #[test]
    fn display_is_tab_separated() {
        let v4 = Adapter {
            name: "lo".to_string(),
            addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
        };
        let v6 = Adapter {
            name: "eth0".to_string(),
            addr: IpAddr::V6(Ipv6Addr::LOCALHOST),
        };

        assert_eq!(v4.to_string(), "lo\tIPv4\t127.0.0.1");
        assert_eq!(v6.to_string(), "eth0\tIPv6\t::1");
    }
}
