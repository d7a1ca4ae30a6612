//! Conversion from raw socket address storage to std socket addresses.

use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr, SocketAddrV4, SocketAddrV6};

/// Converts a generic socket address into a [SocketAddr], returning [None]
/// for address families other than `AF_INET` and `AF_INET6`.
///
/// # Safety
///
/// `sa` must point to a valid, fully initialized socket address structure
/// whose `sa_family` field matches its actual layout.
pub(crate) unsafe fn to_socket_addr(sa: *const libc::sockaddr) -> Option<SocketAddr> {
    // SAFETY: Caller guarantees `sa` points to a valid socket address.
    match unsafe { (*sa).sa_family } as libc::c_int {
        libc::AF_INET => {
            // SAFETY: `sa_family` identifies the storage as `sockaddr_in`.
            let sin = unsafe { &*(sa as *const libc::sockaddr_in) };

            let ip = Ipv4Addr::from(u32::from_be(sin.sin_addr.s_addr));
            let port = u16::from_be(sin.sin_port);

            Some(SocketAddr::V4(SocketAddrV4::new(ip, port)))
        }
        libc::AF_INET6 => {
            // SAFETY: `sa_family` identifies the storage as `sockaddr_in6`.
            let sin6 = unsafe { &*(sa as *const libc::sockaddr_in6) };

            let ip = Ipv6Addr::from(sin6.sin6_addr.s6_addr);
            let port = u16::from_be(sin6.sin6_port);

            Some(SocketAddr::V6(SocketAddrV6::new(
                ip,
                port,
                sin6.sin6_flowinfo,
                sin6.sin6_scope_id,
            )))
        }
        _ => None,
    }
}
