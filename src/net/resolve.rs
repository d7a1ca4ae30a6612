//! Name and service resolution through getaddrinfo(3).
//!
//! The std resolver cannot express everything these programs need: service
//! names alongside numeric ports, wildcard addresses for passive sockets,
//! and lookups across both address families at once. Wrapping the C resolver
//! directly keeps all of that available behind a few focused functions.

use std::ffi::CString;
use std::io;
use std::mem;
use std::net::{IpAddr, SocketAddr};
use std::ptr;

use super::sockaddr;
use crate::{Error, ResolveError, Result, errno};

/// Resolves a host name or numeric address string into every address known
/// for it, across both address families.
///
/// The socket type is left unconstrained, so the resolver reports one entry
/// per supported socket type for each address; repeated addresses are
/// collapsed before returning. The result order is the resolver's
/// preference order.
///
/// # Errors
///
/// Returns [Error::Resolve] when the resolver rejects the lookup, or
/// [Error::Io] when the failure is a system-level one reported through
/// `errno`.
pub fn lookup_host(host: &str) -> Result<Vec<IpAddr>> {
    // Request every address family and leave the socket type unconstrained.
    // SAFETY: An all-zero `addrinfo` is the documented empty hints value.
    let mut hints: libc::addrinfo = unsafe { mem::zeroed() };
    hints.ai_flags = libc::AI_ALL;
    hints.ai_family = libc::AF_UNSPEC;

    let addrs = getaddrinfo(Some(host), None, &hints)?;

    let mut ips: Vec<IpAddr> = addrs.into_iter().map(|addr| addr.ip()).collect();
    ips.dedup();

    Ok(ips)
}

/// Resolves a host name and service name into connectable stream socket
/// addresses, in resolver preference order.
///
/// Both arguments accept numeric forms: a literal IP address for `host` and
/// a port number for `service`.
///
/// # Errors
///
/// Returns an error if resolution fails or produces no usable address; on
/// success the returned list is never empty.
pub fn resolve_stream(host: &str, service: &str) -> Result<Vec<SocketAddr>> {
    // SAFETY: An all-zero `addrinfo` is the documented empty hints value.
    let mut hints: libc::addrinfo = unsafe { mem::zeroed() };
    hints.ai_family = libc::AF_UNSPEC;
    hints.ai_socktype = libc::SOCK_STREAM;

    let addrs = getaddrinfo(Some(host), Some(service), &hints)?;
    if addrs.is_empty() {
        return Err(Error::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("no usable address for '{host}:{service}'"),
        )));
    }

    Ok(addrs)
}

/// Resolves the local IPv4 wildcard address for binding a stream listener on
/// `service`.
///
/// # Errors
///
/// Returns an error if resolution fails or produces no usable address.
pub fn resolve_passive(service: &str) -> Result<SocketAddr> {
    // SAFETY: An all-zero `addrinfo` is the documented empty hints value.
    let mut hints: libc::addrinfo = unsafe { mem::zeroed() };
    hints.ai_flags = libc::AI_PASSIVE;
    hints.ai_family = libc::AF_INET;
    hints.ai_socktype = libc::SOCK_STREAM;

    let addrs = getaddrinfo(None, Some(service), &hints)?;

    addrs.into_iter().next().ok_or_else(|| {
        Error::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("no usable wildcard address for service '{service}'"),
        ))
    })
}

/// Calls getaddrinfo(3) and converts the returned list into socket
/// addresses, skipping entries of families other than `AF_INET` and
/// `AF_INET6`.
fn getaddrinfo(
    node: Option<&str>,
    service: Option<&str>,
    hints: &libc::addrinfo,
) -> Result<Vec<SocketAddr>> {
    let node = match node {
        Some(s) => Some(CString::new(s).map_err(io::Error::from)?),
        None => None,
    };
    let service = match service {
        Some(s) => Some(CString::new(s).map_err(io::Error::from)?),
        None => None,
    };

    let node_ptr = node.as_ref().map_or(ptr::null(), |s| s.as_ptr());
    let service_ptr = service.as_ref().map_or(ptr::null(), |s| s.as_ptr());

    let mut list: *mut libc::addrinfo = ptr::null_mut();

    // SAFETY: `node_ptr` and `service_ptr` are null or point to live
    // null-terminated strings, `hints` is a valid addrinfo, and `list`
    // receives the result head on success.
    let code = unsafe { libc::getaddrinfo(node_ptr, service_ptr, hints, &raw mut list) };

    if code != 0 {
        // EAI_SYSTEM redirects to errno; every other code belongs to the
        // resolver's own namespace.
        if code == libc::EAI_SYSTEM {
            return Err(errno!("failed to resolve address information"));
        }

        return Err(ResolveError::from_code(code).into());
    }

    let mut addrs = Vec::new();

    let mut cur = list;
    while !cur.is_null() {
        // SAFETY: `cur` points into the list returned by getaddrinfo(3).
        let entry = unsafe { &*cur };

        if !entry.ai_addr.is_null() {
            // SAFETY: `ai_addr` points to a socket address whose family
            // field matches its layout.
            if let Some(addr) = unsafe { sockaddr::to_socket_addr(entry.ai_addr) } {
                addrs.push(addr);
            }
        }

        cur = entry.ai_next;
    }

    // SAFETY: `list` came from a successful getaddrinfo(3) call and is
    // released exactly once.
    unsafe { libc::freeaddrinfo(list) };

    Ok(addrs)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::net::{Ipv4Addr, Ipv6Addr};

    #[test]
    fn resolves_numeric_ipv4_host_to_single_address() {
        // The unconstrained socket type yields one raw entry per socket
        // type; collapsing must leave exactly one address.
        let addrs = lookup_host("127.0.0.1").unwrap();

        assert_eq!(addrs, vec![IpAddr::V4(Ipv4Addr::LOCALHOST)]);
    }

    #[test]
    fn resolves_numeric_ipv6_host() {
        let addrs = lookup_host("::1").unwrap();

        assert_eq!(addrs, vec![IpAddr::V6(Ipv6Addr::LOCALHOST)]);
    }

    #[test]
    fn rejects_host_name_with_interior_nul() {
        let err = lookup_host("bad\0host").unwrap_err();

        match err {
            Error::Io(e) => assert_eq!(e.kind(), io::ErrorKind::InvalidInput),
            other => panic!("expected Error::Io, got {other:?}"),
        }
    }

    #[test]
    fn resolves_numeric_stream_endpoint() {
        let addrs = resolve_stream("127.0.0.1", "8080").unwrap();

        assert_eq!(addrs, vec!["127.0.0.1:8080".parse().unwrap()]);
    }

    #[test]
    fn passive_endpoint_is_ipv4_wildcard() {
        let addr = resolve_passive("8080").unwrap();

        assert_eq!(addr, "0.0.0.0:8080".parse().unwrap());
    }
}
