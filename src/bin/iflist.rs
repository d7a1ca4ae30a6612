//! Lists the addresses bound to each local network adapter.
//!
//!     cargo r --bin iflist
//!
//! Prints one line per address: adapter name, address family, and the
//! address itself, tab separated. An adapter with several addresses appears
//! once per address.

use std::process;

use netlab::error;
use netlab::net::adapters;

fn main() {
    let adapters = adapters::adapter_addrs().unwrap_or_else(|err| {
        error!("failed to enumerate network adapters: {err}");
        process::exit(1);
    });

    for adapter in adapters {
        println!("{adapter}");
    }
}
