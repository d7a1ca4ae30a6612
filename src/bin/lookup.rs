//! Resolves a host name into every address known for it.
//!
//! Pass a host name or a literal address:
//!
//!     cargo r --bin lookup -- example.com
//!
//! Each resolved address is printed on its own line.

use std::env;
use std::process;

use netlab::net::resolve;
use netlab::{error, info};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage:\n\tlookup hostname");
        println!("Example:\n\tlookup example.com");
        return;
    }

    let host = &args[1];

    info!("resolving hostname '{host}'");

    let addrs = resolve::lookup_host(host).unwrap_or_else(|err| {
        error!("failed to resolve hostname '{host}': {err}");
        process::exit(1);
    });

    for addr in addrs {
        println!("\t{addr}");
    }
}
