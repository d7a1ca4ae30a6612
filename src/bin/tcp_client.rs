//! An interactive TCP client multiplexing the connection with standard
//! input.
//!
//! Connect to any line-oriented TCP service:
//!
//!     cargo r --bin tcp_client -- example.com 80
//!
//! Lines typed on standard input are sent to the peer; bytes received from
//! the peer are echoed to standard output. The session ends when the peer
//! closes the connection or standard input reaches end-of-file (ctrl-d).

use std::env;
use std::io;
use std::net::TcpStream;
use std::process;

use netlab::net::{RawStdin, Termination, duplex_loop, resolve};
use netlab::{error, info};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("usage: tcp_client hostname port");
        process::exit(1);
    }

    let (host, service) = (&args[1], &args[2]);

    info!("configuring remote address...");

    let addrs = resolve::resolve_stream(host, service).unwrap_or_else(|err| {
        error!("failed to resolve '{host}:{service}': {err}");
        process::exit(1);
    });

    let remote = addrs[0];
    info!("remote address is: {remote}");

    info!("connecting...");

    let mut stream = TcpStream::connect(remote).unwrap_or_else(|err| {
        error!("failed to connect to {remote}: {err}");
        process::exit(1);
    });

    info!("connected; to send data, enter text followed by enter");

    let termination = duplex_loop(&mut stream, &mut RawStdin, &mut io::stdout())
        .unwrap_or_else(|err| {
            error!("session failed: {err}");
            process::exit(1);
        });

    match termination {
        Termination::PeerClosed => info!("connection closed by peer"),
        Termination::LocalEof => info!("end of input"),
    }

    info!("closing socket...");
    drop(stream);

    info!("finished");
}
