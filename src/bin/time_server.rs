//! Serves the local time over HTTP to a single client, then exits.
//!
//!     cargo r --bin time_server
//!
//! Visit <http://127.0.0.1:8080/> while it is waiting; the server answers
//! one request with a plain-text timestamp and shuts down.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use netlab::net::resolve;
use netlab::{Result, error, info};

/// Fixed response head; the current time is appended as the body.
const RESPONSE_HEAD: &str =
    "HTTP/1.1 200 OK\r\nConnection: close\r\nContent-Type: text/plain\r\n\r\nLocal time is: ";

/// Service the listener binds to.
const SERVICE: &str = "8080";

/// Size of the request buffer. The request itself is discarded; one read
/// simply drains enough of it before answering.
const REQUEST_BUF_SIZE: usize = 1024;

/// Weekday names as ctime(3) prints them, indexed by `tm_wday`.
const WDAY: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Month names as ctime(3) prints them, indexed by `tm_mon`.
const MON: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn main() {
    run().unwrap_or_else(|err| {
        error!("{err}");
        process::exit(1);
    });
}

fn run() -> Result<()> {
    info!("configuring local address...");
    let local = resolve::resolve_passive(SERVICE)?;

    info!("creating socket...");
    let listener = TcpListener::bind(local)?;
    info!("listening...");

    serve_one(&listener)?;

    info!("closing listening socket...");
    drop(listener);

    info!("finished");

    Ok(())
}

/// Accepts one client, drains a single request read, and answers with the
/// fixed response head followed by the current time.
fn serve_one(listener: &TcpListener) -> Result<()> {
    info!("waiting for connection...");
    let (mut client, peer) = listener.accept()?;
    info!("client is connected: {peer}");

    info!("reading request...");
    let mut request = [0u8; REQUEST_BUF_SIZE];
    let nbytes = client.read(&mut request)?;
    info!("received {nbytes} bytes");

    info!("sending response...");
    // One write attempt per part; the log line reports how much of each
    // actually went out.
    let sent = client.write(RESPONSE_HEAD.as_bytes())?;
    info!("sent {sent} of {} bytes", RESPONSE_HEAD.len());

    let time_msg = local_time();
    let sent = client.write(time_msg.as_bytes())?;
    info!("sent {sent} of {} bytes", time_msg.len());

    info!("closing connection...");
    drop(client);

    Ok(())
}

/// Formats the current local time the way ctime(3) does, trailing newline
/// included.
fn local_time() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    let time = now as libc::time_t;
    // SAFETY: `time` is a valid time value, and the returned pointer (to
    // static storage) is checked before use.
    let tm = unsafe { libc::localtime(&raw const time) };

    if tm.is_null() {
        return "unknown\n".to_string();
    }

    // SAFETY: `tm` was just checked to be non-null.
    let tm = unsafe { *tm };

    let wday = WDAY.get(tm.tm_wday as usize).copied().unwrap_or("???");
    let mon = MON.get(tm.tm_mon as usize).copied().unwrap_or("???");

    format!(
        "{wday} {mon} {:2} {:02}:{:02}:{:02} {}\n",
        tm.tm_mday,
        tm.tm_hour,
        tm.tm_min,
        tm.tm_sec,
        tm.tm_year + 1900,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::net::TcpStream;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn local_time_matches_ctime_shape() {
        let msg = local_time();

        // "Thu Nov 24 18:22:48 1986\n" is 25 bytes.
        assert_eq!(msg.len(), 25);
        assert!(msg.ends_with('\n'));
        assert!(WDAY.iter().any(|day| msg.starts_with(day)));
    }

    #[test]
    fn answers_one_request_with_the_time() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let client = thread::spawn(move || {
            let mut stream = TcpStream::connect(addr).unwrap();
            stream.set_read_timeout(Some(Duration::from_secs(5))).unwrap();
            stream.write_all(b"GET / HTTP/1.1\r\n\r\n").unwrap();

            let mut response = String::new();
            stream.read_to_string(&mut response).unwrap();
            response
        });

        serve_one(&listener).unwrap();

        let response = client.join().unwrap();
        let time_msg = response.strip_prefix(RESPONSE_HEAD).unwrap();
        assert_eq!(time_msg.len(), 25);
        assert!(time_msg.ends_with('\n'));
    }
}
