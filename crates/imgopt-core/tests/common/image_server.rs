//! Minimal HTTP/1.1 server that serves one image body for any identifier path.
//!
//! Records every request head so tests can count network calls and inspect
//! query parameters and headers. Selected identifiers can answer 404 or stall
//! long enough to trip a client timeout.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct ImageServerOptions {
    /// Identifiers that answer `404 Not Found`.
    pub missing: Vec<String>,
    /// Identifiers that sleep for `stall_for` before answering.
    pub stalled: Vec<String>,
    pub stall_for: Duration,
}

pub struct ImageServer {
    /// Base URL with trailing slash, e.g. "http://127.0.0.1:12345/".
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl ImageServer {
    /// Raw request heads received so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

/// Starts a server in a background thread serving `body` as `image/png`.
/// The server runs until the process exits.
pub fn start(body: Vec<u8>, opts: ImageServerOptions) -> ImageServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let body = Arc::new(body);
    let opts = Arc::new(opts);
    let requests = Arc::new(Mutex::new(Vec::new()));
    let requests_srv = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let body = Arc::clone(&body);
            let opts = Arc::clone(&opts);
            let requests = Arc::clone(&requests_srv);
            thread::spawn(move || handle(stream, &body, &opts, &requests));
        }
    });
    ImageServer {
        base_url: format!("http://127.0.0.1:{}/", port),
        requests,
    }
}

fn handle(
    mut stream: TcpStream,
    body: &[u8],
    opts: &ImageServerOptions,
    requests: &Mutex<Vec<String>>,
) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s.to_string(),
        Err(_) => return,
    };
    requests.lock().unwrap().push(request.clone());

    let target = request
        .lines()
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .unwrap_or("/");
    let id = target
        .split('?')
        .next()
        .unwrap_or("")
        .trim_start_matches('/');

    if opts.missing.iter().any(|m| m == id) {
        let _ = stream.write_all(
            b"HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        );
        return;
    }
    if opts.stalled.iter().any(|s| s == id) {
        thread::sleep(opts.stall_for);
    }
    let head = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
}
