use std::env;
use std::fs;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::thread::{self, JoinHandle};

use seqfetch::{FileDownloader, UReqFetcher};
use tempfile::TempDir;

static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Answers exactly one request with the given status line and body.
fn serve_once(status: &'static str, body: &'static [u8]) -> (SocketAddr, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();

        let mut request = Vec::new();
        let mut buffer = [0u8; 1024];

        while !request.windows(4).any(|window| window == b"\r\n\r\n") {
            let read = stream.read(&mut buffer).unwrap();

            if read == 0 {
                break;
            }

            request.extend_from_slice(&buffer[..read]);
        }

        let head = format!(
            "HTTP/1.1 {status}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            body.len()
        );

        stream.write_all(head.as_bytes()).unwrap();
        stream.write_all(body).unwrap();
    });

    (address, handle)
}

/// Moves the process back to the wrapped directory when dropped.
struct RestoreDir(PathBuf);

impl Drop for RestoreDir {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.0);
    }
}

fn in_temp_dir(test: impl FnOnce(&Path)) {
    let _guard = CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner());

    let original = env::current_dir().unwrap();
    let temp = TempDir::new().unwrap();
    let _restore = RestoreDir(original);

    env::set_current_dir(temp.path()).unwrap();

    test(temp.path());
}

#[test]
fn saves_body_under_last_path_segment() {
    in_temp_dir(|root| {
        let (address, server) = serve_once("200 OK", b"Mocked file content");

        let url = format!("http://{address}/2021/09/among-us-1.jpg");

        UReqFetcher::new().fetch(&url);

        server.join().unwrap();

        let content = fs::read(root.join("among-us-1.jpg")).unwrap();

        assert_eq!(content, b"Mocked file content");
    });
}

#[test]
fn not_found_writes_nothing() {
    in_temp_dir(|root| {
        let (address, server) = serve_once("404 Not Found", b"");

        let url = format!("http://{address}/2021/09/among-us-2.jpg");

        UReqFetcher::new().fetch(&url);

        server.join().unwrap();

        assert!(!root.join("among-us-2.jpg").exists());
    });
}

#[test]
fn unreachable_host_writes_nothing() {
    in_temp_dir(|root| {
        let address = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };

        let url = format!("http://{address}/2021/09/among-us-3.jpg");

        UReqFetcher::new().fetch(&url);

        assert!(!root.join("among-us-3.jpg").exists());
    });
}
