#![allow(dead_code)]

pub mod temp_files {
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::{SystemTime, UNIX_EPOCH};

    // Global counter and lock for thread-safe temporary file creation
    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    static TEMP_LOCK: Mutex<()> = Mutex::new(());

    /// Creates a temporary file with guaranteed unique name to prevent race conditions
    pub fn create_temp_spec(content: &str, ext: &str) -> PathBuf {
        let _lock = TEMP_LOCK.lock().unwrap();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::SeqCst);
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();

        let path = std::env::temp_dir().join(format!(
            "specdocs_test_{}_{}_{}.{}",
            std::process::id(),
            counter,
            nanos,
            ext
        ));

        std::fs::write(&path, content).unwrap();
        path
    }

    /// Creates a temporary file with json extension
    pub fn create_temp_json(content: &str) -> PathBuf {
        create_temp_spec(content, "json")
    }

    /// Creates a temporary file with yaml extension
    pub fn create_temp_yaml(content: &str) -> PathBuf {
        create_temp_spec(content, "yaml")
    }

    /// Cleanup temporary files (best effort)
    pub fn cleanup_temp_files(paths: &[PathBuf]) {
        for path in paths {
            let _ = std::fs::remove_file(path);
        }
    }
}

pub mod test_server {
    use std::sync::Once;

    /// Ensures the may runtime is configured only once
    static MAY_INIT: Once = Once::new();

    pub fn setup_may_runtime() {
        MAY_INIT.call_once(|| {
            may::config().set_stack_size(0x8000);
        });
    }
}

pub mod http {
    use std::collections::HashMap;
    use std::io::{Read, Write};
    use std::net::{SocketAddr, TcpStream};
    use std::time::Duration;

    pub fn send_request(addr: &SocketAddr, req: &str) -> String {
        let mut stream = TcpStream::connect(addr).unwrap();
        stream.write_all(req.as_bytes()).unwrap();
        stream
            .set_read_timeout(Some(Duration::from_millis(100)))
            .unwrap();
        let mut buf = Vec::new();
        loop {
            let mut tmp = [0u8; 1024];
            match stream.read(&mut tmp) {
                Ok(0) => break,
                Ok(n) => buf.extend_from_slice(&tmp[..n]),
                Err(ref e)
                    if e.kind() == std::io::ErrorKind::WouldBlock
                        || e.kind() == std::io::ErrorKind::TimedOut =>
                {
                    break
                }
                Err(e) => panic!("read error: {:?}", e),
            }
        }
        String::from_utf8_lossy(&buf).to_string()
    }

    pub fn get(addr: &SocketAddr, path: &str) -> String {
        send_request(
            addr,
            &format!("GET {path} HTTP/1.1\r\nHost: localhost\r\n\r\n"),
        )
    }

    /// Split a raw HTTP/1.1 response into status, headers (lowercase names),
    /// and body.
    pub fn parse_parts(resp: &str) -> (u16, HashMap<String, String>, String) {
        let mut parts = resp.splitn(2, "\r\n\r\n");
        let head = parts.next().unwrap_or("");
        let body = parts.next().unwrap_or("").to_string();
        let mut status = 0;
        let mut headers = HashMap::new();
        for line in head.lines() {
            if line.starts_with("HTTP/1.1") {
                status = line
                    .split_whitespace()
                    .nth(1)
                    .unwrap_or("0")
                    .parse()
                    .unwrap();
            } else if let Some((name, val)) = line.split_once(':') {
                headers.insert(name.trim().to_ascii_lowercase(), val.trim().to_string());
            }
        }
        (status, headers, body)
    }
}
