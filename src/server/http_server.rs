use may::coroutine::JoinHandle;
use may_minihttp::{HttpService, HttpServiceFactory};
use std::io;
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::thread;
use std::time::Duration;

/// Wrapper around may_minihttp's HTTP server
///
/// Provides a typed interface for starting and managing the serving
/// coroutine. The transport keeps HTTP/1.1 connections alive between
/// requests; no per-request timeouts are imposed here.
pub struct HttpServer<T>(pub T);

/// Handle to a running HTTP server
///
/// The serve coroutine runs independently of the caller; this handle is the
/// single place its outcome surfaces. Join it to block until the server
/// terminates, or stop it to cancel (test teardown).
pub struct ServerHandle {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl ServerHandle {
    /// Wait for the server to be ready to accept connections
    ///
    /// Polls the server address by attempting TCP connections until
    /// successful. Used before pointing a browser at the visit URL, and in
    /// tests to ensure the server is fully started before sending requests.
    ///
    /// # Errors
    ///
    /// Returns `TimedOut` if the server doesn't become ready within ~250ms
    /// (50 attempts x 5ms).
    pub fn wait_ready(&self) -> io::Result<()> {
        for _ in 0..50 {
            if TcpStream::connect(self.addr).is_ok() {
                return Ok(());
            }
            thread::sleep(Duration::from_millis(5));
        }
        Err(io::Error::new(io::ErrorKind::TimedOut, "server not ready"))
    }

    /// Stop the server
    ///
    /// Cancels the serve coroutine and waits for it to finish. Consumes the
    /// handle, preventing further operations.
    pub fn stop(self) {
        // SAFETY: cancel() is marked unsafe by the may runtime. The handle is
        // valid (we hold it) and cancellation is the intended shutdown path.
        unsafe {
            self.handle.coroutine().cancel();
        }
        let _ = self.handle.join();
    }

    /// Block until the serve coroutine completes
    ///
    /// The server normally runs until process exit; an early return carries
    /// the serve-time failure.
    ///
    /// # Errors
    ///
    /// Returns an error if the serve coroutine panicked.
    pub fn join(self) -> std::thread::Result<()> {
        self.handle.join()
    }
}

impl<T: HttpService + Clone + Send + Sync + 'static> HttpServer<T> {
    /// Start the HTTP server on the given address
    ///
    /// # Errors
    ///
    /// Returns an error if the address is invalid or the port cannot be
    /// bound.
    pub fn start<A: ToSocketAddrs>(self, addr: A) -> io::Result<ServerHandle> {
        let addr = addr
            .to_socket_addrs()?
            .next()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "invalid address"))?;
        let handle = may_minihttp::HttpServer(self.0).start(addr)?;
        Ok(ServerHandle { addr, handle })
    }
}
