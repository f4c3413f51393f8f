//! Event-driven HTTP client core.
//!
//! [`Client`] owns a [`Transport`], copies one request descriptor into
//! fixed-capacity storage, and advances a response parser as the platform
//! glue feeds connection events into [`Client::process_event`]. Application
//! hooks are plain function pointers; per-client state for the hooks lives
//! in the public [`context`](Client::context) field.
//!
//! One request per connection: every request is sent with
//! `Connection: close` and the end of the response body is the peer closing
//! the connection. The client is single-threaded and non-reentrant; run it
//! from one event loop only.

use heapless::{String, Vec};

use crate::error::{Error, ErrorKind};
use crate::parser::{Parsed, ResponseParser, State};
use crate::request::{Method, Request, serialize_head};
use crate::transport::{Event, Transport};

/// Maximum stored host name length.
pub const MAX_HOST_LEN: usize = 64;

/// Maximum stored request path length.
pub const MAX_PATH_LEN: usize = 128;

/// Maximum request body size.
pub const MAX_BODY_LEN: usize = 1024;

/// Idle watchdog threshold applied to fresh clients, in milliseconds.
///
/// The watchdog closes the connection when more than this much time passes
/// without receiving data from the peer. Adjust per client with
/// [`Client::set_idle_timeout_ms`].
pub const DEFAULT_IDLE_TIMEOUT_MS: u32 = 5000;

/// Hook invoked when the transport reports the connection established,
/// before the request goes on the wire.
pub type ConnectedFn<T, U> = fn(&mut Client<T, U>);

/// Hook invoked with the parsed status code. Return `false` to reject the
/// response: parsing stops in its tracks and deciding what to do with the
/// connection (usually [`Client::close`]) is left to the hook.
pub type StatusFn<T, U> = fn(&mut Client<T, U>, u16) -> bool;

/// Hook invoked with each non-empty body fragment, zero-copy out of the
/// received chunk. Fragment boundaries follow the transport's chunking.
pub type BodyFn<T, U> = fn(&mut Client<T, U>, &[u8]);

/// Hook invoked when a failure is recorded.
pub type ErrorFn<T, U> = fn(&mut Client<T, U>, &Error);

/// Hook invoked when the connection has fully closed, before the client
/// rearms itself for the next request.
pub type DisconnectedFn<T, U> = fn(&mut Client<T, U>);

/// Event-driven HTTP/1.x client.
///
/// `T` is the platform transport, `U` is caller-owned state reachable from
/// the hooks (defaults to `()` when no state is needed). Hooks are function
/// pointers rather than closures so the client stays `no_std`-friendly and
/// free of allocation; anything a hook needs beyond the client itself goes
/// into [`context`](Client::context).
pub struct Client<T: Transport, U = ()> {
    transport: T,
    /// Caller-owned state, freely readable and writable from the hooks.
    pub context: U,
    parser: ResponseParser,
    last_error: Option<Error>,
    connecting: bool,
    connected: bool,
    last_activity: Option<u32>,
    idle_timeout_ms: u32,
    method: Method,
    host: String<MAX_HOST_LEN>,
    port: u16,
    path: String<MAX_PATH_LEN>,
    body: Vec<u8, MAX_BODY_LEN>,
    on_connected: Option<ConnectedFn<T, U>>,
    on_status: Option<StatusFn<T, U>>,
    on_body: Option<BodyFn<T, U>>,
    on_error: Option<ErrorFn<T, U>>,
    on_disconnected: Option<DisconnectedFn<T, U>>,
}

impl<T: Transport> Client<T> {
    /// Creates a client with no caller context.
    pub fn new(transport: T) -> Self {
        Self::with_context(transport, ())
    }
}

impl<T: Transport, U> Client<T, U> {
    /// Creates a client carrying caller state for the hooks.
    pub fn with_context(transport: T, context: U) -> Self {
        Self {
            transport,
            context,
            parser: ResponseParser::new(),
            last_error: None,
            connecting: false,
            connected: false,
            last_activity: None,
            idle_timeout_ms: DEFAULT_IDLE_TIMEOUT_MS,
            method: Method::Get,
            host: String::new(),
            port: 0,
            path: String::new(),
            body: Vec::new(),
            on_connected: None,
            on_status: None,
            on_body: None,
            on_error: None,
            on_disconnected: None,
        }
    }

    /// Sets the connection-established hook.
    pub fn set_on_connected(&mut self, callback: ConnectedFn<T, U>) {
        self.on_connected = Some(callback);
    }

    /// Sets the status-line hook.
    pub fn set_on_status(&mut self, callback: StatusFn<T, U>) {
        self.on_status = Some(callback);
    }

    /// Sets the body-fragment hook.
    pub fn set_on_body(&mut self, callback: BodyFn<T, U>) {
        self.on_body = Some(callback);
    }

    /// Sets the error hook.
    pub fn set_on_error(&mut self, callback: ErrorFn<T, U>) {
        self.on_error = Some(callback);
    }

    /// Sets the disconnect hook.
    pub fn set_on_disconnected(&mut self, callback: DisconnectedFn<T, U>) {
        self.on_disconnected = Some(callback);
    }

    /// True while a connection attempt or an active request is in flight.
    pub fn busy(&self) -> bool {
        self.connecting || self.connected
    }

    /// Current position of the response parser.
    pub fn state(&self) -> State {
        self.parser.state()
    }

    /// The most recent failure. Kept across the disconnect so the caller
    /// can inspect it afterwards; cleared by the next [`connect`](Self::connect).
    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    /// Idle watchdog threshold in milliseconds.
    pub fn idle_timeout_ms(&self) -> u32 {
        self.idle_timeout_ms
    }

    /// Adjusts the idle watchdog threshold.
    pub fn set_idle_timeout_ms(&mut self, millis: u32) {
        self.idle_timeout_ms = millis;
    }

    /// Shared access to the transport handle.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Exclusive access to the transport handle.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Starts one request/response cycle.
    ///
    /// The descriptor is copied into fixed-capacity storage first; an
    /// oversized host, path or body fails here without touching the
    /// transport. The request itself goes on the wire once
    /// [`Event::Connected`] arrives.
    ///
    /// Callers must not invoke this while [`busy`](Self::busy). A
    /// well-behaved transport refuses the nested attempt, which comes back
    /// as an error from this method after the connection is force-closed.
    pub fn connect(&mut self, request: &Request<'_>, tls: bool) -> Result<(), Error> {
        self.host = String::try_from(request.host)
            .map_err(|_| Error::new(ErrorKind::Client, "host exceeds buffer"))?;
        self.path = String::try_from(request.path)
            .map_err(|_| Error::new(ErrorKind::Client, "path exceeds buffer"))?;
        self.body.clear();
        self.body
            .extend_from_slice(request.body.unwrap_or(&[]))
            .map_err(|_| Error::new(ErrorKind::Client, "body exceeds buffer"))?;
        self.method = request.method;
        self.port = request.port;
        self.last_error = None;

        match self.transport.connect(request.host, request.port, tls) {
            Ok(()) => {
                self.connecting = true;
                Ok(())
            }
            Err(_) => {
                self.transport.close(true);
                Err(Error::new(ErrorKind::Client, "transport refused connect"))
            }
        }
    }

    /// Force-closes the connection. The transport still delivers
    /// [`Event::Disconnected`] afterwards; state is rearmed there, not here.
    pub fn close(&mut self) {
        self.transport.close(true);
    }

    /// Feeds one transport lifecycle event through the state machine.
    ///
    /// Never blocks and never panics on malformed input. Failures do not
    /// propagate out of this call; they are recorded on the client,
    /// reported through the error hook when one is set, and paired with a
    /// forced close where the connection can no longer make progress.
    pub fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Connected { now_ms } => self.handle_connect(now_ms),
            Event::Data { now_ms, chunk } => self.handle_data(now_ms, chunk),
            Event::Poll { now_ms } => self.handle_poll(now_ms),
            Event::Timeout { elapsed_ms } => self.handle_timeout(elapsed_ms),
            Event::Error { message } => self.handle_error(message),
            Event::Disconnected => self.handle_disconnect(),
        }
    }

    fn handle_connect(&mut self, now_ms: u32) {
        self.connected = true;
        self.connecting = false;
        self.last_activity = Some(now_ms);

        if let Some(callback) = self.on_connected {
            callback(self);
        }

        let head = match serialize_head(self.method, &self.host, &self.path, self.body.len()) {
            Ok(head) => head,
            Err(error) => {
                self.report_error(error);
                self.transport.close(true);
                return;
            }
        };

        if self.transport.write(head.as_bytes()).is_err() {
            self.report_error(Error::new(ErrorKind::Client, "request head write failed"));
            self.transport.close(true);
            return;
        }
        if !self.body.is_empty() && self.transport.write(&self.body).is_err() {
            self.report_error(Error::new(ErrorKind::Client, "request body write failed"));
            self.transport.close(true);
        }
    }

    fn handle_data(&mut self, now_ms: u32, chunk: &[u8]) {
        self.last_activity = Some(now_ms);

        // At most one status acceptance per response, so this settles in
        // two rounds: rule on the status line, then rescan the same chunk
        // for the header terminator.
        loop {
            match self.parser.feed(chunk) {
                Ok(Parsed::Status(code)) => {
                    let accepted = match self.on_status {
                        Some(callback) => callback(self, code),
                        None => true,
                    };
                    if !accepted {
                        return;
                    }
                    self.parser.accept_status();
                }
                Ok(Parsed::Incomplete) => return,
                Ok(Parsed::Body(body)) => {
                    if !body.is_empty() {
                        if let Some(callback) = self.on_body {
                            callback(self, body);
                        }
                    }
                    return;
                }
                Err(defect) => {
                    self.report_error(Error::new(ErrorKind::Client, defect.message()));
                    self.transport.close(true);
                    return;
                }
            }
        }
    }

    fn handle_poll(&mut self, now_ms: u32) {
        if !self.connected {
            return;
        }
        let Some(last) = self.last_activity else {
            return;
        };
        let idle = now_ms.wrapping_sub(last);
        if idle > self.idle_timeout_ms {
            self.report_error(Error::timeout(ErrorKind::RequestTimeout, "no response", idle));
            self.transport.close(true);
        }
    }

    fn handle_timeout(&mut self, elapsed_ms: u32) {
        self.transport.close(true);
        self.report_error(Error::timeout(
            ErrorKind::NetworkTimeout,
            "network timeout",
            elapsed_ms,
        ));
    }

    fn handle_error(&mut self, message: &str) {
        // The transport reported this and is already tearing the
        // connection down; do not close it again.
        self.report_error(Error::new(ErrorKind::Client, message));
    }

    fn handle_disconnect(&mut self) {
        if let Some(callback) = self.on_disconnected {
            callback(self);
        }
        self.body.clear();
        self.last_activity = None;
        self.connected = false;
        self.connecting = false;
        self.parser.reset();
    }

    fn report_error(&mut self, error: Error) {
        self.last_error = Some(error.clone());
        if let Some(callback) = self.on_error {
            callback(self, &error);
        }
    }
}

impl<T: Transport, U> core::fmt::Debug for Client<T, U> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Client")
            .field("state", &self.parser.state())
            .field("connecting", &self.connecting)
            .field("connected", &self.connected)
            .field("last_error", &self.last_error)
            .finish_non_exhaustive()
    }
}
