//! Transport seam between the client and the platform's network stack.
//!
//! The client never owns a socket. It issues commands through the
//! [`Transport`] trait and learns about connection progress through
//! [`Event`]s that the platform glue feeds into
//! [`Client::process_event`](crate::Client::process_event). This keeps the
//! core free of blocking calls and usable from a bare-metal event loop.

/// An asynchronous byte-stream connection driven by an external event loop.
///
/// Implementations wrap whatever the platform offers: a raw TCP socket, a
/// TLS session, or an offload modem behind an AT channel. All methods must
/// return without blocking.
///
/// The client relies on the following contract:
///
/// - [`connect`](Transport::connect) only starts an attempt; readiness is
///   reported later as [`Event::Connected`]. A transport that already has a
///   connection in flight refuses the call.
/// - Events for a connection arrive in order, one at a time: `Connected`,
///   then any number of `Data`/`Poll`, then at most one of `Timeout` or
///   `Error`, then `Disconnected`.
/// - After [`close`](Transport::close), and after the transport reports
///   `Timeout` or `Error` on its own, no further `Data` or `Poll` events are
///   delivered; `Disconnected` still is.
pub trait Transport {
    /// Transport-specific error type.
    type Error: core::fmt::Debug;

    /// Begins opening a connection to `host:port`, negotiating TLS when
    /// `tls` is set and the transport supports it.
    fn connect(&mut self, host: &str, port: u16, tls: bool) -> Result<(), Self::Error>;

    /// Queues bytes for transmission and returns how many were accepted.
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;

    /// Closes the connection, discarding unsent data when `force` is set.
    fn close(&mut self, force: bool);
}

/// A connection lifecycle event produced by the transport layer.
///
/// Timestamps are millisecond readings from the device uptime clock and may
/// wrap around; the client compares them with wrapping arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event<'a> {
    /// The connection to the server is established.
    Connected {
        /// Millisecond timestamp of the event.
        now_ms: u32,
    },
    /// Bytes arrived from the peer. Chunks may be split at arbitrary
    /// boundaries.
    Data {
        /// Millisecond timestamp of the event.
        now_ms: u32,
        /// The received bytes.
        chunk: &'a [u8],
    },
    /// Periodic tick driving the idle watchdog while a connection is open.
    Poll {
        /// Millisecond timestamp of the tick.
        now_ms: u32,
    },
    /// The transport gave up waiting for the peer to acknowledge sent data.
    /// The transport tears the connection down itself afterwards.
    Timeout {
        /// Milliseconds spent waiting for the acknowledgement.
        elapsed_ms: u32,
    },
    /// The transport hit an I/O error; a disconnect follows.
    Error {
        /// Transport-supplied diagnostic text.
        message: &'a str,
    },
    /// The connection is fully closed.
    Disconnected,
}
