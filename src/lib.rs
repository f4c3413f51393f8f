//! # evhttp - Event-driven HTTP client
//!
//! A minimal, non-blocking HTTP/1.x client for memory-constrained devices.
//! The client never blocks and never spins its own event loop: the platform
//! networking stack delivers connection lifecycle events, and the client
//! reacts by advancing a response parser, invoking application hooks, and
//! issuing transport commands. This library is designed for embedded
//! systems and supports `no_std` environments.
//!
//! ## Design
//!
//! - **Push, don't pull**: the transport pushes [`Event`]s into
//!   [`Client::process_event`]; the client never reads or waits.
//! - **Zero-copy parsing**: each received chunk is scanned once and body
//!   bytes are handed to the application as subslices of that chunk.
//!   Nothing is buffered or accumulated.
//! - **Fixed memory**: request fields are copied into `heapless` storage
//!   with compile-time capacities. No allocator required.
//! - **One request per connection**: every request is sent with
//!   `Connection: close`; the end of the body is the peer closing the
//!   connection.
//!
//! ## Usage
//!
//! Implement [`Transport`] over the platform's connection machinery, then
//! feed events through the client:
//!
//! ```rust
//! use evhttp::{Client, Event, Method, Request, Transport};
//!
//! struct LoopbackTransport;
//!
//! impl Transport for LoopbackTransport {
//!     type Error = ();
//!
//!     fn connect(&mut self, _host: &str, _port: u16, _tls: bool) -> Result<(), ()> {
//!         Ok(())
//!     }
//!
//!     fn write(&mut self, buf: &[u8]) -> Result<usize, ()> {
//!         Ok(buf.len())
//!     }
//!
//!     fn close(&mut self, _force: bool) {}
//! }
//!
//! #[derive(Default)]
//! struct Captured {
//!     status: Option<u16>,
//!     body_len: usize,
//! }
//!
//! let mut client = Client::with_context(LoopbackTransport, Captured::default());
//! client.set_on_status(|client, code| {
//!     client.context.status = Some(code);
//!     true
//! });
//! client.set_on_body(|client, fragment| {
//!     client.context.body_len += fragment.len();
//! });
//!
//! let request = Request {
//!     method: Method::Get,
//!     host: "device.example",
//!     port: 80,
//!     path: "/state",
//!     body: None,
//! };
//! client.connect(&request, false).unwrap();
//!
//! // The platform glue forwards transport events as they happen:
//! client.process_event(Event::Connected { now_ms: 0 });
//! client.process_event(Event::Data {
//!     now_ms: 40,
//!     chunk: b"HTTP/1.1 200 OK\r\nConnection: close\r\n\r\nok",
//! });
//! client.process_event(Event::Disconnected);
//!
//! assert_eq!(client.context.status, Some(200));
//! assert_eq!(client.context.body_len, 2);
//! assert!(!client.busy());
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Linux-based IoT devices (Raspberry Pi, etc.)
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Connection controller driving the request/response cycle.
pub mod client;

/// Error classification and reporting.
pub mod error;

/// Incremental HTTP/1.x response parsing.
pub mod parser;

/// Request description and wire serialization.
pub mod request;

/// Transport trait and connection lifecycle events.
pub mod transport;

pub use client::Client;
pub use error::{Error, ErrorKind};
pub use parser::{ParseError, Parsed, ResponseParser, State};
pub use request::{Method, Request};
pub use transport::{Event, Transport};
