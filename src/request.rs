//! Request description and wire serialization.

use core::fmt::Write;

use heapless::String;

use crate::error::{Error, ErrorKind};

/// `User-Agent` value sent with every request.
pub const USER_AGENT: &str = "evhttp";

/// Capacity of the scratch buffer holding the serialized request head.
///
/// Sized for the fixed header template plus the largest host, path and
/// `Content-Length` value the client accepts. Formatting beyond this
/// capacity aborts the request instead of sending a truncated head.
pub const MAX_REQUEST_HEAD_LEN: usize = 512;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// HTTP `GET`.
    Get,
    /// HTTP `POST`.
    Post,
    /// HTTP `PUT`.
    Put,
    /// HTTP `DELETE`.
    Delete,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Describes one HTTP request.
///
/// Plain borrowed data. The client copies the fields it needs into its own
/// fixed-capacity storage when [`connect`](crate::Client::connect) is
/// called, so the descriptor does not have to outlive that call.
#[derive(Debug, Clone)]
pub struct Request<'a> {
    /// Request method.
    pub method: Method,
    /// Server host name or address, also sent as the `Host` header.
    pub host: &'a str,
    /// Server TCP port.
    pub port: u16,
    /// Request path, e.g. `"/api/v1/state"`.
    pub path: &'a str,
    /// Request body. Must be fully materialized up front; the client does
    /// not stream request bodies.
    pub body: Option<&'a [u8]>,
}

/// Formats the request line and the fixed header block.
///
/// Every request is HTTP/1.1 with `Connection: close`, so the end of the
/// response body is signalled by the peer closing the connection. The body
/// itself is written separately by the caller.
pub(crate) fn serialize_head(
    method: Method,
    host: &str,
    path: &str,
    body_len: usize,
) -> Result<String<MAX_REQUEST_HEAD_LEN>, Error> {
    let mut head = String::new();
    write!(
        head,
        "{} {} HTTP/1.1\r\n\
         Host: {}\r\n\
         User-Agent: {}\r\n\
         Connection: close\r\n\
         Content-Type: application/x-www-form-urlencoded\r\n\
         Content-Length: {}\r\n\
         \r\n",
        method.as_str(),
        path,
        host,
        USER_AGENT,
        body_len
    )
    .map_err(|_| Error::new(ErrorKind::Client, "request head exceeds buffer"))?;
    Ok(head)
}

#[cfg(feature = "defmt")]
impl defmt::Format for Method {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.as_str());
    }
}
