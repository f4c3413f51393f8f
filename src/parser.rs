//! Incremental HTTP/1.x response parser.
//!
//! A forward-only state machine that scans each received chunk exactly once
//! and never accumulates input. Zero-copy: body bytes are handed back as
//! subslices of the chunk they arrived in. The price is two framing
//! assumptions, documented on [`ResponseParser::feed`], that hold for the
//! small responses this client is built for.

/// Status-line marker every supported response carries.
const STATUS_MARKER: &[u8] = b"HTTP/1.";

/// Smallest chunk that can hold a complete status line.
const MIN_STATUS_LEN: usize = "HTTP/1.1 200 OK".len() + 1;

/// Offset from the start of the marker to the three status-code digits.
const STATUS_CODE_OFFSET: usize = STATUS_MARKER.len() + 2;

/// Blank line terminating the response header block.
const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Parsing position within one response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Waiting for the chunk that carries the status line.
    AwaitingStatus,
    /// Status line accepted; scanning for the end of the header block.
    AwaitingHeadersEnd,
    /// Header block consumed; every further byte belongs to the body.
    StreamingBody,
}

/// A response defect. All defects are fatal: the connection that produced
/// one is closed rather than resynchronized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The first chunk is too short to hold a complete status line.
    StatusTooShort,
    /// The first chunk carries no `HTTP/1.` marker.
    NotHttp,
    /// The HTTP minor version is neither 0 nor 1.
    UnsupportedVersion,
    /// The status-code field is not three decimal digits.
    InvalidStatusCode,
    /// The header terminator was found past the end of the chunk.
    CorruptHeaders,
}

impl ParseError {
    /// Static diagnostic text for error reporting.
    pub fn message(self) -> &'static str {
        match self {
            ParseError::StatusTooShort => "status line too short",
            ParseError::NotHttp => "response is not HTTP/1.x",
            ParseError::UnsupportedVersion => "unsupported HTTP version",
            ParseError::InvalidStatusCode => "invalid status code",
            ParseError::CorruptHeaders => "corrupt header block",
        }
    }
}

/// One step of progress through a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Parsed<'a> {
    /// A well-formed status line carrying this code. The parser holds in
    /// [`State::AwaitingStatus`] until the caller rules on the code and
    /// invokes [`ResponseParser::accept_status`].
    Status(u16),
    /// The current section is not complete yet; feed the next chunk.
    Incomplete,
    /// Body bytes, possibly empty when a chunk ends exactly at the header
    /// terminator.
    Body(&'a [u8]),
}

/// Incremental response parser. See the module documentation for the
/// framing assumptions it makes.
#[derive(Debug)]
pub struct ResponseParser {
    state: State,
}

impl ResponseParser {
    /// Creates a parser waiting for a status line.
    pub const fn new() -> Self {
        Self {
            state: State::AwaitingStatus,
        }
    }

    /// Current position within the response.
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the parser to [`State::AwaitingStatus`] for the next
    /// response.
    pub fn reset(&mut self) {
        self.state = State::AwaitingStatus;
    }

    /// Commits the status line reported by the last [`Parsed::Status`] and
    /// moves on to header scanning. The caller re-feeds the same chunk
    /// afterwards; the header scan covers the status-line bytes as well.
    pub fn accept_status(&mut self) {
        if self.state == State::AwaitingStatus {
            self.state = State::AwaitingHeadersEnd;
        }
    }

    /// Consumes one received chunk and reports the next step.
    ///
    /// Framing assumptions, chosen to avoid an accumulation buffer:
    ///
    /// - The complete status line must sit inside the first chunk. A status
    ///   line split across chunks is rejected as
    ///   [`ParseError::StatusTooShort`] or [`ParseError::NotHttp`].
    /// - The `\r\n\r\n` header terminator must arrive whole within a single
    ///   chunk. A split terminator is never matched and the parser keeps
    ///   reporting [`Parsed::Incomplete`] until the connection's idle
    ///   watchdog gives up on it.
    pub fn feed<'a>(&mut self, chunk: &'a [u8]) -> Result<Parsed<'a>, ParseError> {
        match self.state {
            State::AwaitingStatus => parse_status(chunk),
            State::AwaitingHeadersEnd => self.scan_header_end(chunk),
            State::StreamingBody => Ok(Parsed::Body(chunk)),
        }
    }

    fn scan_header_end<'a>(&mut self, chunk: &'a [u8]) -> Result<Parsed<'a>, ParseError> {
        let Some(at) = find_slice(chunk, HEADER_TERMINATOR) else {
            return Ok(Parsed::Incomplete);
        };
        let body = chunk
            .get(at + HEADER_TERMINATOR.len()..)
            .ok_or(ParseError::CorruptHeaders)?;
        self.state = State::StreamingBody;
        Ok(Parsed::Body(body))
    }
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates the status line and extracts the status code.
///
/// The marker may sit anywhere in the chunk; some servers precede it with
/// stray bytes. Everything after the marker is addressed relative to it,
/// with explicit bounds checks instead of trusting the minimum-length test.
fn parse_status(chunk: &[u8]) -> Result<Parsed<'_>, ParseError> {
    if chunk.len() < MIN_STATUS_LEN {
        return Err(ParseError::StatusTooShort);
    }
    let at = find_slice(chunk, STATUS_MARKER).ok_or(ParseError::NotHttp)?;
    match chunk.get(at + STATUS_MARKER.len()) {
        Some(b'0') | Some(b'1') => {}
        Some(_) => return Err(ParseError::UnsupportedVersion),
        None => return Err(ParseError::StatusTooShort),
    }
    let code_at = at + STATUS_CODE_OFFSET;
    let digits = chunk
        .get(code_at..code_at + 3)
        .ok_or(ParseError::StatusTooShort)?;
    let mut code: u16 = 0;
    for &digit in digits {
        if !digit.is_ascii_digit() {
            return Err(ParseError::InvalidStatusCode);
        }
        code = code * 10 + u16::from(digit - b'0');
    }
    Ok(Parsed::Status(code))
}

/// Finds the first occurrence of a slice in another slice and returns its starting position.
fn find_slice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

#[cfg(feature = "defmt")]
impl defmt::Format for State {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            State::AwaitingStatus => defmt::write!(fmt, "AwaitingStatus"),
            State::AwaitingHeadersEnd => defmt::write!(fmt, "AwaitingHeadersEnd"),
            State::StreamingBody => defmt::write!(fmt, "StreamingBody"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ParseError {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}", self.message());
    }
}
