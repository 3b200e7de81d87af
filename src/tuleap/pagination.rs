use reqwest::header::HeaderMap;

use super::errors::TrackerError;

pub const HEADER_OFFSET: &str = "X-PAGINATION-OFFSET";
pub const HEADER_LIMIT: &str = "X-PAGINATION-LIMIT";
pub const HEADER_SIZE: &str = "X-PAGINATION-SIZE";

/// Transient pagination state, rebuilt from the three `X-PAGINATION-*`
/// response headers after every round trip.
///
/// The listing protocol: `offset` is where the returned page started, `size`
/// is the page limit the server applied, and `total` is the collection size
/// as of that response. The collection is exhausted once
/// `offset + size > total`; until then the next page starts at
/// `offset + size`. The initial all-zero cursor is deliberately not
/// exhausted, so a fetch always issues at least one request; callers rely on
/// that to observe the server-reported total even for an empty tracker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageCursor {
    pub offset: u64,
    pub size: u64,
    pub total: u64,
}

impl PageCursor {
    /// Rebuild the cursor from a response's pagination headers.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, TrackerError> {
        Ok(PageCursor {
            offset: read_numeric_header(headers, HEADER_OFFSET)?,
            size: read_numeric_header(headers, HEADER_LIMIT)?,
            total: read_numeric_header(headers, HEADER_SIZE)?,
        })
    }

    /// Offset to request for the page after this one.
    pub fn next_offset(&self) -> u64 {
        self.offset + self.size
    }

    /// True once every item has been consumed.
    pub fn exhausted(&self) -> bool {
        self.offset + self.size > self.total
    }
}

fn read_numeric_header(headers: &HeaderMap, name: &'static str) -> Result<u64, TrackerError> {
    let raw = headers
        .get(name)
        .ok_or(TrackerError::MissingHeader { name })?;
    let text = raw
        .to_str()
        .map_err(|_| TrackerError::InvalidHeader {
            name,
            value: format!("{raw:?}"),
        })?;
    text.parse().map_err(|_| TrackerError::InvalidHeader {
        name,
        value: text.to_string(),
    })
}
