use serde::{Deserialize, Serialize};

/// One addressable unit of media: a whole file, or a byte range within a
/// larger file.
///
/// `segment_url` is always absolute, however the reference was written in
/// the playlist. `stream_url` is the variant playlist the segment came from;
/// it is empty for number-templated DASH representations, which have no
/// intermediate playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub playlist_url: String,
    pub stream_name: String,
    pub stream_url: String,
    pub segment_name: String,
    pub segment_url: String,
    pub byte_range: Option<ByteRange>,
}

/// A contiguous sub-range of a single physical file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteRange {
    pub start: u64,
    pub size: u64,
}

impl ByteRange {
    pub fn new(start: u64, size: u64) -> Self {
        Self { start, size }
    }

    pub fn to_http_range(&self) -> String {
        format!("bytes={}-{}", self.start, self.start + self.size - 1)
    }
}
