//! Resolve adaptive-bitrate streaming manifests into flat, ordered lists of
//! downloadable [`Segment`] descriptors. HLS playlists and MPEG-DASH
//! manifests are supported; the dialect is selected from the manifest URL.

pub mod dash;
pub mod error;
pub mod hls;
pub mod segment;
pub mod source;
pub mod util;

pub use error::{SangoError, SangoResult};
pub use segment::{ByteRange, Segment};
pub use source::SegmentScanner;
pub use util::http::HttpClient;

/// A manifest decoder that can be scanned for its complete segment list.
///
/// One scan performs one fetch of the manifest plus one fetch per nested
/// playlist it discovers. The scan owns its accumulator and keeps no state
/// across calls, so independent scans may run concurrently without any
/// coordination. Any fetch or decode failure aborts the whole scan; there is
/// no partial-result mode.
pub trait SegmentSource {
    fn scan(&self) -> impl std::future::Future<Output = SangoResult<Vec<Segment>>> + Send;
}
