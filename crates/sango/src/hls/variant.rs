use std::sync::LazyLock;

use regex::Regex;

use crate::{
    error::{SangoError, SangoResult},
    segment::{ByteRange, Segment},
    util::url::{base_directory, resolve},
};

/// Media-segment file extensions recognized inside variant playlists.
const SEGMENT_EXTENSIONS: [&str; 8] = [
    ".ts", ".fmp4", ".cmfv", ".cmfa", ".aac", ".ac3", ".ec3", ".webvtt",
];

/// Segments the origin feed marked missing; skipped, never an error.
const UNAVAILABLE_PREFIX: &str = "MISSING_";

const BYTERANGE_TAG: &str = "#EXT-X-BYTERANGE:";
const MAP_TAG: &str = "#EXT-X-MAP:";

static QUOTED_URI: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#""([^"]+)""#).unwrap());

pub(crate) struct VariantContext<'a> {
    pub playlist_url: &'a str,
    pub stream_name: &'a str,
    pub stream_url: &'a str,
}

/// Variant pass: emits one [`Segment`] per addressable entry, preserving
/// file order exactly. File order is playback order; entries are never
/// reordered or deduplicated.
pub(crate) fn parse_variant(
    context: &VariantContext<'_>,
    playlist: &str,
) -> SangoResult<Vec<Segment>> {
    let base_dir = base_directory(context.stream_url);
    let mut segments = Vec::new();

    // A byte-range tag applies to the line that immediately follows it and
    // to nothing else.
    let mut pending_range: Option<ByteRange> = None;

    for line in playlist.lines() {
        if line.starts_with(BYTERANGE_TAG) {
            pending_range = Some(parse_byte_range(line)?);
            continue;
        }
        let byte_range = pending_range.take();

        if line.starts_with(UNAVAILABLE_PREFIX) {
            tracing::debug!("skipping unavailable segment: {line}");
            continue;
        }

        if line.starts_with(MAP_TAG) {
            // The initialization segment is named by the quoted URI, not the
            // whole tag line.
            let name = QUOTED_URI
                .captures(line)
                .map(|captures| captures[1].to_string())
                .ok_or_else(|| SangoError::MissingUriAttribute(line.to_string()))?;
            segments.push(segment(context, base_dir, name, byte_range));
        } else if !line.starts_with('#')
            && SEGMENT_EXTENSIONS
                .iter()
                .any(|extension| line.contains(extension))
        {
            segments.push(segment(context, base_dir, line.to_string(), byte_range));
        }
    }

    Ok(segments)
}

fn segment(
    context: &VariantContext<'_>,
    base_dir: &str,
    name: String,
    byte_range: Option<ByteRange>,
) -> Segment {
    Segment {
        playlist_url: context.playlist_url.to_string(),
        stream_name: context.stream_name.to_string(),
        stream_url: context.stream_url.to_string(),
        segment_url: resolve(base_dir, &name),
        segment_name: name,
        byte_range,
    }
}

/// `#EXT-X-BYTERANGE:<size>@<offset>`. Both values are required here even
/// though RFC 8216 allows the offset to be omitted: an offset-free range
/// cannot be made absolute without tracking the previous segment's end.
fn parse_byte_range(line: &str) -> SangoResult<ByteRange> {
    let malformed = || SangoError::MalformedByteRange(line.to_string());

    let value = line.strip_prefix(BYTERANGE_TAG).ok_or_else(malformed)?;
    let (size, offset) = value.split_once('@').ok_or_else(malformed)?;
    let size = size.parse::<u64>().map_err(|_| malformed())?;
    let offset = offset.parse::<u64>().map_err(|_| malformed())?;

    Ok(ByteRange::new(offset, size))
}
