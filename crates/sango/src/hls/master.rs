use std::sync::LazyLock;

use regex::Regex;

use crate::{
    error::{SangoError, SangoResult},
    util::url::{base_directory, resolve},
};

/// Quoted URI attribute of an alternate-rendition or I-frame stream tag.
static URI_ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"URI="([^"]*)""#).unwrap());

/// A variant or media playlist discovered in a master playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamReference {
    /// Label under which the reference appeared: the bare line itself, or
    /// the quoted URI of the tag that declared it.
    pub name: String,
    /// Absolute playlist URL.
    pub url: String,
}

/// Master pass: collects every variant and alternate-rendition playlist
/// reference, in file order. A rendition or I-frame tag without a quoted
/// URI attribute fails the scan.
pub(crate) fn parse_master(
    master_url: &str,
    playlist: &str,
) -> SangoResult<Vec<StreamReference>> {
    let base_dir = base_directory(master_url);
    let mut streams = Vec::new();

    for line in playlist.lines() {
        if !line.starts_with('#') && line.contains("m3u8") {
            streams.push(StreamReference {
                name: line.to_string(),
                url: resolve(base_dir, line),
            });
        } else if line.starts_with("#EXT-X-I-FRAME-STREAM-INF:")
            || line.starts_with("#EXT-X-MEDIA:")
        {
            let uri = URI_ATTRIBUTE
                .captures(line)
                .map(|captures| captures[1].to_string())
                .ok_or_else(|| SangoError::MissingUriAttribute(line.to_string()))?;
            streams.push(StreamReference {
                url: resolve(base_dir, &uri),
                name: uri,
            });
        }
    }

    Ok(streams)
}
