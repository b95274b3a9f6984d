//! MPEG-DASH manifest interpretation.
//!
//! Walks the MPD hierarchy (periods, adaptation sets, representations) in
//! declaration order and emits one [`Segment`] per addressable media
//! segment. Two addressing schemes are supported, distinguished by the
//! presence of `SegmentTemplate@startNumber`:
//!
//! * `@startNumber` + `@duration`: numbered segments covering the
//!   manifest's addressable window.
//! * `SegmentTimeline`: explicitly timed segments with run-length repeats,
//!   independent of the window.
//!
//! A dynamic MPD that declares no `timeShiftBufferDepth` has a zero-length
//! window and yields no numbered segments. That mirrors the feeds this tool
//! was built against and is covered by tests as documented behavior.

mod template;
pub mod timeline;

use dash_mpd::MPD;

use crate::{
    error::{SangoError, SangoResult},
    segment::Segment,
    util::{
        http::HttpClient,
        url::{base_directory, resolve},
    },
    SegmentSource,
};
use template::MediaTemplate;

pub struct DashManifestSource {
    client: HttpClient,
    mpd_url: String,
}

impl DashManifestSource {
    pub fn new(client: HttpClient, mpd_url: impl Into<String>) -> Self {
        Self {
            client,
            mpd_url: mpd_url.into(),
        }
    }
}

impl SegmentSource for DashManifestSource {
    async fn scan(&self) -> SangoResult<Vec<Segment>> {
        let body = self.client.fetch_text(&self.mpd_url).await?;
        let mpd = dash_mpd::parse(&body)?;
        let window = addressable_window(&mpd)?;
        let base_dir = base_directory(&self.mpd_url);

        let mut segments = Vec::new();
        for period in &mpd.periods {
            for adaptation in &period.adaptations {
                for representation in &adaptation.representations {
                    let representation = Representation::from_mpd(representation)?;
                    tracing::debug!(
                        "representation {}: expanding segments",
                        representation.id
                    );
                    representation.emit(&self.mpd_url, base_dir, window, &mut segments)?;
                }
            }
        }

        Ok(segments)
    }
}

/// Addressable time window of the manifest, in seconds.
///
/// A static manifest addresses its whole presentation. A dynamic manifest
/// addresses the time-shift buffer; without a declared depth the window is
/// zero, not an error.
fn addressable_window(mpd: &MPD) -> SangoResult<f64> {
    match mpd.mpdtype.as_deref() {
        Some("static") => {
            let duration = mpd.mediaPresentationDuration.ok_or_else(|| {
                SangoError::MissingRequiredField {
                    field: "mediaPresentationDuration",
                    scope: "MPD".to_string(),
                }
            })?;
            Ok(duration.as_secs_f64())
        }
        Some("dynamic") => Ok(mpd
            .timeShiftBufferDepth
            .map(|depth| depth.as_secs_f64())
            .unwrap_or(0.0)),
        _ => Ok(0.0),
    }
}

/// One encoded rendition, reduced to the fields segment addressing needs.
/// The source manifest may omit any of them; absence is an explicit error
/// here rather than a crash further down.
struct Representation {
    id: String,
    timescale: u64,
    addressing: Addressing,
}

enum Addressing {
    /// `SegmentTemplate@startNumber` + `@duration`: numbered segments.
    NumberTemplate {
        start_number: u64,
        duration: f64,
        media: String,
    },
    /// `SegmentTemplate` + `SegmentTimeline`: explicit timestamps.
    Timeline {
        entries: Vec<TimelineEntry>,
        media: String,
    },
}

struct TimelineEntry {
    start: u64,
    duration: u64,
    repeat: i64,
}

impl Representation {
    fn from_mpd(representation: &dash_mpd::Representation) -> SangoResult<Self> {
        let id = representation
            .id
            .clone()
            .ok_or_else(|| missing("id", "representation".to_string()))?;
        let scope = format!("representation {id}");

        let segment_template = representation
            .SegmentTemplate
            .as_ref()
            .ok_or_else(|| missing("SegmentTemplate", scope.clone()))?;
        let timescale = segment_template
            .timescale
            .ok_or_else(|| missing("timescale", scope.clone()))?;
        let media = segment_template
            .media
            .clone()
            .ok_or_else(|| missing("media", scope.clone()))?;

        let addressing = if let Some(start_number) = segment_template.startNumber {
            let duration = segment_template
                .duration
                .ok_or_else(|| missing("duration", scope.clone()))?;
            Addressing::NumberTemplate {
                start_number,
                duration,
                media,
            }
        } else {
            let timeline = segment_template
                .SegmentTimeline
                .as_ref()
                .ok_or_else(|| missing("SegmentTimeline", scope.clone()))?;
            let entries = timeline
                .segments
                .iter()
                .map(|s| {
                    Ok(TimelineEntry {
                        start: s
                            .t
                            .ok_or_else(|| missing("SegmentTimeline@t", scope.clone()))?,
                        duration: s.d,
                        repeat: s.r.unwrap_or(0),
                    })
                })
                .collect::<SangoResult<Vec<_>>>()?;
            Addressing::Timeline { entries, media }
        };

        Ok(Self {
            id,
            timescale,
            addressing,
        })
    }

    fn emit(
        &self,
        mpd_url: &str,
        base_dir: &str,
        window: f64,
        segments: &mut Vec<Segment>,
    ) -> SangoResult<()> {
        match &self.addressing {
            Addressing::NumberTemplate {
                start_number,
                duration,
                media,
            } => {
                let segment_seconds = duration / self.timescale as f64;
                if !segment_seconds.is_finite() || segment_seconds <= 0.0 {
                    return Err(SangoError::InvalidMpd(format!(
                        "representation {}: segment duration must be positive",
                        self.id
                    )));
                }

                let count = (window / segment_seconds).floor() as u64;
                for number in *start_number..start_number + count {
                    let name = MediaTemplate::for_representation(&self.id)
                        .number(number)
                        .resolve(media);
                    segments.push(Segment {
                        playlist_url: mpd_url.to_string(),
                        stream_name: self.id.clone(),
                        // Templated addressing has no intermediate playlist.
                        stream_url: String::new(),
                        segment_url: resolve(base_dir, &name),
                        segment_name: name,
                        byte_range: None,
                    });
                }
            }
            Addressing::Timeline { entries, media } => {
                for entry in entries {
                    for timestamp in timeline::expand(entry.start, entry.duration, entry.repeat)
                    {
                        let name = MediaTemplate::for_representation(&self.id)
                            .time(timestamp)
                            .resolve(media);
                        segments.push(Segment {
                            playlist_url: mpd_url.to_string(),
                            stream_name: self.id.clone(),
                            stream_url: mpd_url.to_string(),
                            segment_url: resolve(base_dir, &name),
                            segment_name: name,
                            byte_range: None,
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

fn missing(field: &'static str, scope: String) -> SangoError {
    SangoError::MissingRequiredField { field, scope }
}
