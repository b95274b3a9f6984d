use thiserror::Error;

#[derive(Error, Debug)]
pub enum SangoError {
    #[error("HTTP error: {0}")]
    HttpError(reqwest::StatusCode),

    #[error("unsupported manifest format: {0}")]
    UnsupportedManifest(String),

    #[error("missing required field `{field}` in {scope}")]
    MissingRequiredField { field: &'static str, scope: String },

    #[error("malformed byte range: {0}")]
    MalformedByteRange(String),

    #[error("missing URI attribute: {0}")]
    MissingUriAttribute(String),

    #[error("invalid MPD: {0}")]
    InvalidMpd(String),

    #[error(transparent)]
    UrlParseError(#[from] url::ParseError),

    #[error(transparent)]
    RequestError(#[from] reqwest::Error),

    #[error(transparent)]
    MpdDecodeError(#[from] dash_mpd::DashMpdError),
}

pub type SangoResult<T> = Result<T, SangoError>;
