use thiserror::Error;

/// Why a single result source could not produce a usable draw.
///
/// None of these abort a lookup: the fetcher reports them as status lines
/// and moves on to the next source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("malformed JSON body: {source}")]
    Body {
        #[source]
        source: serde_json::Error,
    },

    #[error("response has no usable draw date or prize data")]
    Shape,

    #[error("draw selector '{selector}' is not served by this source")]
    Unsupported { selector: String },

    #[error("invalid endpoint URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("scanner I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("scanner is not running")]
    NotStarted,
}
