use ::scraper::error::SelectorErrorKind;

/// All errors that can occur while fetching or extracting Liquipedia pages.
///
/// None of these escape the `get_*` methods of [`LiquipediaClient`](crate::LiquipediaClient);
/// they are logged there and turned into empty collections.
#[derive(thiserror::Error, Debug)]
pub enum LiquipediaError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Server returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// A CSS selector string could not be parsed.
    #[error("invalid CSS selector: {0}")]
    Selector(String),

    /// A date supplied by the caller is not in `DD-MM-YYYY` form.
    #[error("failed to parse date: {0}")]
    DateParse(#[from] chrono::ParseError),
}

impl<'a> From<SelectorErrorKind<'a>> for LiquipediaError {
    fn from(err: SelectorErrorKind<'a>) -> Self {
        LiquipediaError::Selector(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LiquipediaError>;
