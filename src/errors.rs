// errors.rs
use std::fmt;

/// Errors originating from the fetch/extract/export layers.
/// Variants carry string context so callers can print them as-is.
#[derive(Debug)]
pub enum ScraperError {
    Network(String),
    HttpStatus { url: String, status: u16 },
    HtmlParse(String),
    Io(String),
    Xlsx(String),
}

impl fmt::Display for ScraperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScraperError::Network(msg) => write!(f, "Network error: {msg}"),
            ScraperError::HttpStatus { url, status } => {
                write!(f, "HTTP {status} from {url}")
            }
            ScraperError::HtmlParse(msg) => write!(f, "HTML parse error: {msg}"),
            ScraperError::Io(msg) => write!(f, "I/O error: {msg}"),
            ScraperError::Xlsx(msg) => write!(f, "Spreadsheet error: {msg}"),
        }
    }
}

impl std::error::Error for ScraperError {}
