mod xlsx;

pub use xlsx::{LeadSink, HEADERS, SHEET_NAME};
