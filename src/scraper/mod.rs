mod client;
mod extract;
mod models;

pub use client::{search_url, MapsClient};
pub use extract::extract_leads;
