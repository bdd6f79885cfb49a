mod lead;
mod run;

pub use lead::{Lead, NO_ADDRESS, NO_NEIGHBORHOOD, NO_PHONE, NO_TITLE, NO_WEBSITE};
pub use run::RunContext;
