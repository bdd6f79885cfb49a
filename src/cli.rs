use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lead_scraper")]
#[command(about = "Scrapes business leads from Bing Maps search pages")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Scrape leads for a search term and write them to a spreadsheet
    Scrape {
        /// Search term, e.g. "academias"
        #[arg(long, default_value = "")]
        termo: String,

        /// Two-letter state code (UF)
        #[arg(long, default_value = "RS")]
        estado: String,

        /// City name
        #[arg(long, default_value = "Porto Alegre")]
        cidade: String,

        /// Comma-separated neighborhood list; empty runs one unfiltered query
        #[arg(long, default_value = "")]
        bairros: String,

        /// Directory for the output spreadsheet (created if absent)
        #[arg(long, default_value = "data")]
        out_dir: PathBuf,
    },

    /// List Brazilian states from the IBGE localidades API
    Estados,

    /// List municipalities for a state code
    Municipios {
        /// Two-letter state code (UF), e.g. "RS"
        uf: String,
    },
}
