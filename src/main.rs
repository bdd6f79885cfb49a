use crate::cli::{Cli, Command};
use crate::domain::RunContext;
use crate::errors::ScraperError;
use crate::geo::LocalidadesClient;
use crate::scraper::{extract_leads, search_url, MapsClient};
use crate::sink::LeadSink;
use clap::Parser;
use std::path::Path;

mod cli;
mod domain;
mod errors;
mod geo;
mod logger;
mod scraper;
mod sink;

#[cfg(test)]
mod tests;

fn main() {
    logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Scrape {
            termo,
            estado,
            cidade,
            bairros,
            out_dir,
        } => {
            let ctx = RunContext::new(&termo, &estado, &cidade, &bairros);
            run_scrape(&ctx, &out_dir)
        }
        Command::Estados => list_estados(),
        Command::Municipios { uf } => list_municipios(&uf),
    };

    if let Err(e) = result {
        eprintln!("❌ {e}");
        std::process::exit(1);
    }
}

/// One full run: fetch and extract per query, accumulate, flush once.
/// A failed fetch skips only that query; the spreadsheet is still written
/// and the failure is surfaced afterwards.
fn run_scrape(ctx: &RunContext, out_dir: &Path) -> Result<(), ScraperError> {
    let client = MapsClient::new()?;
    let mut sink = LeadSink::begin(out_dir)?;

    let queries = ctx.queries();
    let total_queries = queries.len();
    let mut failed_queries = 0usize;

    for neighborhood in queries {
        let url = search_url(ctx, neighborhood);
        log::info!("Fetching {url}");

        let html = match client.fetch_page(&url) {
            Ok(html) => html,
            Err(e) => {
                log::error!("Fetch failed: {e}");
                failed_queries += 1;
                continue;
            }
        };

        for lead in extract_leads(&html, ctx, neighborhood)? {
            sink.submit(lead);
        }
    }

    let total_leads = sink.len();
    let path = sink.end()?;
    println!("✅ Wrote {total_leads} leads to {}", path.display());

    if failed_queries > 0 {
        return Err(ScraperError::Network(format!(
            "{failed_queries} of {total_queries} queries failed"
        )));
    }

    Ok(())
}

fn list_estados() -> Result<(), ScraperError> {
    let client = LocalidadesClient::new()?;
    for estado in client.estados()? {
        println!("{} - {}", estado.sigla, estado.nome);
    }
    Ok(())
}

fn list_municipios(uf: &str) -> Result<(), ScraperError> {
    let client = LocalidadesClient::new()?;
    for municipio in client.municipios(uf)? {
        println!("{} - {}", municipio.id, municipio.nome);
    }
    Ok(())
}
