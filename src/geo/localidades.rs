// localidades.rs
use crate::errors::ScraperError;
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

const LOCALIDADES_BASE_URL: &str = "https://servicodados.ibge.gov.br/api/v1/localidades";

#[derive(Debug, Deserialize)]
pub struct Estado {
    pub id: u64,
    pub sigla: String,
    pub nome: String,
}

#[derive(Debug, Deserialize)]
pub struct Municipio {
    pub id: u64,
    pub nome: String,
}

/// Read-only client for the IBGE localidades reference API. Non-2xx
/// responses surface as errors; there is no retry or fallback list.
pub struct LocalidadesClient {
    client: Client,
}

impl LocalidadesClient {
    pub fn new() -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    pub fn estados(&self) -> Result<Vec<Estado>, ScraperError> {
        self.get_json(&format!("{LOCALIDADES_BASE_URL}/estados"))
    }

    pub fn municipios(&self, uf: &str) -> Result<Vec<Municipio>, ScraperError> {
        self.get_json(&format!("{LOCALIDADES_BASE_URL}/estados/{uf}/municipios"))
    }

    fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, ScraperError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScraperError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        resp.json().map_err(|e| ScraperError::Network(e.to_string()))
    }
}
