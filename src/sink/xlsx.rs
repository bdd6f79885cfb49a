// xlsx.rs
use crate::domain::Lead;
use crate::errors::ScraperError;
use chrono::Local;
use rust_xlsxwriter::Workbook;
use std::fs;
use std::path::{Path, PathBuf};

/// Column headers, in output order. One label per `Lead` field.
pub const HEADERS: [&str; 8] = [
    "Termo", "Estado", "Cidade", "Bairro", "Nome", "Endereço", "Telefone", "Website",
];

pub const SHEET_NAME: &str = "Resultados";

/// Accumulates leads in memory across a run and flushes them to a single
/// timestamped workbook at the end. Lifecycle: `begin` → any number of
/// `submit` calls → `end`.
pub struct LeadSink {
    out_dir: PathBuf,
    rows: Vec<Lead>,
}

impl LeadSink {
    /// Establishes the output directory, creating it if absent.
    pub fn begin(out_dir: impl AsRef<Path>) -> Result<Self, ScraperError> {
        let out_dir = out_dir.as_ref().to_path_buf();
        fs::create_dir_all(&out_dir).map_err(|e| {
            ScraperError::Io(format!(
                "Failed to create output directory {}: {e}",
                out_dir.display()
            ))
        })?;

        Ok(Self {
            out_dir,
            rows: Vec::new(),
        })
    }

    pub fn submit(&mut self, lead: Lead) {
        self.rows.push(lead);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Writes header plus all submitted rows to `leads_YYYYMMDD_HHMMSS.xlsx`
    /// in the output directory and returns the path. Always produces exactly
    /// one file, even when nothing was submitted.
    pub fn end(self) -> Result<PathBuf, ScraperError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(SHEET_NAME)
            .map_err(|e| ScraperError::Xlsx(format!("Failed to name worksheet: {e}")))?;

        for (col, header) in HEADERS.iter().enumerate() {
            worksheet.write_string(0, col as u16, *header).map_err(|e| {
                ScraperError::Xlsx(format!("Failed to write header '{header}': {e}"))
            })?;
        }

        for (i, lead) in self.rows.iter().enumerate() {
            let r = (i + 1) as u32;
            let cells = [
                &lead.search_term,
                &lead.state,
                &lead.city,
                &lead.neighborhood,
                &lead.name,
                &lead.address,
                &lead.phone,
                &lead.website,
            ];

            for (col, value) in cells.iter().enumerate() {
                worksheet.write_string(r, col as u16, *value).map_err(|e| {
                    ScraperError::Xlsx(format!(
                        "Failed to write '{}' in row {r}: {e}",
                        HEADERS[col]
                    ))
                })?;
            }
        }

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let path = self.out_dir.join(format!("leads_{timestamp}.xlsx"));

        workbook
            .save(&path)
            .map_err(|e| ScraperError::Xlsx(format!("Failed to save workbook: {e}")))?;

        Ok(path)
    }
}
