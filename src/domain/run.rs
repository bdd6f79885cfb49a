/// Parameters for one scrape run. Built once from the CLI arguments and
/// read-only afterwards.
#[derive(Debug, Clone)]
pub struct RunContext {
    pub search_term: String,
    pub state: String,
    pub city: String,
    neighborhoods: Vec<String>,
}

impl RunContext {
    /// `bairros` is the raw comma-separated neighborhood list. Blank
    /// entries are dropped; an empty list means one unfiltered query.
    pub fn new(search_term: &str, state: &str, city: &str, bairros: &str) -> Self {
        let neighborhoods = bairros
            .split(',')
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(str::to_string)
            .collect();

        Self {
            search_term: search_term.to_string(),
            state: state.to_string(),
            city: city.to_string(),
            neighborhoods,
        }
    }

    /// The queries this run will issue, in order. `None` is the single
    /// unfiltered query used when no neighborhoods were given.
    pub fn queries(&self) -> Vec<Option<&str>> {
        if self.neighborhoods.is_empty() {
            vec![None]
        } else {
            self.neighborhoods.iter().map(|b| Some(b.as_str())).collect()
        }
    }
}
