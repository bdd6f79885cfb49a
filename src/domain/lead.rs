/// Placeholder values for fields the source page may omit. The output
/// schema is fixed, so every field is always populated with some text.
pub const NO_TITLE: &str = "Sem título";
pub const NO_ADDRESS: &str = "Sem endereço";
pub const NO_PHONE: &str = "Telefone não disponível";
pub const NO_WEBSITE: &str = "Website não disponível";
pub const NO_NEIGHBORHOOD: &str = "Não especificado";

/// One output row: the four run parameters plus the four business fields
/// extracted from a listing node. Invariant: no field is ever empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lead {
    pub search_term: String,
    pub state: String,
    pub city: String,
    pub neighborhood: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub website: String,
}
