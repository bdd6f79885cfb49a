mod localidades;

pub use localidades::{Estado, LocalidadesClient, Municipio};
