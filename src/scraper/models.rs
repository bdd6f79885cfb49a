use serde::Deserialize;

// data-entity
//  └── entity
//       ├── title
//       ├── address
//       ├── phone
//       └── website

/// JSON payload embedded in a listing node's `data-entity` attribute.
#[derive(Debug, Deserialize)]
pub struct ListingPayload {
    pub entity: Entity,
}

#[derive(Debug, Deserialize)]
pub struct Entity {
    pub title: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
}
