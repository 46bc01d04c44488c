use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: f64,
    /// Id of the owning catalogue, if any. A product belongs to at most one
    /// catalogue; the catalogue holds the matching entry in its name set.
    pub catalogue: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            price,
            catalogue: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Case-insensitive comparison used by every by-name lookup.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalogue {
    pub id: Uuid,
    pub name: String,
    /// Names of the products filed under this catalogue. Stored as an index
    /// of keys rather than live references; each product carries the
    /// back-reference in [`Product::catalogue`].
    pub products: BTreeSet<String>,
}

impl Catalogue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            products: BTreeSet::new(),
        }
    }

    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}
