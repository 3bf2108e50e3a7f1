//! # Catalog
//!
//! The snack catalog as the session sees it: an immutable ordered sequence
//! fetched once at session start from the backend. A failed fetch leaves
//! the catalog empty and the hunt mechanic inert.

use anyhow::Error;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CatalogItem {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub emoji: String,
    pub description: String,
}

pub async fn fetch_catalog(base_url: &str) -> Result<Vec<CatalogItem>, Error> {
    let response = reqwest::get(format!("{base_url}/api/snacks")).await?;
    let items = response.error_for_status()?.json().await?;

    Ok(items)
}

#[cfg(test)]
pub fn test_catalog() -> Vec<CatalogItem> {
    vec![
        CatalogItem {
            id: 1,
            name: "Cheese Puffs".to_string(),
            price: 10.0,
            emoji: "🧀".to_string(),
            description: "Crunchy, cheesy clouds of joy".to_string(),
        },
        CatalogItem {
            id: 2,
            name: "Gummy Bears".to_string(),
            price: 20.0,
            emoji: "🐻".to_string(),
            description: "Squishy fruity friends".to_string(),
        },
    ]
}
