//! Static catalog — destinations, stays, experiences and testimonials.
//!
//! The built-in catalog is compiled in. A catalog with the same shape can
//! also be loaded from a TOML file, which replaces the built-in data
//! wholesale (there is no merging).

mod destinations;
mod listings;

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Accommodation, Destination, DestinationId, Experience, Testimonial};

pub use destinations::FEATURED_COUNT;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("read catalog file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize catalog: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("duplicate destination id: {0}")]
    DuplicateDestination(DestinationId),
}

/// All browsable data. Read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub destinations: Vec<Destination>,
    #[serde(default)]
    pub accommodations: Vec<Accommodation>,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The compiled-in catalog.
    pub fn builtin() -> Self {
        Self {
            destinations: destinations::builtin(),
            accommodations: listings::accommodations(),
            experiences: listings::experiences(),
            testimonials: listings::testimonials(),
        }
    }

    /// Load a catalog from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a catalog from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(content)?;
        catalog.validate()?;
        tracing::debug!(
            destinations = catalog.destinations.len(),
            accommodations = catalog.accommodations.len(),
            "catalog loaded from TOML"
        );
        Ok(catalog)
    }

    /// Serialize the catalog to TOML.
    pub fn to_toml(&self) -> Result<String, CatalogError> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = std::collections::HashSet::new();
        for d in &self.destinations {
            if !seen.insert(&d.id) {
                return Err(CatalogError::DuplicateDestination(d.id.clone()));
            }
        }
        Ok(())
    }

    pub fn destination(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id.as_str() == id)
    }

    /// Leading destinations promoted on the home page.
    pub fn featured_destinations(&self) -> &[Destination] {
        let n = FEATURED_COUNT.min(self.destinations.len());
        &self.destinations[..n]
    }

    /// Stays at one destination, in catalog order. The result borrows only
    /// from the catalog, not from `destination_id`.
    pub fn accommodations_for(&self, destination_id: &str) -> Vec<&Accommodation> {
        self.accommodations
            .iter()
            .filter(|a| a.destination_id.as_str() == destination_id)
            .collect()
    }

    pub fn experiences_for(&self, destination_id: &str) -> Vec<&Experience> {
        self.experiences
            .iter()
            .filter(|e| e.destination_id.as_str() == destination_id)
            .collect()
    }
}
