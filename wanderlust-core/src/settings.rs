//! User settings — a small TOML file under the platform config directory.
//!
//! ```toml
//! [budget]
//! travelers = 2
//! days = 7
//! currency = "USD"
//!
//! [accommodations]
//! price_ceiling = 1000
//! price_step = 50
//!
//! [itinerary]
//! auto_renumber = false
//!
//! [catalog]
//! path = "/path/to/catalog.toml"
//! ```
//!
//! Every section and key is optional. A missing file means defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::budget::{BudgetCalculator, Currency};
use crate::catalog::{Catalog, CatalogError};
use crate::filter::{PRICE_CEILING, PRICE_STEP};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("read settings file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse settings TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid setting {key}: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetSettings {
    pub travelers: u32,
    pub days: u32,
    pub currency: Currency,
}

impl Default for BudgetSettings {
    fn default() -> Self {
        Self {
            travelers: 2,
            days: 7,
            currency: Currency::USD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccommodationSettings {
    pub price_ceiling: u32,
    pub price_step: u32,
}

impl Default for AccommodationSettings {
    fn default() -> Self {
        Self {
            price_ceiling: PRICE_CEILING,
            price_step: PRICE_STEP,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItinerarySettings {
    pub auto_renumber: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Catalog TOML replacing the built-in data.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub budget: BudgetSettings,
    pub accommodations: AccommodationSettings,
    pub itinerary: ItinerarySettings,
    pub catalog: CatalogSettings,
}

impl Settings {
    /// `<config dir>/wanderlust/config.toml`, when the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("wanderlust").join("config.toml"))
    }

    /// Load from `path`; a missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                tracing::info!(path = %path.display(), "loaded settings");
                Self::from_toml(&content)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no settings file, using defaults");
                Ok(Self::default())
            }
            Err(source) => Err(SettingsError::Read {
                path: path.display().to_string(),
                source,
            }),
        }
    }

    /// Load from [`Settings::default_path`], or defaults when there is none.
    pub fn load_default() -> Result<Self, SettingsError> {
        match Self::default_path() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_toml(&self) -> Result<String, SettingsError> {
        Ok(toml::to_string_pretty(self)?)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        if self.budget.travelers == 0 {
            return Err(SettingsError::Invalid {
                key: "budget.travelers",
                reason: "must be at least 1".into(),
            });
        }
        if self.budget.days == 0 {
            return Err(SettingsError::Invalid {
                key: "budget.days",
                reason: "must be at least 1".into(),
            });
        }
        if self.accommodations.price_step == 0 {
            return Err(SettingsError::Invalid {
                key: "accommodations.price_step",
                reason: "must be positive".into(),
            });
        }
        if self.accommodations.price_step > self.accommodations.price_ceiling {
            return Err(SettingsError::Invalid {
                key: "accommodations.price_step",
                reason: format!(
                    "{} exceeds price_ceiling {}",
                    self.accommodations.price_step, self.accommodations.price_ceiling
                ),
            });
        }
        Ok(())
    }

    /// The configured catalog file, or the built-in catalog.
    pub fn load_catalog(&self) -> Result<Catalog, SettingsError> {
        match &self.catalog.path {
            Some(path) => Ok(Catalog::from_file(path)?),
            None => Ok(Catalog::builtin()),
        }
    }

    /// A fresh budget with the configured trip defaults.
    pub fn new_budget(&self) -> BudgetCalculator {
        BudgetCalculator::new(self.budget.travelers, self.budget.days, self.budget.currency)
    }
}
