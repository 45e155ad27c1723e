//! Seed dataset provisioning
//!
//! Host and guest views start from separate datasets. They come from a JSON
//! or TOML file named in the configuration, or from the dataset embedded in
//! the binary when no file is configured.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, debug};

use crate::models::gathering::Gathering;
use crate::utils::errors::{HoopBuddyError, Result};

const BUILTIN_SEED: &str = include_str!("../../data/seed.json");

/// Both datasets, as provisioned at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub host: Vec<Gathering>,
    #[serde(default)]
    pub guest: Vec<Gathering>,
}

/// Seed file formats, picked by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedFormat {
    Json,
    Toml,
}

impl SeedFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(SeedFormat::Json),
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(SeedFormat::Toml),
            _ => Err(HoopBuddyError::InvalidInput(format!(
                "Unsupported seed file: {}", path.display()
            ))),
        }
    }
}

impl SeedData {
    /// Parse and validate a seed document
    pub fn parse(content: &str, format: SeedFormat) -> Result<Self> {
        let seed: SeedData = match format {
            SeedFormat::Json => serde_json::from_str(content)?,
            SeedFormat::Toml => toml::from_str(content)?,
        };
        seed.validate()?;
        Ok(seed)
    }

    /// The dataset compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN_SEED, SeedFormat::Json)
    }

    /// Ids must be unique per dataset and per roster
    pub fn validate(&self) -> Result<()> {
        validate_dataset("host", &self.host)?;
        validate_dataset("guest", &self.guest)?;
        Ok(())
    }
}

fn validate_dataset(name: &str, gatherings: &[Gathering]) -> Result<()> {
    let mut ids = HashSet::new();
    for gathering in gatherings {
        if !ids.insert(gathering.id) {
            return Err(HoopBuddyError::InvalidInput(format!(
                "Duplicate gathering id {} in {} seed", gathering.id, name
            )));
        }

        let mut participant_ids = HashSet::new();
        for participant in &gathering.participants {
            if !participant_ids.insert(participant.id) {
                return Err(HoopBuddyError::InvalidInput(format!(
                    "Duplicate participant id {} in gathering {}", participant.id, gathering.id
                )));
            }
        }
    }
    Ok(())
}

/// Load seed data from a file
pub async fn load_seed_file(path: impl AsRef<Path>) -> Result<SeedData> {
    let path = path.as_ref();
    let format = SeedFormat::from_path(path)?;
    debug!(path = %path.display(), format = ?format, "Reading seed file");

    let content = tokio::fs::read_to_string(path).await?;
    let seed = SeedData::parse(&content, format)?;

    info!(
        path = %path.display(),
        host_gatherings = seed.host.len(),
        guest_gatherings = seed.guest.len(),
        "Seed data loaded"
    );
    Ok(seed)
}

/// Load the configured seed file, or the built-in dataset when none is set
pub async fn load_seed(path: Option<&str>) -> Result<SeedData> {
    match path {
        Some(path) => load_seed_file(path).await,
        None => {
            let seed = SeedData::builtin()?;
            info!(
                host_gatherings = seed.host.len(),
                guest_gatherings = seed.guest.len(),
                "Using built-in seed data"
            );
            Ok(seed)
        }
    }
}
