use crate::catalog::{ModelCatalog, default_catalog};
use crate::models::FilterState;
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Preference store for loading and saving YAML state files.
///
/// Manages two files:
/// - Filter preferences (`VoltEdge Filters.yaml`): the last active filter buckets
/// - Model catalog (`VoltEdge Catalog.yaml`): the vehicle line-up, if overridden
#[derive(Debug, Clone)]
pub struct PreferenceStore {
    config_dir: Utf8PathBuf,
    filters_path: Utf8PathBuf,
    catalog_path: Utf8PathBuf,
}

impl PreferenceStore {
    /// Create a new PreferenceStore with the specified data directory.
    ///
    /// # Arguments
    /// * `config_dir` - Directory containing state files (e.g., "VoltEdge Data")
    ///
    /// # Returns
    /// A new PreferenceStore instance
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();

        // Create config directory if it doesn't exist
        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {}", config_dir))?;
        }

        Ok(Self {
            filters_path: config_dir.join("VoltEdge Filters.yaml"),
            catalog_path: config_dir.join("VoltEdge Catalog.yaml"),
            config_dir,
        })
    }

    /// Load the persisted filter preferences.
    ///
    /// Persistence is strictly an enhancement: a missing or unparseable file
    /// degrades to the unconstrained default instead of failing.
    pub fn load_filters(&self) -> FilterState {
        if !self.filters_path.exists() {
            tracing::debug!(
                "Filter file not found at {}, using defaults",
                self.filters_path
            );
            return FilterState::default();
        }

        let file_contents = match fs::read_to_string(&self.filters_path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!(
                    "Failed to read filter file {}, using defaults: {e}",
                    self.filters_path
                );
                return FilterState::default();
            }
        };

        match serde_yaml_ng::from_str(&file_contents) {
            Ok(filters) => {
                tracing::info!("Loaded filter preferences from {}", self.filters_path);
                filters
            }
            Err(e) => {
                tracing::warn!(
                    "Failed to parse filter file {}, using defaults: {e}",
                    self.filters_path
                );
                FilterState::default()
            }
        }
    }

    /// Save the filter preferences.
    ///
    /// # Arguments
    /// * `filters` - The FilterState to save
    pub fn save_filters(&self, filters: &FilterState) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(filters).context("Failed to serialize filters to YAML")?;

        fs::write(&self.filters_path, yaml_string)
            .with_context(|| format!("Failed to write filter file: {}", self.filters_path))?;

        tracing::debug!("Saved filter preferences to {}", self.filters_path);
        Ok(())
    }

    /// Load the model catalog.
    ///
    /// # Returns
    /// The loaded ModelCatalog, or the built-in line-up if the file doesn't exist
    pub fn load_catalog(&self) -> Result<ModelCatalog> {
        if !self.catalog_path.exists() {
            tracing::info!(
                "Catalog file not found at {}, using built-in line-up",
                self.catalog_path
            );
            return Ok(default_catalog());
        }

        let file_contents = fs::read_to_string(&self.catalog_path)
            .with_context(|| format!("Failed to read catalog: {}", self.catalog_path))?;

        let catalog: ModelCatalog = serde_yaml_ng::from_str(&file_contents)
            .with_context(|| format!("Failed to parse catalog: {}", self.catalog_path))?;

        tracing::info!(
            "Loaded catalog with {} models from {}",
            catalog.len(),
            self.catalog_path
        );
        Ok(catalog)
    }

    /// Save the model catalog.
    ///
    /// # Arguments
    /// * `catalog` - The ModelCatalog to save
    pub fn save_catalog(&self, catalog: &ModelCatalog) -> Result<()> {
        let yaml_string =
            serde_yaml_ng::to_string(catalog).context("Failed to serialize catalog to YAML")?;

        fs::write(&self.catalog_path, yaml_string)
            .with_context(|| format!("Failed to write catalog: {}", self.catalog_path))?;

        tracing::info!("Saved catalog to {}", self.catalog_path);
        Ok(())
    }

    /// Get the configuration directory path.
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }
}
