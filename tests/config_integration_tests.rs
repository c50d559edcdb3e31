//! Integration tests for the preference store and YAML file handling
//!
//! These tests verify:
//! - Filter preference loading and saving
//! - Degradation to defaults on missing or corrupt files
//! - Catalog loading with the built-in line-up fallback
//! - Catalog file overrides

use camino::Utf8PathBuf;
use std::fs;
use tempfile::TempDir;
use voltedge::PreferenceStore;
use voltedge::catalog::default_catalog;
use voltedge::models::{FilterCategory, FilterState};

fn create_test_store_dir() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, config_path)
}

#[test]
fn test_create_preference_store() {
    let (_temp_dir, config_path) = create_test_store_dir();
    let store = PreferenceStore::new(&config_path).unwrap();

    assert_eq!(store.config_dir(), &config_path);
}

#[test]
fn test_store_creates_missing_directory() {
    let (_temp_dir, config_path) = create_test_store_dir();
    let nested = config_path.join("nested").join("VoltEdge Data");

    let store = PreferenceStore::new(&nested).unwrap();
    assert!(store.config_dir().exists());
}

#[test]
fn test_filter_round_trip() {
    let (_temp_dir, config_path) = create_test_store_dir();
    let store = PreferenceStore::new(&config_path).unwrap();

    let mut filters = FilterState::default();
    filters.set(FilterCategory::BodyType, "suv");
    filters.set(FilterCategory::Range, "550+");
    filters.set(FilterCategory::Price, "45k+");
    store.save_filters(&filters).unwrap();

    let loaded = store.load_filters();
    assert_eq!(loaded, filters);
}

#[test]
fn test_missing_filter_file_yields_defaults() {
    let (_temp_dir, config_path) = create_test_store_dir();
    let store = PreferenceStore::new(&config_path).unwrap();

    assert_eq!(store.load_filters(), FilterState::default());
}

#[test]
fn test_corrupt_filter_file_yields_defaults() {
    let (_temp_dir, config_path) = create_test_store_dir();
    let store = PreferenceStore::new(&config_path).unwrap();

    fs::write(
        config_path.join("VoltEdge Filters.yaml"),
        "bodyType: [this is\nnot: valid yaml",
    )
    .unwrap();

    assert_eq!(store.load_filters(), FilterState::default());
}

#[test]
fn test_unknown_bucket_in_file_yields_defaults() {
    let (_temp_dir, config_path) = create_test_store_dir();
    let store = PreferenceStore::new(&config_path).unwrap();

    // Well-formed YAML with a bucket value that no longer exists
    fs::write(
        config_path.join("VoltEdge Filters.yaml"),
        "body_type: monster-truck\nrange: all\nprice: all\n",
    )
    .unwrap();

    assert_eq!(store.load_filters(), FilterState::default());
}

#[test]
fn test_missing_catalog_falls_back_to_builtin() {
    let (_temp_dir, config_path) = create_test_store_dir();
    let store = PreferenceStore::new(&config_path).unwrap();

    let catalog = store.load_catalog().unwrap();
    assert_eq!(catalog.len(), 4);
    assert_eq!(catalog.get("city").unwrap().price, 29_990);
}

#[test]
fn test_catalog_round_trip() {
    let (_temp_dir, config_path) = create_test_store_dir();
    let store = PreferenceStore::new(&config_path).unwrap();

    let catalog = default_catalog();
    store.save_catalog(&catalog).unwrap();

    let loaded = store.load_catalog().unwrap();
    assert_eq!(loaded, catalog);
}

#[test]
fn test_corrupt_catalog_is_an_error() {
    let (_temp_dir, config_path) = create_test_store_dir();
    let store = PreferenceStore::new(&config_path).unwrap();

    fs::write(config_path.join("VoltEdge Catalog.yaml"), "models: 42").unwrap();

    // Unlike filters, a present-but-broken catalog is surfaced to the caller
    assert!(store.load_catalog().is_err());
}
