// 🔧 Demo Configuration - Built-in defaults, optionally overridden from JSON
//
// Every field has a default, so a config file only needs the keys it changes:
//   { "seed": 42, "products": { "count": 20, "csv_path": "products.csv" } }

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Fixed RNG seed for reproducible runs; None = seeded from entropy
    pub seed: Option<u64>,

    pub products: ProductDemoConfig,
    pub articles: ArticleDemoConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductDemoConfig {
    pub count: usize,
    pub processor_name: String,

    /// Category used for the filter example
    pub filter_category: String,

    /// Number of generated records echoed to the console
    pub preview_records: usize,

    /// Number of filtered records echoed to the console
    pub preview_filtered: usize,

    pub csv_path: Option<PathBuf>,
    pub json_path: Option<PathBuf>,
}

impl Default for ProductDemoConfig {
    fn default() -> Self {
        ProductDemoConfig {
            count: 150,
            processor_name: "demo_processor".to_string(),
            filter_category: "electronics".to_string(),
            preview_records: 5,
            preview_filtered: 3,
            csv_path: None,
            json_path: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleDemoConfig {
    pub count: usize,
    pub series_days: usize,
    pub moving_average_window: usize,
    pub anomaly_threshold: f64,
    pub keyword_limit: usize,

    /// Number of articles / series points echoed to the console
    pub preview_articles: usize,
    pub preview_points: usize,
}

impl Default for ArticleDemoConfig {
    fn default() -> Self {
        ArticleDemoConfig {
            count: 8,
            series_days: 30,
            moving_average_window: 7,
            anomaly_threshold: 2.0,
            keyword_limit: 20,
            preview_articles: 3,
            preview_points: 5,
        }
    }
}

impl DemoConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: DemoConfig = serde_json::from_str(&content)
            .context("Failed to parse config JSON")?;

        Ok(config)
    }

    /// RNG for the generators: seeded when `seed` is set
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
