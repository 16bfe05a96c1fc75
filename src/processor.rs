// ⚙️ Data Processor - Statistics, category breakdown and filtering for products

use crate::catalog::Product;
use crate::error::AnalysisError;
use crate::statistics::Summary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

pub const PROCESSOR_VERSION: &str = "1.0.0";
pub const PROCESSOR_AUTHOR: &str = "Demo Script";

// ============================================================================
// REPORT TYPES
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorMetadata {
    pub created_at: DateTime<Utc>,
    pub version: String,
    pub author: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub count: usize,
    pub total_price: f64,
}

impl CategoryTotals {
    pub fn average_price(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_price / self.count as f64
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingReport {
    pub total_records: usize,
    pub price_stats: Summary,
    pub quantity_stats: Summary,
    pub rating_stats: Summary,
    pub category_breakdown: BTreeMap<String, CategoryTotals>,
}

// ============================================================================
// FILTER
// ============================================================================

/// All supplied constraints must hold; omitted ones are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFilter {
    /// Exact category match. An empty string means "any category".
    pub category: Option<String>,

    /// Inclusive lower price bound
    pub min_price: Option<f64>,

    /// Inclusive upper price bound
    pub max_price: Option<f64>,
}

impl ProductFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn min_price(mut self, price: f64) -> Self {
        self.min_price = Some(price);
        self
    }

    pub fn max_price(mut self, price: f64) -> Self {
        self.max_price = Some(price);
        self
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = self.category.as_deref() {
            if !category.is_empty() && product.category != category {
                return false;
            }
        }

        if let Some(min) = self.min_price {
            if product.price < min {
                return false;
            }
        }

        if let Some(max) = self.max_price {
            if product.price > max {
                return false;
            }
        }

        true
    }

    /// Matching products, input order preserved
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        products.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}

// ============================================================================
// DATA PROCESSOR
// ============================================================================

pub struct DataProcessor {
    pub name: String,
    pub metadata: ProcessorMetadata,

    /// Records from the last successful process_data call
    processed: Vec<Product>,
}

impl DataProcessor {
    pub fn new(name: &str) -> Self {
        DataProcessor {
            name: name.to_string(),
            metadata: ProcessorMetadata {
                created_at: Utc::now(),
                version: PROCESSOR_VERSION.to_string(),
                author: PROCESSOR_AUTHOR.to_string(),
            },
            processed: Vec::new(),
        }
    }

    /// Compute per-field statistics and the category breakdown
    pub fn process_data(&mut self, products: &[Product]) -> Result<ProcessingReport, AnalysisError> {
        if products.is_empty() {
            tracing::warn!(processor = %self.name, "no products to process");
            return Err(AnalysisError::NoData);
        }

        let prices: Vec<f64> = products.iter().map(|p| p.price).collect();
        let quantities: Vec<f64> = products.iter().map(|p| p.quantity as f64).collect();
        let ratings: Vec<f64> = products.iter().map(|p| p.rating).collect();

        let mut category_breakdown: BTreeMap<String, CategoryTotals> = BTreeMap::new();
        for product in products {
            let entry = category_breakdown.entry(product.category.clone()).or_default();
            entry.count += 1;
            entry.total_price += product.price;
        }

        let report = ProcessingReport {
            total_records: products.len(),
            price_stats: Summary::from_values(&prices)?,
            quantity_stats: Summary::from_values(&quantities)?,
            rating_stats: Summary::from_values(&ratings)?,
            category_breakdown,
        };

        tracing::debug!(
            processor = %self.name,
            records = report.total_records,
            categories = report.category_breakdown.len(),
            "processed products"
        );

        self.processed = products.to_vec();
        Ok(report)
    }

    pub fn filter_data(&self, products: &[Product], filter: &ProductFilter) -> Vec<Product> {
        filter.apply(products)
    }

    pub fn processed_data(&self) -> &[Product] {
        &self.processed
    }

    /// Lowercase hex SHA-256 of `data`
    pub fn generate_hash(&self, data: &str) -> String {
        sha256_hex(data)
    }
}

pub fn sha256_hex(data: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data.as_bytes());
    format!("{:x}", hasher.finalize())
}

// ============================================================================
// TESTS
// ============================================================================
