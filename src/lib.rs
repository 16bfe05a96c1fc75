// Demo Analytics - Core Library
// Product statistics demo + article/time-series text analysis demo, shared by the CLI and tests

pub mod catalog;
pub mod statistics;
pub mod processor;
pub mod export;
pub mod text;
pub mod timeseries;
pub mod articles;
pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use catalog::{generate_products, Product, PRODUCT_CATEGORIES};
pub use statistics::{mean_std, round_to, SeriesStats, Summary};
pub use processor::{
    sha256_hex, CategoryTotals, DataProcessor, ProcessingReport, ProcessorMetadata, ProductFilter,
};
pub use export::{save_to_csv, save_to_json, write_csv, write_json};
pub use text::{top_keywords, ReadabilityReport, TextProcessor, STOP_WORDS};
pub use timeseries::{
    calculate_statistics, generate_time_series, group_by, Anomaly, GroupKey, SeriesAnalyzer,
    SmoothedPoint, TimeSeriesPoint,
};
pub use articles::{generate_article_content, Article, ScrapingSimulator, DEFAULT_KEYWORD_LIMIT};
pub use config::{ArticleDemoConfig, DemoConfig, ProductDemoConfig};
pub use error::AnalysisError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
