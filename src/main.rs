use anyhow::{bail, Result};
use chrono::Local;
use std::env;
use std::path::PathBuf;

use demo_analytics::{
    calculate_statistics, generate_products, generate_time_series, group_by, logging,
    save_to_csv, save_to_json, sha256_hex, DataProcessor, DemoConfig, GroupKey, ProductFilter,
    ScrapingSimulator, SeriesAnalyzer, TextProcessor,
};

const USAGE: &str = "Usage: demo-analytics [products|articles|all] [--config <file.json>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Products,
    Articles,
    All,
}

fn main() -> Result<()> {
    logging::init()?;

    let args: Vec<String> = env::args().skip(1).collect();
    let (command, config_path) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!("   {}", USAGE);
            std::process::exit(2);
        }
    };

    let config = match config_path {
        Some(path) => DemoConfig::from_file(path)?,
        None => DemoConfig::default(),
    };
    tracing::info!(?command, seed = ?config.seed, "starting demo");

    match command {
        Command::Products => run_products_demo(&config)?,
        Command::Articles => run_articles_demo(&config)?,
        Command::All => {
            run_products_demo(&config)?;
            println!();
            run_articles_demo(&config)?;
        }
    }

    Ok(())
}

fn parse_args(args: &[String]) -> Result<(Command, Option<PathBuf>)> {
    let mut command = None;
    let mut config_path = None;
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" | "-c" => match iter.next() {
                Some(path) => config_path = Some(PathBuf::from(path)),
                None => bail!("--config needs a file path"),
            },
            "products" | "articles" | "all" if command.is_some() => {
                bail!("Only one demo can be selected")
            }
            "products" => command = Some(Command::Products),
            "articles" => command = Some(Command::Articles),
            "all" => command = Some(Command::All),
            other => bail!("Unknown argument: {}", other),
        }
    }

    Ok((command.unwrap_or(Command::All), config_path))
}

// ============================================================================
// PRODUCT DEMO
// ============================================================================

fn run_products_demo(config: &DemoConfig) -> Result<()> {
    let settings = &config.products;
    let mut rng = config.rng();

    println!("=== Data Processing Demo ===");

    let mut processor = DataProcessor::new(&settings.processor_name);

    println!("Generating sample data...");
    let products = generate_products(&mut rng, settings.count);
    println!("Generated {} records", products.len());

    println!("Processing data...");
    let report = processor.process_data(&products);

    let filter = ProductFilter::new().category(settings.filter_category.as_str());
    let filtered = processor.filter_data(&products, &filter);

    match &report {
        Ok(stats) => {
            println!("\n=== Statistics ===");
            println!("Total records: {}", stats.total_records);
            println!("Average price: ${:.2}", stats.price_stats.mean);
            println!("Average quantity: {:.1}", stats.quantity_stats.mean);
            println!("Average rating: {:.1}", stats.rating_stats.mean);

            println!("\n=== Category Breakdown ===");
            for (category, totals) in &stats.category_breakdown {
                println!(
                    "{}: {} items, avg price: ${:.2}",
                    category,
                    totals.count,
                    totals.average_price()
                );
            }
        }
        Err(e) => println!("\n⚠️  {}", e),
    }

    println!("\n=== Filter Example ===");
    println!("{} items: {}", capitalize(&settings.filter_category), filtered.len());

    println!("\n=== Data Output ===");
    if let Some(path) = &settings.csv_path {
        let saved = save_to_csv(&products, path);
        println!("CSV export to {}: {}", path.display(), if saved { "ok" } else { "failed" });
    }
    if let Some(path) = &settings.json_path {
        let saved = match &report {
            Ok(stats) => save_to_json(stats, path),
            Err(e) => save_to_json(e, path),
        };
        println!("JSON export to {}: {}", path.display(), if saved { "ok" } else { "failed" });
    }

    println!("\n--- Sample Data (first {} records) ---", settings.preview_records);
    for (i, product) in products.iter().take(settings.preview_records).enumerate() {
        println!("Record {}: {}", i + 1, serde_json::to_string(product)?);
    }

    println!("\n--- Full Statistics ---");
    match &report {
        Ok(stats) => println!("{}", serde_json::to_string_pretty(stats)?),
        Err(e) => println!("{}", serde_json::to_string_pretty(e)?),
    }

    println!("\n--- {} Items ---", capitalize(&settings.filter_category));
    for product in filtered.iter().take(settings.preview_filtered) {
        println!("  {}", serde_json::to_string(product)?);
    }

    println!("\n--- Metadata ---");
    println!("Data hash: {}", processor.generate_hash(&products.len().to_string()));
    println!("Processor name: {}", processor.name);
    println!("Created at: {}", processor.metadata.created_at.to_rfc3339());

    println!("\n=== Demo Complete ===");
    Ok(())
}

// ============================================================================
// ARTICLE / TIME SERIES DEMO
// ============================================================================

fn run_articles_demo(config: &DemoConfig) -> Result<()> {
    let settings = &config.articles;
    let mut rng = config.rng();
    let today = Local::now().date_naive();

    println!("=== Text Processing and Data Analysis Demo ===");

    let text_processor = TextProcessor::new();
    let analyzer = SeriesAnalyzer::new()
        .with_window(settings.moving_average_window)
        .with_threshold(settings.anomaly_threshold);
    let mut scraper = ScrapingSimulator::new();

    println!("\n=== Simulating Web Scraping ===");
    let articles = scraper.simulate_article_scraping(&mut rng, settings.count, today);
    println!("Scraped {} articles", articles.len());

    println!("\n=== Processing Text ===");
    if let Some(first) = articles.first() {
        let sample_text = &first.content;
        let cleaned = text_processor.clean_text(sample_text);
        let tokens = text_processor.tokenize(&cleaned);
        let filtered = text_processor.remove_stop_words(&tokens);

        println!("Original text length: {}", sample_text.chars().count());
        println!("Cleaned text length: {}", cleaned.chars().count());
        println!("Token count: {}", tokens.len());
        println!("After stop words removal: {}", filtered.len());

        match text_processor.readability(sample_text) {
            Ok(readability) => println!("Readability score: {}", readability.readability_score),
            Err(e) => println!("Readability score: n/a ({})", e),
        }
    }

    println!("\n=== Time Series Analysis ===");
    let series = generate_time_series(&mut rng, settings.series_days, today);
    println!("Generated {} data points", series.len());

    let stats = calculate_statistics(&series);
    match &stats {
        Ok(s) => println!(
            "Value statistics: mean={:.2}, min={:.2}, max={:.2}",
            s.mean, s.min, s.max
        ),
        Err(e) => println!("Value statistics: {}", e),
    }

    let smoothed = analyzer.moving_average(&series);
    println!(
        "Calculated moving averages with {}-day window",
        settings.moving_average_window
    );

    let anomalies = analyzer.detect_anomalies(&series);
    println!("Detected {} anomalies", anomalies.len());

    let grouped = group_by(&series, GroupKey::Category);
    println!("Data grouped by {} categories", grouped.len());

    let keywords = scraper.extract_keywords(&articles, settings.keyword_limit);
    println!("\n=== Top Keywords ===");
    for (keyword, count) in keywords.iter().take(5) {
        println!("{}: {}", keyword, count);
    }

    println!("\n=== Data Output ===");

    println!("\n--- Article Data ---");
    for (i, article) in articles.iter().take(settings.preview_articles).enumerate() {
        println!("Article {}:", i + 1);
        println!("  Title: {}", article.title);
        println!("  Author: {}", article.author);
        println!("  Date: {}", article.publish_date);
        println!("  Category: {}", article.category);
        println!("  Word count: {}", article.word_count);
        println!("  Views: {}", article.views);
        println!("  Likes: {}", article.likes);
        println!();
    }

    println!("--- Time Series Data (first {} points) ---", settings.preview_points);
    for (i, point) in series.iter().take(settings.preview_points).enumerate() {
        println!("Day {}: {}", i + 1, serde_json::to_string(point)?);
    }

    println!("\n--- Time Series Statistics ---");
    match &stats {
        Ok(s) => println!("{}", serde_json::to_string_pretty(s)?),
        Err(e) => println!("{}", serde_json::to_string_pretty(e)?),
    }

    println!("\n--- Moving Averages (first {} points) ---", settings.preview_points);
    for (i, point) in smoothed.iter().take(settings.preview_points).enumerate() {
        println!(
            "Day {}: value={}, moving_avg={}",
            i + 1,
            point.point.value,
            point.moving_avg
        );
    }

    if !anomalies.is_empty() {
        println!("\n--- Anomalies ---");
        for anomaly in &anomalies {
            println!("{}: value={}, z_score={}", anomaly.point.date, anomaly.point.value, anomaly.z_score);
        }
    }

    println!("\n--- Grouped by Category ---");
    for (category, items) in &grouped {
        println!("{}: {} items", category, items.len());
    }

    println!("\n--- Top 10 Keywords ---");
    for (keyword, count) in keywords.iter().take(10) {
        println!("{}: {}", keyword, count);
    }

    println!("\n--- Metadata ---");
    println!("Data integrity hash: {}", sha256_hex(&articles.len().to_string()));
    println!("Total articles processed: {}", articles.len());
    println!("Total time series points: {}", series.len());

    println!("\n=== Demo Complete ===");
    Ok(())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_runs_everything() {
        let (command, config) = parse_args(&[]).unwrap();
        assert_eq!(command, Command::All);
        assert!(config.is_none());
    }

    #[test]
    fn test_subcommand_and_config() {
        let (command, config) = parse_args(&args(&["articles", "--config", "demo.json"])).unwrap();
        assert_eq!(command, Command::Articles);
        assert_eq!(config, Some(PathBuf::from("demo.json")));

        let (command, _) = parse_args(&args(&["-c", "x.json", "products"])).unwrap();
        assert_eq!(command, Command::Products);
    }

    #[test]
    fn test_bad_args() {
        assert!(parse_args(&args(&["import"])).is_err());
        assert!(parse_args(&args(&["--config"])).is_err());
        assert!(parse_args(&args(&["products", "articles"])).is_err());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("electronics"), "Electronics");
        assert_eq!(capitalize(""), "");
    }
}
