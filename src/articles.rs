// 📰 Scraping Simulator - Fabricated articles for the text-analysis demo
// No HTTP: titles, authors and sentences come from fixed lists.

use crate::catalog::pick;
use crate::text::{top_keywords, TextProcessor};
use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const ARTICLE_TITLES: [&str; 10] = [
    "Technology Advances in AI",
    "Climate Change Impact Study",
    "Economic Growth Projections",
    "Healthcare Innovation Breakthrough",
    "Education System Reform",
    "Urban Development Plans",
    "Renewable Energy Solutions",
    "Space Exploration Updates",
    "Digital Transformation Trends",
    "Social Media Influence Analysis",
];

pub const ARTICLE_AUTHORS: [&str; 5] = [
    "John Smith",
    "Jane Doe",
    "Bob Johnson",
    "Alice Brown",
    "Charlie Davis",
];

pub const ARTICLE_CATEGORIES: [&str; 5] = ["technology", "science", "business", "health", "education"];

pub const ARTICLE_SENTENCES: [&str; 10] = [
    "The recent developments in this field have been remarkable.",
    "Experts believe this trend will continue in the coming years.",
    "Research has shown significant improvements in key areas.",
    "The implications for future studies are profound.",
    "This discovery opens up new possibilities for innovation.",
    "Stakeholders are optimistic about the potential outcomes.",
    "Further investigation is needed to fully understand the impact.",
    "The community has responded positively to these changes.",
    "Long-term effects remain to be seen.",
    "Collaboration between institutions has been crucial.",
];

pub const DEFAULT_KEYWORD_LIMIT: usize = 20;

// ============================================================================
// ARTICLE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub publish_date: NaiveDate,
    pub content: String,

    /// Reported length; random, not derived from `content`
    pub word_count: u32,
    pub category: String,
    pub views: u32,
    pub likes: u32,
}

// ============================================================================
// SCRAPING SIMULATOR
// ============================================================================

pub struct ScrapingSimulator {
    /// Request headers a real scraper would send
    pub headers: BTreeMap<String, String>,

    /// Last batch returned by simulate_article_scraping
    scraped: Vec<Article>,
}

impl ScrapingSimulator {
    pub fn new() -> Self {
        let headers = [
            ("User-Agent", "Mozilla/5.0 (compatible; DemoBot/1.0)"),
            ("Accept", "text/html,application/xhtml+xml"),
            ("Accept-Language", "en-US,en;q=0.9"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        ScrapingSimulator {
            headers,
            scraped: Vec::new(),
        }
    }

    /// Fabricate up to `count` articles (capped by the number of known titles)
    pub fn simulate_article_scraping<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        count: usize,
        today: NaiveDate,
    ) -> Vec<Article> {
        let articles: Vec<Article> = ARTICLE_TITLES
            .iter()
            .take(count)
            .enumerate()
            .map(|(i, title)| Article {
                id: i as u32 + 1,
                title: title.to_string(),
                author: pick(rng, &ARTICLE_AUTHORS),
                publish_date: today - Duration::days(rng.gen_range(1..=30)),
                content: generate_article_content(rng),
                word_count: rng.gen_range(200..=1000),
                category: pick(rng, &ARTICLE_CATEGORIES),
                views: rng.gen_range(100..=10_000),
                likes: rng.gen_range(10..=500),
            })
            .collect();

        tracing::debug!(requested = count, produced = articles.len(), "simulated scrape");

        self.scraped = articles.clone();
        articles
    }

    pub fn scraped(&self) -> &[Article] {
        &self.scraped
    }

    /// Most frequent non-stop-words across all article bodies
    pub fn extract_keywords(&self, articles: &[Article], limit: usize) -> Vec<(String, usize)> {
        let processor = TextProcessor::new();
        let words: Vec<String> = articles
            .iter()
            .flat_map(|a| processor.keywords(&a.content))
            .collect();

        top_keywords(&words, limit)
    }
}

impl Default for ScrapingSimulator {
    fn default() -> Self {
        Self::new()
    }
}

/// 3 to 6 distinct sentences in random order, space separated
pub fn generate_article_content<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut sentences = ARTICLE_SENTENCES.to_vec();
    sentences.shuffle(rng);
    sentences.truncate(rng.gen_range(3..=6));
    sentences.join(" ")
}

// ============================================================================
// TESTS
// ============================================================================
