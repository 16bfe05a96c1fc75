// 🛒 Product Catalog - Synthetic item records
// Uniform random products used by the statistics/filter/export demo

use crate::statistics::round_to;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub const PRODUCT_CATEGORIES: [&str; 5] = ["electronics", "clothing", "books", "home", "sports"];

pub const MIN_PRICE: f64 = 10.0;
pub const MAX_PRICE: f64 = 500.0;
pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

// ============================================================================
// PRODUCT
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// 1-based position in the generated batch
    pub id: u32,

    pub name: String,
    pub category: String,

    /// Rounded to cents, within [MIN_PRICE, MAX_PRICE]
    pub price: f64,

    /// 1..=100
    pub quantity: u32,

    /// Rounded to one decimal, within [MIN_RATING, MAX_RATING]
    pub rating: f64,

    pub available: bool,
}

// ============================================================================
// GENERATOR
// ============================================================================

/// Generate `count` products with ids 1..=count
pub fn generate_products<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Product> {
    (1..=count)
        .map(|i| {
            let id = i as u32;
            Product {
                id,
                name: format!("Product_{}", id),
                category: pick(rng, &PRODUCT_CATEGORIES),
                price: round_to(rng.gen_range(MIN_PRICE..=MAX_PRICE), 2),
                quantity: rng.gen_range(1..=100),
                rating: round_to(rng.gen_range(MIN_RATING..=MAX_RATING), 1),
                available: rng.gen_bool(0.5),
            }
        })
        .collect()
}

/// Uniformly pick one of a fixed list of labels; an empty list yields ""
pub(crate) fn pick<R: Rng + ?Sized>(rng: &mut R, options: &[&str]) -> String {
    options
        .choose(rng)
        .map(|label| label.to_string())
        .unwrap_or_default()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_products_count_and_ids() {
        let mut rng = StdRng::seed_from_u64(7);
        let products = generate_products(&mut rng, 150);

        assert_eq!(products.len(), 150);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[0].name, "Product_1");
        assert_eq!(products[149].id, 150);
        assert_eq!(products[149].name, "Product_150");
    }

    #[test]
    fn test_generated_fields_within_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        for p in generate_products(&mut rng, 500) {
            assert!(PRODUCT_CATEGORIES.contains(&p.category.as_str()));
            assert!(p.price >= MIN_PRICE && p.price <= MAX_PRICE, "price {}", p.price);
            assert!((1..=100).contains(&p.quantity));
            assert!(p.rating >= MIN_RATING && p.rating <= MAX_RATING, "rating {}", p.rating);
            // Rounded to cents / tenths
            assert!(((p.price * 100.0).round() - p.price * 100.0).abs() < 1e-6);
            assert!(((p.rating * 10.0).round() - p.rating * 10.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_same_seed_same_products() {
        let a = generate_products(&mut StdRng::seed_from_u64(1), 20);
        let b = generate_products(&mut StdRng::seed_from_u64(1), 20);
        assert_eq!(a, b);
    }

    #[test]
    fn test_pick_stays_in_options() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            let label = pick(&mut rng, &PRODUCT_CATEGORIES);
            assert!(PRODUCT_CATEGORIES.contains(&label.as_str()));
            seen.insert(label);
        }
        assert_eq!(seen.len(), PRODUCT_CATEGORIES.len());
        assert_eq!(pick(&mut rng, &[]), "");
    }

    #[test]
    fn test_zero_count() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate_products(&mut rng, 0).is_empty());
    }
}
