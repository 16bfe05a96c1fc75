// 📈 Time Series - Synthetic daily series, smoothing and z-score anomalies

use crate::catalog::pick;
use crate::error::AnalysisError;
use crate::statistics::{mean_std, round_to, SeriesStats};
use chrono::{Duration, NaiveDate};
use rand::Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

pub const SERIES_CATEGORIES: [&str; 3] = ["sales", "traffic", "engagement"];
pub const SERIES_REGIONS: [&str; 4] = ["north", "south", "east", "west"];

const BASE_LEVEL: f64 = 100.0;
const SEASONAL_AMPLITUDE: f64 = 10.0;
const SEASONAL_STEP: f64 = 0.2;
const NOISE_STD_DEV: f64 = 5.0;

// ============================================================================
// POINT TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
    pub category: String,
    pub region: String,
}

/// A point annotated with its trailing moving average
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SmoothedPoint {
    #[serde(flatten)]
    pub point: TimeSeriesPoint,
    pub moving_avg: f64,
}

/// A point whose z-score exceeded the detection threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    #[serde(flatten)]
    pub point: TimeSeriesPoint,
    pub z_score: f64,
    pub anomaly: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupKey {
    Category,
    Region,
    /// ISO `YYYY-MM-DD` day
    Date,
}

impl GroupKey {
    pub fn key_of<'a>(&self, point: &'a TimeSeriesPoint) -> Cow<'a, str> {
        match self {
            GroupKey::Category => Cow::Borrowed(&point.category),
            GroupKey::Region => Cow::Borrowed(&point.region),
            GroupKey::Date => Cow::Owned(point.date.format("%Y-%m-%d").to_string()),
        }
    }
}

// ============================================================================
// GENERATION
// ============================================================================

/// `days` consecutive daily points ending the day before `today`.
/// Values follow 100 + 10·sin(0.2·i) plus N(0, 5) noise, floored at 0.
pub fn generate_time_series<R: Rng + ?Sized>(
    rng: &mut R,
    days: usize,
    today: NaiveDate,
) -> Vec<TimeSeriesPoint> {
    let start = today - Duration::days(days as i64);

    (0..days)
        .map(|i| {
            let seasonal = BASE_LEVEL + SEASONAL_AMPLITUDE * (i as f64 * SEASONAL_STEP).sin();
            let noise: f64 = rng.sample::<f64, _>(StandardNormal) * NOISE_STD_DEV;

            TimeSeriesPoint {
                date: start + Duration::days(i as i64),
                value: round_to((seasonal + noise).max(0.0), 2),
                category: pick(rng, &SERIES_CATEGORIES),
                region: pick(rng, &SERIES_REGIONS),
            }
        })
        .collect()
}

// ============================================================================
// SERIES ANALYZER
// ============================================================================

pub struct SeriesAnalyzer {
    /// Trailing window for moving averages (default: 7)
    pub window: usize,

    /// Z-score above which a point is an anomaly (default: 2.0)
    pub threshold: f64,

    /// Below this many points anomaly detection reports nothing (default: 3)
    pub min_points: usize,
}

impl SeriesAnalyzer {
    pub fn new() -> Self {
        SeriesAnalyzer {
            window: 7,
            threshold: 2.0,
            min_points: 3,
        }
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Trailing mean over up to `window` points; the window shrinks near the start
    pub fn moving_average(&self, points: &[TimeSeriesPoint]) -> Vec<SmoothedPoint> {
        let window = self.window.max(1);

        points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let start = (i + 1).saturating_sub(window);
                let slice = &points[start..=i];
                let sum: f64 = slice.iter().map(|p| p.value).sum();

                SmoothedPoint {
                    point: point.clone(),
                    moving_avg: round_to(sum / slice.len() as f64, 2),
                }
            })
            .collect()
    }

    /// Flag points more than `threshold` population standard deviations from the mean
    pub fn detect_anomalies(&self, points: &[TimeSeriesPoint]) -> Vec<Anomaly> {
        if points.len() < self.min_points {
            tracing::debug!(points = points.len(), "too few points for anomaly detection");
            return Vec::new();
        }

        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        let (mean, std) = mean_std(&values);
        if std == 0.0 {
            return Vec::new();
        }

        points
            .iter()
            .filter_map(|point| {
                let z = (point.value - mean).abs() / std;
                (z > self.threshold).then(|| Anomaly {
                    point: point.clone(),
                    z_score: round_to(z, 2),
                    anomaly: true,
                })
            })
            .collect()
    }
}

impl Default for SeriesAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// GROUPING & STATISTICS
// ============================================================================

pub fn group_by(points: &[TimeSeriesPoint], key: GroupKey) -> BTreeMap<String, Vec<TimeSeriesPoint>> {
    let mut groups: BTreeMap<String, Vec<TimeSeriesPoint>> = BTreeMap::new();
    for point in points {
        groups
            .entry(key.key_of(point).into_owned())
            .or_default()
            .push(point.clone());
    }
    groups
}

pub fn calculate_statistics(points: &[TimeSeriesPoint]) -> Result<SeriesStats, AnalysisError> {
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    SeriesStats::from_values(&values)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn series(values: &[f64]) -> Vec<TimeSeriesPoint> {
        let start = date("2024-01-01");
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| TimeSeriesPoint {
                date: start + Duration::days(i as i64),
                value,
                category: SERIES_CATEGORIES[i % 3].to_string(),
                region: SERIES_REGIONS[i % 4].to_string(),
            })
            .collect()
    }

    #[test]
    fn test_generate_time_series_dates_and_values() {
        let mut rng = StdRng::seed_from_u64(3);
        let today = date("2024-03-31");
        let points = generate_time_series(&mut rng, 30, today);

        assert_eq!(points.len(), 30);
        assert_eq!(points[0].date, date("2024-03-01"));
        assert_eq!(points[29].date, date("2024-03-30"));
        for p in &points {
            assert!(p.value >= 0.0);
            assert!(SERIES_CATEGORIES.contains(&p.category.as_str()));
            assert!(SERIES_REGIONS.contains(&p.region.as_str()));
        }
    }

    #[test]
    fn test_point_serializes_iso_date() {
        let json = serde_json::to_value(&series(&[1.5])[0]).unwrap();
        assert_eq!(json["date"], "2024-01-01");
        assert_eq!(json["value"], 1.5);
    }

    #[test]
    fn test_moving_average_shrinking_window() {
        let analyzer = SeriesAnalyzer::new().with_window(3);
        let smoothed = analyzer.moving_average(&series(&[1.0, 2.0, 3.0, 4.0, 5.0]));

        let averages: Vec<f64> = smoothed.iter().map(|s| s.moving_avg).collect();
        assert_eq!(averages, vec![1.0, 1.5, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_moving_average_length_and_window_mean() {
        let mut rng = StdRng::seed_from_u64(11);
        let points = generate_time_series(&mut rng, 30, date("2024-06-30"));

        for window in [1, 2, 7, 30, 45] {
            let smoothed = SeriesAnalyzer::new().with_window(window).moving_average(&points);
            assert_eq!(smoothed.len(), points.len());

            for (i, s) in smoothed.iter().enumerate() {
                let start = (i + 1).saturating_sub(window);
                let slice = &points[start..=i];
                let expected = slice.iter().map(|p| p.value).sum::<f64>() / slice.len() as f64;
                assert!((s.moving_avg - expected).abs() <= 0.005 + 1e-9);
                assert_eq!(s.point, points[i]);
            }
        }
    }

    #[test]
    fn test_moving_average_zero_window_is_identity() {
        let smoothed = SeriesAnalyzer::new().with_window(0).moving_average(&series(&[4.0, 8.0]));
        assert_eq!(smoothed[0].moving_avg, 4.0);
        assert_eq!(smoothed[1].moving_avg, 8.0);
    }

    #[test]
    fn test_detect_anomalies_flags_spike() {
        let mut values = vec![10.0; 20];
        values[7] = 100.0;
        let anomalies = SeriesAnalyzer::new().detect_anomalies(&series(&values));

        assert_eq!(anomalies.len(), 1);
        assert_eq!(anomalies[0].point.value, 100.0);
        assert!(anomalies[0].anomaly);
        assert!(anomalies[0].z_score > 2.0);
    }

    #[test]
    fn test_zero_variance_has_no_anomalies() {
        let anomalies = SeriesAnalyzer::new().detect_anomalies(&series(&[5.0; 10]));
        assert!(anomalies.is_empty());
    }

    #[test]
    fn test_too_few_points_has_no_anomalies() {
        let analyzer = SeriesAnalyzer::new().with_threshold(0.1);
        assert!(analyzer.detect_anomalies(&series(&[1.0, 100.0])).is_empty());
    }

    #[test]
    fn test_group_by_category_and_region() {
        let points = series(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);

        let by_category = group_by(&points, GroupKey::Category);
        assert_eq!(by_category.len(), 3);
        assert_eq!(by_category["sales"].len(), 2);

        let by_region = group_by(&points, GroupKey::Region);
        assert_eq!(by_region.len(), 4);
        assert_eq!(by_region["north"].len(), 2);
        assert_eq!(by_region["west"].len(), 1);

        let total: usize = by_region.values().map(Vec::len).sum();
        assert_eq!(total, points.len());
    }

    #[test]
    fn test_group_by_date() {
        let mut points = series(&[1.0, 2.0, 3.0]);
        points[2].date = points[1].date;

        let by_date = group_by(&points, GroupKey::Date);
        assert_eq!(by_date.len(), 2);
        assert_eq!(by_date["2024-01-01"].len(), 1);
        assert_eq!(by_date["2024-01-02"].len(), 2);
        assert_eq!(GroupKey::Date.key_of(&points[0]), "2024-01-01");
    }

    #[test]
    fn test_moving_average_half_cent_rounds_even() {
        let smoothed = SeriesAnalyzer::new().with_window(2).moving_average(&series(&[100.12, 100.13]));
        assert_eq!(smoothed[1].moving_avg, 100.12);
    }

    #[test]
    fn test_calculate_statistics() {
        let stats = calculate_statistics(&series(&[3.0, 1.0, 2.0])).unwrap();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.median, 2.0);
        assert_eq!(stats.range, 2.0);

        assert_eq!(calculate_statistics(&[]), Err(AnalysisError::NoSeriesData));
    }
}
