// 📊 Statistics - Descriptive statistics over numeric columns
//
// Two flavours are kept apart on purpose:
// - Summary: record statistics (true median, SAMPLE standard deviation)
// - SeriesStats: series aggregates (upper-middle median, sum, range)
// Anomaly detection uses mean_std (POPULATION standard deviation).

use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};
use statrs::statistics::{Data, Median, Statistics};

// ============================================================================
// SUMMARY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,

    /// Sample standard deviation (n - 1); 0 for a single value
    pub stdev: f64,
}

impl Summary {
    pub fn from_values(values: &[f64]) -> Result<Self, AnalysisError> {
        if values.is_empty() {
            return Err(AnalysisError::NoData);
        }

        // statrs reports NaN for the sample variance of a single value
        let stdev = if values.len() < 2 {
            0.0
        } else {
            Statistics::std_dev(values)
        };

        Ok(Summary {
            mean: Statistics::mean(values),
            median: Data::new(values.to_vec()).median(),
            min: Statistics::min(values),
            max: Statistics::max(values),
            stdev,
        })
    }
}

// ============================================================================
// SERIES STATS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    pub count: usize,
    pub mean: f64,
    pub min: f64,
    pub max: f64,

    /// Element at index n / 2 of the sorted values (upper middle for even n)
    pub median: f64,
    pub sum: f64,
    pub range: f64,
}

impl SeriesStats {
    pub fn from_values(values: &[f64]) -> Result<Self, AnalysisError> {
        if values.is_empty() {
            return Err(AnalysisError::NoSeriesData);
        }

        let sorted = sorted_copy(values);
        let sum: f64 = values.iter().sum();
        let min = Statistics::min(values);
        let max = Statistics::max(values);

        Ok(SeriesStats {
            count: values.len(),
            mean: Statistics::mean(values),
            min,
            max,
            median: sorted[sorted.len() / 2],
            sum,
            range: max - min,
        })
    }
}

// ============================================================================
// HELPERS
// ============================================================================

/// Population mean and standard deviation; (0, 0) for empty input
pub fn mean_std(values: &[f64]) -> (f64, f64) {
    if values.is_empty() {
        return (0.0, 0.0);
    }
    (Statistics::mean(values), Statistics::population_std_dev(values))
}

/// Round to `places` decimal places; exact halves go to the even neighbour
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round_ties_even() / factor
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}

// ============================================================================
// TESTS
// ============================================================================
