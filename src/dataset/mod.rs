
use crate::enumerator::EnumeratorError;
use itertools::Itertools;

/// Data set used by the reference run
pub const DEFAULT_DATA: [f64; 5] = [9.0, 10.0, 10.0, 2.0, 1.0];

/// Immutable, validated sequence of raw values (duplicates allowed)
#[derive(Debug, Clone, PartialEq)]
pub struct DataSet {
    values: Vec<f64>,
}

/// A unique value of a data set paired with its number of occurrences
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistinctValue {
    pub value: f64,
    pub count: usize,
}

impl DataSet {
    /// Validate raw values into a data set
    ///
    /// Rejects empty input, non-finite values, and values whose summed
    /// magnitude overflows (the summed dispersion of any partition is
    /// bounded by it). Negative zero is folded into positive zero so equal
    /// values always share one bit pattern.
    pub fn new(values: impl Into<Vec<f64>>) -> Result<Self, EnumeratorError> {
        let mut values = values.into();

        if values.is_empty() {
            return Err(EnumeratorError::InvalidInput(
                "data set must contain at least one value".to_string(),
            ));
        }

        for (position, value) in values.iter_mut().enumerate() {
            if !value.is_finite() {
                return Err(EnumeratorError::InvalidInput(format!(
                    "value at position {} is not finite: {}",
                    position, value
                )));
            }
            if *value == 0.0 {
                *value = 0.0;
            }
        }

        let magnitude: f64 = values.iter().map(|v| v.abs()).sum();
        if !magnitude.is_finite() {
            return Err(EnumeratorError::InvalidInput(
                "sum of value magnitudes overflows f64".to_string(),
            ));
        }

        Ok(Self { values })
    }

    /// Raw values in input order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Unique values of this data set, ascending, with multiplicities
    pub fn distinct_values(&self) -> Vec<DistinctValue> {
        distinct_values(&self.values)
    }
}

impl Default for DataSet {
    fn default() -> Self {
        Self {
            values: DEFAULT_DATA.to_vec(),
        }
    }
}

/// Collapse values into ascending distinct values with their counts
///
/// The counts always sum to `values.len()`.
pub fn distinct_values(values: &[f64]) -> Vec<DistinctValue> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    sorted
        .into_iter()
        .dedup_with_count()
        .map(|(count, value)| DistinctValue { value, count })
        .collect()
}
