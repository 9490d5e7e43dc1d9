//! Monthly temperature series.
//!
//! Every index in this workspace starts from the same input: a calendar
//! year of monthly mean temperatures, January through December.
//! [`MonthlyTemperatures`] enforces the length-12 invariant at
//! construction so the index implementations can stay infallible.

use crate::errors::{ClimixError, ClimixResult};
use serde::{Deserialize, Serialize};

/// Float type used for all physical values in the workspace.
pub type FloatValue = f64;

/// Number of monthly values in a year of input data.
pub const MONTHS_PER_YEAR: usize = 12;

/// A calendar year of monthly mean temperatures.
///
/// Index 0 is January, index 11 is December; values are in degrees
/// Celsius. Any real value is accepted: sub-zero months are meaningful
/// inputs (they contribute nothing to the Thornthwaite heat index, but
/// they are not an error).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthlyTemperatures([FloatValue; MONTHS_PER_YEAR]);

impl MonthlyTemperatures {
    /// Create a series from exactly twelve values, January first.
    pub fn new(values: [FloatValue; MONTHS_PER_YEAR]) -> Self {
        Self(values)
    }

    /// Create a series from a slice, validating its length.
    ///
    /// Callers assembling input from external sources (a database row, a
    /// request body) land here; any length other than twelve is an error,
    /// never a fallback value.
    pub fn try_from_slice(values: &[FloatValue]) -> ClimixResult<Self> {
        match <[FloatValue; MONTHS_PER_YEAR]>::try_from(values) {
            Ok(values) => Ok(Self(values)),
            Err(_) => Err(ClimixError::InvalidMonthCount {
                expected: MONTHS_PER_YEAR,
                got: values.len(),
            }),
        }
    }

    /// Monthly values, January first.
    pub fn values(&self) -> &[FloatValue; MONTHS_PER_YEAR] {
        &self.0
    }

    /// Iterate over the monthly values in calendar order.
    pub fn iter(&self) -> impl Iterator<Item = FloatValue> + '_ {
        self.0.iter().copied()
    }

    /// Unweighted annual mean temperature.
    pub fn annual_mean(&self) -> FloatValue {
        self.0.iter().sum::<FloatValue>() / MONTHS_PER_YEAR as FloatValue
    }
}

impl From<[FloatValue; MONTHS_PER_YEAR]> for MonthlyTemperatures {
    fn from(values: [FloatValue; MONTHS_PER_YEAR]) -> Self {
        Self::new(values)
    }
}

impl TryFrom<Vec<FloatValue>> for MonthlyTemperatures {
    type Error = ClimixError;

    fn try_from(values: Vec<FloatValue>) -> ClimixResult<Self> {
        Self::try_from_slice(&values)
    }
}

impl TryFrom<&[FloatValue]> for MonthlyTemperatures {
    type Error = ClimixError;

    fn try_from(values: &[FloatValue]) -> ClimixResult<Self> {
        Self::try_from_slice(values)
    }
}
