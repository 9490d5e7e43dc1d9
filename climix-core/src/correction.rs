//! Per-month correction factors for the Thornthwaite formula.
//!
//! The unadjusted monthly PET assumes an idealised month of 30 days with
//! 12 hours of daylight. [`CorrectionTable`] rescales each month by its
//! actual length and by the average daily daylight hours of a reference
//! latitude band:
//!
//! $$ K_i = \frac{d_i}{30} \cdot \frac{h_i}{12} $$
//!
//! Where $d_i$ is the number of days in month $i$ and $h_i$ the average
//! daily daylight hours. Tables for other regions can be supplied through
//! [`CorrectionTable::new`]; the central-Europe table is the default.

use crate::temperature::{FloatValue, MONTHS_PER_YEAR};
use serde::{Deserialize, Serialize};

/// Month length the unadjusted formula assumes.
/// unit: day
pub const REFERENCE_MONTH_DAYS: FloatValue = 30.0;

/// Daily daylight duration the unadjusted formula assumes.
/// unit: hr
pub const REFERENCE_DAYLIGHT_HOURS: FloatValue = 12.0;

/// Calendar days per month, January first.
///
/// Leap years are ignored; February is always 28 days.
pub const DAYS_IN_MONTH: [FloatValue; MONTHS_PER_YEAR] = [
    31.0, 28.0, 31.0, 30.0, 31.0, 30.0, 31.0, 31.0, 30.0, 31.0, 30.0, 31.0,
];

/// Approximate average daily daylight hours per month for central Europe,
/// January first.
/// unit: hr
pub const CENTRAL_EUROPE_DAYLIGHT_HOURS: [FloatValue; MONTHS_PER_YEAR] = [
    9.0, 10.0, 11.5, 13.0, 14.5, 15.0, 14.5, 13.5, 12.0, 10.5, 9.0, 8.5,
];

/// Month-length and daylight-hours correction table.
///
/// Holds the two per-month tables the Thornthwaite correction factor is
/// built from. The daylight table is tied to a latitude band, so a table
/// is a regional quantity; swapping in a different region is a data
/// change, not a code change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrectionTable {
    /// Calendar days per month, January first.
    /// unit: day
    days_in_month: [FloatValue; MONTHS_PER_YEAR],
    /// Average daily daylight hours per month, January first.
    /// unit: hr
    daylight_hours: [FloatValue; MONTHS_PER_YEAR],
}

impl CorrectionTable {
    /// Create a table from per-month day counts and daylight hours.
    pub fn new(
        days_in_month: [FloatValue; MONTHS_PER_YEAR],
        daylight_hours: [FloatValue; MONTHS_PER_YEAR],
    ) -> Self {
        Self {
            days_in_month,
            daylight_hours,
        }
    }

    /// The central-Europe reference table.
    pub fn central_europe() -> Self {
        Self::new(DAYS_IN_MONTH, CENTRAL_EUROPE_DAYLIGHT_HOURS)
    }

    /// Correction factor for a single month (0 = January).
    ///
    /// Panics if `month` is 12 or more.
    pub fn factor(&self, month: usize) -> FloatValue {
        (self.days_in_month[month] / REFERENCE_MONTH_DAYS)
            * (self.daylight_hours[month] / REFERENCE_DAYLIGHT_HOURS)
    }

    /// Correction factors for all months, January first.
    pub fn factors(&self) -> [FloatValue; MONTHS_PER_YEAR] {
        let mut factors = [0.0; MONTHS_PER_YEAR];
        for (month, factor) in factors.iter_mut().enumerate() {
            *factor = self.factor(month);
        }
        factors
    }
}

impl Default for CorrectionTable {
    fn default() -> Self {
        Self::central_europe()
    }
}
