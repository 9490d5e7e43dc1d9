//! Thornthwaite potential evapotranspiration
//!
//! Estimates annual potential evapotranspiration (PET) from a year of
//! monthly mean temperatures using Thornthwaite's empirical formula.
//!
//! The calculation runs in three steps:
//!
//! 1. Heat index from the months above freezing:
//!    $$ I = \sum_{T_i > 0} \left(\frac{T_i}{5}\right)^{1.514} $$
//!
//! 2. Exponent from a cubic fit in $I$:
//!    $$ a = c_3 I^3 + c_2 I^2 + c_1 I + c_0 $$
//!
//! 3. Monthly PET, corrected for month length and daylight hours and
//!    summed over the year:
//!    $$ PET = \sum_i 16 \left(\frac{10 T_i}{I}\right)^a K_i $$
//!
//! Months at or below 0 degC contribute nothing to the heat index or to
//! the annual sum. $K_i$ comes from an injectable [`CorrectionTable`].

use climix_core::correction::CorrectionTable;
use climix_core::errors::ClimixResult;
use climix_core::temperature::{FloatValue, MonthlyTemperatures, MONTHS_PER_YEAR};
use log::warn;
use serde::{Deserialize, Serialize};

/// Exponent of the per-month heat index terms.
const HEAT_INDEX_EXPONENT: FloatValue = 1.514;

/// Scale of the unadjusted monthly PET.
/// unit: mm
const PET_SCALE: FloatValue = 16.0;

/// Coefficients of the cubic polynomial mapping the heat index $I$ to
/// the exponent $a$.
///
/// Two published sign conventions exist for the quadratic term; both are
/// provided as named sets so the choice is an explicit parameter rather
/// than a buried literal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExponentCoefficients {
    /// Cubic coefficient $c_3$
    pub cubic: FloatValue,
    /// Quadratic coefficient $c_2$
    pub quadratic: FloatValue,
    /// Linear coefficient $c_1$
    pub linear: FloatValue,
    /// Constant term $c_0$
    pub constant: FloatValue,
}

impl ExponentCoefficients {
    /// Thornthwaite's 1948 fit, with a negative quadratic term.
    pub const STANDARD: Self = Self {
        cubic: 6.75e-7,
        quadratic: -7.71e-5,
        linear: 1.792e-2,
        constant: 0.49239,
    };

    /// Variant with a positive quadratic term, found in some
    /// implementations of the formula.
    pub const LEGACY: Self = Self {
        cubic: 6.75e-7,
        quadratic: 7.71e-5,
        linear: 1.792e-2,
        constant: 0.49239,
    };

    /// Evaluate the polynomial at the given heat index.
    pub fn evaluate(&self, heat_index: FloatValue) -> FloatValue {
        self.cubic * heat_index.powi(3)
            + self.quadratic * heat_index.powi(2)
            + self.linear * heat_index
            + self.constant
    }
}

/// Parameters for the Thornthwaite PET estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThornthwaiteParameters {
    /// Coefficient set for the exponent polynomial
    /// default: [`ExponentCoefficients::STANDARD`]
    pub coefficients: ExponentCoefficients,
    /// Month-length and daylight-hours correction table
    /// default: [`CorrectionTable::central_europe`]
    pub correction: CorrectionTable,
}

impl Default for ThornthwaiteParameters {
    fn default() -> Self {
        Self {
            coefficients: ExponentCoefficients::STANDARD,
            correction: CorrectionTable::central_europe(),
        }
    }
}

/// Thornthwaite PET estimator
///
/// A pure, stateless calculation: the same input series always produces
/// the same annual value, and instances are safe to share between
/// threads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thornthwaite {
    parameters: ThornthwaiteParameters,
}

impl Thornthwaite {
    /// Create an estimator with the default parameters.
    pub fn new() -> Self {
        Self::from_parameters(ThornthwaiteParameters::default())
    }

    /// Create an estimator from parameters.
    pub fn from_parameters(parameters: ThornthwaiteParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &ThornthwaiteParameters {
        &self.parameters
    }

    /// Heat index $I$ of the series.
    ///
    /// Sums $(T_i / 5)^{1.514}$ over the months above freezing; months at
    /// or below 0 degC contribute nothing. The result is non-negative and
    /// zero only when no month is above freezing.
    pub fn heat_index(&self, temperatures: &MonthlyTemperatures) -> FloatValue {
        temperatures
            .iter()
            .filter(|&t| t > 0.0)
            .map(|t| (t / 5.0).powf(HEAT_INDEX_EXPONENT))
            .sum()
    }

    /// Exponent $a$ for the given heat index.
    pub fn exponent(&self, heat_index: FloatValue) -> FloatValue {
        self.parameters.coefficients.evaluate(heat_index)
    }

    /// Unadjusted PET of a single month, assuming an idealised 30-day
    /// month with 12 hours of daylight.
    ///
    /// Returns 0 for months at or below freezing. `heat_index` must be
    /// the index of the series the month belongs to; it is strictly
    /// positive whenever `temperature` is.
    pub fn unadjusted_monthly_pet(
        &self,
        temperature: FloatValue,
        heat_index: FloatValue,
        exponent: FloatValue,
    ) -> FloatValue {
        if temperature <= 0.0 {
            return 0.0;
        }
        PET_SCALE * (10.0 * temperature / heat_index).powf(exponent)
    }

    /// Corrected PET of each month, January first.
    /// unit: mm
    pub fn monthly_pet(&self, temperatures: &MonthlyTemperatures) -> [FloatValue; MONTHS_PER_YEAR] {
        let mut pet = [0.0; MONTHS_PER_YEAR];

        let heat_index = self.heat_index(temperatures);
        if heat_index == 0.0 {
            // No month above freezing, so every monthly value is zero.
            return pet;
        }

        let exponent = self.exponent(heat_index);
        for (month, temperature) in temperatures.iter().enumerate() {
            pet[month] = self.unadjusted_monthly_pet(temperature, heat_index, exponent)
                * self.parameters.correction.factor(month);
        }
        pet
    }

    /// Annual PET of the series.
    /// unit: mm
    pub fn annual_pet(&self, temperatures: &MonthlyTemperatures) -> FloatValue {
        self.monthly_pet(temperatures).iter().sum()
    }

    /// Annual PET from a raw slice of monthly values, January first.
    ///
    /// Validates the length before computing; any length other than
    /// twelve is an error, never a fallback value.
    pub fn annual_pet_from_slice(&self, temperatures: &[FloatValue]) -> ClimixResult<FloatValue> {
        let temperatures = match MonthlyTemperatures::try_from_slice(temperatures) {
            Ok(temperatures) => temperatures,
            Err(e) => {
                warn!("Insufficient monthly temperature data for PET: {}", e);
                return Err(e);
            }
        };
        Ok(self.annual_pet(&temperatures))
    }
}

impl Default for Thornthwaite {
    fn default() -> Self {
        Self::new()
    }
}
