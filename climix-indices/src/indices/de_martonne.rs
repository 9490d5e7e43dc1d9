//! De Martonne aridity index
//!
//! Ratio of annual precipitation to annual mean temperature plus a fixed
//! offset; lower values indicate drier climates.
//!
//! $$ I_{DM} = \frac{P}{\bar{T} + 10} $$
//!
//! Where $P$ is annual precipitation in mm and $\bar{T}$ the annual mean
//! temperature in degrees Celsius.

use climix_core::errors::{ClimixError, ClimixResult};
use climix_core::temperature::{FloatValue, MonthlyTemperatures};

/// Offset added to the annual mean temperature in the denominator.
/// unit: degC
pub const TEMPERATURE_OFFSET: FloatValue = 10.0;

/// De Martonne aridity index from annual aggregates.
///
/// `annual_precipitation` is in mm, `annual_mean_temperature` in degrees
/// Celsius. The index is undefined when the mean temperature is at or
/// below -10 degC (the denominator vanishes or turns negative); that
/// case is an error rather than a non-finite value.
pub fn aridity_index(
    annual_precipitation: FloatValue,
    annual_mean_temperature: FloatValue,
) -> ClimixResult<FloatValue> {
    let denominator = annual_mean_temperature + TEMPERATURE_OFFSET;
    if denominator <= 0.0 {
        return Err(ClimixError::UndefinedAridityIndex {
            temperature: annual_mean_temperature,
        });
    }
    Ok(annual_precipitation / denominator)
}

/// De Martonne aridity index with the mean temperature taken from a
/// monthly series.
pub fn aridity_index_from_monthly(
    temperatures: &MonthlyTemperatures,
    annual_precipitation: FloatValue,
) -> ClimixResult<FloatValue> {
    aridity_index(annual_precipitation, temperatures.annual_mean())
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    #[test]
    fn test_aridity_index() {
        // 600 mm at 10 degC: 600 / (10 + 10)
        let index = aridity_index(600.0, 10.0).unwrap();
        assert!(is_close!(index, 30.0));

        // Drier: less rain at the same temperature lowers the index
        let drier = aridity_index(200.0, 10.0).unwrap();
        assert!(drier < index);
    }

    #[test]
    fn test_undefined_below_offset() {
        for temperature in [-10.0, -15.0, -40.0] {
            let err = aridity_index(500.0, temperature).unwrap_err();
            match err {
                ClimixError::UndefinedAridityIndex { temperature: t } => {
                    assert_eq!(t, temperature)
                }
                other => panic!("Expected UndefinedAridityIndex, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_defined_just_above_offset() {
        let index = aridity_index(500.0, -9.5).unwrap();
        assert!(index.is_finite() && index > 0.0);
    }

    #[test]
    fn test_monthly_path_agrees_with_direct_path() {
        let temperatures = MonthlyTemperatures::new([
            -2.0, 0.0, 4.0, 9.0, 14.0, 18.0, 20.0, 19.0, 15.0, 10.0, 4.0, 0.0,
        ]);
        let from_monthly = aridity_index_from_monthly(&temperatures, 650.0).unwrap();
        let direct = aridity_index(650.0, temperatures.annual_mean()).unwrap();
        assert_eq!(from_monthly, direct);
    }
}
