//! Climate indices from monthly climate aggregates.
//!
//! This crate re-exports the `climix-core` types and the `climix-indices`
//! implementations as a single dependency for callers:
//!
//! ```rust
//! use climix::indices::Thornthwaite;
//! use climix::temperature::MonthlyTemperatures;
//!
//! let estimator = Thornthwaite::new();
//! let temperatures = MonthlyTemperatures::new([
//!     -2.0, 0.0, 4.0, 9.0, 14.0, 18.0, 20.0, 19.0, 15.0, 10.0, 4.0, 0.0,
//! ]);
//! let annual_pet = estimator.annual_pet(&temperatures);
//! assert!(annual_pet > 0.0);
//! ```

pub use climix_core::{correction, errors, temperature};
pub use climix_indices::indices;
