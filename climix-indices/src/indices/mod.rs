pub mod de_martonne;
mod thornthwaite;

pub use thornthwaite::{ExponentCoefficients, Thornthwaite, ThornthwaiteParameters};
