//! Calculators that decide how model concepts are named and bound to HTTP.
//!
//! Generators only talk to the traits, so a pipeline can swap in its own
//! conventions without touching the emitters.

pub mod binding;
pub mod names;
pub mod packages;

pub use binding::{BindingCalculator, HttpBinding};
pub use names::{DefaultNames, NamesCalculator};
pub use packages::{PackagesCalculator, VersionPackages};
