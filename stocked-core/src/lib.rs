//! Core domain types shared by the Stocked analytics crates.

pub mod quote;
pub mod series;
pub mod symbol;

pub use quote::{PriceChange, Quote};
pub use series::{retain_valid, DerivedPoint, PricePoint};
pub use symbol::{display_name, normalize_symbol};
