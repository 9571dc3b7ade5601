//! Holdings module - position domain model and derived-field calculator.

mod holdings_calculator;
mod holdings_model;

#[cfg(test)]
mod holdings_calculator_tests;

pub use holdings_calculator::*;
pub use holdings_model::*;
