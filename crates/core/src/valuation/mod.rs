//! Valuation module - portfolio rollup totals over holding subsets.

mod valuation_calculator;
mod valuation_model;

#[cfg(test)]
mod valuation_calculator_tests;

pub use valuation_calculator::*;
pub use valuation_model::*;
