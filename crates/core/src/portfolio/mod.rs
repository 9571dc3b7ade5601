//! Portfolio module - the stateful session service over the canonical
//! holdings collection.

mod portfolio_service;


pub use portfolio_service::*;
