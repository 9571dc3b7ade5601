//! View module - filter/search/sort projections over the holdings
//! collection.

mod view_model;
mod view_service;


pub use view_model::*;
pub use view_service::*;
