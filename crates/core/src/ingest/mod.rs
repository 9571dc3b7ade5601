//! Ingest module - record normalization from heterogeneous input shapes.
//!
//! Raw uploads arrive in one of three shapes: a brokerage API JSON
//! envelope, delimited text with optional double-quoted fields, or
//! already-cell-split spreadsheet rows. Each shape is handled by a typed
//! parser; `ingest_service` chains them in detection order.

mod broker_parser;
mod csv_parser;
mod ingest_errors;
mod ingest_model;
mod ingest_service;
mod row_mapper;


pub use broker_parser::*;
pub use csv_parser::*;
pub use ingest_errors::IngestError;
pub use ingest_model::*;
pub use ingest_service::*;
pub use row_mapper::*;
