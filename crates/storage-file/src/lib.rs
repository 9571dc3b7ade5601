//! File-backed storage implementation for Holdfolio.
//!
//! Persists the whole snapshot as a single JSON document, overwritten on
//! every save - the same full-snapshot, last-write-wins model a browser
//! key-value store gives the original client. This crate is the only
//! place where the core's `SnapshotStoreTrait` touches a filesystem;
//! everything else works with the trait.

mod snapshot_store;

pub use snapshot_store::FileSnapshotStore;
