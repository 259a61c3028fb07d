#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Local reference-table stores for tower crane engineering data.
//!
//! Crane load parameters live in one SQLite file per crane model, keyed by
//! jib length. Mast structural parameters live in a single shared file, keyed
//! by mast model name. Callers (forms, menus) open a store, perform one
//! operation, and close it.

pub mod model;
pub mod storage;
