//! Infrastructure layer
//!
//! This module contains the catalog store and process-level concerns such as
//! logging setup.

pub mod catalog_store;
pub mod logger;
