//! Business logic services
//!
//! This module contains all the business logic of the application.
//! Services operate on the read-only catalog and never touch HTTP types.

pub mod health_service;
pub mod query_service;
