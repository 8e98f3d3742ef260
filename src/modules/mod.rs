//! Modules layer - Infrastructure components for external integrations
//!
//! Contains adapters for the key-value persistence backing the application.

pub mod storage;
