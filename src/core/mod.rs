//! Core module - record model and the record-to-display pipeline
//!
//! This module provides:
//! - The `Earthquake` record and `DisplayFields` output model
//! - Location splitting, magnitude formatting and severity bucketing
//! - Date/time formatting under a fixed time-zone policy
//! - The `Presenter` that composes them

pub mod datetime;
pub mod error;
pub mod locale;
pub mod location;
pub mod magnitude;
pub mod model;
pub mod presenter;
