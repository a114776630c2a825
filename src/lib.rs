//! quakereport - earthquake records to display-ready rows
//!
//! quakereport provides:
//! - An immutable `Earthquake` record model
//! - A pure `Presenter` deriving magnitude text, severity bucket, split
//!   location and date/time text from a record
//! - A severity palette and renderers (text/jsonl/json/md) for callers
//! - A `quakereport` CLI over a built-in sample list

pub mod cli;
pub mod commands;
pub mod core;
pub mod sample;
pub mod view;

pub use crate::core::error::QuakeError;
pub use crate::core::locale::{DisplayLocale, Localizer, TimeZonePolicy};
pub use crate::core::model::{DisplayFields, Earthquake, QuakeRow, SeverityBucket};
pub use crate::core::presenter::Presenter;
