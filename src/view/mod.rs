//! View module - caller-side output of presented rows
//!
//! Resolves severity buckets to colours and renders rows as
//! jsonl/json/md/text.

pub mod palette;
pub mod render;
