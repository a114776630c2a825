//! Command handlers - each one presents records and writes the rendered rows

pub mod present;
pub mod severity;
