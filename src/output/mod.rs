//! Report output module

pub mod formatter;
