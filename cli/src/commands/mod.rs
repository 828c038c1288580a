//! Command implementations

pub mod help;
pub mod manual;
