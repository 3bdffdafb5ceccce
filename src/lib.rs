#![doc = include_str!("../README.md")]

pub mod error;
pub mod fields;

mod extract;
mod glob;
mod utils;

#[cfg(test)]
mod tests;

// Public re-exports
pub use crate::error::{Error, Result};
pub use crate::glob::strftime;
