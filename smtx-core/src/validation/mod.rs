//! Validation utilities for the matrix core
//!
//! This module contains pure validation functions with no I/O dependencies.

pub mod bounds;
pub mod parsing;

pub use bounds::{validate_index, validate_operands};
pub use parsing::{parse_entry, parse_header};
