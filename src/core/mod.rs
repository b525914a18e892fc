// src/core/mod.rs

pub mod date;
pub mod sanitize;
