// src/lib.rs
// #![allow(dead_code)]
// #![allow(unused)]

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod import;
pub mod model;
pub mod store;

pub use error::{Error, Result};
