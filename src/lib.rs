// src/lib.rs

#[macro_use]
pub mod macros;

pub mod cli;
pub mod config;
pub mod core;
pub mod pages;

pub mod deal;
pub mod error;
pub mod file;
pub mod log;
pub mod progress;
pub mod report;
pub mod runner;
pub mod scan;

pub use error::ScanError;
