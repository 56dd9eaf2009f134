// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod specs;

pub mod chart;
pub mod color;
pub mod csv;
pub mod doc;
pub mod gui;
pub mod listing;
pub mod pipeline;
pub mod progress;
pub mod runner;
