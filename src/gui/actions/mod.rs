// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::load.

mod load;    // src/gui/actions/load.rs

pub use load::load;
