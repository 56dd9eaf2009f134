// src/gui/components/mod.rs
pub mod chart_panel;
pub mod listing_table;
pub mod source_panel;
