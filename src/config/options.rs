// src/config/options.rs
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub scan: ScanOptions,
    pub output: OutputOptions,
}

/// Where the listings page comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// A results page saved from the browser.
    File(PathBuf),
    /// Plain-http fetch. https is rejected in core::net.
    Url(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanOptions {
    /// Key into the specs registry.
    pub site: String,
    pub source: Option<Source>,
    /// Pinned evaluation year for listing age. None = current year.
    pub year: Option<i32>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            site: s!(crate::specs::default_site().name),
            source: None,
            year: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Tsv,
}

impl OutputFormat {
    pub fn delim(&self) -> char {
        match self { OutputFormat::Csv => ',', OutputFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: OutputFormat,
    pub include_headers: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Csv,
            include_headers: false,
        }
    }
}
