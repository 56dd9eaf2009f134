// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Text in the source box: a file path or an http URL.
    pub source_text: String,

    /// Index into specs::all()
    pub site_ix: usize,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            source_text: s!(),
            site_ix: 0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
