use boundary::CleanupConfig;
use wasm_bindgen::prelude::*;
mod api;
mod error;
mod interop;
mod logging;

/// Cleanup session: one configuration shared by every polygon the host
/// cleans through it.
#[wasm_bindgen]
pub struct Cleaner { pub(crate) cfg: CleanupConfig }

impl Cleaner {
    pub fn rs_new() -> Cleaner { Cleaner { cfg: CleanupConfig::default() } }
    pub fn rs_with_config(cfg: CleanupConfig) -> Cleaner { Cleaner { cfg } }
    pub fn rs_config(&self) -> &CleanupConfig { &self.cfg }
}
