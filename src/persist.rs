//! Best-run persistence via localStorage. Read and write failures are
//! ignored; a missing or corrupt record just means no best yet.

use serde::{Deserialize, Serialize};

const HIGH_SCORE_KEY: &str = "pm_high_score";

/// Best finished run, kept across sessions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HighScore {
    pub score: u32,
    pub time_survived_secs: u64,
}

pub fn load() -> Option<HighScore> {
    let win = web_sys::window()?;
    let store = win.local_storage().ok().flatten()?;
    let raw = store.get_item(HIGH_SCORE_KEY).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

pub fn store(record: &HighScore) {
    if let Some(win) = web_sys::window() {
        if let Ok(Some(store)) = win.local_storage() {
            if let Ok(raw) = serde_json::to_string(record) {
                let _ = store.set_item(HIGH_SCORE_KEY, &raw);
            }
        }
    }
}
