use crate::domain::models::UiState;
use std::path::PathBuf;

fn state_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")?;
    Ok(PathBuf::from(home).join(".config/folio/state.json"))
}

pub fn load_state() -> anyhow::Result<UiState> {
    let p = state_path()?;
    if !p.exists() {
        return Ok(UiState::default());
    }
    let raw = std::fs::read_to_string(p)?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn save_state(state: &UiState) -> anyhow::Result<()> {
    let p = state_path()?;
    if let Some(parent) = p.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(p, serde_json::to_string_pretty(state)?)?;
    Ok(())
}
