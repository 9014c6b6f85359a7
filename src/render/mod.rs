// src/render/mod.rs

use crate::errors::AppResult;
use crate::models::{FragEvent, WeaponIconTable};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const ICON_KILLER: &str = "😛";
pub const ICON_VICTIM: &str = "😦";
pub const ICON_SUICIDE: &str = "☠";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranscriptFormat {
    #[default]
    Text,
    Json,
}

/// Turns frags into annotated transcript lines.
pub struct Prettifier {
    icons: WeaponIconTable,
}

impl Prettifier {
    pub fn new(icons: WeaponIconTable) -> Self {
        Self { icons }
    }

    /// `[ts] 😛 killer 🔫 😦 victim` or `[ts] 😦 killer ☠`.
    pub fn render(&self, frag: &FragEvent) -> AppResult<String> {
        let ts = frag.timestamp_str();
        match (frag.victim_name(), frag.weapon_code()) {
            (Some(victim), Some(weapon)) => {
                let category = self.icons.lookup(weapon)?;
                Ok(format!(
                    "[{ts}] {ICON_KILLER} {} {} {ICON_VICTIM} {victim}",
                    frag.killer_name(),
                    category.icon()
                ))
            }
            _ => Ok(format!(
                "[{ts}] {ICON_VICTIM} {} {ICON_SUICIDE}",
                frag.killer_name()
            )),
        }
    }

    pub fn render_all(&self, frags: &[FragEvent]) -> AppResult<Vec<String>> {
        frags.iter().map(|f| self.render(f)).collect()
    }

    pub fn transcript(&self, frags: &[FragEvent], format: TranscriptFormat) -> AppResult<String> {
        let lines = self.render_all(frags)?;
        match format {
            TranscriptFormat::Text => Ok(lines.join("\n")),
            TranscriptFormat::Json => Ok(serde_json::to_string_pretty(&lines)?),
        }
    }
}
