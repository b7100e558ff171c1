use crate::data_processing::game_mode::{BedWarsMode, DreamMode};
use crate::data_processing::prestige::PrestigeTier;
use crate::data_summary::level_progress::LevelProgress;
use crate::data_summary::mode_stats::{CollectedItems, DreamModeStats, ModeStats};

use serde::Serialize;
use std::collections::BTreeMap;

/// Structured BedWars stats derived from one raw record.
///
/// Serializes as a single flat object: the overall counters and ratios sit at the
/// top level next to the leveling fields, and each primary mode appears under its
/// own name (`solo`, `doubles`, `threes`, `fours`, `4v4`, `castle`).
///
/// # Fields
///
/// * `overall` - Totals over every mode, read from unprefixed keys.
/// * `coins` - Current coin balance.
/// * `experience` - Cumulative experience.
/// * `level` - Fractional level for `experience`.
/// * `level_progress` - Progress inside the current level.
/// * `level_formatted` - Floored level with its star.
/// * `prestige` - Prestige tier for `level`.
/// * `collected_items_total` - Resources collected over all games.
/// * `modes` - Stats per primary mode.
/// * `dream` - Stats per dream mode, split by team size.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BedWarsReport {
    #[serde(flatten)]
    pub overall: ModeStats,
    pub coins: u64,
    pub experience: f64,
    pub level: f64,
    pub level_progress: LevelProgress,
    pub level_formatted: String,
    pub prestige: PrestigeTier,
    pub collected_items_total: CollectedItems,
    #[serde(flatten)]
    pub modes: BTreeMap<BedWarsMode, ModeStats>,
    pub dream: BTreeMap<DreamMode, DreamModeStats>,
}

impl BedWarsReport {
    /// Stats for one primary mode.
    pub fn mode(&self, mode: BedWarsMode) -> ModeStats {
        self.modes.get(&mode).copied().unwrap_or_default()
    }

    /// Stats for one dream mode.
    pub fn dream_mode(&self, mode: DreamMode) -> DreamModeStats {
        self.dream.get(&mode).copied().unwrap_or_default()
    }
}
