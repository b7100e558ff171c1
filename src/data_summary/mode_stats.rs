use serde::Serialize;

/// Counters and derived ratios for one mode.
///
/// The shape is the same for every mode and for the overall totals.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ModeStats {
    pub winstreak: u64,
    pub played_games: u64,
    pub kills: u64,
    pub deaths: u64,
    pub wins: u64,
    pub losses: u64,
    pub final_kills: u64,
    pub final_deaths: u64,
    pub beds: BedStats,
    pub avg: AverageStats,
    #[serde(rename = "KDRatio")]
    pub kd_ratio: f64,
    #[serde(rename = "WLRatio")]
    pub wl_ratio: f64,
    #[serde(rename = "finalKDRatio")]
    pub final_kd_ratio: f64,
}

/// Beds broken and lost, with their ratio.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct BedStats {
    pub broken: u64,
    pub lost: u64,
    #[serde(rename = "BLRatio")]
    pub bl_ratio: f64,
}

/// Per-game averages.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AverageStats {
    pub kills: f64,
    pub final_kills: f64,
    pub beds_broken: f64,
}

/// Stats of one dream mode, split by team size.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct DreamModeStats {
    pub doubles: ModeStats,
    pub fours: ModeStats,
}

/// Resources picked up over all games.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollectedItems {
    pub iron: u64,
    pub gold: u64,
    pub diamond: u64,
    pub emerald: u64,
}
