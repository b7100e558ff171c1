use serde::Serialize;

/// Progress inside the current level.
///
/// # Fields
///
/// * `level` - Completed levels.
/// * `current_level_xp` - Experience already spent on the level in progress.
/// * `xp_to_next_level` - Experience still missing to complete it.
/// * `xp_next_level` - Full cost of the level in progress.
/// * `percent` - `current_level_xp` as a percentage of `xp_next_level`, two decimals.
/// * `percent_remaining` - `100 - percent`, two decimals.
#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LevelProgress {
    pub level: u32,
    pub current_level_xp: f64,
    pub xp_to_next_level: f64,
    pub xp_next_level: f64,
    pub percent: f64,
    pub percent_remaining: f64,
}
