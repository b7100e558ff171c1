use crate::data_processing::leveling::LEVELS_PER_PRESTIGE;

use serde::Serialize;
use std::fmt;

/// Cosmetic rank earned every 100 levels.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PrestigeTier {
    Stone,
    Iron,
    Gold,
    Diamond,
    Emerald,
    Sapphire,
    Ruby,
    Crystal,
    Opal,
    Amethyst,
    Rainbow,
    #[serde(rename = "Iron Prime")]
    IronPrime,
    #[serde(rename = "Gold Prime")]
    GoldPrime,
    #[serde(rename = "Diamond Prime")]
    DiamondPrime,
    #[serde(rename = "Emerald Prime")]
    EmeraldPrime,
    #[serde(rename = "Sapphire Prime")]
    SapphirePrime,
    #[serde(rename = "Ruby Prime")]
    RubyPrime,
    #[serde(rename = "Crystal Prime")]
    CrystalPrime,
    #[serde(rename = "Opal Prime")]
    OpalPrime,
    #[serde(rename = "Amethyst Prime")]
    AmethystPrime,
    Mirror,
    Light,
    Dawn,
    Dusk,
    Air,
    Wind,
    Nebula,
    Thunder,
    Earth,
    Water,
    Fire,
}

impl PrestigeTier {
    /// All tiers, ordered by the prestige they are earned at.
    pub const ALL: [PrestigeTier; 31] = [
        PrestigeTier::Stone,
        PrestigeTier::Iron,
        PrestigeTier::Gold,
        PrestigeTier::Diamond,
        PrestigeTier::Emerald,
        PrestigeTier::Sapphire,
        PrestigeTier::Ruby,
        PrestigeTier::Crystal,
        PrestigeTier::Opal,
        PrestigeTier::Amethyst,
        PrestigeTier::Rainbow,
        PrestigeTier::IronPrime,
        PrestigeTier::GoldPrime,
        PrestigeTier::DiamondPrime,
        PrestigeTier::EmeraldPrime,
        PrestigeTier::SapphirePrime,
        PrestigeTier::RubyPrime,
        PrestigeTier::CrystalPrime,
        PrestigeTier::OpalPrime,
        PrestigeTier::AmethystPrime,
        PrestigeTier::Mirror,
        PrestigeTier::Light,
        PrestigeTier::Dawn,
        PrestigeTier::Dusk,
        PrestigeTier::Air,
        PrestigeTier::Wind,
        PrestigeTier::Nebula,
        PrestigeTier::Thunder,
        PrestigeTier::Earth,
        PrestigeTier::Water,
        PrestigeTier::Fire,
    ];

    /// Tier reported for levels past the end of the table.
    pub const OVERFLOW: PrestigeTier = PrestigeTier::Rainbow;

    pub fn name(self) -> &'static str {
        match self {
            PrestigeTier::Stone => "Stone",
            PrestigeTier::Iron => "Iron",
            PrestigeTier::Gold => "Gold",
            PrestigeTier::Diamond => "Diamond",
            PrestigeTier::Emerald => "Emerald",
            PrestigeTier::Sapphire => "Sapphire",
            PrestigeTier::Ruby => "Ruby",
            PrestigeTier::Crystal => "Crystal",
            PrestigeTier::Opal => "Opal",
            PrestigeTier::Amethyst => "Amethyst",
            PrestigeTier::Rainbow => "Rainbow",
            PrestigeTier::IronPrime => "Iron Prime",
            PrestigeTier::GoldPrime => "Gold Prime",
            PrestigeTier::DiamondPrime => "Diamond Prime",
            PrestigeTier::EmeraldPrime => "Emerald Prime",
            PrestigeTier::SapphirePrime => "Sapphire Prime",
            PrestigeTier::RubyPrime => "Ruby Prime",
            PrestigeTier::CrystalPrime => "Crystal Prime",
            PrestigeTier::OpalPrime => "Opal Prime",
            PrestigeTier::AmethystPrime => "Amethyst Prime",
            PrestigeTier::Mirror => "Mirror",
            PrestigeTier::Light => "Light",
            PrestigeTier::Dawn => "Dawn",
            PrestigeTier::Dusk => "Dusk",
            PrestigeTier::Air => "Air",
            PrestigeTier::Wind => "Wind",
            PrestigeTier::Nebula => "Nebula",
            PrestigeTier::Thunder => "Thunder",
            PrestigeTier::Earth => "Earth",
            PrestigeTier::Water => "Water",
            PrestigeTier::Fire => "Fire",
        }
    }
}

impl fmt::Display for PrestigeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Star shown after the level, keyed by the lowest level it applies to.
const LEVEL_ICONS: [(u64, char); 3] = [(0, '✫'), (1100, '✪'), (2100, '⚝')];

/// Returns the prestige tier for a (possibly fractional) level.
///
/// Levels from 3100 upward fall outside the table and map to `PrestigeTier::OVERFLOW`.
pub fn prestige_for_level(level: f64) -> PrestigeTier {
    let bucket = floor_level(level) / u64::from(LEVELS_PER_PRESTIGE);
    usize::try_from(bucket)
        .ok()
        .and_then(|index| PrestigeTier::ALL.get(index).copied())
        .unwrap_or(PrestigeTier::OVERFLOW)
}

/// Formats the floored level followed by its star, e.g. `"1✫"` or `"1100✪"`.
pub fn format_level(level: f64) -> String {
    let level = floor_level(level);
    match LEVEL_ICONS
        .iter()
        .rev()
        .find(|(threshold, _)| *threshold <= level)
    {
        Some((_, icon)) => format!("{}{}", level, icon),
        None => level.to_string(),
    }
}

fn floor_level(level: f64) -> u64 {
    if level.is_finite() && level > 0.0 {
        level.floor() as u64
    } else {
        0
    }
}
