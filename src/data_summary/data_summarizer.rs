use crate::data_processing::divide::divide;
use crate::data_processing::game_mode::{BedWarsMode, DreamMode, DreamTeamSize};
use crate::data_processing::leveling::{level_for_experience, level_progress};
use crate::data_processing::prestige::{format_level, prestige_for_level};
use crate::data_processing::raw_record::RawRecord;
use crate::data_summary::bedwars_report::BedWarsReport;
use crate::data_summary::mode_stats::{
    AverageStats, BedStats, CollectedItems, DreamModeStats, ModeStats,
};

use tracing::debug;

/// Prefix of the overall totals, which carry no mode token.
const OVERALL_PREFIX: &str = "";

/// Builds the full report for one raw record.
///
/// The overall block is read from unprefixed keys, the leveling fields from
/// `Experience`, and every mode from its own key prefix. Missing or malformed
/// fields read as zero, so this never fails.
///
/// # Arguments
///
/// * `record` - The raw record. It is only read.
///
/// # Returns
///
/// A `BedWarsReport` with one `ModeStats` per `BedWarsMode` and one `DreamModeStats` per `DreamMode`.
pub fn summarize(record: &RawRecord) -> BedWarsReport {
    let experience = read_experience(record);
    let level = level_for_experience(experience);

    let modes = BedWarsMode::ALL
        .iter()
        .map(|&mode| (mode, aggregate_mode_stats(record, mode.prefix())))
        .collect();

    let dream = DreamMode::ALL
        .iter()
        .map(|&mode| (mode, aggregate_dream_mode_stats(record, mode)))
        .collect();

    let report = BedWarsReport {
        overall: aggregate_mode_stats(record, OVERALL_PREFIX),
        coins: record.counter("coins"),
        experience,
        level,
        level_progress: level_progress(experience),
        level_formatted: format_level(level),
        prestige: prestige_for_level(level),
        collected_items_total: collect_items(record),
        modes,
        dream,
    };

    debug!(
        experience,
        level = report.level_progress.level,
        prestige = %report.prestige,
        games = report.overall.played_games,
        "summarized record"
    );

    report
}

/// Reads the counters for one key prefix and derives its ratios and averages.
///
/// The output shape does not depend on `prefix`; it only selects which keys are read.
///
/// # Arguments
///
/// * `record` - The raw record.
/// * `prefix` - A mode token such as `eight_one`, or `""` for the overall totals.
pub fn aggregate_mode_stats(record: &RawRecord, prefix: &str) -> ModeStats {
    let played_games = record.bedwars_counter(prefix, "games_played");
    let kills = record.bedwars_counter(prefix, "kills");
    let deaths = record.bedwars_counter(prefix, "deaths");
    let wins = record.bedwars_counter(prefix, "wins");
    let losses = record.bedwars_counter(prefix, "losses");
    let final_kills = record.bedwars_counter(prefix, "final_kills");
    let final_deaths = record.bedwars_counter(prefix, "final_deaths");
    let beds_broken = record.bedwars_counter(prefix, "beds_broken");
    let beds_lost = record.bedwars_counter(prefix, "beds_lost");

    let per_game = |count: u64| divide(count as f64, played_games as f64);

    ModeStats {
        winstreak: record.plain_counter(prefix, "winstreak"),
        played_games,
        kills,
        deaths,
        wins,
        losses,
        final_kills,
        final_deaths,
        beds: BedStats {
            broken: beds_broken,
            lost: beds_lost,
            bl_ratio: divide(beds_broken as f64, beds_lost as f64),
        },
        avg: AverageStats {
            kills: per_game(kills),
            final_kills: per_game(final_kills),
            beds_broken: per_game(beds_broken),
        },
        kd_ratio: divide(kills as f64, deaths as f64),
        wl_ratio: divide(wins as f64, losses as f64),
        final_kd_ratio: divide(final_kills as f64, final_deaths as f64),
    }
}

/// Aggregates both team sizes of a dream mode.
fn aggregate_dream_mode_stats(record: &RawRecord, mode: DreamMode) -> DreamModeStats {
    DreamModeStats {
        doubles: aggregate_mode_stats(record, &mode.prefix(DreamTeamSize::Doubles)),
        fours: aggregate_mode_stats(record, &mode.prefix(DreamTeamSize::Fours)),
    }
}

/// Reads `{resource}_resources_collected_bedwars` for the four resources.
fn collect_items(record: &RawRecord) -> CollectedItems {
    let resource = |name: &str| {
        record.bedwars_counter(OVERALL_PREFIX, &format!("{}_resources_collected", name))
    };
    CollectedItems {
        iron: resource("iron"),
        gold: resource("gold"),
        diamond: resource("diamond"),
        emerald: resource("emerald"),
    }
}

/// Reads `Experience`, treating negative values as zero.
fn read_experience(record: &RawRecord) -> f64 {
    record.number("Experience").max(0.0)
}
