//! Derives a structured BedWars report from a flat record of cumulative counters.
//!
//! The core is [`summarize`]: it reads the record through [`RawRecord`]'s
//! zero-defaulting accessors, aggregates every mode with
//! [`aggregate_mode_stats`], and layers the leveling fields on top. Everything
//! is pure and synchronous; [`process_records_in_parallel`] is a batch caller
//! that runs it over files on a rayon thread pool.

pub mod data_processing;
pub mod data_summary;
pub mod file_creation;

pub use data_processing::data_processor::{load_record, process_records_in_parallel};
pub use data_processing::divide::divide;
pub use data_processing::game_mode::{BedWarsMode, DreamMode, DreamTeamSize};
pub use data_processing::leveling::{level_for_experience, level_progress};
pub use data_processing::prestige::{format_level, prestige_for_level, PrestigeTier};
pub use data_processing::raw_record::RawRecord;
pub use data_summary::bedwars_report::BedWarsReport;
pub use data_summary::data_summarizer::{aggregate_mode_stats, summarize};
pub use data_summary::level_progress::LevelProgress;
pub use data_summary::mode_stats::{AverageStats, BedStats, CollectedItems, DreamModeStats, ModeStats};
pub use data_summary::report_batch::ReportBatch;
