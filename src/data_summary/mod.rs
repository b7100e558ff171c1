pub mod bedwars_report;
pub mod data_summarizer;
pub mod level_progress;
pub mod mode_stats;
pub mod report_batch;
