pub mod data_processor;
pub mod divide;
pub mod game_mode;
pub mod leveling;
pub mod prestige;
pub mod raw_record;
pub mod record_load_error;
