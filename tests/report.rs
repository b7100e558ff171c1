use approx::assert_relative_eq;
use bedwars_stats::{
    aggregate_mode_stats, divide, summarize, BedWarsMode, DreamMode, PrestigeTier, RawRecord,
};
use serde_json::{json, Value};

fn sample_record() -> RawRecord {
    RawRecord::from_value(json!({
        "wins_bedwars": 10,
        "losses_bedwars": 5,
        "kills_bedwars": 40,
        "deaths_bedwars": 20,
        "games_played_bedwars": 30,
        "Experience": 500,
    }))
}

#[test]
fn end_to_end_overall_block() {
    let report = summarize(&sample_record());

    assert_eq!(report.overall.wl_ratio, 2.0);
    assert_eq!(report.overall.kd_ratio, 2.0);
    assert_relative_eq!(report.overall.avg.kills, 4.0 / 3.0, epsilon = 1e-12);
    assert_eq!(report.level, 1.0);
    assert_eq!(report.level_progress.level, 1);
    assert_eq!(report.level_progress.xp_to_next_level, 0.0);
    assert_eq!(report.level_progress.xp_next_level, 500.0);
    assert_eq!(report.level_formatted, "1✫");
    assert_eq!(report.prestige, PrestigeTier::Stone);
}

#[test]
fn every_mode_has_the_same_shape() {
    let report = summarize(&sample_record());
    let json = serde_json::to_value(&report).unwrap();

    let shape = |value: &Value| {
        let mut keys: Vec<String> = value.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    };
    let expected = shape(&serde_json::to_value(report.mode(BedWarsMode::Solo)).unwrap());

    for mode in BedWarsMode::ALL {
        assert_eq!(shape(&json[mode.name()]), expected, "mode {}", mode.name());
    }
    for mode in DreamMode::ALL {
        assert_eq!(shape(&json["dream"][mode.name()]["doubles"]), expected);
        assert_eq!(shape(&json["dream"][mode.name()]["fours"]), expected);
    }
}

#[test]
fn serialized_field_names_follow_the_upstream_contract() {
    let record = RawRecord::from_value(json!({
        "two_four_kills_bedwars": 9,
        "two_four_deaths_bedwars": 3,
        "castle_beds_broken_bedwars": 6,
        "castle_beds_lost_bedwars": 2,
        "four_four_lucky_final_kills_bedwars": 5,
        "Experience": 250,
    }));
    let json = serde_json::to_value(summarize(&record)).unwrap();

    assert_eq!(json["4v4"]["KDRatio"], 3.0);
    assert_eq!(json["castle"]["beds"]["BLRatio"], 3.0);
    assert_eq!(json["dream"]["lucky"]["fours"]["finalKills"], 5);
    assert_eq!(json["dream"]["lucky"]["fours"]["finalKDRatio"], 0.0);
    assert_eq!(json["levelProgress"]["currentLevelXp"], 250.0);
    assert_eq!(json["levelProgress"]["xpNextLevel"], 500.0);
    assert_eq!(json["levelProgress"]["percent"], 50.0);
    assert_eq!(json["levelFormatted"], "0✫");
    assert_eq!(json["prestige"], "Stone");
    assert_eq!(json["playedGames"], 0);
    assert_eq!(json["WLRatio"], 0.0);
    assert!(json["collectedItemsTotal"].is_object());
    assert!(json.get("overall").is_none());
    assert!(json.get("modes").is_none());
}

#[test]
fn unknown_modes_are_ignored() {
    let record = RawRecord::from_value(json!({
        "eight_three_wins_bedwars": 99,
        "four_four_chaos_wins_bedwars": 99,
    }));
    let json = serde_json::to_value(summarize(&record)).unwrap();

    assert!(json.get("eight_three").is_none());
    assert!(json["dream"].get("chaos").is_none());
    assert_eq!(json["wins"], 0);
}

#[test]
fn ratios_in_every_mode_recompute_from_counters() {
    let record = RawRecord::from_value(json!({
        "eight_two_kills_bedwars": 17,
        "eight_two_deaths_bedwars": 6,
        "eight_two_beds_broken_bedwars": "11",
        "eight_two_beds_lost_bedwars": 0,
        "eight_two_games_played_bedwars": 7,
    }));
    let stats = aggregate_mode_stats(&record, BedWarsMode::Doubles.prefix());

    assert_eq!(stats.kd_ratio, divide(17.0, 6.0));
    assert_eq!(stats.beds.bl_ratio, 0.0);
    assert_eq!(stats.avg.beds_broken, divide(11.0, 7.0));
    assert_eq!(summarize(&record).mode(BedWarsMode::Doubles), stats);
}

#[test]
fn high_experience_reaches_later_prestiges() {
    // Eleven full prestiges of 487000 XP each.
    let record = RawRecord::from_value(json!({ "Experience": 11.0 * 487_000.0 }));
    let report = summarize(&record);

    assert_eq!(report.level, 1100.0);
    assert_eq!(report.prestige, PrestigeTier::IronPrime);
    assert_eq!(report.level_formatted, "1100✪");
}
