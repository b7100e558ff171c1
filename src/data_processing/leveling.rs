use crate::data_summary::level_progress::LevelProgress;

use tracing::warn;

/// Cost of the first four levels of every prestige.
const EASY_LEVEL_COSTS: [f64; 4] = [500.0, 1000.0, 2000.0, 3500.0];
/// Cost of every other level.
const NORMAL_LEVEL_COST: f64 = 5000.0;
/// Levels in one prestige. The cost schedule restarts at every multiple.
pub const LEVELS_PER_PRESTIGE: u32 = 100;
/// Experience needed to complete one full prestige.
const PRESTIGE_XP: f64 = EASY_LEVEL_COSTS[0]
    + EASY_LEVEL_COSTS[1]
    + EASY_LEVEL_COSTS[2]
    + EASY_LEVEL_COSTS[3]
    + (LEVELS_PER_PRESTIGE as usize - EASY_LEVEL_COSTS.len()) as f64 * NORMAL_LEVEL_COST;
/// Highest level the engine will ever report. Experience beyond it saturates.
pub const MAX_LEVEL: u32 = 10_000;

/// Where the level walk stopped.
///
/// # Fields
///
/// * `levels` - Number of level costs consumed.
/// * `remaining` - Experience left after the last consumed cost, always `<= 0`.
/// * `last_cost` - Cost of the last consumed level.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LevelWalk {
    levels: u32,
    remaining: f64,
    last_cost: f64,
}

/// Returns the experience cost of advancing from `level` to `level + 1`.
///
/// The schedule restarts every 100 levels: 500, 1000, 2000, 3500, then 5000 flat.
pub fn level_cost(level: u32) -> f64 {
    let local_level = (level % LEVELS_PER_PRESTIGE) as usize;
    EASY_LEVEL_COSTS
        .get(local_level)
        .copied()
        .unwrap_or(NORMAL_LEVEL_COST)
}

/// Computes the fractional level reached with `xp` experience.
///
/// The integer part counts completed levels. Between two boundaries the result
/// is the next boundary minus the fraction of its cost still missing, so 250 XP
/// gives `0.5` and 500 XP gives exactly `1.0`.
///
/// # Arguments
///
/// * `xp` - Cumulative experience. Negative or non-finite values count as zero.
pub fn level_for_experience(xp: f64) -> f64 {
    let walk = walk_levels(xp);
    walk.levels as f64 + walk.remaining / walk.last_cost
}

/// Breaks `xp` down into the current level and the progress made inside it.
///
/// Zero experience reports level 0 untouched, with its whole 500 XP cost ahead.
/// Any other exact level boundary reports the level just completed: nothing
/// left to earn on it, and `xp_next_level` is the cost that was just paid.
///
/// # Arguments
///
/// * `xp` - Cumulative experience. Negative or non-finite values count as zero.
///
/// # Returns
///
/// A `LevelProgress` where `percent` and `percent_remaining` are rounded to two decimals.
pub fn level_progress(xp: f64) -> LevelProgress {
    let walk = walk_levels(xp);

    if walk.levels == 0 {
        return LevelProgress {
            level: 0,
            current_level_xp: 0.0,
            xp_to_next_level: EASY_LEVEL_COSTS[0],
            xp_next_level: EASY_LEVEL_COSTS[0],
            percent: 0.0,
            percent_remaining: 100.0,
        };
    }

    if walk.remaining == 0.0 {
        return LevelProgress {
            level: walk.levels,
            current_level_xp: 0.0,
            xp_to_next_level: 0.0,
            xp_next_level: walk.last_cost,
            percent: 0.0,
            percent_remaining: 100.0,
        };
    }

    let xp_to_next_level = -walk.remaining;
    let current_level_xp = walk.last_cost - xp_to_next_level;
    let percent = round_to_hundredths(current_level_xp / walk.last_cost * 100.0);

    LevelProgress {
        level: walk.levels - 1,
        current_level_xp,
        xp_to_next_level,
        xp_next_level: walk.last_cost,
        percent,
        percent_remaining: round_to_hundredths(100.0 - percent),
    }
}

/// Total experience needed to reach `level` from zero.
pub fn experience_for_level(level: u32) -> f64 {
    let full_prestiges = level / LEVELS_PER_PRESTIGE;
    let start = full_prestiges * LEVELS_PER_PRESTIGE;
    let partial: f64 = (start..level).map(level_cost).sum();
    full_prestiges as f64 * PRESTIGE_XP + partial
}

/// Consumes level costs from `xp` until it is exhausted.
///
/// Whole prestiges are skipped arithmetically, so the loop runs at most one
/// prestige worth of levels. The last prestige is left to the loop when `xp`
/// lands exactly on a prestige boundary, which keeps `last_cost` meaningful.
fn walk_levels(xp: f64) -> LevelWalk {
    let xp = clamp_experience(xp);

    let mut skipped = (xp / PRESTIGE_XP).floor() as u32;
    if skipped > 0 && xp == skipped as f64 * PRESTIGE_XP {
        skipped -= 1;
    }

    let mut walk = LevelWalk {
        levels: skipped * LEVELS_PER_PRESTIGE,
        remaining: xp - skipped as f64 * PRESTIGE_XP,
        last_cost: EASY_LEVEL_COSTS[0],
    };

    while walk.remaining > 0.0 && walk.levels < MAX_LEVEL {
        walk.last_cost = level_cost(walk.levels);
        walk.remaining -= walk.last_cost;
        walk.levels += 1;
    }

    walk
}

/// Brings `xp` into `[0, experience_for_level(MAX_LEVEL)]`.
fn clamp_experience(xp: f64) -> f64 {
    if !xp.is_finite() || xp < 0.0 {
        if xp != 0.0 {
            warn!(xp, "experience is negative or not finite, treating it as zero");
        }
        return 0.0;
    }

    let ceiling = experience_for_level(MAX_LEVEL);
    if xp > ceiling {
        warn!(xp, ceiling, "experience exceeds the level ceiling, saturating");
        return ceiling;
    }

    xp
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
