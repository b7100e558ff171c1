use serde::Serialize;

/// A primary BedWars mode, tracked under its own key prefix.
///
/// The set is closed: modes the stats service adds later are ignored until listed here.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BedWarsMode {
    Solo,
    Doubles,
    Threes,
    Fours,
    #[serde(rename = "4v4")]
    FourVsFour,
    Castle,
}

impl BedWarsMode {
    pub const ALL: [BedWarsMode; 6] = [
        BedWarsMode::Solo,
        BedWarsMode::Doubles,
        BedWarsMode::Threes,
        BedWarsMode::Fours,
        BedWarsMode::FourVsFour,
        BedWarsMode::Castle,
    ];

    /// Key prefix used by the stats service for this mode.
    pub fn prefix(self) -> &'static str {
        match self {
            BedWarsMode::Solo => "eight_one",
            BedWarsMode::Doubles => "eight_two",
            BedWarsMode::Threes => "four_three",
            BedWarsMode::Fours => "four_four",
            BedWarsMode::FourVsFour => "two_four",
            BedWarsMode::Castle => "castle",
        }
    }

    /// Name of this mode in a report.
    pub fn name(self) -> &'static str {
        match self {
            BedWarsMode::Solo => "solo",
            BedWarsMode::Doubles => "doubles",
            BedWarsMode::Threes => "threes",
            BedWarsMode::Fours => "fours",
            BedWarsMode::FourVsFour => "4v4",
            BedWarsMode::Castle => "castle",
        }
    }
}

/// An alternate rule set ("dream mode"), played in doubles and in fours.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DreamMode {
    Ultimate,
    Rush,
    Armed,
    Lucky,
    Voidless,
}

/// Team size a dream mode is played with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DreamTeamSize {
    Doubles,
    Fours,
}

impl DreamMode {
    pub const ALL: [DreamMode; 5] = [
        DreamMode::Ultimate,
        DreamMode::Rush,
        DreamMode::Armed,
        DreamMode::Lucky,
        DreamMode::Voidless,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DreamMode::Ultimate => "ultimate",
            DreamMode::Rush => "rush",
            DreamMode::Armed => "armed",
            DreamMode::Lucky => "lucky",
            DreamMode::Voidless => "voidless",
        }
    }

    /// Key prefix for this dream mode at the given team size, e.g. `eight_two_rush`.
    pub fn prefix(self, team_size: DreamTeamSize) -> String {
        let base = match team_size {
            DreamTeamSize::Doubles => BedWarsMode::Doubles.prefix(),
            DreamTeamSize::Fours => BedWarsMode::Fours.prefix(),
        };
        format!("{}_{}", base, self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_prefixes_are_unique() {
        let mut prefixes: Vec<_> = BedWarsMode::ALL.iter().map(|m| m.prefix()).collect();
        prefixes.sort_unstable();
        prefixes.dedup();
        assert_eq!(prefixes.len(), BedWarsMode::ALL.len());
    }

    #[test]
    fn dream_prefixes_combine_team_size_and_variant() {
        assert_eq!(DreamMode::Rush.prefix(DreamTeamSize::Doubles), "eight_two_rush");
        assert_eq!(DreamMode::Lucky.prefix(DreamTeamSize::Fours), "four_four_lucky");
    }

    #[test]
    fn serialized_names_match_report_keys() {
        for mode in BedWarsMode::ALL {
            assert_eq!(
                serde_json::to_value(mode).unwrap(),
                serde_json::Value::from(mode.name())
            );
        }
        for mode in DreamMode::ALL {
            assert_eq!(
                serde_json::to_value(mode).unwrap(),
                serde_json::Value::from(mode.name())
            );
        }
    }
}
