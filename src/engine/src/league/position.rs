use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Fantasy roster positions for the default scoring format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerPosition {
    Quarterback,
    RunningBack,
    WideReceiver,
    TightEnd,
    Kicker,
    Defense,
}

impl PlayerPosition {
    pub const ALL: [PlayerPosition; 6] = [
        PlayerPosition::Quarterback,
        PlayerPosition::RunningBack,
        PlayerPosition::WideReceiver,
        PlayerPosition::TightEnd,
        PlayerPosition::Kicker,
        PlayerPosition::Defense,
    ];

    pub fn get_short_name(&self) -> &'static str {
        match self {
            PlayerPosition::Quarterback => "QB",
            PlayerPosition::RunningBack => "RB",
            PlayerPosition::WideReceiver => "WR",
            PlayerPosition::TightEnd => "TE",
            PlayerPosition::Kicker => "K",
            PlayerPosition::Defense => "DST",
        }
    }

    pub fn from_short_name(code: &str) -> Option<PlayerPosition> {
        match code {
            "QB" => Some(PlayerPosition::Quarterback),
            "RB" => Some(PlayerPosition::RunningBack),
            "WR" => Some(PlayerPosition::WideReceiver),
            "TE" => Some(PlayerPosition::TightEnd),
            "K" => Some(PlayerPosition::Kicker),
            "DST" | "DEF" => Some(PlayerPosition::Defense),
            _ => None,
        }
    }

    /// Roster slots a team fills at this position over a full draft.
    pub fn roster_max(&self) -> u8 {
        match self {
            PlayerPosition::Quarterback => 2,
            PlayerPosition::RunningBack => 4,
            PlayerPosition::WideReceiver => 5,
            PlayerPosition::TightEnd => 2,
            PlayerPosition::Kicker => 1,
            PlayerPosition::Defense => 1,
        }
    }

    /// Positions that carry the early rounds in this format.
    pub fn is_premium(&self) -> bool {
        matches!(
            self,
            PlayerPosition::RunningBack | PlayerPosition::WideReceiver
        )
    }

    pub fn roster_size() -> u8 {
        PlayerPosition::ALL.iter().map(|p| p.roster_max()).sum()
    }
}

impl Display for PlayerPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.get_short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_names_round_trip() {
        for position in PlayerPosition::ALL {
            assert_eq!(
                PlayerPosition::from_short_name(position.get_short_name()),
                Some(position)
            );
        }
    }

    #[test]
    fn test_def_alias_maps_to_defense() {
        assert_eq!(
            PlayerPosition::from_short_name("DEF"),
            Some(PlayerPosition::Defense)
        );
        assert_eq!(PlayerPosition::from_short_name("FLEX"), None);
    }

    #[test]
    fn test_roster_maxes_fill_fifteen_rounds() {
        assert_eq!(PlayerPosition::roster_size(), 15);
    }

    #[test]
    fn test_premium_positions() {
        assert!(PlayerPosition::RunningBack.is_premium());
        assert!(PlayerPosition::WideReceiver.is_premium());
        assert!(!PlayerPosition::Quarterback.is_premium());
        assert!(!PlayerPosition::Kicker.is_premium());
    }
}
