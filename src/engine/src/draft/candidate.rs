use crate::league::PlayerPosition;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// ADP assigned to players the market has no consensus on. Large enough to
/// sit behind every drafted player.
pub const DEFAULT_ADP: f32 = 999.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InjuryStatus {
    Probable,
    Questionable,
    Doubtful,
    Out,
}

impl InjuryStatus {
    pub fn risk_weight(&self) -> f32 {
        match self {
            InjuryStatus::Probable => 0.1,
            InjuryStatus::Questionable => 0.2,
            InjuryStatus::Doubtful => 0.35,
            InjuryStatus::Out => 0.5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InjuryStatus::Probable => "Probable",
            InjuryStatus::Questionable => "Questionable",
            InjuryStatus::Doubtful => "Doubtful",
            InjuryStatus::Out => "Out",
        }
    }
}

/// One draftable player on the board.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftCandidate {
    pub id: u32,
    pub name: String,
    pub position: PlayerPosition,
    pub pro_team: String,
    /// Season-long fantasy point projection.
    pub projection: f32,
    /// Average draft position across the market. None for players the
    /// market is not drafting.
    pub adp: Option<f32>,
    pub age: u8,
    /// Recent performance signal in [-1, 1]. Positive means trending up.
    pub recent_form: f32,
    pub injury_status: Option<InjuryStatus>,
}

impl DraftCandidate {
    pub fn new(
        id: u32,
        name: String,
        position: PlayerPosition,
        pro_team: String,
        projection: f32,
        adp: Option<f32>,
        age: u8,
    ) -> Self {
        DraftCandidate {
            id,
            name,
            position,
            pro_team,
            projection,
            adp,
            age,
            recent_form: 0.0,
            injury_status: None,
        }
    }

    pub fn with_form(mut self, recent_form: f32) -> Self {
        self.recent_form = recent_form.clamp(-1.0, 1.0);
        self
    }

    pub fn with_injury(mut self, status: InjuryStatus) -> Self {
        self.injury_status = Some(status);
        self
    }

    pub fn adp_or_default(&self) -> f32 {
        self.adp.unwrap_or(DEFAULT_ADP)
    }

    /// Positive when the market expects this player to last past the
    /// current pick, negative when he has already outlived his ADP.
    pub fn adp_delta(&self, current_pick: u16) -> f32 {
        self.adp_or_default() - current_pick as f32
    }
}

impl Display for DraftCandidate {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} ({}, {})", self.name, self.position, self.pro_team)
    }
}

impl PartialEq for DraftCandidate {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_adp_falls_back_to_default() {
        let candidate = DraftCandidate::new(
            1,
            String::from("No Consensus"),
            PlayerPosition::TightEnd,
            String::from("HOU"),
            90.0,
            None,
            24,
        );

        assert_eq!(candidate.adp_or_default(), DEFAULT_ADP);
        assert!(candidate.adp_delta(30) > 900.0);
    }

    #[test]
    fn test_adp_delta_sign() {
        let candidate = DraftCandidate::new(
            2,
            String::from("Market Price"),
            PlayerPosition::RunningBack,
            String::from("DAL"),
            250.0,
            Some(20.0),
            25,
        );

        assert_eq!(candidate.adp_delta(10), 10.0);
        assert_eq!(candidate.adp_delta(35), -15.0);
    }

    #[test]
    fn test_form_is_clamped() {
        let candidate = DraftCandidate::new(
            3,
            String::from("Hot Hand"),
            PlayerPosition::WideReceiver,
            String::from("MIA"),
            180.0,
            Some(40.0),
            26,
        )
        .with_form(2.5);

        assert_eq!(candidate.recent_form, 1.0);
    }

    #[test]
    fn test_equality_is_by_id() {
        let left = DraftCandidate::new(
            7,
            String::from("Same Id"),
            PlayerPosition::Quarterback,
            String::from("BUF"),
            300.0,
            Some(15.0),
            27,
        );
        let right = DraftCandidate::new(
            7,
            String::from("Different Name"),
            PlayerPosition::Quarterback,
            String::from("BUF"),
            280.0,
            Some(18.0),
            27,
        );

        assert_eq!(left, right);
    }
}
