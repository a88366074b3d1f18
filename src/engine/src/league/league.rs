use crate::league::Team;

#[derive(Debug, Clone)]
pub struct League {
    pub id: u32,
    pub name: String,
    /// Sorted by draft_slot on construction.
    pub teams: Vec<Team>,
}

impl League {
    pub fn new(id: u32, name: String, mut teams: Vec<Team>) -> Self {
        teams.sort_by_key(|t| t.draft_slot);

        League { id, name, teams }
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn team(&self, id: u32) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    pub fn team_mut(&mut self, id: u32) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == id)
    }

    pub fn round_of(&self, overall_pick: u16) -> u8 {
        if overall_pick == 0 || self.teams.is_empty() {
            return 0;
        }

        ((overall_pick as usize - 1) / self.teams.len() + 1) as u8
    }

    /// Snake order: odd rounds run slot 1..N, even rounds run N..1.
    pub fn team_on_clock(&self, overall_pick: u16) -> Option<&Team> {
        if overall_pick == 0 || self.teams.is_empty() {
            return None;
        }

        let count = self.teams.len();
        let index = (overall_pick as usize - 1) % count;
        let round = (overall_pick as usize - 1) / count + 1;

        let slot_index = if round % 2 == 0 {
            count - 1 - index
        } else {
            index
        };

        self.teams.get(slot_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn league_of(team_count: u8) -> League {
        let teams = (1..=team_count)
            .map(|slot| Team::new(slot as u32, format!("Team {}", slot), slot))
            .collect();

        League::new(1, String::from("Test League"), teams)
    }

    #[test]
    fn test_snake_order_turns_at_round_boundary() {
        let league = league_of(12);

        assert_eq!(league.team_on_clock(1).map(|t| t.draft_slot), Some(1));
        assert_eq!(league.team_on_clock(12).map(|t| t.draft_slot), Some(12));
        // Slot 12 picks back to back over the turn.
        assert_eq!(league.team_on_clock(13).map(|t| t.draft_slot), Some(12));
        assert_eq!(league.team_on_clock(24).map(|t| t.draft_slot), Some(1));
        assert_eq!(league.team_on_clock(25).map(|t| t.draft_slot), Some(1));
        assert_eq!(league.team_on_clock(26).map(|t| t.draft_slot), Some(2));
    }

    #[test]
    fn test_round_of() {
        let league = league_of(12);

        assert_eq!(league.round_of(1), 1);
        assert_eq!(league.round_of(12), 1);
        assert_eq!(league.round_of(13), 2);
        assert_eq!(league.round_of(180), 15);
    }

    #[test]
    fn test_pick_zero_is_invalid() {
        let league = league_of(12);

        assert!(league.team_on_clock(0).is_none());
        assert_eq!(league.round_of(0), 0);
    }

    #[test]
    fn test_teams_sorted_by_slot_on_construction() {
        let teams = vec![
            Team::new(10, String::from("Late"), 3),
            Team::new(20, String::from("Early"), 1),
            Team::new(30, String::from("Middle"), 2),
        ];

        let league = League::new(1, String::from("Test League"), teams);

        assert_eq!(league.teams[0].id, 20);
        assert_eq!(league.team_on_clock(1).map(|t| t.id), Some(20));
        assert_eq!(league.team_on_clock(4).map(|t| t.id), Some(10));
    }
}
