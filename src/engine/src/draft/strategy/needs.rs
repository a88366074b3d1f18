use crate::league::PlayerPosition;
use std::collections::HashMap;

/// Unfilled share of a position's roster allocation, in [0, 1].
pub fn need_score(position: PlayerPosition, counts: &HashMap<PlayerPosition, u8>) -> f32 {
    let max = position.roster_max() as f32;
    let count = counts.get(&position).copied().unwrap_or(0) as f32;

    ((max - count) / max).max(0.0)
}

/// Filled share of a position's roster allocation, capped at 1.0.
pub fn saturation(position: PlayerPosition, counts: &HashMap<PlayerPosition, u8>) -> f32 {
    let max = position.roster_max() as f32;
    let count = counts.get(&position).copied().unwrap_or(0) as f32;

    (count / max).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_need_falls_as_position_fills() {
        let mut counts = HashMap::new();

        assert_eq!(need_score(PlayerPosition::RunningBack, &counts), 1.0);

        counts.insert(PlayerPosition::RunningBack, 2);
        assert_eq!(need_score(PlayerPosition::RunningBack, &counts), 0.5);

        counts.insert(PlayerPosition::RunningBack, 4);
        assert_eq!(need_score(PlayerPosition::RunningBack, &counts), 0.0);
    }

    #[test]
    fn test_overfilled_position_clamps() {
        let counts = HashMap::from([(PlayerPosition::Kicker, 3)]);

        assert_eq!(need_score(PlayerPosition::Kicker, &counts), 0.0);
        assert_eq!(saturation(PlayerPosition::Kicker, &counts), 1.0);
    }

    #[test]
    fn test_need_and_saturation_are_complements_in_range() {
        let counts = HashMap::from([(PlayerPosition::WideReceiver, 2)]);

        let need = need_score(PlayerPosition::WideReceiver, &counts);
        let filled = saturation(PlayerPosition::WideReceiver, &counts);

        assert!((need + filled - 1.0).abs() < 1e-6);
    }
}
