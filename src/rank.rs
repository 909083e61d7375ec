//! Player rank derived from cumulative points.

use std::fmt;

/// (rank number, title, floor) in ascending order.
const TIERS: [(u8, &str, u32); 5] = [
    (1, "Novice", 0),
    (2, "Apprentice", 50),
    (3, "Specialist", 150),
    (4, "Elite Guardian", 300),
    (5, "Cyber Legend", 500),
];

/// Points shown as the "next" goal once the top tier is reached.
const TOP_TIER_GOAL: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rank {
    pub tier: u8,
    pub title: &'static str,
    /// Points at which this tier starts.
    pub floor: u32,
    /// Points at which the next tier starts.
    pub next_floor: u32,
    points: u32,
}

impl Rank {
    pub fn for_points(points: u32) -> Rank {
        let index = TIERS
            .iter()
            .rposition(|&(_, _, floor)| points >= floor)
            .unwrap_or(0);
        let (tier, title, floor) = TIERS[index];
        let next_floor = TIERS
            .get(index + 1)
            .map(|&(_, _, next)| next)
            .unwrap_or(TOP_TIER_GOAL);

        Rank {
            tier,
            title,
            floor,
            next_floor,
            points,
        }
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    /// Percentage of the way from this tier's floor to the next, 0 to 100.
    pub fn progress_to_next(&self) -> f64 {
        let span = self.next_floor.saturating_sub(self.floor);
        if span == 0 {
            return 100.0;
        }
        let gained = self.points.saturating_sub(self.floor);
        (gained as f64 / span as f64 * 100.0).clamp(0.0, 100.0)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rank {} - {}", self.tier, self.title)
    }
}
