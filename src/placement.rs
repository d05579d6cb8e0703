//! Rejection sampling of non-overlapping planet placements.

use crate::constants;
use crate::types::{Grid, Placement};
use rand::Rng;

/// Rules the placement sampler works under.
///
/// The search is bounded: at most `attempts_per_planet * count` candidates are drawn,
/// after which whatever was accepted so far is returned.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementPolicy {
    /// Minimum gap between a planet's disk and the grid edge, in cells
    pub margin: i32,
    /// Clearance required between two planets on top of their radii
    pub spacing: f64,
    /// Candidate draws allowed per requested planet
    pub attempts_per_planet: usize,
}

impl Default for PlacementPolicy {
    fn default() -> Self {
        Self {
            margin: constants::PLACEMENT_MARGIN,
            spacing: constants::PLACEMENT_SPACING,
            attempts_per_planet: constants::ATTEMPTS_PER_PLANET,
        }
    }
}

impl PlacementPolicy {
    /// Upper bound on candidate draws for `count` planets.
    pub fn max_attempts(&self, count: usize) -> usize {
        count.saturating_mul(self.attempts_per_planet)
    }

    /// Draws a center coordinate along one axis of length `extent` for a disk of
    /// radius `r`, keeping the disk and the margin inside the grid.
    ///
    /// When the disk plus margins is wider than the axis the offset range flips to
    /// `[span, 0)`, which pulls the disk back towards the middle and eats into the
    /// margin instead of giving up.
    fn sample_axis<R: Rng + ?Sized>(&self, extent: i32, r: i32, rng: &mut R) -> i32 {
        let span = extent - 2 * r - 2 * self.margin;
        let offset = match span {
            0 => 0,
            s if s > 0 => rng.random_range(0..s),
            s => rng.random_range(s..0),
        };
        offset + r + self.margin
    }
}

/// Samples up to `count` planet placements that keep clear of one another.
///
/// Each attempt draws a radius uniformly in `[min_radius, max_radius]` and a center
/// inside the margin-adjusted interior of `grid`. The candidate is kept only if its
/// center is further than `r1 + r2 + spacing` from every accepted placement.
///
/// # Arguments
///
/// * `grid` - Grid the planets must fit in
/// * `count` - Desired number of planets
/// * `min_radius` / `max_radius` - Inclusive radius range
/// * `policy` - Margin, spacing and attempt budget
/// * `rng` - Random source
///
/// # Returns
///
/// The accepted placements in acceptance order. Fewer than `count` is a normal
/// outcome on a crowded or small grid.
pub fn sample_placements<R: Rng + ?Sized>(
    grid: &Grid,
    count: usize,
    min_radius: i32,
    max_radius: i32,
    policy: &PlacementPolicy,
    rng: &mut R,
) -> Vec<Placement> {
    let (lo, hi) = if min_radius <= max_radius {
        (min_radius, max_radius)
    } else {
        (max_radius, min_radius)
    };
    let max_attempts = policy.max_attempts(count);
    let mut accepted: Vec<Placement> = Vec::with_capacity(count);
    let mut attempts = 0;

    while accepted.len() < count && attempts < max_attempts {
        attempts += 1;
        let r = rng.random_range(lo..=hi);
        let cx = policy.sample_axis(grid.width, r, rng);
        let cy = policy.sample_axis(grid.height, r, rng);
        let candidate = Placement::new(cx, cy, r);
        if accepted
            .iter()
            .all(|other| candidate.keeps_clear_of(other, policy.spacing))
        {
            accepted.push(candidate);
        }
    }

    if accepted.len() < count {
        log::debug!(
            "placed {} of {} planets after {} attempts",
            accepted.len(),
            count,
            attempts
        );
    }
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn accepted_placements_keep_their_distance() {
        let grid = Grid::new(100, 68);
        let policy = PlacementPolicy::default();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let placements = sample_placements(&grid, 3, 10, 20, &policy, &mut rng);
            assert!(placements.len() <= 3);
            for (i, p) in placements.iter().enumerate() {
                for q in &placements[i + 1..] {
                    assert!(p.center_distance(q) > (p.radius + q.radius) as f64 + 28.0);
                }
            }
        }
    }

    #[test]
    fn placements_fit_inside_margin() {
        let grid = Grid::new(100, 68);
        let policy = PlacementPolicy::default();
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            for p in sample_placements(&grid, 3, 10, 17, &policy, &mut rng) {
                assert!((10..=17).contains(&p.radius));
                assert!(p.cx - p.radius >= policy.margin);
                assert!(p.cy - p.radius >= policy.margin);
                assert!(p.cx + p.radius + policy.margin < grid.width);
                assert!(p.cy + p.radius + policy.margin < grid.height);
            }
        }
    }

    #[test]
    fn oversized_planets_give_up_margin_but_stay_on_grid() {
        // A radius of 20 leaves no room for a 16-cell margin on 68 rows.
        let grid = Grid::new(100, 68);
        let policy = PlacementPolicy::default();
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            for p in sample_placements(&grid, 2, 20, 20, &policy, &mut rng) {
                assert!(p.cy - p.radius >= 0);
                assert!(p.cy + p.radius < grid.height);
                assert!(p.cx - p.radius >= policy.margin);
            }
        }
    }

    #[test]
    fn first_candidate_is_always_accepted() {
        let grid = Grid::new(100, 68);
        let mut rng = StdRng::seed_from_u64(3);
        let placements =
            sample_placements(&grid, 1, 10, 20, &PlacementPolicy::default(), &mut rng);
        assert_eq!(placements.len(), 1);
    }

    #[test]
    fn crowded_grid_returns_partial_result() {
        // Only one 10-radius planet fits: two would need 10+10+28 between centers
        // while the interior spans a handful of cells.
        let grid = Grid::new(60, 60);
        let mut rng = StdRng::seed_from_u64(11);
        let placements =
            sample_placements(&grid, 5, 10, 10, &PlacementPolicy::default(), &mut rng);
        assert_eq!(placements.len(), 1);
    }

    #[test]
    fn zero_count_draws_nothing() {
        let grid = Grid::new(100, 68);
        let mut rng = StdRng::seed_from_u64(5);
        assert!(sample_placements(&grid, 0, 10, 20, &PlacementPolicy::default(), &mut rng)
            .is_empty());
    }
}
