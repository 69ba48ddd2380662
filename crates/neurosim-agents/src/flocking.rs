//! Radius-neighbour query for flocking boids.
//!
//! Every flocking agent runs [`AgentRegistry::neighbors_within_radius`] once
//! per tick, making this the hottest path in the simulation. The scan is
//! split across the rayon pool: each worker accumulates matches into its
//! own vector and the partial vectors are concatenated once the parallel
//! phase ends. No lock is taken.
//!
//! Output order depends on scheduling. Callers must treat the result as an
//! unordered set.

use neurosim_types::{Coordinate, Transform};
use rayon::prelude::*;

use crate::agent::{Agent, Boid};
use crate::registry::AgentRegistry;

impl<C: Coordinate> AgentRegistry<C> {
    /// Collect the transforms of every flocking agent within `boid`'s
    /// detection radius.
    ///
    /// A candidate matches when its squared distance to the query boid is
    /// at most the squared detection radius. The query boid itself is never
    /// returned. Candidates without a boid or with a non-finite position are
    /// skipped.
    pub fn neighbors_within_radius(&self, boid: &Boid<C>) -> Vec<Transform<C>> {
        let origin = boid.position();
        let radius_squared = boid.radius_squared();
        let owner = boid.owner;

        self.entries()
            .par_iter()
            .filter(|(id, _)| **id != owner)
            .filter_map(|(_, agent)| candidate_transform(agent))
            .fold(Vec::new, |mut found, transform| {
                if origin.distance_squared(transform.position) <= radius_squared {
                    found.push(transform);
                }
                found
            })
            .reduce(Vec::new, |mut left, mut right| {
                left.append(&mut right);
                left
            })
    }
}

/// The transform a flocking candidate exposes to its neighbours, or `None`
/// if the candidate cannot take part.
fn candidate_transform<C: Coordinate>(agent: &Agent<C>) -> Option<Transform<C>> {
    if !agent.species().is_flocking() {
        return None;
    }
    let Some(candidate) = agent.boid() else {
        tracing::trace!(agent = %agent.id(), "Flocking candidate without boid skipped");
        return None;
    };
    if !candidate.position().is_finite() {
        tracing::trace!(agent = %agent.id(), "Flocking candidate without position skipped");
        return None;
    }
    Some(candidate.transform)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use neurosim_types::{AgentId, GridCell, Species, Vec2};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn scavenger(x: f32, y: f32, radius: f32) -> Agent {
        Agent::new(Species::Scavenger, GridCell::new(0, 0)).with_boid(Vec2::new(x, y), radius)
    }

    /// Order-independent view of a transform list.
    fn sorted_positions(transforms: &[Transform]) -> Vec<(i64, i64)> {
        #[allow(clippy::cast_possible_truncation)]
        let mut keys: Vec<(i64, i64)> = transforms
            .iter()
            .map(|t| {
                (
                    (f64::from(t.position.x) * 1000.0).round() as i64,
                    (f64::from(t.position.y) * 1000.0).round() as i64,
                )
            })
            .collect();
        keys.sort_unstable();
        keys
    }

    #[test]
    fn empty_registry_has_no_neighbors() {
        let registry: AgentRegistry = AgentRegistry::new();
        let boid = Boid::new(AgentId::new(), Vec2::new(0.0, 0.0), 10.0);
        assert!(registry.neighbors_within_radius(&boid).is_empty());
    }

    #[test]
    fn query_boid_excluded() {
        let mut registry = AgentRegistry::new();
        let me = scavenger(1.0, 1.0, 5.0);
        let my_boid = *me.boid().unwrap();
        registry.insert(me).unwrap();
        registry.insert(scavenger(2.0, 1.0, 5.0)).unwrap();

        let neighbors = registry.neighbors_within_radius(&my_boid);
        assert_eq!(sorted_positions(&neighbors), vec![(2000, 1000)]);
    }

    #[test]
    fn radius_boundary_is_inclusive() {
        let mut registry = AgentRegistry::new();
        assert!(registry.insert(scavenger(3.0, 4.0, 1.0)).is_ok()); // d^2 = 25
        assert!(registry.insert(scavenger(3.0, 4.1, 1.0)).is_ok()); // just outside
        let boid = Boid::new(AgentId::new(), Vec2::new(0.0, 0.0), 5.0);

        let neighbors = registry.neighbors_within_radius(&boid);
        assert_eq!(sorted_positions(&neighbors), vec![(3000, 4000)]);
    }

    #[test]
    fn non_flocking_and_boidless_candidates_skipped() {
        let mut registry = AgentRegistry::new();
        let grazer = Agent::new(Species::Herbivore, GridCell::new(0, 0))
            .with_boid(Vec2::new(0.5, 0.0), 1.0);
        assert!(registry.insert(grazer).is_ok());
        assert!(registry.insert(Agent::new(Species::Scavenger, GridCell::new(0, 0))).is_ok());
        assert!(registry.insert(scavenger(f32::NAN, 0.0, 1.0)).is_ok());
        assert!(registry.insert(scavenger(0.0, 0.5, 1.0)).is_ok());
        let boid = Boid::new(AgentId::new(), Vec2::new(0.0, 0.0), 2.0);

        let neighbors = registry.neighbors_within_radius(&boid);
        assert_eq!(sorted_positions(&neighbors), vec![(0, 500)]);
    }

    #[test]
    fn matches_brute_force_filter() {
        let mut rng = SmallRng::seed_from_u64(99);
        let mut registry = AgentRegistry::new();
        let mut positions = Vec::new();
        for _ in 0..2_000 {
            let pos = Vec2::new(rng.random_range(-50.0..50.0), rng.random_range(-50.0..50.0));
            positions.push(pos);
            assert!(registry.insert(scavenger(pos.x, pos.y, 4.0)).is_ok());
        }

        let origin = Vec2::new(3.0, -7.0);
        let boid = Boid::new(AgentId::new(), origin, 12.5);
        let expected: Vec<Transform> = positions
            .iter()
            .filter(|p| origin.distance_squared(**p) <= boid.radius_squared())
            .map(|p| Transform::new(*p))
            .collect();

        for _ in 0..5 {
            let neighbors = registry.neighbors_within_radius(&boid);
            assert_eq!(neighbors.len(), expected.len());
            assert_eq!(sorted_positions(&neighbors), sorted_positions(&expected));
        }
    }
}
