//! End-to-end scenarios over a bootstrapped [`SimContext`].
//!
//! Each test builds a fresh grid and context, so tests share no state and
//! can run in parallel.

#![allow(clippy::unwrap_used)]

use std::collections::BTreeSet;

use neurosim_agents::{Agent, Boid};
use neurosim_core::{BrainError, SimContext};
use neurosim_types::{AgentId, BrainRole, BrainShape, GridCell, Species, TerrainKind, Vec2};
use neurosim_world::{Graph, Node};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn bootstrap(max_x: u32, max_y: u32) -> SimContext {
    SimContext::bootstrap(Graph::grid(max_x, max_y).unwrap(), 2024).unwrap()
}

/// A scavenger standing on `(x, y)` with its boid at the cell coordinate.
fn scavenger(x: u32, y: u32, radius: f32) -> Agent {
    let cell = GridCell::new(x, y);
    Agent::new(Species::Scavenger, cell).with_boid(cell.to_coordinate(), radius)
}

#[test]
fn single_bush_found_from_origin() {
    let mut ctx = bootstrap(10, 10);
    ctx.graph_mut()
        .set_terrain(GridCell::new(5, 5), TerrainKind::Bush)
        .unwrap();

    let node = ctx.nearest_node_of_type(TerrainKind::Bush, Vec2::new(0.0, 0.0));
    assert_eq!(node.map(Node::cell), Some(GridCell::new(5, 5)));
}

#[test]
fn single_bush_found_from_anywhere() {
    let mut ctx = bootstrap(10, 10);
    ctx.graph_mut()
        .set_terrain(GridCell::new(5, 5), TerrainKind::Bush)
        .unwrap();

    let mut rng = SmallRng::seed_from_u64(5);
    for _ in 0..100 {
        let from = Vec2::new(rng.random_range(-20.0..30.0), rng.random_range(-20.0..30.0));
        let node = ctx.nearest_node_of_type(TerrainKind::Bush, from);
        assert_eq!(node.map(Node::cell), Some(GridCell::new(5, 5)));
    }
}

#[test]
fn no_matching_terrain_is_none() {
    let ctx = bootstrap(10, 10);
    assert!(
        ctx.nearest_node_of_type(TerrainKind::Carrion, Vec2::new(3.0, 3.0))
            .is_none()
    );
}

#[test]
fn carnivore_found_over_herbivore() {
    let mut ctx = bootstrap(10, 10);
    let carnivore = ctx
        .spawn(Agent::new(Species::Carnivore, GridCell::new(2, 2)))
        .unwrap();
    ctx.spawn(Agent::new(Species::Herbivore, GridCell::new(8, 8)))
        .unwrap();

    let found = ctx.nearest_agent_of_type(Species::Carnivore, Vec2::new(0.0, 0.0));
    assert_eq!(found.map(|a| a.id()), Some(carnivore.id()));
    assert!(
        ctx.nearest_agent_of_type(Species::Scavenger, Vec2::new(0.0, 0.0))
            .is_none()
    );
}

#[test]
fn carnivore_eat_topology() {
    let ctx = bootstrap(4, 4);
    assert_eq!(
        ctx.lookup(BrainRole::Eat, Species::Carnivore).unwrap(),
        &BrainShape::new(4, 1, &[1])
    );
}

#[test]
fn reinit_keeps_topology_stable() {
    let mut ctx = bootstrap(4, 4);
    let before = ctx.topology().clone();
    ctx.reinit_topology().unwrap();
    assert_eq!(ctx.topology(), &before);
}

#[test]
fn unregistered_pairs_are_not_found() {
    let ctx = bootstrap(4, 4);
    let err = ctx.lookup(BrainRole::Attack, Species::Herbivore).unwrap_err();
    assert!(err.is_not_found());

    let err = ctx
        .resolve_slot(BrainRole::Flocking, Species::Carnivore)
        .unwrap_err();
    assert!(err.is_not_found());

    let err = ctx.resolve_slot_tagged(BrainRole::Eat, 200).unwrap_err();
    assert!(matches!(err, BrainError::InvalidSpecies { .. }));
    assert!(!err.is_not_found());
}

#[test]
fn every_slot_resolves_to_a_registered_shape() {
    let ctx = bootstrap(4, 4);
    for species in Species::ALL {
        for (slot, role) in ctx.roles().roles(species).iter().enumerate() {
            assert_eq!(ctx.resolve_slot(*role, species).unwrap(), slot);
            assert!(ctx.lookup(*role, species).is_ok());
        }
    }
}

#[test]
fn coordinate_to_node_truncates_and_bounds_checks() {
    let ctx = bootstrap(10, 8);
    assert_eq!(
        ctx.coordinate_to_node(Vec2::new(3.9, 7.99)).map(Node::cell),
        Some(GridCell::new(3, 7))
    );
    for outside in [
        Vec2::new(-0.5, 1.0),
        Vec2::new(1.0, -0.1),
        Vec2::new(10.0, 1.0),
        Vec2::new(1.0, 8.0),
    ] {
        assert!(ctx.coordinate_to_node(outside).is_none(), "{outside:?}");
    }
}

#[test]
fn spawn_bands_hold_over_many_draws() {
    let mut ctx = bootstrap(12, 40);
    for _ in 0..500 {
        let lower = ctx.random_node_in_lower_band().map(Node::cell).unwrap();
        assert!((1..10).contains(&lower.y), "lower band row {}", lower.y);
        let upper = ctx.random_node_in_upper_band().map(Node::cell).unwrap();
        assert!((30..=39).contains(&upper.y), "upper band row {}", upper.y);
    }
}

#[test]
fn flocking_matches_brute_force() {
    let mut ctx = bootstrap(50, 50);
    let mut rng = SmallRng::seed_from_u64(11);
    let mut boids: Vec<Boid> = Vec::new();
    for _ in 0..400 {
        let position = Vec2::new(rng.random_range(0.0..50.0), rng.random_range(0.0..50.0));
        let cell = ctx.coordinate_to_node(position).map(Node::cell).unwrap();
        let radius = rng.random_range(1.0..8.0);
        let agent = Agent::new(Species::Scavenger, cell).with_boid(position, radius);
        boids.push(*agent.boid().unwrap());
        ctx.spawn(agent).unwrap();
    }

    let pass = ctx.flocking_pass();
    assert_eq!(pass.len(), boids.len());

    for boid in &boids {
        let expected: BTreeSet<AgentId> = boids
            .iter()
            .filter(|other| other.owner != boid.owner)
            .filter(|other| {
                squared_distance(boid.position(), other.position()) <= boid.radius_squared()
            })
            .map(|other| other.owner)
            .collect();

        let got = pass.get(&boid.owner).unwrap();
        assert_eq!(got.len(), expected.len());

        let direct = ctx.neighbors_within_radius(boid);
        assert_eq!(direct.len(), expected.len());
    }
}

fn squared_distance(a: Vec2, b: Vec2) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    dx.mul_add(dx, dy * dy)
}

#[test]
fn despawned_scavenger_leaves_flocking() {
    let mut ctx = bootstrap(10, 10);
    let a = ctx.spawn(scavenger(1, 1, 3.0)).unwrap();
    let b = ctx.spawn(scavenger(2, 2, 3.0)).unwrap();

    let query = *a.boid().unwrap();
    assert_eq!(ctx.neighbors_within_radius(&query).len(), 1);

    ctx.despawn(b.id()).unwrap();
    assert!(ctx.neighbors_within_radius(&query).is_empty());
    assert_eq!(ctx.agents().flocking_count(), 1);
}

#[test]
fn moved_boid_is_seen_at_new_position() {
    let mut ctx = bootstrap(20, 20);
    let a = ctx.spawn(scavenger(0, 0, 2.0)).unwrap();
    let b = ctx.spawn(scavenger(10, 10, 2.0)).unwrap();
    let query = *a.boid().unwrap();
    assert!(ctx.neighbors_within_radius(&query).is_empty());

    ctx.move_boid(b.id(), Vec2::new(1.0, 1.0)).unwrap();
    let neighbors = ctx.neighbors_within_radius(&query);
    assert_eq!(neighbors.len(), 1);
    assert_eq!(neighbors.first().map(|t| t.position), Some(Vec2::new(1.0, 1.0)));
}
