//! Test doubles for the physics seams and a minimal integrator.

use bevy::prelude::*;

use crate::movement::{CharacterBody, GameLayer, ProbeShape, SensorProbe};

pub(crate) const DT: f32 = 1.0 / 60.0;
pub(crate) const TEST_GRAVITY: Vec2 = Vec2::new(0.0, -450.0);

#[derive(Debug, Clone)]
pub(crate) struct TestBody {
    pub velocity: Vec2,
    pub mass: f32,
    pub gravity_scale: f32,
    pub gravity: Vec2,
}

impl TestBody {
    pub fn new(gravity_scale: f32) -> Self {
        Self {
            velocity: Vec2::ZERO,
            mass: 1.0,
            gravity_scale,
            gravity: TEST_GRAVITY,
        }
    }
}

impl CharacterBody for TestBody {
    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse / self.mass;
    }

    fn mass(&self) -> f32 {
        self.mass
    }

    fn gravity_scale(&self) -> f32 {
        self.gravity_scale
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale = scale;
    }

    fn world_gravity(&self) -> Vec2 {
        self.gravity
    }
}

/// Axis-aligned solids tagged with a layer.
#[derive(Debug, Clone, Default)]
pub(crate) struct TestProbe {
    pub solids: Vec<(Rect, GameLayer)>,
}

impl TestProbe {
    pub fn add(&mut self, layer: GameLayer, center: Vec2, size: Vec2) {
        self.solids.push((Rect::from_center_size(center, size), layer));
    }
}

impl SensorProbe for TestProbe {
    fn overlaps(&self, center: Vec2, shape: ProbeShape, layer: GameLayer) -> bool {
        self.solids
            .iter()
            .filter(|(_, l)| *l == layer)
            .any(|(rect, _)| match shape {
                ProbeShape::Box { half_extents } => {
                    rect.min.x <= center.x + half_extents.x
                        && rect.max.x >= center.x - half_extents.x
                        && rect.min.y <= center.y + half_extents.y
                        && rect.max.y >= center.y - half_extents.y
                }
                ProbeShape::Circle { radius } => {
                    let closest = center.clamp(rect.min, rect.max);
                    closest.distance(center) <= radius
                }
            })
    }
}

/// Integrates gravity and lands the body on top of ground solids.
#[derive(Debug, Clone)]
pub(crate) struct TestWorld {
    pub probe: TestProbe,
    pub position: Vec2,
    pub half_size: Vec2,
}

impl TestWorld {
    /// World with a floor whose top surface sits at y = 0, body resting on it.
    pub fn with_floor(floor_min_x: f32, floor_max_x: f32, half_size: Vec2) -> Self {
        let mut probe = TestProbe::default();
        let width = floor_max_x - floor_min_x;
        probe.add(
            GameLayer::Ground,
            Vec2::new(floor_min_x + width / 2.0, -20.0),
            Vec2::new(width, 40.0),
        );
        Self {
            probe,
            position: Vec2::new(0.0, half_size.y),
            half_size,
        }
    }

    pub fn integrate(&mut self, body: &mut TestBody, dt: f32) {
        body.velocity.y += body.gravity.y * body.gravity_scale * dt;
        let previous_feet = self.position.y - self.half_size.y;
        self.position += body.velocity * dt;
        let feet = self.position.y - self.half_size.y;

        if body.velocity.y > 0.0 {
            return;
        }
        for (rect, layer) in &self.probe.solids {
            let within_x = self.position.x >= rect.min.x && self.position.x <= rect.max.x;
            if *layer == GameLayer::Ground
                && within_x
                && previous_feet >= rect.max.y - 0.01
                && feet <= rect.max.y
            {
                self.position.y = rect.max.y + self.half_size.y;
                body.velocity.y = 0.0;
            }
        }
    }
}
