//! Movement domain: ground, wall and ledge sensing.
//!
//! Sensing is a pure function of a [`SensorProbe`], the rig's anchors and
//! the body state, so it can be exercised without a physics world.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{SensorLayout, vec2};
use crate::error::ControllerError;
use crate::movement::{Facing, GameLayer};

/// Upward speed above which the ground probe is ignored.
pub const RISING_EPSILON: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProbeShape {
    Box { half_extents: Vec2 },
    Circle { radius: f32 },
}

impl ProbeShape {
    fn is_degenerate(&self) -> bool {
        match *self {
            ProbeShape::Box { half_extents } => half_extents.x <= 0.0 || half_extents.y <= 0.0,
            ProbeShape::Circle { radius } => radius <= 0.0,
        }
    }
}

/// Overlap test against the world, excluding the prober's own collider.
pub trait SensorProbe {
    fn overlaps(&self, center: Vec2, shape: ProbeShape, layer: GameLayer) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    /// Offset from the body center for a right-facing rig.
    pub offset: Vec2,
    pub shape: ProbeShape,
}

impl Anchor {
    pub fn position(&self, origin: Vec2, facing: Facing) -> Vec2 {
        origin + Vec2::new(self.offset.x * facing.sign(), self.offset.y)
    }
}

/// The three probe anchors of a character rig.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct SensorAnchors {
    pub ground: Anchor,
    pub wall: Anchor,
    pub edge: Anchor,
}

impl SensorAnchors {
    pub fn from_layout(layout: &SensorLayout) -> Result<Self, ControllerError> {
        let anchors = Self {
            ground: Anchor {
                offset: vec2(layout.ground_offset),
                shape: ProbeShape::Box {
                    half_extents: vec2(layout.ground_size) / 2.0,
                },
            },
            wall: Anchor {
                offset: vec2(layout.wall_offset),
                shape: ProbeShape::Box {
                    half_extents: vec2(layout.wall_size) / 2.0,
                },
            },
            edge: Anchor {
                offset: vec2(layout.edge_offset),
                shape: ProbeShape::Circle {
                    radius: layout.edge_radius,
                },
            },
        };

        for (name, anchor) in [
            ("ground", &anchors.ground),
            ("wall", &anchors.wall),
            ("edge", &anchors.edge),
        ] {
            if anchor.shape.is_degenerate() {
                return Err(ControllerError::MissingCollaborator {
                    collaborator: "sensor rig",
                    reason: format!("{name} probe has no area"),
                });
            }
        }
        Ok(anchors)
    }
}

/// Sensor cache refreshed once per physics tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SensorReadings {
    pub grounded: bool,
    pub on_wall: bool,
    pub on_edge: bool,
}

pub fn is_grounded(
    probe: &impl SensorProbe,
    anchors: &SensorAnchors,
    origin: Vec2,
    facing: Facing,
    velocity_y: f32,
) -> bool {
    if velocity_y > RISING_EPSILON {
        return false;
    }
    let anchor = anchors.ground;
    probe.overlaps(anchor.position(origin, facing), anchor.shape, GameLayer::Ground)
}

pub fn is_on_wall(
    probe: &impl SensorProbe,
    anchors: &SensorAnchors,
    origin: Vec2,
    facing: Facing,
) -> bool {
    let anchor = anchors.wall;
    probe.overlaps(anchor.position(origin, facing), anchor.shape, GameLayer::Wall)
}

/// True when there is no ground under the leading foot.
pub fn is_on_edge(
    probe: &impl SensorProbe,
    anchors: &SensorAnchors,
    origin: Vec2,
    facing: Facing,
) -> bool {
    let anchor = anchors.edge;
    !probe.overlaps(anchor.position(origin, facing), anchor.shape, GameLayer::Ground)
}

pub fn sense(
    probe: &impl SensorProbe,
    anchors: &SensorAnchors,
    origin: Vec2,
    facing: Facing,
    velocity: Vec2,
) -> SensorReadings {
    SensorReadings {
        grounded: is_grounded(probe, anchors, origin, facing, velocity.y),
        on_wall: is_on_wall(probe, anchors, origin, facing),
        on_edge: is_on_edge(probe, anchors, origin, facing),
    }
}

/// [`SensorProbe`] backed by avian's spatial query pipeline.
pub struct AvianProbe<'q, 'w, 's> {
    query: &'q SpatialQuery<'w, 's>,
    exclude: Entity,
}

impl<'q, 'w, 's> AvianProbe<'q, 'w, 's> {
    pub fn new(query: &'q SpatialQuery<'w, 's>, exclude: Entity) -> Self {
        Self { query, exclude }
    }
}

impl SensorProbe for AvianProbe<'_, '_, '_> {
    fn overlaps(&self, center: Vec2, shape: ProbeShape, layer: GameLayer) -> bool {
        let collider = match shape {
            ProbeShape::Box { half_extents } => {
                Collider::rectangle(half_extents.x * 2.0, half_extents.y * 2.0)
            }
            ProbeShape::Circle { radius } => Collider::circle(radius),
        };
        let filter = SpatialQueryFilter::from_mask(layer).with_excluded_entities([self.exclude]);
        !self
            .query
            .shape_intersections(&collider, center, 0.0, &filter)
            .is_empty()
    }
}
