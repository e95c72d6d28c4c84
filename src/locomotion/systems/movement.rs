//! Locomotion domain: systems driving the engine from the ECS.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::systems::collisions::SpatialProbe;
use crate::locomotion::{
    AnimationParams, Facing, LedgeClimbFinished, LocomotionEngine, LocomotionInput, PhysicsBody,
    Player,
};

/// [`PhysicsBody`] over an avian rigid body's components.
pub(crate) struct AvianBody<'a> {
    pub velocity: &'a mut LinearVelocity,
    pub position: &'a mut Position,
    pub inverse_mass: f32,
}

impl PhysicsBody for AvianBody<'_> {
    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity.0 += impulse * self.inverse_mass;
    }

    fn position(&self) -> Vec2 {
        self.position.0
    }

    fn set_position(&mut self, position: Vec2) {
        self.position.0 = position;
    }
}

pub(crate) fn run_logic_tick(
    time: Res<Time>,
    input: Res<LocomotionInput>,
    mut query: Query<
        (
            &mut LocomotionEngine,
            &mut LinearVelocity,
            &mut Position,
            &ComputedMass,
            &mut AnimationParams,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (mut engine, mut velocity, mut position, mass, mut params) in &mut query {
        let mut body = AvianBody {
            velocity: &mut velocity,
            position: &mut position,
            inverse_mass: mass.inverse(),
        };
        engine.logic_tick(input.0, dt, &mut body, &mut *params);
    }
}

pub(crate) fn run_physics_tick(
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            Entity,
            &mut LocomotionEngine,
            &mut LinearVelocity,
            &mut Position,
            &ComputedMass,
        ),
        With<Player>,
    >,
) {
    for (entity, mut engine, mut velocity, mut position, mass) in &mut query {
        let mut body = AvianBody {
            velocity: &mut velocity,
            position: &mut position,
            inverse_mass: mass.inverse(),
        };
        let probe = SpatialProbe {
            spatial_query: &spatial_query,
            exclude: entity,
        };
        engine.physics_tick(&mut body, &probe);
    }
}

pub(crate) fn finish_ledge_climbs(
    mut requests: MessageReader<LedgeClimbFinished>,
    mut query: Query<(
        &mut LocomotionEngine,
        &mut LinearVelocity,
        &mut Position,
        &ComputedMass,
    )>,
) {
    for request in requests.read() {
        let Ok((mut engine, mut velocity, mut position, mass)) = query.get_mut(request.entity)
        else {
            warn!("Ledge climb finished for unknown entity {:?}", request.entity);
            continue;
        };

        let mut body = AvianBody {
            velocity: &mut velocity,
            position: &mut position,
            inverse_mass: mass.inverse(),
        };
        engine.finish_ledge_climb(&mut body);
    }
}

/// Mirror the sprite to match the engine's facing.
pub(crate) fn sync_facing(mut query: Query<(&LocomotionEngine, &mut Sprite), With<Player>>) {
    for (engine, mut sprite) in &mut query {
        let flip = engine.state().facing == Facing::Left;
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}
