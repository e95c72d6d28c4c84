//! Animation state machine and playback for locomotion.
//!
//! Reads the [`AnimationParams`] the engine publishes every logic tick, picks
//! a clip, and advances frames. The ledge-climb clip is the completion signal
//! for a ledge hold: when it finishes, a [`LedgeClimbFinished`] message asks
//! the engine to release the body.


use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::locomotion::{AnimationParams, LedgeClimbFinished, LocomotionSystems};

/// Animation clips for a platformer character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Walk,
    Jump,
    Fall,
    WallSlide,
    LedgeClimb,
}

impl AnimationState {
    /// Clip selection, highest priority first.
    pub fn from_params(params: &AnimationParams) -> Self {
        if params.can_climb_ledge {
            AnimationState::LedgeClimb
        } else if params.is_wall_sliding {
            AnimationState::WallSlide
        } else if !params.is_grounded {
            if params.vertical_velocity > 0.0 {
                AnimationState::Jump
            } else {
                AnimationState::Fall
            }
        } else if params.is_walking {
            AnimationState::Walk
        } else {
            AnimationState::Idle
        }
    }
}

/// Component for animation playback.
#[derive(Component, Debug)]
pub struct AnimationController {
    /// Current animation state.
    pub state: AnimationState,
    /// Previous state (for detecting transitions).
    pub previous_state: AnimationState,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Total frames in current animation.
    pub total_frames: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Seconds per frame.
    pub frame_duration: f32,
    pub looping: bool,
    /// Whether the animation has finished (for non-looping).
    pub finished: bool,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self {
            state: AnimationState::Idle,
            previous_state: AnimationState::Idle,
            current_frame: 0,
            total_frames: 4,
            frame_timer: 0.0,
            frame_duration: 0.15,
            looping: true,
            finished: false,
        }
    }
}

impl AnimationController {
    /// Set the animation state, resetting frame if state changed.
    /// Returns whether the state changed.
    pub fn set_state(&mut self, state: AnimationState) -> bool {
        if self.state == state {
            return false;
        }

        self.previous_state = self.state;
        self.state = state;
        self.current_frame = 0;
        self.frame_timer = 0.0;
        self.finished = false;

        // Only the climb plays once
        self.looping = state != AnimationState::LedgeClimb;

        self.total_frames = match state {
            AnimationState::Idle => 4,
            AnimationState::Walk => 6,
            AnimationState::Jump => 2,
            AnimationState::Fall => 2,
            AnimationState::WallSlide => 2,
            AnimationState::LedgeClimb => 5,
        };

        self.frame_duration = match state {
            AnimationState::Walk => 0.1,
            AnimationState::LedgeClimb => 0.08,
            _ => 0.15,
        };

        true
    }

    /// Advance playback by `dt`. Returns `true` on the frame a non-looping
    /// clip completes.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.finished {
            return false;
        }

        self.frame_timer += dt;
        let mut completed = false;

        while self.frame_timer >= self.frame_duration && !self.finished {
            self.frame_timer -= self.frame_duration;
            self.current_frame += 1;

            if self.current_frame >= self.total_frames {
                if self.looping {
                    self.current_frame = 0;
                } else {
                    self.current_frame = self.total_frames - 1;
                    self.finished = true;
                    completed = true;
                }
            }
        }

        completed
    }

    /// Length of one pass through the current clip, in seconds.
    pub fn clip_duration(&self) -> f32 {
        self.total_frames as f32 * self.frame_duration
    }
}

/// Message fired when animation state changes.
#[derive(Debug)]
pub struct AnimationStateChanged {
    pub entity: Entity,
    pub from: AnimationState,
    pub to: AnimationState,
}

impl Message for AnimationStateChanged {}

/// Message fired when a non-looping animation completes.
#[derive(Debug)]
pub struct AnimationFinished {
    pub entity: Entity,
    pub state: AnimationState,
}

impl Message for AnimationFinished {}

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<AnimationStateChanged>()
            .add_message::<AnimationFinished>()
            .add_systems(
                Update,
                (
                    animation_state_machine,
                    update_animation_frames,
                    signal_ledge_climb_finished,
                )
                    .chain()
                    .after(LocomotionSystems::Logic)
                    .before(LocomotionSystems::Release),
            );
    }
}

/// System that picks the clip from the engine's published parameters.
pub fn animation_state_machine(
    mut query: Query<(Entity, &AnimationParams, &mut AnimationController)>,
    mut changed_events: MessageWriter<AnimationStateChanged>,
) {
    for (entity, params, mut controller) in &mut query {
        let from = controller.state;
        let to = AnimationState::from_params(params);
        if controller.set_state(to) {
            changed_events.write(AnimationStateChanged { entity, from, to });
        }
    }
}

/// System that updates animation frames based on time.
pub fn update_animation_frames(
    time: Res<Time>,
    mut query: Query<(Entity, &mut AnimationController)>,
    mut finished_events: MessageWriter<AnimationFinished>,
) {
    for (entity, mut controller) in &mut query {
        if controller.advance(time.delta_secs()) {
            finished_events.write(AnimationFinished {
                entity,
                state: controller.state,
            });
        }
    }
}

/// The end of the climb clip is what releases a ledge hold.
pub fn signal_ledge_climb_finished(
    mut finished_events: MessageReader<AnimationFinished>,
    mut ledge_events: MessageWriter<LedgeClimbFinished>,
) {
    for event in finished_events.read() {
        if event.state == AnimationState::LedgeClimb {
            debug!("Ledge climb animation finished for {:?}", event.entity);
            ledge_events.write(LedgeClimbFinished {
                entity: event.entity,
            });
        }
    }
}
