//! Locomotion domain: keyboard input sampling.

use bevy::prelude::*;

use crate::locomotion::{
    InputAxis, InputBindings, InputButton, InputSample, InputSource, LocomotionInput,
};

/// [`InputSource`] over the keyboard state of the current frame.
pub(crate) struct KeyboardSource<'a> {
    pub keys: &'a ButtonInput<KeyCode>,
    pub bindings: &'a InputBindings,
}

impl KeyboardSource<'_> {
    fn horizontal_keys(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.bindings
            .left
            .iter()
            .chain(self.bindings.right.iter())
            .copied()
    }
}

impl InputSource for KeyboardSource<'_> {
    fn axis(&self, axis: InputAxis) -> f32 {
        match axis {
            InputAxis::Horizontal => {
                let mut x = 0.0;
                if self.keys.any_pressed(self.bindings.left.iter().copied()) {
                    x -= 1.0;
                }
                if self.keys.any_pressed(self.bindings.right.iter().copied()) {
                    x += 1.0;
                }
                x
            }
        }
    }

    fn pressed_this_tick(&self, button: InputButton) -> bool {
        match button {
            InputButton::Jump => self
                .keys
                .any_just_pressed(self.bindings.jump.iter().copied()),
            InputButton::Horizontal => self.keys.any_just_pressed(self.horizontal_keys()),
        }
    }

    fn held(&self, button: InputButton) -> bool {
        match button {
            InputButton::Jump => self.keys.any_pressed(self.bindings.jump.iter().copied()),
            InputButton::Horizontal => self.keys.any_pressed(self.horizontal_keys()),
        }
    }
}

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<InputBindings>,
    mut input: ResMut<LocomotionInput>,
) {
    let source = KeyboardSource {
        keys: &keyboard,
        bindings: &bindings,
    };
    input.0 = InputSample::sample(&source);
}
