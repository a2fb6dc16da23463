//! Keyboard and gamepad bindings, sampled into one [`InputSample`] per fixed tick.
//!
//! Axes are read every frame. Button presses are latched until the next fixed tick
//! consumes them, so a press on a frame with no fixed tick is not lost.

use bevy::prelude::*;
use leafwing_input_manager::prelude::*;
use underdog_shared::{InputSample, Vec2 as PlanarVec};

#[derive(Reflect, Actionlike, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    #[actionlike(DualAxis)]
    Run,
    #[actionlike(DualAxis)]
    Look,
    Jump,
    /// Enter or leave the nearest vehicle.
    Interact,
    /// Hit the nearest other player.
    Hit,
}

/// Input for the next fixed tick of the local player.
#[derive(Resource, Debug, Default)]
pub struct TickInput(pub InputSample);

impl TickInput {
    /// Read the sample for this tick and clear latched buttons.
    pub fn take(&mut self) -> InputSample {
        let sample = self.0;
        self.0.jump = false;
        self.0.interact = false;
        sample
    }
}

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(InputManagerPlugin::<PlayerAction>::default());

    app.register_type::<PlayerAction>();

    let input_map = InputMap::<PlayerAction>::default()
        .with_dual_axis(PlayerAction::Run, VirtualDPad::wasd())
        .with_dual_axis(PlayerAction::Run, GamepadStick::LEFT)
        .with_dual_axis(PlayerAction::Look, VirtualDPad::arrow_keys())
        .with_dual_axis(PlayerAction::Look, GamepadStick::RIGHT)
        .with(PlayerAction::Jump, KeyCode::Space)
        .with(PlayerAction::Jump, GamepadButton::South)
        .with(PlayerAction::Interact, KeyCode::KeyE)
        .with(PlayerAction::Interact, GamepadButton::North)
        .with(PlayerAction::Hit, KeyCode::KeyF);
    app.insert_resource(input_map);
    app.insert_resource(ActionState::<PlayerAction>::default());
    app.init_resource::<TickInput>();

    app.add_systems(Update, sample_input);
}

/// The camera looks down +Z, so screen-right is world -X.
fn to_planar(screen: Vec2) -> PlanarVec {
    PlanarVec::new(-screen.x, screen.y)
}

fn sample_input(actions: Res<ActionState<PlayerAction>>, mut tick_input: ResMut<TickInput>) {
    let sample = &mut tick_input.0;
    sample.run = to_planar(actions.axis_pair(&PlayerAction::Run));
    sample.look = to_planar(actions.axis_pair(&PlayerAction::Look));
    sample.jump |= actions.just_pressed(&PlayerAction::Jump);
    sample.interact |= actions.just_pressed(&PlayerAction::Interact);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latched_buttons_are_consumed_once() {
        let mut input = TickInput::default();
        input.0.jump = true;
        input.0.interact = true;
        input.0.run = PlanarVec::new(1.0, 0.0);

        let first = input.take();
        assert!(first.jump && first.interact);

        let second = input.take();
        assert!(!second.jump && !second.interact);
        assert_eq!(second.run, PlanarVec::new(1.0, 0.0));
    }
}
