/// Which subsystem owns the player's pose this tick.
///
/// - `Normal`: input-driven locomotion.
/// - `Transition`: a choreography interpolates between vehicle anchors; input is ignored.
/// - `InCar`: the pose is locked to the vehicle's seat anchor.
///
/// Legal moves are `Normal <-> Transition <-> InCar`. There is no direct `Normal <-> InCar`
/// edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlayerState {
    #[default]
    Normal,
    Transition,
    InCar,
}

impl PlayerState {
    /// Whether moving from `self` to `next` is an edge of the state graph.
    pub fn can_transition_to(self, next: PlayerState) -> bool {
        use PlayerState::*;
        matches!(
            (self, next),
            (Normal, Transition) | (Transition, InCar) | (InCar, Transition) | (Transition, Normal)
        )
    }

    pub fn accepts_locomotion(self) -> bool {
        self == PlayerState::Normal
    }
}
