//! Tick-driven enter/exit sequences.
//!
//! A [`Choreography`] is the resumable state of one sequence: which anchors it moves
//! between, how much simulated time has passed, and (for entering) the simulation-rate
//! guard it holds. The player controller advances it once per fixed tick and drops it when
//! it finishes or is cancelled; dropping releases the rate guard.
//!
//! Interpolation factor is `elapsed / lerp_span_s`, clamped to `[0, 1]`. The span (1.3s) is
//! shorter than the sequence (1.8s), so the pose arrives at its destination early and holds
//! there until the sequence ends. It never overshoots.

use crate::{
    constants::{
        CHOREOGRAPHY_DURATION_S, ENTER_DOOR_WINDOW_S, EXIT_DOOR_WINDOW_S, LERP_SPAN_S, TIME_EPS,
    },
    math::Pose,
    time_scale::{RateOverride, SimulationRate},
    vehicle::{Vehicle, VehicleId},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoreographyKind {
    /// Enter anchor to seat anchor.
    Enter,
    /// Seat anchor to enter anchor.
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChoreographyTuning {
    pub duration_s: f32,
    pub lerp_span_s: f32,
    pub enter_door_window_s: (f32, f32),
    pub exit_door_window_s: (f32, f32),
}

impl Default for ChoreographyTuning {
    fn default() -> Self {
        Self {
            duration_s: CHOREOGRAPHY_DURATION_S,
            lerp_span_s: LERP_SPAN_S,
            enter_door_window_s: ENTER_DOOR_WINDOW_S,
            exit_door_window_s: EXIT_DOOR_WINDOW_S,
        }
    }
}

/// What one tick of a sequence wants applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChoreographyFrame {
    pub pose: Pose,
    pub door_open: bool,
    /// The sequence has run its full duration; the caller should commit the next state.
    pub finished: bool,
}

#[derive(Debug)]
pub struct Choreography {
    kind: ChoreographyKind,
    vehicle: VehicleId,
    elapsed_s: f32,
    source: Pose,
    dest: Pose,
    tuning: ChoreographyTuning,
    rate_guard: Option<RateOverride>,
}

impl Choreography {
    /// Start climbing into `vehicle`. Slows the simulation until the sequence is dropped.
    pub fn enter(vehicle: &Vehicle, tuning: ChoreographyTuning, rate: &SimulationRate) -> Self {
        Self {
            kind: ChoreographyKind::Enter,
            vehicle: vehicle.id,
            elapsed_s: 0.0,
            source: vehicle.enter_anchor_pose(),
            dest: vehicle.seat_anchor_pose(),
            tuning,
            rate_guard: Some(rate.acquire()),
        }
    }

    /// Start climbing out of `vehicle`.
    pub fn exit(vehicle: &Vehicle, tuning: ChoreographyTuning) -> Self {
        Self {
            kind: ChoreographyKind::Exit,
            vehicle: vehicle.id,
            elapsed_s: 0.0,
            source: vehicle.seat_anchor_pose(),
            dest: vehicle.enter_anchor_pose(),
            tuning,
            rate_guard: None,
        }
    }

    pub fn kind(&self) -> ChoreographyKind {
        self.kind
    }

    pub fn vehicle_id(&self) -> VehicleId {
        self.vehicle
    }

    pub fn elapsed_s(&self) -> f32 {
        self.elapsed_s
    }

    pub fn holds_rate_override(&self) -> bool {
        self.rate_guard.is_some()
    }

    /// Interpolation factor at the current elapsed time.
    pub fn factor(&self) -> f32 {
        if self.tuning.lerp_span_s <= 0.0 {
            return 1.0;
        }
        (self.elapsed_s / self.tuning.lerp_span_s).clamp(0.0, 1.0)
    }

    fn door_window(&self) -> (f32, f32) {
        match self.kind {
            ChoreographyKind::Enter => self.tuning.enter_door_window_s,
            ChoreographyKind::Exit => self.tuning.exit_door_window_s,
        }
    }

    /// Advance one fixed tick of `dt_s` simulated seconds.
    ///
    /// Anchors are re-read from `vehicle` first so the sequence follows a vehicle that moves.
    /// The returned pose and door state are sampled at the elapsed time *before* this tick's
    /// advance, so the first frame sits exactly on the source anchor.
    pub fn advance(&mut self, vehicle: &Vehicle, dt_s: f32) -> ChoreographyFrame {
        (self.source, self.dest) = match self.kind {
            ChoreographyKind::Enter => (vehicle.enter_anchor_pose(), vehicle.seat_anchor_pose()),
            ChoreographyKind::Exit => (vehicle.seat_anchor_pose(), vehicle.enter_anchor_pose()),
        };

        let pose = self.source.lerp(&self.dest, self.factor());
        let (open_from, open_until) = self.door_window();
        let door_open = open_from < self.elapsed_s && self.elapsed_s < open_until;

        self.elapsed_s += dt_s.max(0.0);
        let finished = self.elapsed_s + TIME_EPS >= self.tuning.duration_s;

        ChoreographyFrame {
            pose,
            door_open,
            finished,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{constants::FIXED_DT_S, math::Vec3};

    fn car() -> Vehicle {
        Vehicle::new(
            1,
            Pose::from_yaw(Vec3::new(5.0, 0.0, 0.0), 0.0),
            Pose::from_yaw(Vec3::new(-2.0, 0.0, 0.0), 0.0),
            Pose::from_yaw(Vec3::new(-0.5, 0.6, 0.0), std::f32::consts::FRAC_PI_2),
        )
    }

    fn run_to_end(seq: &mut Choreography, vehicle: &Vehicle) -> Vec<ChoreographyFrame> {
        let mut frames = Vec::new();
        loop {
            let frame = seq.advance(vehicle, FIXED_DT_S);
            frames.push(frame);
            if frame.finished {
                return frames;
            }
        }
    }

    #[test]
    fn sequence_lasts_exactly_its_duration_in_ticks() {
        let vehicle = car();
        let rate = SimulationRate::default();
        let mut seq = Choreography::enter(&vehicle, ChoreographyTuning::default(), &rate);

        let frames = run_to_end(&mut seq, &vehicle);
        let expected = (CHOREOGRAPHY_DURATION_S / FIXED_DT_S).round() as usize;
        assert_eq!(frames.len(), expected);
    }

    #[test]
    fn enter_starts_on_enter_anchor_and_holds_on_seat() {
        let vehicle = car();
        let rate = SimulationRate::default();
        let mut seq = Choreography::enter(&vehicle, ChoreographyTuning::default(), &rate);

        let frames = run_to_end(&mut seq, &vehicle);
        let enter = vehicle.enter_anchor_pose();
        let seat = vehicle.seat_anchor_pose();

        assert!((frames[0].pose.translation - enter.translation).norm() < 1.0e-5);

        // From 1.3s onward the factor is clamped: every frame sits on the seat.
        let hold_from = (LERP_SPAN_S / FIXED_DT_S).ceil() as usize + 1;
        for frame in &frames[hold_from..] {
            assert!((frame.pose.translation - seat.translation).norm() < 1.0e-5);
            assert!(frame.pose.rotation.angle_to(&seat.rotation) < 1.0e-3);
        }
    }

    #[test]
    fn factor_never_exceeds_one() {
        let vehicle = car();
        let mut seq = Choreography::exit(&vehicle, ChoreographyTuning::default());
        while !seq.advance(&vehicle, FIXED_DT_S).finished {
            assert!(seq.factor() <= 1.0);
        }
        assert_eq!(seq.factor(), 1.0);
    }

    #[test]
    fn door_is_open_only_inside_the_window() {
        let vehicle = car();
        let rate = SimulationRate::default();
        let mut seq = Choreography::enter(&vehicle, ChoreographyTuning::default(), &rate);

        let mut t = 0.0f32;
        for frame in run_to_end(&mut seq, &vehicle) {
            let inside = t > 0.3 + 1.0e-3 && t < 1.0 - 1.0e-3;
            let outside = t < 0.3 - 1.0e-3 || t > 1.0 + 1.0e-3;
            if inside {
                assert!(frame.door_open, "door closed at {t}");
            }
            if outside {
                assert!(!frame.door_open, "door open at {t}");
            }
            t += FIXED_DT_S;
        }
    }

    #[test]
    fn exit_opens_the_door_right_away() {
        let vehicle = car();
        let mut seq = Choreography::exit(&vehicle, ChoreographyTuning::default());
        let first = seq.advance(&vehicle, FIXED_DT_S);
        let second = seq.advance(&vehicle, FIXED_DT_S);
        assert!(!first.door_open);
        assert!(second.door_open);
    }

    #[test]
    fn enter_holds_the_rate_until_dropped() {
        let vehicle = car();
        let rate = SimulationRate::default();
        let seq = Choreography::enter(&vehicle, ChoreographyTuning::default(), &rate);
        assert!(seq.holds_rate_override());
        assert!(rate.is_overridden());

        drop(seq);
        assert!(!rate.is_overridden());

        let exit = Choreography::exit(&vehicle, ChoreographyTuning::default());
        assert!(!exit.holds_rate_override());
        assert!(!rate.is_overridden());
    }

    #[test]
    fn anchors_track_a_moving_vehicle() {
        let mut vehicle = car();
        let rate = SimulationRate::default();
        let mut seq = Choreography::enter(&vehicle, ChoreographyTuning::default(), &rate);
        seq.advance(&vehicle, FIXED_DT_S);

        vehicle.pose.translation.x += 10.0;
        let frame = seq.advance(&vehicle, FIXED_DT_S);
        assert!(frame.pose.translation.x > 10.0);
    }
}
