// SPDX-License-Identifier: GPL-3.0-or-later
//! State shared between the motor control loop and the rest of the firmware.
//!
//! The loop gets the state by `&mut`. In the firmware it lives in an RTIC shared resource,
//! so the sampling task and the main context never access it at the same time.
use num_traits::float::FloatCore;

/// Controller mode, selected by a single command character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Position,
    Velocity,
    Torque,
    Hybrid,
}

impl Mode {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'x' => Some(Mode::Position),
            'v' => Some(Mode::Velocity),
            't' => Some(Mode::Torque),
            'h' => Some(Mode::Hybrid),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Mode::Position => 'x',
            Mode::Velocity => 'v',
            Mode::Torque => 't',
            Mode::Hybrid => 'h',
        }
    }
}

/// Number of past samples kept of the effort and the error.
pub const HISTORY: usize = 3;

#[derive(Clone, Debug, PartialEq)]
pub struct ControlState {
    /// `U`: magnitude of the control effort.
    pub effort: i32,
    /// `r`: setpoint.
    pub setpoint: f32,
    /// `y`: measured angle.
    pub angle: f32,
    /// `y_1`: `angle` at the previous sample.
    pub angle_prev: f32,
    /// `yw`: angle not limited to 0-360.
    pub wrapped_angle: f32,
    /// `yw_1`: `wrapped_angle` at the previous sample.
    pub wrapped_angle_prev: f32,
    /// `e`: `setpoint - angle`.
    pub error: f32,
    /// `p`: proportional effort.
    pub proportional: f32,
    /// `i`: integral effort.
    pub integral: f32,
    /// `u`: control effort with its sign.
    pub signed_effort: f32,
    /// `u_1` to `u_3`: previous values of `signed_effort`, most recent first.
    pub effort_history: [f32; HISTORY],
    /// `e_1` to `e_3`: previous values of `error`, most recent first.
    pub error_history: [f32; HISTORY],
    /// `counter`: free-running sample counter.
    pub counter: i32,
    /// `wrap_count`: full revolutions, so angles outside of 0-360 can be commanded.
    pub wrap_count: i32,
    /// `step_count`: pulses seen on the step input.
    pub step_count: i32,
    /// `stepNumber`: open loop step number.
    pub step_number: i32,
    /// `ITerm`: accumulated integral term.
    pub i_term: f32,
    /// `DTerm`: derivative term.
    pub d_term: f32,
    /// `mode`: selected control loop, `None` until one is chosen.
    pub mode: Option<Mode>,
    /// `dir`: step direction.
    pub dir: bool,
    /// `gearPosition`: commanded gear.
    pub gear_position: i32,
    /// `gearCurrentPosition`: gear currently engaged.
    pub gear_current_position: i32,
    /// `adcAverage`: averaged ADC reading.
    pub adc_average: i32,
    /// `print_yw`: stream `wrapped_angle` during a step response.
    pub print_yw: bool,
}

impl Default for ControlState {
    fn default() -> Self {
        Self {
            effort: 0,
            setpoint: 0.0,
            angle: 0.0,
            angle_prev: 0.0,
            wrapped_angle: 0.0,
            wrapped_angle_prev: 0.0,
            error: 0.0,
            proportional: 0.0,
            integral: 0.0,
            signed_effort: 0.0,
            effort_history: [0.0; HISTORY],
            error_history: [0.0; HISTORY],
            counter: 0,
            wrap_count: 0,
            step_count: 0,
            step_number: 0,
            i_term: 0.0,
            d_term: 0.0,
            mode: None,
            dir: true,
            gear_position: 0,
            gear_current_position: 0,
            adc_average: 0,
            print_yw: false,
        }
    }
}

impl ControlState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `u` and its magnitude, truncated toward zero.
    pub fn set_effort(&mut self, u: f32) {
        self.signed_effort = u;
        self.effort = FloatCore::abs(u) as i32;
    }

    /// Moves the current sample into the history at the end of a control cycle.
    pub fn shift_history(&mut self) {
        self.effort_history.rotate_right(1);
        self.effort_history[0] = self.signed_effort;
        self.error_history.rotate_right(1);
        self.error_history[0] = self.error;
        self.angle_prev = self.angle;
        self.wrapped_angle_prev = self.wrapped_angle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let state = ControlState::new();
        assert!(state.dir);
        assert_eq!(state.mode, None);
        assert_eq!(state.effort_history, [0.0; HISTORY]);
    }

    #[test]
    fn history_keeps_three_samples() {
        let mut state = ControlState::new();
        for (u, e) in [(1.0, 10.0), (2.0, 20.0), (3.0, 30.0), (4.0, 40.0)] {
            state.set_effort(u);
            state.error = e;
            state.shift_history();
        }
        assert_eq!(state.effort_history, [4.0, 3.0, 2.0]);
        assert_eq!(state.error_history, [40.0, 30.0, 20.0]);
    }

    #[test]
    fn effort_magnitude() {
        let mut state = ControlState::new();
        state.set_effort(-12.7);
        assert_eq!(state.effort, 12);
        assert_eq!(state.signed_effort, -12.7);
    }

    #[test]
    fn modes() {
        for c in ['x', 'v', 't', 'h'] {
            assert_eq!(Mode::from_char(c).map(Mode::as_char), Some(c));
        }
        assert_eq!(Mode::from_char('s'), None);
    }
}
