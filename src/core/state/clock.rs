use serde::{Deserialize, Serialize};

use crate::{
    core::{cmd::Cmd, msg::clock::ClockMsg},
    domain::clock::{self, CounterMode, TickLabel, TimeUnit},
};

/// Raw counter values of the face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockState {
    pub seconds: u64,
    pub minutes: u64,
    pub hours: u64,
}

impl ClockState {
    /// Demo position the face starts from: 15s, 0m, 4h
    pub const DEMO: ClockState = ClockState {
        seconds: 15,
        minutes: 0,
        hours: 4,
    };

    pub fn get(&self, unit: TimeUnit) -> u64 {
        match unit {
            TimeUnit::Seconds => self.seconds,
            TimeUnit::Minutes => self.minutes,
            TimeUnit::Hours => self.hours,
        }
    }

    fn get_mut(&mut self, unit: TimeUnit) -> &mut u64 {
        match unit {
            TimeUnit::Seconds => &mut self.seconds,
            TimeUnit::Minutes => &mut self.minutes,
            TimeUnit::Hours => &mut self.hours,
        }
    }
}

impl Default for ClockState {
    fn default() -> Self {
        Self::DEMO
    }
}

/// Owns the three counters and exposes the hand angles derived from them
#[derive(Debug, Clone, PartialEq)]
pub struct ClockFaceModel {
    state: ClockState,
    mode: CounterMode,
}

impl ClockFaceModel {
    pub fn initialize(initial_seconds: u64, initial_minutes: u64, initial_hours: u64) -> Self {
        Self::with_mode(
            ClockState {
                seconds: initial_seconds,
                minutes: initial_minutes,
                hours: initial_hours,
            },
            CounterMode::Independent,
        )
    }

    pub fn with_mode(state: ClockState, mode: CounterMode) -> Self {
        let mut this = Self { state, mode };
        if mode == CounterMode::Carry {
            this.normalize();
        }
        this
    }

    pub fn state(&self) -> ClockState {
        self.state
    }

    pub fn mode(&self) -> CounterMode {
        self.mode
    }

    /// Advance one counter by a single step
    pub fn tick(&mut self, unit: TimeUnit) {
        match self.mode {
            CounterMode::Independent => {
                let counter = self.state.get_mut(unit);
                *counter = counter.saturating_add(1);
            }
            CounterMode::Carry => self.tick_with_carry(unit),
        }
    }

    fn tick_with_carry(&mut self, unit: TimeUnit) {
        let mut current = Some(unit);
        while let Some(unit) = current {
            let counter = self.state.get_mut(unit);
            *counter += 1;
            if *counter < unit.period() {
                return;
            }
            *counter = 0;
            current = unit.next();
        }
    }

    // Carry mode keeps every counter below its period, including the
    // initial position.
    fn normalize(&mut self) {
        let minutes_carry = self.state.seconds / TimeUnit::Seconds.period();
        self.state.seconds %= TimeUnit::Seconds.period();
        let minutes = self.state.minutes.saturating_add(minutes_carry);
        let hours_carry = minutes / TimeUnit::Minutes.period();
        self.state.minutes = minutes % TimeUnit::Minutes.period();
        self.state.hours = self.state.hours.saturating_add(hours_carry) % TimeUnit::Hours.period();
    }

    pub fn hand_angle(&self, unit: TimeUnit) -> f64 {
        clock::hand_angle(unit, self.state.get(unit))
    }

    pub fn seconds_angle(&self) -> f64 {
        self.hand_angle(TimeUnit::Seconds)
    }

    pub fn minutes_angle(&self) -> f64 {
        self.hand_angle(TimeUnit::Minutes)
    }

    pub fn hours_angle(&self) -> f64 {
        self.hand_angle(TimeUnit::Hours)
    }

    pub fn tick_label_angle(&self, index: u8) -> f64 {
        clock::tick_label_angle(index)
    }

    pub fn tick_labels(&self) -> Vec<TickLabel> {
        clock::tick_labels()
    }

    /// Clock-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: ClockMsg) -> Vec<Cmd> {
        match msg {
            ClockMsg::Tick(unit) => {
                let before = self.state;
                self.tick(unit);
                if self.state != before {
                    vec![Cmd::RequestRender]
                } else {
                    vec![]
                }
            }
            ClockMsg::Reset(state) => {
                *self = Self::with_mode(state, self.mode);
                let ClockState {
                    seconds,
                    minutes,
                    hours,
                } = self.state;
                vec![
                    Cmd::LogInfo {
                        message: format!("Clock reset to {seconds}s {minutes}m {hours}h"),
                    },
                    Cmd::RequestRender,
                ]
            }
        }
    }
}

impl Default for ClockFaceModel {
    fn default() -> Self {
        Self::with_mode(ClockState::DEMO, CounterMode::Independent)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_demo_scenario() {
        let mut model = ClockFaceModel::initialize(15, 0, 4);
        model.tick(TimeUnit::Seconds);

        assert_eq!(model.seconds_angle(), 96.0);
        assert_eq!(model.minutes_angle(), 0.0);
        assert_eq!(model.hours_angle(), 120.0);
    }

    #[rstest]
    #[case(1)]
    #[case(59)]
    #[case(60)]
    #[case(1000)]
    fn test_seconds_ticks_are_monotonic(#[case] n: u64) {
        let mut model = ClockFaceModel::initialize(15, 0, 4);
        for _ in 0..n {
            model.tick(TimeUnit::Seconds);
        }
        assert_eq!(model.seconds_angle(), 6.0 * (15 + n) as f64);
        assert_eq!(model.state().minutes, 0);
        assert_eq!(model.state().hours, 4);
    }

    #[test]
    fn test_independent_counters_are_unbounded() {
        let mut model = ClockFaceModel::initialize(59, 59, 11);
        model.tick(TimeUnit::Seconds);
        model.tick(TimeUnit::Minutes);
        model.tick(TimeUnit::Hours);

        assert_eq!(
            model.state(),
            ClockState {
                seconds: 60,
                minutes: 60,
                hours: 12
            }
        );
        assert_eq!(model.seconds_angle(), 360.0);
        assert_eq!(model.hours_angle(), 360.0);
    }

    #[test]
    fn test_carry_wraps_seconds_into_minutes() {
        let mut model = ClockFaceModel::with_mode(
            ClockState {
                seconds: 59,
                minutes: 0,
                hours: 4,
            },
            CounterMode::Carry,
        );
        model.tick(TimeUnit::Seconds);
        assert_eq!(
            model.state(),
            ClockState {
                seconds: 0,
                minutes: 1,
                hours: 4
            }
        );
    }

    #[test]
    fn test_carry_rolls_over_the_whole_dial() {
        let mut model = ClockFaceModel::with_mode(
            ClockState {
                seconds: 59,
                minutes: 59,
                hours: 11,
            },
            CounterMode::Carry,
        );
        model.tick(TimeUnit::Seconds);
        assert_eq!(
            model.state(),
            ClockState {
                seconds: 0,
                minutes: 0,
                hours: 0
            }
        );
    }

    #[test]
    fn test_carry_normalizes_initial_state() {
        let model = ClockFaceModel::with_mode(
            ClockState {
                seconds: 125,
                minutes: 59,
                hours: 13,
            },
            CounterMode::Carry,
        );
        assert_eq!(
            model.state(),
            ClockState {
                seconds: 5,
                minutes: 1,
                hours: 2
            }
        );
    }

    #[test]
    fn test_update_tick_requests_render() {
        let mut model = ClockFaceModel::default();
        let cmds = model.update(ClockMsg::Tick(TimeUnit::Minutes));
        assert_eq!(cmds, vec![Cmd::RequestRender]);
        assert_eq!(model.state().minutes, 1);
    }

    #[test]
    fn test_update_reset() {
        let mut model = ClockFaceModel::default();
        model.tick(TimeUnit::Hours);
        let cmds = model.update(ClockMsg::Reset(ClockState::DEMO));
        assert_eq!(
            cmds,
            vec![
                Cmd::LogInfo {
                    message: "Clock reset to 15s 0m 4h".to_string()
                },
                Cmd::RequestRender
            ]
        );
        assert_eq!(model.state(), ClockState::DEMO);
    }

    #[test]
    fn test_angles_are_deterministic() {
        let a = ClockFaceModel::initialize(42, 17, 9);
        let b = ClockFaceModel::initialize(42, 17, 9);
        assert_eq!(a.seconds_angle(), b.seconds_angle());
        assert_eq!(a.minutes_angle(), b.minutes_angle());
        assert_eq!(a.hours_angle(), b.hours_angle());
    }

    #[test]
    fn test_model_exposes_label_angles() {
        let model = ClockFaceModel::default();
        assert_eq!(model.tick_label_angle(3), 180.0);
        assert_eq!(model.tick_labels().len(), 12);
    }
}
