use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Degrees in a full turn of the dial.
pub const FULL_TURN: f64 = 360.0;

/// Number of numerals around the rim.
pub const TICK_LABEL_COUNT: u8 = 12;

/// Offset added to every label placement so that label 12 lands on top of the
/// dial. Angles are measured clockwise from 9 o'clock.
pub const TICK_LABEL_OFFSET: f64 = 90.0;

/// The three counters a clock face carries
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase")]
pub enum TimeUnit {
    Seconds,
    Minutes,
    Hours,
}

impl TimeUnit {
    /// How many counts make one full revolution of this unit's hand
    pub fn period(self) -> u64 {
        match self {
            TimeUnit::Seconds | TimeUnit::Minutes => 60,
            TimeUnit::Hours => 12,
        }
    }

    /// Default cadence of the timer driving this unit
    pub fn interval(self) -> Duration {
        match self {
            TimeUnit::Seconds => Duration::from_millis(1_000),
            TimeUnit::Minutes => Duration::from_millis(60_000),
            TimeUnit::Hours => Duration::from_millis(3_600_000),
        }
    }

    /// The unit that receives a carry when this one wraps, if any
    pub fn next(self) -> Option<TimeUnit> {
        match self {
            TimeUnit::Seconds => Some(TimeUnit::Minutes),
            TimeUnit::Minutes => Some(TimeUnit::Hours),
            TimeUnit::Hours => None,
        }
    }

    /// Degrees swept by one count
    pub fn degrees_per_count(self) -> f64 {
        FULL_TURN / self.period() as f64
    }
}

/// How counters behave once they reach their period
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CounterMode {
    /// Each counter grows without bound and is driven by its own timer.
    #[default]
    Independent,
    /// Counters wrap at their period and carry into the next unit; only the
    /// seconds timer runs.
    Carry,
}

impl CounterMode {
    /// Units that need their own timer in this mode
    pub fn timed_units(self) -> &'static [TimeUnit] {
        match self {
            CounterMode::Independent => &[TimeUnit::Seconds, TimeUnit::Minutes, TimeUnit::Hours],
            CounterMode::Carry => &[TimeUnit::Seconds],
        }
    }
}

/// Rotation of a hand, in degrees, for the given count.
///
/// The result is not reduced modulo 360; rotation is periodic so callers that
/// draw can use it directly.
pub fn hand_angle(unit: TimeUnit, count: u64) -> f64 {
    unit.degrees_per_count() * count as f64
}

/// Placement angle of the numeral at `index` (1..=12).
pub fn tick_label_angle(index: u8) -> f64 {
    (FULL_TURN / f64::from(TICK_LABEL_COUNT)) * f64::from(index) + TICK_LABEL_OFFSET
}

/// Reduce an angle into `[0, 360)`.
pub fn normalize_degrees(angle: f64) -> f64 {
    angle.rem_euclid(FULL_TURN)
}

/// One numeral on the rim
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickLabel {
    pub value: u8,
    pub placement_angle: f64,
}

impl TickLabel {
    pub fn new(value: u8) -> Self {
        Self {
            value,
            placement_angle: tick_label_angle(value),
        }
    }

    /// Rotation applied to the glyph itself so that, combined with the
    /// placement rotation, it ends up upright.
    pub fn counter_rotation(&self) -> f64 {
        FULL_TURN - self.placement_angle
    }

    pub fn text(&self) -> String {
        self.value.to_string()
    }
}

/// All twelve labels, 1 through 12
pub fn tick_labels() -> Vec<TickLabel> {
    (1..=TICK_LABEL_COUNT).map(TickLabel::new).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    #[rstest]
    #[case(TimeUnit::Seconds, 0, 0.0)]
    #[case(TimeUnit::Seconds, 15, 90.0)]
    #[case(TimeUnit::Seconds, 16, 96.0)]
    #[case(TimeUnit::Minutes, 30, 180.0)]
    #[case(TimeUnit::Hours, 4, 120.0)]
    #[case(TimeUnit::Hours, 12, 360.0)]
    #[case(TimeUnit::Seconds, 61, 366.0)]
    fn test_hand_angle(#[case] unit: TimeUnit, #[case] count: u64, #[case] expected: f64) {
        assert_eq!(hand_angle(unit, count), expected);
    }

    #[test]
    fn test_hand_angle_is_linear_in_count() {
        for unit in TimeUnit::iter() {
            for count in 0..500u64 {
                assert_eq!(
                    hand_angle(unit, count),
                    (360.0 / unit.period() as f64) * count as f64
                );
            }
        }
    }

    #[test]
    fn test_unit_periods_and_intervals() {
        assert_eq!(TimeUnit::Seconds.period(), 60);
        assert_eq!(TimeUnit::Minutes.period(), 60);
        assert_eq!(TimeUnit::Hours.period(), 12);
        assert_eq!(TimeUnit::Seconds.interval(), Duration::from_secs(1));
        assert_eq!(TimeUnit::Minutes.interval(), Duration::from_secs(60));
        assert_eq!(TimeUnit::Hours.interval(), Duration::from_secs(3600));
    }

    #[test]
    fn test_label_twelve_sits_on_top() {
        assert_eq!(tick_label_angle(12), 450.0);
        assert_eq!(normalize_degrees(tick_label_angle(12)), 90.0);
    }

    #[test]
    fn test_labels_are_equally_spaced_and_cover_the_circle_once() {
        let labels = tick_labels();
        assert_eq!(labels.len(), 12);

        for pair in labels.windows(2) {
            assert_eq!(pair[1].placement_angle - pair[0].placement_angle, 30.0);
        }

        let mut normalized: Vec<f64> = labels
            .iter()
            .map(|l| normalize_degrees(l.placement_angle))
            .collect();
        normalized.sort_by(f64::total_cmp);
        normalized.dedup();
        assert_eq!(normalized.len(), 12);
        let full_turn: f64 = (0..12u8).map(|i| f64::from(i) * 30.0).sum();
        assert_eq!(normalized.iter().sum::<f64>(), full_turn);
    }

    #[test]
    fn test_label_counter_rotation_keeps_glyph_upright() {
        for label in tick_labels() {
            let net = normalize_degrees(label.placement_angle + label.counter_rotation());
            assert_eq!(net, 0.0);
        }
    }

    #[test]
    fn test_counter_mode_timed_units() {
        assert_eq!(CounterMode::Independent.timed_units().len(), 3);
        assert_eq!(CounterMode::Carry.timed_units(), &[TimeUnit::Seconds]);
        assert_eq!(CounterMode::default(), CounterMode::Independent);
    }

    #[test]
    fn test_unit_from_str() {
        assert_eq!("seconds".parse::<TimeUnit>().ok(), Some(TimeUnit::Seconds));
        assert_eq!(TimeUnit::Hours.to_string(), "hours");
    }
}
