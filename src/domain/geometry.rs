use serde::{Deserialize, Serialize};

use super::{clock::TimeUnit, error::ClockError};

/// Default outer diameter of the face, in surface units
pub const DEFAULT_FACE_DIAMETER: f64 = 240.0;

/// Default margin between the outer disc and the inner face
pub const DEFAULT_HAND_MARGIN_WIDTH: f64 = 40.0;

/// Per-hand styling constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandSpec {
    /// Extra distance kept between the hand tip and the inner face edge
    pub extra_inset: f64,
    pub thickness: f64,
}

impl HandSpec {
    pub fn for_unit(unit: TimeUnit) -> Self {
        match unit {
            TimeUnit::Seconds => Self {
                extra_inset: 5.0,
                thickness: 2.0,
            },
            TimeUnit::Minutes => Self {
                extra_inset: 10.0,
                thickness: 3.0,
            },
            TimeUnit::Hours => Self {
                extra_inset: 25.0,
                thickness: 4.0,
            },
        }
    }
}

/// Validated dimensions of a clock face.
///
/// Only obtainable through [`FaceGeometry::new`], so holding one means the
/// face can be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceGeometry {
    diameter: f64,
    hand_margin_width: f64,
}

impl FaceGeometry {
    pub fn new(diameter: f64, hand_margin_width: f64) -> Result<Self, ClockError> {
        if !hand_margin_width.is_finite() || hand_margin_width <= 0.0 {
            return Err(ClockError::ContractViolation(format!(
                "hand_margin_width must be strictly positive, got {hand_margin_width}"
            )));
        }
        if !diameter.is_finite() || diameter <= 0.0 {
            return Err(ClockError::ContractViolation(format!(
                "face diameter must be strictly positive, got {diameter}"
            )));
        }

        let this = Self {
            diameter,
            hand_margin_width,
        };
        if this.inner_diameter() <= 0.0 {
            return Err(ClockError::ContractViolation(format!(
                "hand_margin_width {hand_margin_width} leaves no inner face on a {diameter} wide dial"
            )));
        }
        Ok(this)
    }

    pub fn with_margin(hand_margin_width: f64) -> Result<Self, ClockError> {
        Self::new(DEFAULT_FACE_DIAMETER, hand_margin_width)
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    pub fn hand_margin_width(&self) -> f64 {
        self.hand_margin_width
    }

    pub fn inner_diameter(&self) -> f64 {
        self.diameter - self.hand_margin_width * 2.0
    }

    /// Distance from the rim to where a hand begins
    pub fn hand_inset(&self, unit: TimeUnit) -> f64 {
        self.hand_margin_width + HandSpec::for_unit(unit).extra_inset
    }

    /// Hands run from the centre out to `radius - inset`, never below zero.
    pub fn hand_length(&self, unit: TimeUnit) -> f64 {
        (self.radius() - self.hand_inset(unit)).max(0.0)
    }

    pub fn hand_thickness(&self, unit: TimeUnit) -> f64 {
        HandSpec::for_unit(unit).thickness
    }

    /// Labels are centred in the margin band
    pub fn label_radius(&self) -> f64 {
        self.radius() - self.hand_margin_width / 2.0
    }

    pub fn label_width(&self) -> f64 {
        self.hand_margin_width
    }
}

impl Default for FaceGeometry {
    fn default() -> Self {
        Self {
            diameter: DEFAULT_FACE_DIAMETER,
            hand_margin_width: DEFAULT_HAND_MARGIN_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_default_geometry() {
        let g = FaceGeometry::default();
        assert_eq!(g.inner_diameter(), 160.0);
        assert_eq!(g.hand_length(TimeUnit::Seconds), 75.0);
        assert_eq!(g.hand_length(TimeUnit::Minutes), 70.0);
        assert_eq!(g.hand_length(TimeUnit::Hours), 55.0);
        assert_eq!(g.hand_thickness(TimeUnit::Hours), 4.0);
        assert_eq!(g.label_radius(), 100.0);
        assert_eq!(g.label_width(), 40.0);
    }

    #[test]
    fn test_default_matches_validated_constructor() {
        assert_eq!(
            FaceGeometry::with_margin(DEFAULT_HAND_MARGIN_WIDTH),
            Ok(FaceGeometry::default())
        );
    }

    #[rstest]
    #[case(0.0)]
    #[case(-1.0)]
    #[case(-40.0)]
    #[case(f64::NAN)]
    #[case(f64::INFINITY)]
    fn test_non_positive_margin_is_rejected(#[case] margin: f64) {
        let result = FaceGeometry::with_margin(margin);
        assert!(matches!(result, Err(ClockError::ContractViolation(_))));
    }

    #[rstest]
    #[case(120.0)]
    #[case(150.0)]
    fn test_margin_without_inner_face_is_rejected(#[case] margin: f64) {
        assert!(FaceGeometry::with_margin(margin).is_err());
    }

    #[test]
    fn test_wide_margin_keeps_face_with_collapsed_hands() {
        let g = FaceGeometry::with_margin(100.0).expect("inner face remains");
        assert_eq!(g.inner_diameter(), 40.0);
        assert_eq!(g.label_width(), 100.0);
        assert_eq!(g.hand_length(TimeUnit::Seconds), 15.0);
        assert_eq!(g.hand_length(TimeUnit::Minutes), 10.0);
        assert_eq!(g.hand_length(TimeUnit::Hours), 0.0);
    }

    #[test]
    fn test_invalid_diameter_is_rejected() {
        assert!(FaceGeometry::new(0.0, 10.0).is_err());
        assert!(FaceGeometry::new(-240.0, 10.0).is_err());
    }
}
