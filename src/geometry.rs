//! Joint arc angles.
//!
//! Angles are in degrees, 0° along +x and increasing clockwise because view
//! space has y pointing down.

use crate::types::Point2;

/// Direction of the ray from `center` to `point`, normalized to [0, 360).
pub fn ray_angle(point: Point2, center: Point2) -> f32 {
    let dx = (point.x - center.x) as f64;
    let dy = (point.y - center.y) as f64;
    let degrees = dy.atan2(dx).to_degrees() as f32;
    if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

/// Clockwise span from `start_angle` to `end_angle`. Never negative.
pub fn sweep_angle(start_angle: f32, end_angle: f32) -> f32 {
    let sweep = end_angle - start_angle;
    if sweep < 0.0 {
        sweep + 360.0
    } else {
        sweep
    }
}

/// The arc drawn at a joint between two adjacent bones.
///
/// This is the raw clockwise sweep between the rays, not an anatomical joint
/// angle: it is not clamped to [0, 180] and collinear or coincident points are
/// not special-cased.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointArc {
    pub center: Point2,
    pub start_angle: f32,
    pub sweep_angle: f32,
}

impl JointArc {
    pub fn new(start: Point2, center: Point2, end: Point2) -> Self {
        let start_angle = ray_angle(start, center);
        let end_angle = ray_angle(end, center);
        Self {
            center,
            start_angle,
            sweep_angle: sweep_angle(start_angle, end_angle),
        }
    }

    /// Readout text: the sweep rounded half-to-even to whole degrees.
    pub fn label(&self) -> String {
        format!("{}", self.sweep_angle.round_ties_even() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sweep_wraps_past_zero() {
        assert_relative_eq!(sweep_angle(350.0, 10.0), 20.0);
        assert_relative_eq!(sweep_angle(10.0, 350.0), 340.0);
        assert_relative_eq!(sweep_angle(90.0, 90.0), 0.0);
    }

    #[test]
    fn test_ray_angle_screen_convention() {
        let c = Point2::new(100.0, 100.0);
        assert_relative_eq!(ray_angle(Point2::new(110.0, 100.0), c), 0.0);
        // y grows downward, so "below" is 90°
        assert_relative_eq!(ray_angle(Point2::new(100.0, 110.0), c), 90.0, epsilon = 1e-4);
        assert_relative_eq!(ray_angle(Point2::new(90.0, 100.0), c), 180.0, epsilon = 1e-4);
        assert_relative_eq!(ray_angle(Point2::new(100.0, 90.0), c), 270.0, epsilon = 1e-4);
    }

    #[test]
    fn test_right_angle_joint() {
        // start to the right, end below: 90° clockwise
        let arc = JointArc::new(
            Point2::new(20.0, 10.0),
            Point2::new(10.0, 10.0),
            Point2::new(10.0, 20.0),
        );
        assert_relative_eq!(arc.start_angle, 0.0);
        assert_relative_eq!(arc.sweep_angle, 90.0, epsilon = 1e-4);
        assert_eq!(arc.label(), "90");

        // swapping the rays gives the reflex side
        let arc = JointArc::new(
            Point2::new(10.0, 20.0),
            Point2::new(10.0, 10.0),
            Point2::new(20.0, 10.0),
        );
        assert_relative_eq!(arc.sweep_angle, 270.0, epsilon = 1e-4);
    }

    #[test]
    fn test_collinear_joint_is_straight() {
        let arc = JointArc::new(
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(10.0, 0.0),
        );
        assert_relative_eq!(arc.sweep_angle, 180.0, epsilon = 1e-4);
    }

    #[test]
    fn test_coincident_points_sweep_zero() {
        let p = Point2::new(3.0, 4.0);
        let arc = JointArc::new(p, p, p);
        assert_eq!(arc.sweep_angle, 0.0);
        assert_eq!(arc.label(), "0");
    }

    #[test]
    fn test_label_rounds_half_to_even() {
        let arc = |sweep| JointArc { center: Point2::default(), start_angle: 0.0, sweep_angle: sweep };
        assert_eq!(arc(20.4).label(), "20");
        assert_eq!(arc(20.6).label(), "21");
        assert_eq!(arc(42.5).label(), "42");
        assert_eq!(arc(43.5).label(), "44");
    }
}
