//! Side selection from the depth probes.

use crate::error::{OverlayError, Result};
use crate::topology::{DEPTH_PROBES, LEFT_CHAIN, RIGHT_CHAIN};
use crate::types::Landmark;

/// Which body side(s) face the camera, derived fresh for every body on every pass.
///
/// The three flags are independent tests and none of them holds when a probe
/// depth is zero (or NaN). That case falls back to marking every landmark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideVisibility {
    pub left: bool,
    pub right: bool,
    pub full: bool,
}

impl SideVisibility {
    pub fn from_depths(a: f32, b: f32) -> Self {
        Self {
            left: a < 0.0 && b > 0.0,
            right: a > 0.0 && b < 0.0,
            full: a * b > 0.0,
        }
    }

    /// Reads the probe landmarks of `set`. Fails when the set does not reach them.
    pub fn classify(set: &[Landmark]) -> Result<Self> {
        let (a, b) = DEPTH_PROBES;
        let probe = |index: usize| {
            set.get(index)
                .map(|lm| lm.z)
                .ok_or(OverlayError::IndexOutOfRange { index, len: set.len() })
        };
        Ok(Self::from_depths(probe(a)?, probe(b)?))
    }

    pub fn any(&self) -> bool {
        self.left || self.right || self.full
    }

    /// Indices to mark with a point, ascending.
    ///
    /// `full` wins over `right`, which wins over `left`.
    pub fn point_indices(&self, len: usize) -> Vec<usize> {
        let mut indices: Vec<usize> = if self.full {
            LEFT_CHAIN.points.iter().chain(RIGHT_CHAIN.points.iter()).copied().collect()
        } else if self.right {
            RIGHT_CHAIN.points.to_vec()
        } else if self.left {
            LEFT_CHAIN.points.to_vec()
        } else {
            return (0..len).collect();
        };
        indices.sort_unstable();
        indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_with_probes(a: f32, b: f32) -> Vec<Landmark> {
        let mut set = vec![Landmark::default(); 33];
        set[25].z = a;
        set[26].z = b;
        set
    }

    #[test]
    fn test_left_only() {
        let flags = SideVisibility::from_depths(-1.0, 1.0);
        assert_eq!(flags, SideVisibility { left: true, right: false, full: false });
    }

    #[test]
    fn test_right_only() {
        let flags = SideVisibility::from_depths(0.3, -0.2);
        assert_eq!(flags, SideVisibility { left: false, right: true, full: false });
    }

    #[test]
    fn test_full_on_matching_signs() {
        assert_eq!(
            SideVisibility::from_depths(1.0, 1.0),
            SideVisibility { left: false, right: false, full: true }
        );
        assert!(SideVisibility::from_depths(-0.5, -0.1).full);
    }

    #[test]
    fn test_zero_depth_sets_no_flag() {
        let flags = SideVisibility::from_depths(0.0, 0.0);
        assert!(!flags.any());
        assert_eq!(flags.point_indices(33), (0..33).collect::<Vec<_>>());

        // One zero probe also falls through
        assert!(!SideVisibility::from_depths(0.0, 0.4).any());
    }

    #[test]
    fn test_point_indices_are_ascending() {
        let left = SideVisibility::from_depths(-1.0, 1.0).point_indices(33);
        assert_eq!(left, vec![11, 13, 15, 23, 25, 27]);

        let right = SideVisibility::from_depths(1.0, -1.0).point_indices(33);
        assert_eq!(right, vec![12, 14, 16, 24, 26, 28]);

        let full = SideVisibility::from_depths(1.0, 1.0).point_indices(33);
        assert_eq!(full, vec![11, 12, 13, 14, 15, 16, 23, 24, 25, 26, 27, 28]);
    }

    #[test]
    fn test_classify_reads_probes() {
        let flags = SideVisibility::classify(&set_with_probes(-0.1, 0.05)).unwrap();
        assert!(flags.left);
    }

    #[test]
    fn test_classify_short_set() {
        let set = vec![Landmark::default(); 26];
        match SideVisibility::classify(&set) {
            Err(OverlayError::IndexOutOfRange { index, len }) => {
                assert_eq!(index, 26);
                assert_eq!(len, 26);
            }
            other => panic!("expected IndexOutOfRange, got {:?}", other),
        }
    }
}
