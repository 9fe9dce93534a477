//! Landmark index table for the 33-point body pose model.
//!
//! These indices are fixed by the pose model output layout.

pub const LANDMARK_COUNT: usize = 33;

pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;
pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;

/// The two landmarks whose depth signs decide which side faces the camera.
pub const DEPTH_PROBES: (usize, usize) = (LEFT_KNEE, RIGHT_KNEE);

/// Highest index read by any side drawing, plus one.
pub const MIN_SIDE_LANDMARKS: usize = RIGHT_ANKLE + 1;

/// One body side: a five-segment chain from ankle to wrist.
#[derive(Debug, Clone, Copy)]
pub struct SideChain {
    /// Connector segments, ankle first.
    pub bones: [(usize, usize); 5],
    /// Joint arcs as (start, vertex, end).
    pub arcs: [(usize, usize, usize); 4],
    /// Landmarks marked with a point.
    pub points: [usize; 6],
}

pub const LEFT_CHAIN: SideChain = SideChain {
    bones: [
        (LEFT_ANKLE, LEFT_KNEE),
        (LEFT_KNEE, LEFT_HIP),
        (LEFT_HIP, LEFT_SHOULDER),
        (LEFT_SHOULDER, LEFT_ELBOW),
        (LEFT_ELBOW, LEFT_WRIST),
    ],
    arcs: [
        (LEFT_HIP, LEFT_KNEE, LEFT_ANKLE),
        (LEFT_KNEE, LEFT_HIP, LEFT_SHOULDER),
        (LEFT_HIP, LEFT_SHOULDER, LEFT_ELBOW),
        (LEFT_WRIST, LEFT_ELBOW, LEFT_SHOULDER),
    ],
    points: [LEFT_ANKLE, LEFT_KNEE, LEFT_HIP, LEFT_SHOULDER, LEFT_ELBOW, LEFT_WRIST],
};

pub const RIGHT_CHAIN: SideChain = SideChain {
    bones: [
        (RIGHT_ANKLE, RIGHT_KNEE),
        (RIGHT_KNEE, RIGHT_HIP),
        (RIGHT_HIP, RIGHT_SHOULDER),
        (RIGHT_SHOULDER, RIGHT_ELBOW),
        (RIGHT_ELBOW, RIGHT_WRIST),
    ],
    arcs: [
        (RIGHT_HIP, RIGHT_KNEE, RIGHT_ANKLE),
        (RIGHT_KNEE, RIGHT_HIP, RIGHT_SHOULDER),
        (RIGHT_HIP, RIGHT_SHOULDER, RIGHT_ELBOW),
        (RIGHT_WRIST, RIGHT_ELBOW, RIGHT_SHOULDER),
    ],
    points: [RIGHT_ANKLE, RIGHT_KNEE, RIGHT_HIP, RIGHT_SHOULDER, RIGHT_ELBOW, RIGHT_WRIST],
};

/// Segments joining the two chains when the whole body faces the camera.
pub const CROSS_BODY: [(usize, usize); 2] = [(LEFT_HIP, RIGHT_HIP), (LEFT_SHOULDER, RIGHT_SHOULDER)];
