use crate::style::Paint;
use crate::types::Point2;

/// One drawing call produced by a render pass, in view coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Circle {
        center: Point2,
        radius: f32,
        paint: Paint,
    },
    Line {
        from: Point2,
        to: Point2,
        paint: Paint,
    },
    /// Clockwise arc from `start_angle` spanning `sweep_angle` degrees.
    Arc {
        center: Point2,
        radius: f32,
        start_angle: f32,
        sweep_angle: f32,
        paint: Paint,
    },
    /// Left-aligned text; `origin` is on the baseline.
    Text {
        origin: Point2,
        text: String,
        paint: Paint,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Circle,
    Line,
    Arc,
    Text,
}

impl Primitive {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Primitive::Circle { .. } => PrimitiveKind::Circle,
            Primitive::Line { .. } => PrimitiveKind::Line,
            Primitive::Arc { .. } => PrimitiveKind::Arc,
            Primitive::Text { .. } => PrimitiveKind::Text,
        }
    }
}

/// Number of primitives of `kind` in `primitives`.
pub fn count_kind(primitives: &[Primitive], kind: PrimitiveKind) -> usize {
    primitives.iter().filter(|p| p.kind() == kind).count()
}
