use crate::bounding_volume::Aabb;
use crate::math::{Isometry, Point, Real, Vector};

/// The geometry attached to a [`ShapeFrame`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum FrameShape {
    /// A ball centered at the frame origin.
    Ball {
        /// The radius of the ball.
        radius: Real,
    },
    /// A box centered at the frame origin and aligned with the frame axes.
    Cuboid {
        /// The half-extents of the box along each local axis.
        half_extents: Vector<Real>,
    },
}

/// A shape placed in the world.
///
/// This is the frame type understood by the
/// [`BruteForceBackend`](crate::backend::BruteForceBackend); custom backends are
/// free to use any other frame type.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ShapeFrame {
    /// The shape of this frame, expressed in its local space.
    pub shape: FrameShape,
    /// The world-space pose of this frame.
    pub position: Isometry<Real>,
}

impl ShapeFrame {
    /// Creates a frame with the given shape and pose.
    pub fn new(shape: FrameShape, position: Isometry<Real>) -> Self {
        Self { shape, position }
    }

    /// Creates a ball-shaped frame.
    pub fn ball(radius: Real, position: Isometry<Real>) -> Self {
        Self::new(FrameShape::Ball { radius }, position)
    }

    /// Creates a box-shaped frame.
    pub fn cuboid(half_extents: Vector<Real>, position: Isometry<Real>) -> Self {
        Self::new(FrameShape::Cuboid { half_extents }, position)
    }

    /// The AABB of this frame's shape, in the frame's local space.
    pub fn local_aabb(&self) -> Aabb {
        match self.shape {
            FrameShape::Ball { radius } => {
                Aabb::from_half_extents(Point::origin(), Vector::repeat(radius))
            }
            FrameShape::Cuboid { half_extents } => {
                Aabb::from_half_extents(Point::origin(), half_extents)
            }
        }
    }

    /// The AABB of this frame's shape, in world space.
    pub fn aabb(&self) -> Aabb {
        self.local_aabb().transform_by(&self.position)
    }
}
