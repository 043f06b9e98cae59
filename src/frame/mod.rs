//! Frames: the "what to collide" side of a collision detector.
//!
//! A frame is owned by a [`FrameSet`] and designated by a [`FrameKey`]. Collision
//! detectors never own frames; they are bound to a [`SharedFrames`] and resolve
//! keys when they build collision objects.

pub use self::frame_key::FrameKey;
pub use self::frame_set::{FrameSet, SharedFrames};
pub use self::shape_frame::{FrameShape, ShapeFrame};

mod frame_key;
mod frame_set;
mod shape_frame;
