use super::{CollisionGroup, CollisionOption, CollisionResult};
use crate::frame::{FrameKey, FrameSet};

/// Whether collision objects built for the same frame may be shared.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum ObjectSharing {
    /// Every claim builds a new collision object.
    #[default]
    Unsharable,
    /// Claims for a frame with a live collision object return that object.
    Sharable,
}

/// The engine a [`CollisionDetector`](super::CollisionDetector) delegates to.
///
/// A backend builds collision objects out of frames and runs the collision
/// queries between the objects of collision groups. It does not manage the
/// lifetime of the objects it builds: the detector does.
///
/// Backends are only ever accessed through shared references. Bookkeeping that
/// must change when objects are destroyed (broad-phase proxies, counters...)
/// needs interior mutability.
pub trait CollisionBackend: Sized {
    /// The type of the frames collision objects are built from.
    type Frame;
    /// The type of the collision objects built by this backend.
    type Object;

    /// The object-sharing policy used by detectors relying on this backend,
    /// unless another policy is installed before the first claim.
    fn object_sharing(&self) -> ObjectSharing {
        ObjectSharing::Unsharable
    }

    /// Builds a new collision object for the frame designated by `key`.
    ///
    /// This is potentially expensive, and is never expected to fail: a panic
    /// here propagates to the caller of the claim and leaves no cache entry.
    fn create_collision_object(&self, key: FrameKey, frame: &Self::Frame) -> Self::Object;

    /// Called exactly once per collision object, right before it is destroyed.
    ///
    /// When objects are shared, the object is still present in the detector's
    /// cache while this runs. The default implementation does nothing.
    fn notify_collision_object_destroying(&self, object: &Self::Object) {
        let _ = object;
    }

    /// Checks for collisions between the objects of `group`.
    ///
    /// Returns `true` if at least one colliding pair was found.
    fn collide(
        &self,
        frames: &FrameSet<Self::Frame>,
        group: &CollisionGroup<Self>,
        option: &CollisionOption,
        result: &mut CollisionResult,
    ) -> bool;

    /// Checks for collisions between the objects of `group1` and the objects of
    /// `group2`.
    ///
    /// Returns `true` if at least one colliding pair was found.
    fn collide_groups(
        &self,
        frames: &FrameSet<Self::Frame>,
        group1: &CollisionGroup<Self>,
        group2: &CollisionGroup<Self>,
        option: &CollisionOption,
        result: &mut CollisionResult,
    ) -> bool;
}
