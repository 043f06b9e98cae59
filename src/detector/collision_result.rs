use crate::frame::FrameKey;
use crate::math::{Point, Real, Vector};
use crate::utils::hashmap::HashSet;
use alloc::vec::Vec;
use approx::{AbsDiffEq, RelativeEq};

/// A contact between the collision objects of two frames.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Contact {
    /// The first frame of the pair.
    pub frame1: FrameKey,
    /// The second frame of the pair.
    pub frame2: FrameKey,
    /// The contact point, in world space.
    pub point: Point<Real>,
    /// The contact normal, in world space, pointing from `frame1` toward `frame2`.
    pub normal: Vector<Real>,
    /// How deep the two objects penetrate each other along `normal`.
    pub penetration_depth: Real,
}

impl Contact {
    /// Creates a new contact.
    #[inline]
    pub fn new(
        frame1: FrameKey,
        frame2: FrameKey,
        point: Point<Real>,
        normal: Vector<Real>,
        penetration_depth: Real,
    ) -> Self {
        Contact {
            frame1,
            frame2,
            point,
            normal,
            penetration_depth,
        }
    }

    /// Swaps the two frames of this contact, flipping its normal.
    #[inline]
    pub fn flipped(mut self) -> Self {
        core::mem::swap(&mut self.frame1, &mut self.frame2);
        self.normal = -self.normal;
        self
    }
}

impl AbsDiffEq for Contact {
    type Epsilon = Real;

    fn default_epsilon() -> Real {
        Real::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        self.frame1 == other.frame1
            && self.frame2 == other.frame2
            && self.point.abs_diff_eq(&other.point, epsilon)
            && self.normal.abs_diff_eq(&other.normal, epsilon)
            && self
                .penetration_depth
                .abs_diff_eq(&other.penetration_depth, epsilon)
    }
}

impl RelativeEq for Contact {
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        self.frame1 == other.frame1
            && self.frame2 == other.frame2
            && self.point.relative_eq(&other.point, epsilon, max_relative)
            && self.normal.relative_eq(&other.normal, epsilon, max_relative)
            && self
                .penetration_depth
                .relative_eq(&other.penetration_depth, epsilon, max_relative)
    }
}

/// The outcome of a collision check.
///
/// A result can be reused across checks: [`CollisionResult::clear`] keeps the
/// memory it allocated.
#[derive(Clone, Debug, Default)]
pub struct CollisionResult {
    contacts: Vec<Contact>,
    colliding_frames: HashSet<FrameKey>,
}

impl CollisionResult {
    /// Creates an empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a contact. Both of its frames are marked as colliding.
    pub fn add_contact(&mut self, contact: Contact) {
        self.add_colliding_pair(contact.frame1, contact.frame2);
        self.contacts.push(contact);
    }

    /// Marks two frames as colliding without recording any contact.
    pub fn add_colliding_pair(&mut self, frame1: FrameKey, frame2: FrameKey) {
        let _ = self.colliding_frames.insert(frame1);
        let _ = self.colliding_frames.insert(frame2);
    }

    /// The number of recorded contacts.
    pub fn num_contacts(&self) -> usize {
        self.contacts.len()
    }

    /// The `i`-th recorded contact.
    pub fn contact(&self, i: usize) -> Option<&Contact> {
        self.contacts.get(i)
    }

    /// All the recorded contacts.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Was any colliding pair found?
    pub fn is_collision(&self) -> bool {
        !self.colliding_frames.is_empty()
    }

    /// Is `frame` part of a colliding pair?
    pub fn in_collision(&self, frame: FrameKey) -> bool {
        self.colliding_frames.contains(&frame)
    }

    /// The frames that are part of at least one colliding pair, in no particular order.
    pub fn colliding_frames(&self) -> impl Iterator<Item = FrameKey> + '_ {
        self.colliding_frames.iter().copied()
    }

    /// Forgets every contact and colliding frame.
    pub fn clear(&mut self) {
        self.contacts.clear();
        self.colliding_frames.clear();
    }
}
