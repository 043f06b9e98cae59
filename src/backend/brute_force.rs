use crate::bounding_volume::Aabb;
use crate::detector::{
    CollisionBackend, CollisionDetector, CollisionGroup, CollisionObjectHandle, CollisionOption,
    CollisionResult, Contact, ObjectSharing,
};
use crate::frame::{FrameKey, FrameSet, FrameShape, ShapeFrame};
use crate::math::{Point, Real, Vector, DIM};
use core::cell::Cell;
use core::ops::ControlFlow;
use num::Zero;

#[cfg(not(feature = "std"))]
use na::ComplexField;

/// A collision detector relying on the [`BruteForceBackend`].
pub type BruteForceDetector = CollisionDetector<BruteForceBackend>;

/// The collision object built by the [`BruteForceBackend`].
///
/// Its shape is copied from the frame when the object is built; its pose is
/// read from the frame set at each collision check.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BruteForceObject {
    frame: FrameKey,
    shape: FrameShape,
    local_aabb: Aabb,
}

impl BruteForceObject {
    /// The key of the frame this object was built for.
    pub fn frame_key(&self) -> FrameKey {
        self.frame
    }

    /// The shape of the frame at the time this object was built.
    pub fn shape(&self) -> &FrameShape {
        &self.shape
    }

    /// The local-space AABB of the shape of this object.
    pub fn local_aabb(&self) -> &Aabb {
        &self.local_aabb
    }
}

/// A reference collision backend checking every pair of objects.
///
/// Each pair is first tested on world-space AABBs. Ball/ball pairs then get an
/// exact contact; every other pair is resolved on the intersection of their
/// AABBs, with a normal along the axis of least penetration.
///
/// The backend counts the objects it builds and the destruction notifications
/// it receives, which makes the lifetime of collision objects observable.
#[derive(Debug, Default)]
pub struct BruteForceBackend {
    sharing: ObjectSharing,
    num_created: Cell<usize>,
    num_destroyed: Cell<usize>,
}

impl BruteForceBackend {
    /// A backend whose collision objects are never shared.
    pub fn new() -> Self {
        Self::with_object_sharing(ObjectSharing::Unsharable)
    }

    /// A backend whose collision objects are shared between groups.
    pub fn sharable() -> Self {
        Self::with_object_sharing(ObjectSharing::Sharable)
    }

    /// A backend with the given object-sharing policy.
    pub fn with_object_sharing(sharing: ObjectSharing) -> Self {
        Self {
            sharing,
            num_created: Cell::new(0),
            num_destroyed: Cell::new(0),
        }
    }

    /// The number of collision objects built so far.
    pub fn num_created_objects(&self) -> usize {
        self.num_created.get()
    }

    /// The number of collision objects destroyed so far.
    pub fn num_destroyed_objects(&self) -> usize {
        self.num_destroyed.get()
    }

    /// The number of collision objects currently alive.
    pub fn num_live_objects(&self) -> usize {
        self.num_created.get() - self.num_destroyed.get()
    }

    fn collide_pair(
        &self,
        frames: &FrameSet<ShapeFrame>,
        object1: &CollisionObjectHandle<Self>,
        object2: &CollisionObjectHandle<Self>,
        option: &CollisionOption,
        result: &mut CollisionResult,
    ) -> ControlFlow<()> {
        let key1 = object1.frame_key();
        let key2 = object2.frame_key();

        if key1 == key2 || option.ignores_collision(key1, key2) {
            return ControlFlow::Continue(());
        }

        let (Some(frame1), Some(frame2)) = (frames.get(key1), frames.get(key2)) else {
            log::warn!("skipping the pair ({key1:?}, {key2:?}): one of its frames was removed");
            return ControlFlow::Continue(());
        };

        let Some(contact) = contact(key1, object1, frame1, key2, object2, frame2) else {
            return ControlFlow::Continue(());
        };

        if option.enable_contact {
            result.add_contact(contact);
        } else {
            result.add_colliding_pair(key1, key2);
        }

        if option.binary_check
            || (option.enable_contact && result.num_contacts() >= option.max_num_contacts)
        {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }
}

impl CollisionBackend for BruteForceBackend {
    type Frame = ShapeFrame;
    type Object = BruteForceObject;

    fn object_sharing(&self) -> ObjectSharing {
        self.sharing
    }

    fn create_collision_object(&self, key: FrameKey, frame: &ShapeFrame) -> BruteForceObject {
        self.num_created.set(self.num_created.get() + 1);
        BruteForceObject {
            frame: key,
            shape: frame.shape,
            local_aabb: frame.local_aabb(),
        }
    }

    fn notify_collision_object_destroying(&self, object: &BruteForceObject) {
        log::trace!("brute-force object of {:?} destroyed", object.frame);
        self.num_destroyed.set(self.num_destroyed.get() + 1);
    }

    fn collide(
        &self,
        frames: &FrameSet<ShapeFrame>,
        group: &CollisionGroup<Self>,
        option: &CollisionOption,
        result: &mut CollisionResult,
    ) -> bool {
        result.clear();

        if option.max_num_contacts == 0 {
            return false;
        }

        let objects = group.objects();
        'outer: for (i, object1) in objects.iter().enumerate() {
            for object2 in &objects[i + 1..] {
                if self
                    .collide_pair(frames, object1, object2, option, result)
                    .is_break()
                {
                    break 'outer;
                }
            }
        }

        result.is_collision()
    }

    fn collide_groups(
        &self,
        frames: &FrameSet<ShapeFrame>,
        group1: &CollisionGroup<Self>,
        group2: &CollisionGroup<Self>,
        option: &CollisionOption,
        result: &mut CollisionResult,
    ) -> bool {
        result.clear();

        if option.max_num_contacts == 0 {
            return false;
        }

        'outer: for object1 in group1.objects() {
            for object2 in group2.objects() {
                if self
                    .collide_pair(frames, object1, object2, option, result)
                    .is_break()
                {
                    break 'outer;
                }
            }
        }

        result.is_collision()
    }
}

fn contact(
    key1: FrameKey,
    object1: &BruteForceObject,
    frame1: &ShapeFrame,
    key2: FrameKey,
    object2: &BruteForceObject,
    frame2: &ShapeFrame,
) -> Option<Contact> {
    let aabb1 = object1.local_aabb.transform_by(&frame1.position);
    let aabb2 = object2.local_aabb.transform_by(&frame2.position);

    if !aabb1.intersects(&aabb2) {
        return None;
    }

    match (object1.shape, object2.shape) {
        (FrameShape::Ball { radius: r1 }, FrameShape::Ball { radius: r2 }) => {
            let center1 = Point::from(frame1.position.translation.vector);
            let center2 = Point::from(frame2.position.translation.vector);
            contact_ball_ball(key1, center1, r1, key2, center2, r2)
        }
        _ => contact_aabb_aabb(key1, &aabb1, key2, &aabb2),
    }
}

fn contact_ball_ball(
    key1: FrameKey,
    center1: Point<Real>,
    r1: Real,
    key2: FrameKey,
    center2: Point<Real>,
    r2: Real,
) -> Option<Contact> {
    let center12 = center2 - center1;
    let distance_squared = center12.norm_squared();
    let sum_radius = r1 + r2;

    if distance_squared >= sum_radius * sum_radius {
        return None;
    }

    let distance = distance_squared.sqrt();
    let normal = if !distance_squared.is_zero() {
        center12 / distance
    } else {
        Vector::x()
    };
    let point1 = center1 + normal * r1;
    let point2 = center2 - normal * r2;

    Some(Contact::new(
        key1,
        key2,
        na::center(&point1, &point2),
        normal,
        sum_radius - distance,
    ))
}

fn contact_aabb_aabb(key1: FrameKey, aabb1: &Aabb, key2: FrameKey, aabb2: &Aabb) -> Option<Contact> {
    let overlap = aabb1.intersection(aabb2)?;
    let extents = overlap.extents();
    let center12 = aabb2.center() - aabb1.center();

    let mut axis = 0;
    for i in 1..DIM {
        if extents[i] < extents[axis] {
            axis = i;
        }
    }

    let mut normal = Vector::zeros();
    normal[axis] = if center12[axis] < 0.0 { -1.0 } else { 1.0 };

    Some(Contact::new(
        key1,
        key2,
        overlap.center(),
        normal,
        extents[axis],
    ))
}
