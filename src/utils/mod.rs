//! Various unsorted logical operators and containers.

pub use self::isometry_ops::IsometryOps;
pub use self::sorted_pair::SortedPair;

pub mod hashmap;
mod isometry_ops;
mod sorted_pair;
