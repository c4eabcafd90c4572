//! Iteration primitives for the equity enumeration loops.
//!
//! - [`Odometer`]: outer loop over the cross product of distribution indices
//! - [`PartitionEnumerator`]: inner loop over disjoint deals from the deck

pub mod odometer;
pub mod partition;

pub use odometer::Odometer;
pub use partition::PartitionEnumerator;
