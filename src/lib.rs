pub mod bounds;
pub mod config;
pub mod input;
pub mod number;
pub mod region;
pub mod session;

#[cfg(test)]
pub mod test_utils;

pub use bounds::{BoundedAxis, Bounds};
pub use region::{Parallelepiped, Rectangle, Region};
