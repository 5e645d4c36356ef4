//! Small games that show off the framework, runnable with `pickitup run <name>`.

pub mod boxes;
pub mod geometry;

pub use boxes::Boxes;
pub use geometry::Geometry;
