pub mod accordion;
pub mod animator;
pub mod constants;
pub mod countdown;
pub mod error;
pub mod gallery;
pub mod grid;
pub mod paint;
pub mod particles;
pub mod pointer;
pub mod reveal;

pub use accordion::*;
pub use animator::*;
pub use countdown::*;
pub use error::*;
pub use gallery::*;
pub use grid::*;
pub use paint::*;
pub use particles::*;
pub use pointer::*;
pub use reveal::*;

pub use glam::Vec2;
