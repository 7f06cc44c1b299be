//! Somascope Core - anatomy catalog and animation logic
//!
//! This crate holds the renderer-independent parts of the viewer: the
//! RAS coordinate convention, the landmark and section-plane catalog,
//! the proxy-body rest poses, and the looping animation math. Nothing
//! here depends on Bevy, so all of it is unit-testable.

pub mod anatomy;
pub mod animation;

pub use anatomy::{Landmark, SectionPlane};
pub use animation::{FigurePose, Playback};
