//! Artifact rendering and comment composition.
//!
//! Turns the selected media artifact (or its absence) into one of the
//! Markdown renderings the posted comment can carry, persisting inline
//! artifacts to the working directory on the way.

pub mod comment;
pub mod mime;
pub mod render;

pub use comment::compose_comment;
pub use render::render_media;
