//! UI components.

pub mod image_particles;
