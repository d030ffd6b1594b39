//! Interactive image particle mesh.
//!
//! Samples a source image into a sparse set of colored particles and animates
//! them on an HTML canvas:
//! - Particles repel from the pointer (twice as hard while pressed)
//! - Each tick springs particles back toward where they were sampled
//! - Particles closer than `connect_distance` are joined by lines that thin
//!   out with distance, drawn additively under the dots
//!
//! The simulation core ([`ParticleScene`], [`FrameLoop`]) never touches the
//! DOM directly. Drawing goes through [`Surface`] and frame requests through
//! [`Scheduler`], which the canvas component implements on top of
//! `CanvasRenderingContext2d` and `requestAnimationFrame`.
//!
//! # Example
//!
//! ```ignore
//! use image_particles::{ImageParticlesCanvas, ParticleConfig};
//!
//! let config = ParticleConfig { density: 10, ..Default::default() };
//!
//! view! { <ImageParticlesCanvas src="logo.png" config=config /> }
//! ```

pub mod color;
mod component;
pub mod config;
pub mod error;
pub mod field;
pub mod force;
pub mod frame_loop;
pub mod linker;
pub mod render;
pub mod sampler;
pub mod scene;

pub use color::Color;
pub use component::{ImageParticlesCanvas, RafScheduler};
pub use config::ParticleConfig;
pub use error::{ConfigError, ImageError, SurfaceError};
pub use field::{Particle, ParticleField};
pub use force::PointerState;
pub use frame_loop::{FrameLoop, LoopState, Scheduler};
pub use linker::Link;
pub use render::Surface;
pub use sampler::{Placement, Sample};
pub use scene::ParticleScene;
