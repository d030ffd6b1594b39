//! Drawing the particle mesh.
//!
//! Rendering is a single ordered pass over a [`Surface`]:
//! 1. Full clear
//! 2. Additive compositing so overlapping strokes brighten
//! 3. Every link (mesh underneath)
//! 4. Every particle dot (on top)

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::color::Color;
use super::config::ParticleConfig;
use super::field::Particle;
use super::linker::Link;

/// Canvas composite mode that adds color values.
pub const ADDITIVE_BLEND: &str = "lighter";

/// The drawing operations the renderer needs from a 2D target.
pub trait Surface {
	/// Erase everything on the surface.
	fn clear(&mut self);
	/// Set the compositing mode for subsequent draws.
	fn set_blend(&mut self, mode: &str);
	/// Stroke a straight line.
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64);
	/// Fill a circle.
	fn fill_disc(&mut self, center: (f64, f64), radius: f64, color: Color);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self) {
		let Some(canvas) = self.canvas() else {
			return;
		};
		self.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);
	}

	fn set_blend(&mut self, mode: &str) {
		let _ = self.set_global_composite_operation(mode);
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), color: Color, width: f64) {
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}

	fn fill_disc(&mut self, center: (f64, f64), radius: f64, color: Color) {
		self.set_fill_style_str(&color.to_css());
		self.begin_path();
		let _ = self.arc(center.0, center.1, radius, 0.0, PI * 2.0);
		self.close_path();
		self.fill();
	}
}

/// Clear and paint a complete frame.
pub fn render<S: Surface + ?Sized>(
	surface: &mut S,
	particles: &[Particle],
	links: &[Link],
	config: &ParticleConfig,
) {
	surface.clear();
	paint(surface, particles, links, config);
}

/// Paint links then dots over whatever is on the surface.
pub fn paint<S: Surface + ?Sized>(
	surface: &mut S,
	particles: &[Particle],
	links: &[Link],
	config: &ParticleConfig,
) {
	surface.set_blend(ADDITIVE_BLEND);
	draw_links(surface, particles, links);
	draw_particles(surface, particles, config.particle_radius);
}

fn draw_links<S: Surface + ?Sized>(surface: &mut S, particles: &[Particle], links: &[Link]) {
	for link in links {
		// A zero line width is ignored by canvas and would reuse the last one.
		if link.weight <= 0.0 {
			continue;
		}
		let (a, b) = (&particles[link.a], &particles[link.b]);
		surface.stroke_line((a.x, a.y), (b.x, b.y), a.color, link.weight);
	}
}

fn draw_particles<S: Surface + ?Sized>(surface: &mut S, particles: &[Particle], radius: f64) {
	for p in particles {
		surface.fill_disc((p.x, p.y), radius, p.color);
	}
}
