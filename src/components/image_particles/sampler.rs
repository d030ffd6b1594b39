//! Pixel sampling: turns an RGBA buffer into particle seed points.

use super::color::Color;

/// Channels above this value on all of R, G and B count as background.
const WHITE_THRESHOLD: u8 = 200;

/// Space left around an image that would otherwise fill the surface.
pub const FIT_MARGIN: f64 = 100.0;

/// A grid point that survived filtering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
	pub x: f64,
	pub y: f64,
	pub color: Color,
}

/// Sample `pixels` (row-major RGBA, `width * height * 4` bytes) every
/// `density` pixels in both directions.
///
/// Near-white pixels and fully transparent pixels are skipped. The stored
/// color is always opaque. Output order is row-major.
pub fn sample_pixels(pixels: &[u8], width: usize, height: usize, density: usize) -> Vec<Sample> {
	debug_assert!(density > 0, "density must be positive");
	debug_assert!(
		pixels.len() >= width * height * 4,
		"pixel buffer shorter than {width}x{height}"
	);

	let mut samples = Vec::new();
	for i in (0..height).step_by(density) {
		for j in (0..width).step_by(density) {
			let at = (j + i * width) * 4;
			let (r, g, b, a) = (pixels[at], pixels[at + 1], pixels[at + 2], pixels[at + 3]);
			let color = Color::rgb(r, g, b);

			if color.is_near_white(WHITE_THRESHOLD) || a == 0 {
				continue;
			}

			samples.push(Sample {
				x: j as f64,
				y: i as f64,
				color,
			});
		}
	}
	samples
}

/// Where an image is drawn on the surface before sampling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

/// Scale an image down so it leaves [`FIT_MARGIN`] free on the surface, then
/// centre it. Images that already fit keep their natural size.
pub fn fit_image(
	image_width: f64,
	image_height: f64,
	surface_width: f64,
	surface_height: f64,
) -> Placement {
	let avail_w = usable(surface_width);
	let avail_h = usable(surface_height);

	let (width, height) = if image_width > avail_w || image_height > avail_h {
		let ratio = (image_width / avail_w).max(image_height / avail_h);
		(image_width / ratio, image_height / ratio)
	} else {
		(image_width, image_height)
	};

	Placement {
		x: (surface_width - width) / 2.0,
		y: (surface_height - height) / 2.0,
		width,
		height,
	}
}

// Tiny surfaces have no room for a margin, so fit to the full extent.
fn usable(extent: f64) -> f64 {
	if extent > FIT_MARGIN {
		extent - FIT_MARGIN
	} else {
		extent.max(1.0)
	}
}
