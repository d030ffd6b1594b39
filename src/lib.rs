//! image-particles: an image rendered as an interactive particle mesh.
//!
//! This crate provides a WASM canvas component that samples an image into
//! colored particles, pushes them away from the pointer, springs them back,
//! and links nearby particles with additive lines.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;

pub use components::image_particles::{ImageParticlesCanvas, ParticleConfig};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("image-particles: logging initialized");
}

/// Page-level options: which image to sample and how.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct PageOptions {
	/// Image URL or data URI.
	pub src: Option<String>,
	/// Effect tuning; missing fields take their defaults.
	#[serde(default)]
	pub config: ParticleConfig,
}

impl PageOptions {
	/// Parse options from the JSON embedded in the page.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}

/// Load options from a script element with id="particle-options".
/// Expected format: JSON with { src: "...", config: { density: 14, ... } }
fn load_page_options() -> Option<PageOptions> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("particle-options")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match PageOptions::from_json(&json_text) {
		Ok(options) => {
			info!("image-particles: loaded page options {:?}", options.config);
			Some(options)
		}
		Err(e) => {
			warn!("image-particles: failed to parse page options: {}", e);
			None
		}
	}
}

/// Main application component.
/// Reads the image source and options from the DOM and renders the effect.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let options = load_page_options().unwrap_or_default();
	let config = options.config;
	let src = options.src;
	if src.is_none() {
		warn!("image-particles: no image source configured");
	}

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Image Particles" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-particles">
			{src.map(|src| view! { <ImageParticlesCanvas src=src config=config.clone() fullscreen=true /> })}
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn page_options_parse_nested_config() {
		let options = PageOptions::from_json(
			r#"{ "src": "data:image/png;base64,AAAA", "config": { "density": 8, "sensitivity": 3 } }"#,
		)
		.unwrap();
		assert_eq!(options.src.as_deref(), Some("data:image/png;base64,AAAA"));
		assert_eq!(options.config.density, 8);
		assert_eq!(options.config.sensitivity, 3.0);
		assert_eq!(options.config.connect_distance, 28.0);
	}

	#[test]
	fn page_options_default_without_config() {
		let options = PageOptions::from_json(r#"{ "src": "logo.png" }"#).unwrap();
		assert_eq!(options.config, ParticleConfig::default());
	}
}
