//! Leptos component wrapping the particle canvas.
//!
//! The component creates an HTML canvas, loads the source image, and wires up
//! mouse handlers that feed the pointer state. Frames are driven by
//! `requestAnimationFrame` through [`RafScheduler`], so stopping the loop on
//! resize really cancels the pending callback before the image is resampled.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, MouseEvent, Window};

use super::config::ParticleConfig;
use super::error::{ImageError, SurfaceError};
use super::frame_loop::{FrameLoop, Scheduler};
use super::sampler::fit_image;
use super::scene::ParticleScene;

type SharedCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// [`Scheduler`] backed by `window.requestAnimationFrame`.
pub struct RafScheduler {
	callback: SharedCallback,
}

impl RafScheduler {
	fn new(callback: SharedCallback) -> Self {
		Self { callback }
	}
}

impl Scheduler for RafScheduler {
	type Handle = Option<i32>;

	fn request_frame(&mut self) -> Option<i32> {
		let window = web_sys::window()?;
		let callback = self.callback.borrow();
		let cb = callback.as_ref()?;
		match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
			Ok(id) => Some(id),
			Err(e) => {
				warn!("image-particles: requestAnimationFrame failed: {}", js_message(&e));
				None
			}
		}
	}

	fn cancel_frame(&mut self, handle: Option<i32>) {
		if let (Some(id), Some(window)) = (handle, web_sys::window()) {
			let _ = window.cancel_animation_frame(id);
		}
	}
}

/// Bundles the scene with its frame loop and drawing targets.
struct Animation {
	scene: ParticleScene,
	frames: FrameLoop<RafScheduler>,
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
	image: Option<HtmlImageElement>,
}

impl Animation {
	/// Resample the loaded image at the canvas' current size and restart.
	fn resample(&mut self) {
		let (w, h) = (self.canvas.width(), self.canvas.height());
		let Some(image) = &self.image else {
			self.scene.width = w as f64;
			self.scene.height = h as f64;
			return;
		};

		match rasterize(image, w, h) {
			Ok(pixels) => {
				if !self
					.frames
					.rebuild(&mut self.scene, &pixels, w as usize, h as usize)
				{
					warn!("image-particles: image produced no particles");
				}
			}
			Err(e) => {
				warn!("image-particles: {}", e);
				self.frames.stop();
				self.scene.clear();
			}
		}
	}

	fn image_failed(&mut self, err: ImageError) {
		warn!("image-particles: {}", err);
		self.frames.stop();
		self.image = None;
		self.scene.clear();
	}
}

/// Best-effort readable text for a thrown JS value.
fn js_message(value: &JsValue) -> String {
	match value.dyn_ref::<js_sys::Error>() {
		Some(err) => String::from(err.message()),
		None => format!("{:?}", value),
	}
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, SurfaceError> {
	canvas
		.get_context("2d")
		.map_err(|e| SurfaceError::MissingContext(js_message(&e)))?
		.ok_or_else(|| SurfaceError::MissingContext("no context returned".into()))?
		.dyn_into()
		.map_err(|_| SurfaceError::MissingContext("not a CanvasRenderingContext2d".into()))
}

fn window_size(window: &Window) -> (f64, f64) {
	(
		window
			.inner_width()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(800.0),
		window
			.inner_height()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(600.0),
	)
}

/// Draw `image` fitted and centred on an offscreen canvas of the given size
/// and read back its RGBA pixels.
fn rasterize(image: &HtmlImageElement, width: u32, height: u32) -> Result<Vec<u8>, ImageError> {
	let pixels_err = |e: JsValue| ImageError::Pixels(js_message(&e));

	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or_else(|| ImageError::Pixels("no document".into()))?;
	let offscreen: HtmlCanvasElement = document
		.create_element("canvas")
		.map_err(pixels_err)?
		.dyn_into()
		.map_err(|_| ImageError::Pixels("created element is not a canvas".into()))?;
	offscreen.set_width(width);
	offscreen.set_height(height);
	let ctx = context_2d(&offscreen).map_err(|e| ImageError::Pixels(e.to_string()))?;

	let place = fit_image(
		image.natural_width() as f64,
		image.natural_height() as f64,
		width as f64,
		height as f64,
	);
	ctx.draw_image_with_html_image_element_and_dw_and_dh(
		image,
		place.x,
		place.y,
		place.width,
		place.height,
	)
	.map_err(pixels_err)?;

	let data = ctx
		.get_image_data(0.0, 0.0, width as f64, height as f64)
		.map_err(pixels_err)?;
	Ok(data.data().0)
}

/// Renders an image as an interactive particle mesh on a canvas element.
///
/// `src` is any URL the browser can load as an image, including data URIs.
/// With `fullscreen` (the default) the canvas fills the viewport and resamples
/// the image whenever the window is resized; otherwise it takes its parent's
/// size once.
#[component]
pub fn ImageParticlesCanvas(
	#[prop(into)] src: String,
	#[prop(optional)] config: ParticleConfig,
	#[prop(default = true)] fullscreen: bool,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let animation: Rc<RefCell<Option<Animation>>> = Rc::new(RefCell::new(None));
	let animate: SharedCallback = Rc::new(RefCell::new(None));
	let on_load: SharedCallback = Rc::new(RefCell::new(None));
	let on_error: SharedCallback = Rc::new(RefCell::new(None));
	let resize_cb: SharedCallback = Rc::new(RefCell::new(None));
	let animation_init = animation.clone();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			error!("image-particles: no window");
			return;
		};

		let (w, h) = if fullscreen {
			window_size(&window)
		} else {
			canvas
				.parent_element()
				.map(|p| (p.client_width() as f64, p.client_height() as f64))
				.unwrap_or((800.0, 600.0))
		};
		canvas.set_width(w as u32);
		canvas.set_height(h as u32);

		let ctx = match context_2d(&canvas) {
			Ok(ctx) => ctx,
			Err(e) => {
				error!("image-particles: {}", e);
				return;
			}
		};
		let scene = match ParticleScene::new(config.clone(), w, h) {
			Ok(scene) => scene,
			Err(e) => {
				error!("image-particles: invalid configuration: {}", e);
				return;
			}
		};

		*animation_init.borrow_mut() = Some(Animation {
			scene,
			frames: FrameLoop::new(RafScheduler::new(animate.clone())),
			canvas: canvas.clone(),
			ctx,
			image: None,
		});

		let animation_frame = animation_init.clone();
		*animate.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut a) = *animation_frame.borrow_mut() {
				let Animation {
					scene, frames, ctx, ..
				} = a;
				frames.on_frame(scene, ctx);
			}
		}));

		let image = match HtmlImageElement::new() {
			Ok(image) => image,
			Err(e) => {
				error!(
					"image-particles: cannot create image element: {}",
					js_message(&e)
				);
				return;
			}
		};
		image.set_cross_origin(Some("anonymous"));

		let (animation_load, image_load) = (animation_init.clone(), image.clone());
		*on_load.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut a) = *animation_load.borrow_mut() {
				info!(
					"image-particles: loaded {}x{} image",
					image_load.natural_width(),
					image_load.natural_height()
				);
				a.image = Some(image_load.clone());
				a.resample();
			}
		}));

		let (animation_err, src_err) = (animation_init.clone(), src.clone());
		*on_error.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut a) = *animation_err.borrow_mut() {
				a.image_failed(ImageError::Decode(src_err.clone()));
			}
		}));

		if let Some(ref cb) = *on_load.borrow() {
			image.set_onload(Some(cb.as_ref().unchecked_ref()));
		}
		if let Some(ref cb) = *on_error.borrow() {
			image.set_onerror(Some(cb.as_ref().unchecked_ref()));
		}
		image.set_src(&src);

		if fullscreen {
			let animation_resize = animation_init.clone();
			*resize_cb.borrow_mut() = Some(Closure::new(move || {
				let Some(win) = web_sys::window() else {
					return;
				};
				let (nw, nh) = window_size(&win);
				if let Some(ref mut a) = *animation_resize.borrow_mut() {
					a.canvas.set_width(nw as u32);
					a.canvas.set_height(nh as u32);
					a.resample();
				}
			}));
			if let Some(ref cb) = *resize_cb.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}
	});

	let animation_mm = animation.clone();
	let on_mousemove = move |ev: MouseEvent| {
		if let Some(ref mut a) = *animation_mm.borrow_mut() {
			a.scene
				.pointer_move(ev.offset_x() as f64, ev.offset_y() as f64);
		}
	};

	let animation_md = animation.clone();
	let on_mousedown = move |_: MouseEvent| {
		if let Some(ref mut a) = *animation_md.borrow_mut() {
			a.scene.pointer_down();
		}
	};

	let animation_mu = animation.clone();
	let on_mouseup = move |_: MouseEvent| {
		if let Some(ref mut a) = *animation_mu.borrow_mut() {
			a.scene.pointer_up();
		}
	};

	let animation_mo = animation.clone();
	let on_mouseout = move |_: MouseEvent| {
		if let Some(ref mut a) = *animation_mo.borrow_mut() {
			a.scene.pointer_leave();
		}
	};

	view! {
		<canvas
			node_ref=canvas_ref
			class="image-particles-canvas"
			on:mousemove=on_mousemove
			on:mousedown=on_mousedown
			on:mouseup=on_mouseup
			on:mouseout=on_mouseout
			style="display: block;"
		/>
	}
}
