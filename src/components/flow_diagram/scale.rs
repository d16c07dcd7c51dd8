//! Canvas sizing for high-density displays and pointer coordinate mapping.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::types::{Point, Rect};

pub fn device_pixel_ratio() -> f64 {
	web_sys::window()
		.map(|w| w.device_pixel_ratio())
		.filter(|r| r.is_finite() && *r > 0.0)
		.unwrap_or(1.0)
}

/// Backing-store size in device pixels for a logical size.
pub fn backing_size(width: f64, height: f64, ratio: f64) -> (u32, u32) {
	((width * ratio).round() as u32, (height * ratio).round() as u32)
}

/// Sizes the backing store and returns a 2d context already scaled so that
/// drawing happens in logical units.
pub fn prepare(
	canvas: &HtmlCanvasElement,
	width: f64,
	height: f64,
) -> Option<CanvasRenderingContext2d> {
	let ratio = device_pixel_ratio();
	let (bw, bh) = backing_size(width, height, ratio);
	if canvas.width() != bw {
		canvas.set_width(bw);
	}
	if canvas.height() != bh {
		canvas.set_height(bh);
	}

	let ctx: CanvasRenderingContext2d = canvas.get_context("2d").ok()??.dyn_into().ok()?;
	ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0).ok()?;
	Some(ctx)
}

/// Maps a client-space pointer position onto diagram units, accounting for
/// any CSS scaling of the element.
pub fn client_to_diagram(
	client_x: f64,
	client_y: f64,
	element: Rect,
	width: f64,
	height: f64,
) -> Point {
	let sx = if element.width > 0.0 { width / element.width } else { 1.0 };
	let sy = if element.height > 0.0 { height / element.height } else { 1.0 };
	Point::new((client_x - element.x) * sx, (client_y - element.y) * sy)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn backing_store_scales_with_ratio() {
		assert_eq!(backing_size(1450.0, 920.0, 1.0), (1450, 920));
		assert_eq!(backing_size(1450.0, 920.0, 2.0), (2900, 1840));
		assert_eq!(backing_size(100.0, 100.0, 1.25), (125, 125));
	}

	#[test]
	fn unscaled_element_maps_by_offset() {
		let element = Rect::new(32.0, 400.0, 1450.0, 920.0);
		let p = client_to_diagram(952.0, 735.0, element, 1450.0, 920.0);
		assert_eq!(p, Point::new(920.0, 335.0));
	}

	#[test]
	fn shrunk_element_maps_back_to_logical_units() {
		let element = Rect::new(0.0, 0.0, 725.0, 460.0);
		let p = client_to_diagram(100.0, 50.0, element, 1450.0, 920.0);
		assert_eq!(p, Point::new(200.0, 100.0));
	}

	#[test]
	fn collapsed_element_does_not_divide_by_zero() {
		let element = Rect::new(10.0, 10.0, 0.0, 0.0);
		let p = client_to_diagram(15.0, 20.0, element, 1450.0, 920.0);
		assert_eq!(p, Point::new(5.0, 10.0));
	}
}
