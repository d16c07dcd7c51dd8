use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::scene::{Align, Primitive, Scene, Stroke};
use super::types::Rect;

pub fn paint(scene: &Scene, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
	ctx.set_global_alpha(1.0);
	ctx.set_fill_style_str("white");
	ctx.fill_rect(0.0, 0.0, scene.width, scene.height);

	for layer in &scene.layers {
		for primitive in &layer.primitives {
			draw(primitive, layer.opacity, ctx)?;
		}
	}
	ctx.set_global_alpha(1.0);
	Ok(())
}

fn draw(primitive: &Primitive, opacity: f64, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
	match primitive {
		Primitive::Rect {
			bounds,
			radius,
			fill,
			stroke,
			alpha,
		} => {
			ctx.set_global_alpha(opacity * alpha);
			round_rect_path(ctx, bounds, *radius)?;
			if let Some(fill) = fill {
				ctx.set_fill_style_str(fill);
				ctx.fill();
			}
			if let Some(stroke) = stroke {
				apply_stroke(ctx, stroke)?;
				ctx.stroke();
			}
		}
		Primitive::Line { from, to, stroke } => {
			ctx.set_global_alpha(opacity);
			apply_stroke(ctx, stroke)?;
			ctx.begin_path();
			ctx.move_to(from.x, from.y);
			ctx.line_to(to.x, to.y);
			ctx.stroke();
		}
		Primitive::Triangle { points, fill } => {
			ctx.set_global_alpha(opacity);
			ctx.set_fill_style_str(fill);
			ctx.begin_path();
			ctx.move_to(points[0].x, points[0].y);
			ctx.line_to(points[1].x, points[1].y);
			ctx.line_to(points[2].x, points[2].y);
			ctx.close_path();
			ctx.fill();
		}
		Primitive::Text {
			at,
			text,
			font,
			fill,
			align,
		} => {
			ctx.set_global_alpha(opacity);
			ctx.set_font(&font.css());
			ctx.set_text_align(match align {
				Align::Start => "start",
				Align::Center => "center",
			});
			ctx.set_fill_style_str(fill);
			ctx.fill_text(text, at.x, at.y)?;
		}
	}
	Ok(())
}

fn apply_stroke(ctx: &CanvasRenderingContext2d, stroke: &Stroke) -> Result<(), JsValue> {
	ctx.set_stroke_style_str(stroke.color);
	ctx.set_line_width(stroke.width);
	match stroke.dash {
		Some((dash, gap)) => ctx.set_line_dash(&js_sys::Array::of2(
			&JsValue::from_f64(dash),
			&JsValue::from_f64(gap),
		)),
		None => ctx.set_line_dash(&js_sys::Array::new()),
	}
}

fn round_rect_path(ctx: &CanvasRenderingContext2d, r: &Rect, radius: f64) -> Result<(), JsValue> {
	let radius = radius.min(r.width / 2.0).min(r.height / 2.0).max(0.0);
	let (right, bottom) = (r.x + r.width, r.bottom());
	ctx.begin_path();
	ctx.move_to(r.x + radius, r.y);
	ctx.arc_to(right, r.y, right, bottom, radius)?;
	ctx.arc_to(right, bottom, r.x, bottom, radius)?;
	ctx.arc_to(r.x, bottom, r.x, r.y, radius)?;
	ctx.arc_to(r.x, r.y, right, r.y, radius)?;
	ctx.close_path();
	Ok(())
}
