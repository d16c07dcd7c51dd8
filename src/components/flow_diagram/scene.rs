//! Display-list construction.
//!
//! [`build`] turns the static flows plus the two pieces of transient state
//! into a [`Scene`]: an ordered list of layers, each carrying an opacity and
//! the primitives to paint. It touches no browser API, so identical inputs
//! always produce an identical scene; `render` only replays it.

use super::catalogue::find_node;
use super::state::{Hover, Selection};
use super::types::{Arrow, Flow, FlowId, Node, Point, Rect};

const INK: &str = "#1f2937";
const FRAME_COLOR: &str = "#e5e7eb";
const BADGE_FILL: &str = "rgba(0,0,0,0.3)";
const DASH: (f64, f64) = (5.0, 5.0);

const NODE_RADIUS: f64 = 8.0;
const NODE_IDLE_ALPHA: f64 = 0.9;
const ARROW_WIDTH: f64 = 2.0;
const ARROW_HEAD_LENGTH: f64 = 10.0;
const ARROW_HEAD_HALF_WIDTH: f64 = 4.0;
const LABEL_LIFT: f64 = 5.0;
const TOOLTIP_GAP: f64 = 5.0;
const TOOLTIP_HEIGHT: f64 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
	pub color: &'static str,
	pub width: f64,
	pub dash: Option<(f64, f64)>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Font {
	pub size: f64,
	pub weight: u16,
}

impl Font {
	const fn new(size: f64, weight: u16) -> Self {
		Self { size, weight }
	}

	/// CSS shorthand understood by `CanvasRenderingContext2d::set_font`.
	pub fn css(&self) -> String {
		format!("{} {}px sans-serif", self.weight, self.size)
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
	Start,
	Center,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
	Rect {
		bounds: Rect,
		radius: f64,
		fill: Option<&'static str>,
		stroke: Option<Stroke>,
		alpha: f64,
	},
	Line {
		from: Point,
		to: Point,
		stroke: Stroke,
	},
	Triangle {
		points: [Point; 3],
		fill: &'static str,
	},
	Text {
		at: Point,
		text: &'static str,
		font: Font,
		fill: &'static str,
		align: Align,
	},
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayerKind {
	Flow(FlowId),
	Tooltip,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
	pub kind: LayerKind,
	pub opacity: f64,
	pub primitives: Vec<Primitive>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
	pub width: f64,
	pub height: f64,
	pub layers: Vec<Layer>,
}

pub fn build(
	flows: &[Flow],
	selection: Selection,
	hover: Hover,
	width: f64,
	height: f64,
) -> Scene {
	let mut layers: Vec<Layer> = flows
		.iter()
		.map(|flow| Layer {
			kind: LayerKind::Flow(flow.id),
			opacity: selection.opacity_for(flow.id),
			primitives: flow_primitives(flow, hover),
		})
		.collect();

	// Tooltips paint last so neighbouring nodes never cover them.
	let tooltip = hover
		.node
		.and_then(|id| find_node(flows, id))
		.and_then(|(owner, node)| {
			node.description.map(|text| Layer {
				kind: LayerKind::Tooltip,
				opacity: selection.opacity_for(owner),
				primitives: tooltip_primitives(node, text),
			})
		});
	layers.extend(tooltip);

	Scene {
		width,
		height,
		layers,
	}
}

fn flow_primitives(flow: &Flow, hover: Hover) -> Vec<Primitive> {
	let mut out = vec![
		Primitive::Text {
			at: flow.heading_at,
			text: flow.heading,
			font: Font::new(18.0, 700),
			fill: INK,
			align: Align::Start,
		},
		Primitive::Rect {
			bounds: flow.frame,
			radius: 8.0,
			fill: None,
			stroke: Some(Stroke {
				color: FRAME_COLOR,
				width: 2.0,
				dash: Some(DASH),
			}),
			alpha: 1.0,
		},
	];
	for arrow in flow.arrows {
		push_arrow(&mut out, arrow);
	}
	for node in flow.nodes {
		push_node(&mut out, node, hover.is(node.id));
	}
	out
}

fn push_arrow(out: &mut Vec<Primitive>, arrow: &Arrow) {
	let (dx, dy) = (arrow.to.x - arrow.from.x, arrow.to.y - arrow.from.y);
	let dist = (dx * dx + dy * dy).sqrt();
	if dist < 0.001 {
		return;
	}
	let (ux, uy) = (dx / dist, dy / dist);
	let base = Point::new(
		arrow.to.x - ux * ARROW_HEAD_LENGTH,
		arrow.to.y - uy * ARROW_HEAD_LENGTH,
	);
	let (px, py) = (-uy * ARROW_HEAD_HALF_WIDTH, ux * ARROW_HEAD_HALF_WIDTH);

	out.push(Primitive::Line {
		from: arrow.from,
		to: base,
		stroke: Stroke {
			color: arrow.color,
			width: ARROW_WIDTH,
			dash: arrow.dashed.then_some(DASH),
		},
	});
	out.push(Primitive::Triangle {
		points: [
			arrow.to,
			Point::new(base.x + px, base.y + py),
			Point::new(base.x - px, base.y - py),
		],
		fill: arrow.color,
	});

	if !arrow.label.is_empty() {
		let mid = arrow.from.midpoint(arrow.to);
		out.push(Primitive::Text {
			at: Point::new(mid.x, mid.y - LABEL_LIFT),
			text: arrow.label,
			font: Font::new(11.0, 600),
			fill: arrow.color,
			align: Align::Center,
		});
	}
}

fn push_node(out: &mut Vec<Primitive>, node: &Node, hovered: bool) {
	let b = node.bounds;
	let cx = b.center_x();
	let stroke = if hovered {
		Stroke {
			color: INK,
			width: 3.0,
			dash: None,
		}
	} else {
		Stroke {
			color: "white",
			width: 2.0,
			dash: None,
		}
	};

	out.push(Primitive::Rect {
		bounds: b,
		radius: NODE_RADIUS,
		fill: Some(node.category.color()),
		stroke: Some(stroke),
		alpha: if hovered { 1.0 } else { NODE_IDLE_ALPHA },
	});
	if let Some(icon) = node.icon {
		out.push(Primitive::Text {
			at: Point::new(cx, b.y + 25.0),
			text: icon,
			font: Font::new(14.0, 700),
			fill: "white",
			align: Align::Center,
		});
	}
	out.push(Primitive::Text {
		at: Point::new(cx, b.y + 45.0),
		text: node.label,
		font: Font::new(12.0, 600),
		fill: "white",
		align: Align::Center,
	});
	if let Some(tech) = node.tech {
		out.push(Primitive::Rect {
			bounds: Rect::new(b.x + 5.0, b.bottom() - 20.0, b.width - 10.0, 16.0),
			radius: 3.0,
			fill: Some(BADGE_FILL),
			stroke: None,
			alpha: 1.0,
		});
		out.push(Primitive::Text {
			at: Point::new(cx, b.bottom() - 9.0),
			text: tech,
			font: Font::new(9.0, 500),
			fill: "white",
			align: Align::Center,
		});
	}
}

fn tooltip_primitives(node: &Node, text: &'static str) -> Vec<Primitive> {
	let b = node.bounds;
	vec![
		Primitive::Rect {
			bounds: Rect::new(b.x, b.bottom() + TOOLTIP_GAP, b.width, TOOLTIP_HEIGHT),
			radius: 4.0,
			fill: Some(INK),
			stroke: None,
			alpha: 0.95,
		},
		Primitive::Text {
			at: Point::new(b.center_x(), b.bottom() + 23.0),
			text,
			font: Font::new(10.0, 400),
			fill: "white",
			align: Align::Center,
		},
	]
}

#[cfg(test)]
mod tests {
	use super::super::catalogue::{DIAGRAM_HEIGHT, DIAGRAM_WIDTH, FLOWS};
	use super::super::state::DIMMED_OPACITY;
	use super::super::types::{Category, FlowId};
	use super::*;

	fn scene(selection: Selection, hover: Hover) -> Scene {
		build(&FLOWS, selection, hover, DIAGRAM_WIDTH, DIAGRAM_HEIGHT)
	}

	impl Scene {
		fn layer(&self, kind: LayerKind) -> Option<&Layer> {
			self.layers.iter().find(|l| l.kind == kind)
		}
	}

	fn texts(layer: &Layer) -> Vec<&'static str> {
		layer
			.primitives
			.iter()
			.filter_map(|p| match p {
				Primitive::Text { text, .. } => Some(*text),
				_ => None,
			})
			.collect()
	}

	#[test]
	fn same_state_builds_the_same_scene() {
		let states = [
			(Selection::All, Hover::default()),
			(Selection::Flow(FlowId::UiControl), Hover::default().enter("ui-state")),
			(Selection::Flow(FlowId::Routing), Hover::default().enter("mongodb")),
		];
		for (selection, hover) in states {
			assert_eq!(scene(selection, hover), scene(selection, hover));
		}
	}

	#[test]
	fn initial_load_shows_all_flows_without_tooltip() {
		let s = scene(Selection::default(), Hover::default());
		assert_eq!(s.layers.len(), 3);
		assert!(s.layers.iter().all(|l| l.opacity == 1.0));
		assert!(s.layer(LayerKind::Tooltip).is_none());
	}

	#[test]
	fn selecting_flow_two_dims_the_others() {
		let s = scene(Selection::All.toggle(FlowId::UiControl), Hover::default());
		let opacity = |id| s.layer(LayerKind::Flow(id)).unwrap().opacity;
		assert_eq!(opacity(FlowId::Routing), DIMMED_OPACITY);
		assert_eq!(opacity(FlowId::UiControl), 1.0);
		assert_eq!(opacity(FlowId::DataFetching), DIMMED_OPACITY);
	}

	#[test]
	fn hovering_ui_state_shows_tooltip_beneath_it() {
		let selection = Selection::Flow(FlowId::UiControl);
		let s = scene(selection, Hover::default().enter("ui-state"));
		let tooltip = s.layer(LayerKind::Tooltip).unwrap();
		assert_eq!(tooltip.opacity, 1.0);
		assert_eq!(texts(tooltip), vec!["UIProvider / useState"]);
		match &tooltip.primitives[0] {
			Primitive::Rect { bounds, .. } => {
				assert_eq!(*bounds, Rect::new(850.0, 375.0, 140.0, 30.0));
			}
			other => panic!("expected tooltip box, got {other:?}"),
		}

		let left = scene(selection, Hover::default().enter("ui-state").leave());
		assert!(left.layer(LayerKind::Tooltip).is_none());
		assert_eq!(left.layer(LayerKind::Flow(FlowId::Routing)).unwrap().opacity, DIMMED_OPACITY);
	}

	#[test]
	fn tooltip_follows_owner_flow_dimming() {
		let s = scene(Selection::Flow(FlowId::Routing), Hover::default().enter("mongodb"));
		assert_eq!(s.layer(LayerKind::Tooltip).unwrap().opacity, DIMMED_OPACITY);
	}

	#[test]
	fn hovered_node_gets_dark_border() {
		let s = scene(Selection::All, Hover::default().enter("router"));
		let layer = s.layer(LayerKind::Flow(FlowId::Routing)).unwrap();
		let borders: Vec<(Stroke, f64)> = layer
			.primitives
			.iter()
			.filter_map(|p| match p {
				Primitive::Rect {
					stroke: Some(stroke),
					fill: Some(_),
					alpha,
					..
				} => Some((*stroke, *alpha)),
				_ => None,
			})
			.collect();
		assert_eq!(borders.len(), 7);
		let dark: Vec<_> = borders.iter().filter(|(s, _)| s.color == INK).collect();
		assert_eq!(dark.len(), 1);
		assert_eq!(dark[0].0.width, 3.0);
		assert_eq!(dark[0].1, 1.0);
	}

	#[test]
	fn arrows_draw_dashed_only_when_flagged() {
		let s = scene(Selection::All, Hover::default());
		let layer = s.layer(LayerKind::Flow(FlowId::DataFetching)).unwrap();
		let lines: Vec<&Stroke> = layer
			.primitives
			.iter()
			.filter_map(|p| match p {
				Primitive::Line { stroke, .. } => Some(stroke),
				_ => None,
			})
			.collect();
		assert_eq!(lines.len(), 10);
		let dashed: Vec<_> = lines.iter().filter(|s| s.dash.is_some()).collect();
		assert_eq!(dashed.len(), 2);
		assert!(dashed.iter().all(|s| s.color == Category::Database.color()));
	}

	#[test]
	fn arrow_labels_sit_above_the_midpoint() {
		let s = scene(Selection::All, Hover::default());
		let layer = s.layer(LayerKind::Flow(FlowId::UiControl)).unwrap();
		let at = layer.primitives.iter().find_map(|p| match p {
			Primitive::Text {
				text: "Render/Hide",
				at,
				..
			} => Some(*at),
			_ => None,
		});
		assert_eq!(at, Some(Point::new(1120.0, 385.0)));
	}

	#[test]
	fn arrowhead_tip_lands_on_destination() {
		let s = scene(Selection::All, Hover::default());
		let layer = s.layer(LayerKind::Flow(FlowId::Routing)).unwrap();
		let first = layer.primitives.iter().find_map(|p| match p {
			Primitive::Triangle { points, .. } => Some(*points),
			_ => None,
		});
		let [tip, left, right] = first.unwrap();
		assert_eq!(tip, Point::new(250.0, 135.0));
		assert_eq!(left.x, 240.0);
		assert_eq!(right.x, 240.0);
		assert_eq!((left.y - right.y).abs(), 2.0 * ARROW_HEAD_HALF_WIDTH);
	}

	#[test]
	fn font_css_shorthand() {
		assert_eq!(Font::new(11.0, 600).css(), "600 11px sans-serif");
	}
}
