use leptos::prelude::*;
use log::{debug, warn};
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::catalogue::{DIAGRAM_HEIGHT, DIAGRAM_WIDTH, FLOWS};
use super::render;
use super::scale;
use super::scene;
use super::state::{self, Hover, Selection};
use super::types::{FlowId, Rect};

/// Interactive architecture diagram: flow selector buttons above a canvas
/// that repaints whenever the selection or the hovered node changes.
#[component]
pub fn FlowDiagram(
	#[prop(default = DIAGRAM_WIDTH)] width: f64,
	#[prop(default = DIAGRAM_HEIGHT)] height: f64,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let selection = RwSignal::new(Selection::default());
	let hover = RwSignal::new(Hover::default());

	Effect::new(move |_| {
		let scene = scene::build(&FLOWS, selection.get(), hover.get(), width, height);
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(ctx) = scale::prepare(&canvas, width, height) else {
			warn!("2d canvas context unavailable, skipping paint");
			return;
		};
		if let Err(err) = render::paint(&scene, &ctx) {
			warn!("diagram paint failed: {:?}", err);
		}
	});

	let on_mousemove = move |ev: MouseEvent| {
		let Some(canvas) = canvas_ref.get_untracked() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let rect = canvas.get_bounding_client_rect();
		let p = scale::client_to_diagram(
			ev.client_x() as f64,
			ev.client_y() as f64,
			Rect::new(rect.left(), rect.top(), rect.width(), rect.height()),
			width,
			height,
		);

		let current = hover.get_untracked();
		let next = state::hover_at(&FLOWS, current, p);
		if next != current {
			debug!("hover: {:?} -> {:?}", current.node, next.node);
			hover.set(next);
		}
	};

	let on_mouseleave = move |_: MouseEvent| {
		let current = hover.get_untracked();
		if current.node.is_some() {
			debug!("hover: {:?} -> None", current.node);
			hover.set(current.leave());
		}
	};

	let flow_buttons = FlowId::ALL
		.into_iter()
		.map(|flow| {
			view! {
				<button
					class=move || {
						if selection.get().is_active(flow) { "flow-button active" } else { "flow-button" }
					}
					on:click=move |_| {
						selection.update(|s| *s = s.toggle(flow));
						debug!("flow {} pressed, selection now {:?}", flow.number(), selection.get_untracked());
					}
				>
					{flow.button_label()}
				</button>
			}
		})
		.collect_view();

	let show_all = move |_: MouseEvent| {
		selection.update(|s| *s = s.show_all());
		debug!("show all pressed");
	};

	view! {
		<div class="flow-selector">
			{flow_buttons}
			<button class="flow-button show-all" on:click=show_all>
				"Show All"
			</button>
		</div>

		<div class="diagram-card">
			<canvas
				node_ref=canvas_ref
				class="flow-diagram-canvas"
				on:mousemove=on_mousemove
				on:mouseleave=on_mouseleave
				style=move || {
					format!(
						"display: block; margin: 0 auto; width: {}px; height: {}px; cursor: {};",
						width,
						height,
						if hover.get().node.is_some() { "pointer" } else { "default" },
					)
				}
			/>
		</div>
	}
}
