use super::types::{Flow, FlowId, Point};

/// Opacity applied to flows that are not the current selection.
pub const DIMMED_OPACITY: f64 = 0.3;

/// Which flow, if any, is emphasized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Selection {
	#[default]
	All,
	Flow(FlowId),
}

impl Selection {
	/// Pressing a flow's button: selects it, or clears it when already active.
	pub fn toggle(self, flow: FlowId) -> Self {
		match self {
			Selection::Flow(active) if active == flow => Selection::All,
			_ => Selection::Flow(flow),
		}
	}

	pub fn show_all(self) -> Self {
		Selection::All
	}

	pub fn is_active(self, flow: FlowId) -> bool {
		self == Selection::Flow(flow)
	}

	pub fn opacity_for(self, flow: FlowId) -> f64 {
		match self {
			Selection::All => 1.0,
			Selection::Flow(active) if active == flow => 1.0,
			Selection::Flow(_) => DIMMED_OPACITY,
		}
	}
}

/// Node currently under the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Hover {
	pub node: Option<&'static str>,
}

impl Hover {
	pub fn enter(self, id: &'static str) -> Self {
		Self { node: Some(id) }
	}

	pub fn leave(self) -> Self {
		Self { node: None }
	}

	pub fn is(&self, id: &str) -> bool {
		self.node == Some(id)
	}
}

/// Topmost node whose box contains `p`. Later nodes paint over earlier ones,
/// so the last match wins.
pub fn node_at_position(flows: &[Flow], p: Point) -> Option<&'static str> {
	let mut found = None;
	for flow in flows {
		for node in flow.nodes {
			if node.bounds.contains(p) {
				found = Some(node.id);
			}
		}
	}
	found
}

/// Applies a pointer position to the hover state.
pub fn hover_at(flows: &[Flow], hover: Hover, p: Point) -> Hover {
	match node_at_position(flows, p) {
		Some(id) => hover.enter(id),
		None => hover.leave(),
	}
}

#[cfg(test)]
mod tests {
	use super::super::catalogue::FLOWS;
	use super::*;

	#[test]
	fn starts_with_nothing_selected_or_hovered() {
		assert_eq!(Selection::default(), Selection::All);
		assert_eq!(Hover::default().node, None);
	}

	#[test]
	fn pressing_a_flow_twice_returns_to_all() {
		for flow in FlowId::ALL {
			let once = Selection::All.toggle(flow);
			assert_eq!(once, Selection::Flow(flow));
			assert_eq!(once.toggle(flow), Selection::All);
		}
	}

	#[test]
	fn pressing_another_flow_switches_directly() {
		let s = Selection::Flow(FlowId::Routing).toggle(FlowId::DataFetching);
		assert_eq!(s, Selection::Flow(FlowId::DataFetching));
	}

	#[test]
	fn show_all_always_clears() {
		assert_eq!(Selection::All.show_all(), Selection::All);
		for flow in FlowId::ALL {
			assert_eq!(Selection::Flow(flow).show_all(), Selection::All);
		}
	}

	#[test]
	fn opacity_dims_everything_but_the_selection() {
		for flow in FlowId::ALL {
			assert_eq!(Selection::All.opacity_for(flow), 1.0);
		}
		let s = Selection::Flow(FlowId::UiControl);
		assert_eq!(s.opacity_for(FlowId::UiControl), 1.0);
		assert_eq!(s.opacity_for(FlowId::Routing), DIMMED_OPACITY);
		assert_eq!(s.opacity_for(FlowId::DataFetching), DIMMED_OPACITY);
		assert!(s.is_active(FlowId::UiControl));
		assert!(!s.is_active(FlowId::Routing));
	}

	#[test]
	fn hover_enter_is_idempotent_and_leave_clears() {
		for node in FLOWS.iter().flat_map(|f| f.nodes.iter()) {
			let h = Hover::default().enter(node.id);
			assert_eq!(h.node, Some(node.id));
			assert_eq!(h.enter(node.id), h);
			assert_eq!(h.leave(), Hover::default());
		}
	}

	#[test]
	fn hit_testing_finds_nodes_and_misses_gaps() {
		assert_eq!(
			node_at_position(&FLOWS, Point::new(920.0, 335.0)),
			Some("ui-state")
		);
		// between two steps of flow 1
		assert_eq!(node_at_position(&FLOWS, Point::new(220.0, 135.0)), None);
		assert_eq!(
			node_at_position(&FLOWS, Point::new(1200.0, 500.0)),
			Some("components")
		);
	}

	#[test]
	fn pointer_moves_drive_hover() {
		let h = hover_at(&FLOWS, Hover::default(), Point::new(60.0, 110.0));
		assert!(h.is("user-chat"));
		let h = hover_at(&FLOWS, h, Point::new(5.0, 5.0));
		assert_eq!(h.node, None);
	}
}
