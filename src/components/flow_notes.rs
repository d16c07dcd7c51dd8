use leptos::prelude::*;

use super::flow_diagram::Category;

struct FlowNote {
	icon: &'static str,
	title: &'static str,
	summary: &'static str,
	accent: Category,
	points: [&'static str; 4],
}

static FLOW_NOTES: [FlowNote; 3] = [
	FlowNote {
		icon: "🧭",
		title: "Flow 1: AI Routing",
		summary: "User sends natural language navigation commands through chat interface.",
		accent: Category::Ai,
		points: [
			"AI parses intent using system prompts",
			"Backend generates JSON navigation object",
			"Frontend router receives aiNavigate event",
			"App.tsx switches to target page component",
		],
	},
	FlowNote {
		icon: "🎛️",
		title: "Flow 2: UI Control",
		summary: "AI interprets component-specific commands to control UI visibility.",
		accent: Category::Frontend,
		points: [
			"Commands like \"show bot chat\" parsed by AI",
			"Global UI state store manages visibility",
			"aiUpdateUI events trigger state updates",
			"Components conditionally render based on state",
		],
	},
	FlowNote {
		icon: "📊",
		title: "Flow 3: Data Fetching",
		summary: "AI-driven data queries populate tables dynamically from database.",
		accent: Category::Database,
		points: [
			"AI detects data request intent",
			"API calls triggered via aiUpdateData events",
			"MongoDB queries execute server-side",
			"DataContext updates, tables re-render",
		],
	},
];

static TECHNICAL_NOTES: [(&str, &str); 4] = [
	(
		"Event System:",
		"Custom events (aiNavigate, aiUpdateUI, aiUpdateData) enable decoupled communication between AI backend and React frontend.",
	),
	(
		"State Management:",
		"Combination of React Context API (UIProvider, DataContext) and local useState hooks manage global and component-level state.",
	),
	(
		"AI Processing Pipeline:",
		"Natural language → Intent detection → JSON generation → Event dispatch → State update → UI reaction.",
	),
	(
		"Component Architecture:",
		"Modular components (BotChat, VideoFeed, TopBar, Sidebars) subscribe to global state for visibility and data updates.",
	),
];

/// One card per flow summarizing its steps.
#[component]
pub fn FlowNotes() -> impl IntoView {
	view! {
		<div class="flow-notes">
			{FLOW_NOTES
				.iter()
				.map(|note| {
					view! {
						<div
							class="card flow-note"
							style=format!("border-left-color: {};", note.accent.color())
						>
							<div class="card-title">
								<span class="card-icon">{note.icon}</span>
								<h3>{note.title}</h3>
							</div>
							<p class="muted">{note.summary}</p>
							<ul>{note.points.iter().map(|p| view! { <li>{*p}</li> }).collect_view()}</ul>
						</div>
					}
				})
				.collect_view()}
		</div>
	}
}

#[component]
pub fn TechnicalNotes() -> impl IntoView {
	view! {
		<div class="technical-notes">
			<h4>"Technical Implementation Notes"</h4>
			{TECHNICAL_NOTES
				.iter()
				.map(|(topic, text)| {
					view! {
						<p>
							<strong>{*topic}</strong>
							" "
							{*text}
						</p>
					}
				})
				.collect_view()}
		</div>
	}
}
