use leptos::prelude::*;

use crate::components::flow_diagram::FlowDiagram;
use crate::components::flow_notes::{FlowNotes, TechnicalNotes};
use crate::components::legend::Legend;
use crate::components::tech_stack::TechStack;

/// Architecture overview page hosting the interactive flow diagram.
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="page">
				<header>
					<h1>"AI-Integrated Web Application Architecture"</h1>
					<p class="subtitle">
						"Technical flow diagram illustrating AI-driven navigation, UI control, and data management"
					</p>
					<Legend />
				</header>

				<FlowDiagram />
				<FlowNotes />
				<TechnicalNotes />
				<TechStack />
			</div>
		</ErrorBoundary>
	}
}
