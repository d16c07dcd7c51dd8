use leptos::prelude::*;

use super::flow_diagram::Category;

/// Color key for the node categories.
#[component]
pub fn Legend() -> impl IntoView {
	view! {
		<div class="legend">
			{Category::ALL
				.into_iter()
				.map(|category| {
					view! {
						<div class="legend-item">
							<div
								class="legend-swatch"
								style=format!("background-color: {};", category.color())
							></div>
							<span>{category.legend_label()}</span>
						</div>
					}
				})
				.collect_view()}
		</div>
	}
}
