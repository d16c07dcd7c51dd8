use leptos::prelude::*;

use super::flow_diagram::Category;

struct StackColumn {
	title: &'static str,
	accent: Category,
	entries: [(&'static str, &'static str); 5],
}

static STACK: [StackColumn; 4] = [
	StackColumn {
		title: "Frontend",
		accent: Category::Frontend,
		entries: [
			("React 18.3", "UI library with functional components"),
			("React Router", "Client-side routing & navigation"),
			("React Context API", "Global state management"),
			("React Hooks", "useState, useEffect, useContext"),
			("Axios / Fetch API", "HTTP client for API requests"),
		],
	},
	StackColumn {
		title: "Backend",
		accent: Category::Backend,
		entries: [
			("Node.js", "JavaScript runtime environment"),
			("Express.js", "Web application framework"),
			("REST API", "RESTful API architecture"),
			("Middleware", "CORS, body-parser, authentication"),
			("EventEmitter", "Event-driven architecture"),
		],
	},
	StackColumn {
		title: "Database",
		accent: Category::Database,
		entries: [
			("MongoDB", "NoSQL document database"),
			("Mongoose", "ODM for MongoDB"),
			("Schema Design", "Collections: schools, offers, users"),
			("Query Methods", "find(), aggregate(), update()"),
			("Indexing", "Performance optimization"),
		],
	},
	StackColumn {
		title: "AI & Integration",
		accent: Category::Ai,
		entries: [
			("OpenAI API", "GPT models for NLP"),
			("LangChain", "AI orchestration framework"),
			("System Prompts", "Intent detection & classification"),
			("JSON Parsing", "Structured AI responses"),
			("Custom Events", "AI-to-frontend communication"),
		],
	},
];

static TOOLS: [(&str, [&str; 3]); 4] = [
	("Build Tools", ["Webpack / Vite", "Babel", "npm / yarn"]),
	("Testing", ["Jest", "React Testing Library", "Supertest (API)"]),
	("Styling", ["CSS3 / SCSS", "CSS Modules", "Tailwind (optional)"]),
	("DevOps", ["Docker", "MongoDB Atlas", "PM2 / Nodemon"]),
];

#[component]
pub fn TechStack() -> impl IntoView {
	view! {
		<section class="tech-stack">
			<h2>"Technology Stack & Frameworks"</h2>
			<div class="stack-grid">
				{STACK
					.iter()
					.map(|column| {
						let accent = column.accent.color();
						view! {
							<div class="card stack-column" style=format!("border-top-color: {};", accent)>
								<h3>{column.title}</h3>
								<ul>
									{column
										.entries
										.iter()
										.map(|(name, blurb)| {
											view! {
												<li>
													<span class="bullet" style=format!("color: {};", accent)>
														"•"
													</span>
													<div>
														<strong>{*name}</strong>
														<p class="muted">{*blurb}</p>
													</div>
												</li>
											}
										})
										.collect_view()}
								</ul>
							</div>
						}
					})
					.collect_view()}
			</div>
		</section>

		<section class="tools">
			<h3>"Additional Development Tools & Libraries"</h3>
			<div class="tools-grid">
				{TOOLS
					.iter()
					.map(|(group, items)| {
						view! {
							<div>
								<h4>{*group}</h4>
								<ul>{items.iter().map(|item| view! { <li>"• " {*item}</li> }).collect_view()}</ul>
							</div>
						}
					})
					.collect_view()}
			</div>
		</section>
	}
}
