//! The fixed node and arrow tables for the three documented flows.

use super::types::{Arrow, Category, Flow, FlowId, Node, Point, Rect};

const STEP_WIDTH: f64 = 140.0;
const STEP_HEIGHT: f64 = 70.0;

/// Logical canvas size the tables are laid out for.
pub const DIAGRAM_WIDTH: f64 = 1450.0;
pub const DIAGRAM_HEIGHT: f64 = 920.0;

const fn sized(
	id: &'static str,
	bounds: Rect,
	label: &'static str,
	category: Category,
	icon: &'static str,
	description: &'static str,
	tech: &'static str,
) -> Node {
	Node {
		id,
		bounds,
		label,
		category,
		icon: Some(icon),
		description: Some(description),
		tech: Some(tech),
	}
}

const fn step(
	id: &'static str,
	x: f64,
	y: f64,
	label: &'static str,
	category: Category,
	icon: &'static str,
	description: &'static str,
	tech: &'static str,
) -> Node {
	sized(
		id,
		Rect::new(x, y, STEP_WIDTH, STEP_HEIGHT),
		label,
		category,
		icon,
		description,
		tech,
	)
}

const fn arrow(from: (f64, f64), to: (f64, f64), label: &'static str, category: Category) -> Arrow {
	Arrow {
		from: Point::new(from.0, from.1),
		to: Point::new(to.0, to.1),
		label,
		color: category.color(),
		dashed: false,
	}
}

const fn dashed(from: (f64, f64), to: (f64, f64), label: &'static str, category: Category) -> Arrow {
	Arrow {
		dashed: true,
		..arrow(from, to, label, category)
	}
}

use Category::{Ai, Backend, Database, Frontend, User};

static ROUTING_NODES: [Node; 7] = [
	step("user-chat", 50.0, 100.0, "User Chat Input", User, "💬", "User types navigation command", "Browser"),
	step("ai-assistant-1", 250.0, 100.0, "AI Assistant", Ai, "🤖", "Processes natural language", "OpenAI API / LangChain"),
	step("backend-parse", 450.0, 100.0, "Backend Parser", Backend, "⚙️", "System prompt → detectPage", "Node.js + Express"),
	step("json-intent", 650.0, 100.0, "JSON Navigation", Backend, "📄", "{ action: 'navigate', page: '...' }", "REST API"),
	step("ai-navigate-event", 850.0, 100.0, "aiNavigate Event", Frontend, "📡", "Event dispatched to frontend", "Custom Events API"),
	step("router", 1050.0, 100.0, "Frontend Router", Frontend, "🧭", "App.tsx listens & routes", "React Router"),
	step("page-render", 1250.0, 100.0, "Page Render", Frontend, "🖥️", "LandingPage, MySchool, etc.", "React Components"),
];

static ROUTING_ARROWS: [Arrow; 6] = [
	arrow((190.0, 135.0), (250.0, 135.0), "\"Go to offers\"", User),
	arrow((390.0, 135.0), (450.0, 135.0), "Parse command", Ai),
	arrow((590.0, 135.0), (650.0, 135.0), "detectPage()", Backend),
	arrow((790.0, 135.0), (850.0, 135.0), "JSON response", Backend),
	arrow((990.0, 135.0), (1050.0, 135.0), "dispatch()", Frontend),
	arrow((1190.0, 135.0), (1250.0, 135.0), "setPage()", Frontend),
];

static UI_CONTROL_NODES: [Node; 7] = [
	step("user-ui-cmd", 50.0, 300.0, "User UI Command", User, "💬", "\"Show bot chat\"", "Browser"),
	step("ai-assistant-2", 250.0, 300.0, "AI Assistant", Ai, "🤖", "Parse component command", "OpenAI API"),
	step("update-ui-json", 450.0, 300.0, "update_ui JSON", Backend, "📄", "{ component: 'BotChat', visible: true }", "Node.js"),
	step("ai-update-ui-event", 650.0, 300.0, "aiUpdateUI Event", Frontend, "📡", "Event dispatched", "EventEmitter"),
	step("ui-state", 850.0, 300.0, "UI State Store", Frontend, "🗄️", "UIProvider / useState", "React Context + Hooks"),
	step("conditional-render", 1050.0, 300.0, "Conditional Logic", Frontend, "🔀", "{visible && <Component />}", "React JSX"),
	sized(
		"components",
		Rect::new(1050.0, 410.0, 340.0, 140.0),
		"Components",
		Frontend,
		"🧩",
		"BotChat, VideoFeed, AudioFeed, Calculator, TopBar, Sidebars, SearchBar",
		"React Functional Components",
	),
];

static UI_CONTROL_ARROWS: [Arrow; 6] = [
	arrow((190.0, 335.0), (250.0, 335.0), "\"Hide sidebar\"", User),
	arrow((390.0, 335.0), (450.0, 335.0), "Interpret UI intent", Ai),
	arrow((590.0, 335.0), (650.0, 335.0), "Generate JSON", Backend),
	arrow((790.0, 335.0), (850.0, 335.0), "dispatch()", Frontend),
	arrow((990.0, 335.0), (1050.0, 335.0), "setState()", Frontend),
	arrow((1120.0, 370.0), (1120.0, 410.0), "Render/Hide", Frontend),
];

static DATA_FETCHING_NODES: [Node; 9] = [
	step("user-data-cmd", 50.0, 650.0, "User Data Query", User, "💬", "\"Show all schools\"", "Browser"),
	step("ai-assistant-3", 250.0, 650.0, "AI Assistant", Ai, "🤖", "Parse data request", "OpenAI API"),
	step("update-data-json", 450.0, 650.0, "update_data JSON", Backend, "📄", "{ action: 'fetch', entity: 'schools' }", "Express Routes"),
	step("ai-update-data-event", 650.0, 650.0, "aiUpdateData Event", Frontend, "📡", "Event listener triggered", "React useEffect"),
	step("api-call", 850.0, 650.0, "API Request", Backend, "🌐", "GET /api/data", "Axios / Fetch API"),
	step("mongodb", 850.0, 760.0, "MongoDB Query", Database, "🗃️", "db.schools.find()", "MongoDB + Mongoose"),
	step("api-response", 1050.0, 650.0, "API Response", Backend, "📦", "JSON data returned", "Express Response"),
	step("data-context", 1250.0, 650.0, "DataContext", Frontend, "🗄️", "Global state updated", "React Context API"),
	step("table-render", 1250.0, 760.0, "Table Render", Frontend, "📊", "MySchoolPage, OffersTable", "React .map()"),
];

static DATA_FETCHING_ARROWS: [Arrow; 10] = [
	arrow((190.0, 685.0), (250.0, 685.0), "\"Fetch offers\"", User),
	arrow((390.0, 685.0), (450.0, 685.0), "Interpret query", Ai),
	arrow((590.0, 685.0), (650.0, 685.0), "Generate JSON", Backend),
	arrow((790.0, 685.0), (850.0, 685.0), "dispatch()", Frontend),
	arrow((920.0, 720.0), (920.0, 760.0), "Query DB", Backend),
	dashed((920.0, 830.0), (920.0, 870.0), "Return data", Database),
	arrow((990.0, 685.0), (1050.0, 685.0), "Response", Backend),
	arrow((1190.0, 685.0), (1250.0, 685.0), "setData()", Frontend),
	arrow((1320.0, 720.0), (1320.0, 760.0), "map() rows", Frontend),
	// MongoDB result travelling back up to the request row
	dashed((920.0, 830.0), (920.0, 685.0), "", Database),
];

/// The three flows, in display order.
pub static FLOWS: [Flow; 3] = [
	Flow {
		id: FlowId::Routing,
		heading: "1. AI Routing & Page Navigation",
		heading_at: Point::new(50.0, 60.0),
		frame: Rect::new(40.0, 75.0, 1370.0, 120.0),
		nodes: &ROUTING_NODES,
		arrows: &ROUTING_ARROWS,
	},
	Flow {
		id: FlowId::UiControl,
		heading: "2. Conditional Rendering & Component Control",
		heading_at: Point::new(50.0, 260.0),
		frame: Rect::new(40.0, 275.0, 1370.0, 300.0),
		nodes: &UI_CONTROL_NODES,
		arrows: &UI_CONTROL_ARROWS,
	},
	Flow {
		id: FlowId::DataFetching,
		heading: "3. Data Fetching & Table Population via AI Prompts",
		heading_at: Point::new(50.0, 610.0),
		frame: Rect::new(40.0, 625.0, 1370.0, 240.0),
		nodes: &DATA_FETCHING_NODES,
		arrows: &DATA_FETCHING_ARROWS,
	},
];

/// Finds a node and the flow that owns it.
pub fn find_node(flows: &[Flow], id: &str) -> Option<(FlowId, &'static Node)> {
	flows.iter().find_map(|flow| {
		flow.nodes
			.iter()
			.find(|node| node.id == id)
			.map(|node| (flow.id, node))
	})
}
