/// A point in diagram space (logical canvas units).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	pub fn midpoint(self, other: Point) -> Point {
		Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub width: f64,
	pub height: f64,
}

impl Rect {
	pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	pub fn center_x(&self) -> f64 {
		self.x + self.width / 2.0
	}

	pub fn bottom(&self) -> f64 {
		self.y + self.height
	}

	/// Edges are inclusive so a pointer on the border still counts.
	pub fn contains(&self, p: Point) -> bool {
		p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.bottom()
	}
}

/// Architectural layer a node belongs to; drives its fill color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
	User,
	Ai,
	Backend,
	Database,
	Frontend,
}

impl Category {
	pub const ALL: [Category; 5] = [
		Category::User,
		Category::Ai,
		Category::Backend,
		Category::Database,
		Category::Frontend,
	];

	pub const fn color(self) -> &'static str {
		match self {
			Category::User => "#10b981",
			Category::Ai => "#a855f7",
			Category::Backend => "#3b82f6",
			Category::Database => "#f97316",
			Category::Frontend => "#14b8a6",
		}
	}

	pub const fn legend_label(self) -> &'static str {
		match self {
			Category::User => "User Layer",
			Category::Ai => "AI Assistant",
			Category::Backend => "Backend/API",
			Category::Database => "Database",
			Category::Frontend => "Frontend UI",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowId {
	Routing,
	UiControl,
	DataFetching,
}

impl FlowId {
	pub const ALL: [FlowId; 3] = [FlowId::Routing, FlowId::UiControl, FlowId::DataFetching];

	pub const fn number(self) -> u8 {
		match self {
			FlowId::Routing => 1,
			FlowId::UiControl => 2,
			FlowId::DataFetching => 3,
		}
	}

	/// Text of the selector button for this flow.
	pub const fn button_label(self) -> &'static str {
		match self {
			FlowId::Routing => "Flow 1: AI Routing",
			FlowId::UiControl => "Flow 2: UI Control",
			FlowId::DataFetching => "Flow 3: Data Fetching",
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
	pub id: &'static str,
	pub bounds: Rect,
	pub label: &'static str,
	pub category: Category,
	pub icon: Option<&'static str>,
	pub description: Option<&'static str>,
	pub tech: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrow {
	pub from: Point,
	pub to: Point,
	pub label: &'static str,
	pub color: &'static str,
	pub dashed: bool,
}

/// One numbered section of the diagram: heading, dashed frame, and its steps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Flow {
	pub id: FlowId,
	pub heading: &'static str,
	pub heading_at: Point,
	pub frame: Rect,
	pub nodes: &'static [Node],
	pub arrows: &'static [Arrow],
}
