//! WASM entry point: mounts the diagram app onto `<body>`.

use flow_diagram_canvas::{App, init_logging};
use leptos::prelude::*;

fn main() {
	init_logging();
	mount_to_body(App);
}
