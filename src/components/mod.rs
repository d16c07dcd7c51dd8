pub mod flow_diagram;
pub mod flow_notes;
pub mod legend;
pub mod tech_stack;
