mod catalogue;
mod component;
mod render;
pub mod scale;
mod scene;
mod state;
mod types;

pub use component::FlowDiagram;
pub use types::Category;
