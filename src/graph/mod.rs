mod generate;
mod model;

pub use generate::{GenerateParams, Preset, generate};
pub use model::{Edge, Graph, Node};
