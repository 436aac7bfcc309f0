pub mod conv;
pub mod element_wise;
pub mod factory;
pub mod input_buffer;
pub mod layer;
pub mod linear;
pub mod pooling;

pub use factory::Layers;
pub use layer::{Layer, LayerKind};
