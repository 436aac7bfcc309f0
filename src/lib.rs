//! nnpipe - inter-layer pipeline search space for neural network accelerators
//!
//! Fuses the layers of a network DAG into vertices, enumerates the admissible
//! vertex segments and turns them into candidate pipeline segments under a
//! spatial and/or temporal pipelining policy.

pub mod compute;

pub mod hardware;

pub mod layer;

pub mod model;

pub mod nets;

pub mod scheduler;

pub mod utils;

pub use hardware::{PhyDim2, Resource};
pub use layer::{Layer, LayerKind, Layers};
pub use model::{INPUT_LAYER_KEY, LayerConnection, LayerId, Network};
pub use scheduler::{
    AcceptAll, InterLayerPipeline, PipelineMode, PipelineOptions, PipelineSegment,
    SegmentContext, SegmentValidator, StageCountValidator, Vertex, VertexDag, VertexId,
    VertexRef, VertexSegment, VertexSegments,
};
pub use utils::error::PipelineError;
