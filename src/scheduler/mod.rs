pub mod inter_layer_pipeline;
pub mod options;
pub mod pipeline_segment;
pub mod segment_gen;
pub mod vertex_dag;
pub mod vertex_segment;

pub use inter_layer_pipeline::{DEFAULT_MAX_UTIL_DROP, InterLayerPipeline};
pub use options::{PipelineMode, PipelineOptions};
pub use pipeline_segment::{
    AcceptAll, PipelineSegment, SegmentContext, SegmentValidator, StageCountValidator,
};
pub use segment_gen::generate_segments;
pub use vertex_dag::{Vertex, VertexDag, VertexId, VertexRef};
pub use vertex_segment::{VertexSegment, VertexSegments};
