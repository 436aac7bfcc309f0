pub mod print_pipeline_stats;

pub use print_pipeline_stats::{print_segment_summary, print_validation_summary, print_vertex_dag};
