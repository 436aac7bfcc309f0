pub mod error;
pub mod natural_sort;

pub use error::PipelineError;
pub use natural_sort::{natural_cmp, natural_key};
