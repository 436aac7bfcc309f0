use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PipelineError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("InterLayerPipeline: network {0}")]
    InvalidNetwork(String),

    #[error("InterLayerPipeline: resource {0}")]
    InvalidResource(String),

    #[error("InterLayerPipeline: {field} must be {expected}, got {value}")]
    ValueOutOfRange {
        field: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl PipelineError {
    pub(crate) fn out_of_range(
        field: &'static str,
        expected: &'static str,
        value: impl ToString,
    ) -> Self {
        PipelineError::ValueOutOfRange {
            field,
            expected,
            value: value.to_string(),
        }
    }
}
