use crate::utils::error::PipelineError;

/// Pipelining policy. Construct with struct-update syntax over `Default` and
/// finish with `build()`:
///
/// ```
/// use nnpipe::PipelineOptions;
///
/// let options = PipelineOptions {
///     partition_interlayer: true,
///     layer_pipeline_max_degree: Some(4),
///     ..Default::default()
/// }
/// .build()
/// .unwrap();
/// assert!(options.mode().spatial());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Spatial pipelining: one vertex per stage, at most one convolution per stage.
    pub partition_interlayer: bool,
    /// Temporal pipelining: a whole vertex segment collapses into one stage.
    pub hw_gbuf_save_writeback: bool,
    /// Upper bound on convolutional layers across all stages of a segment.
    pub layer_pipeline_max_degree: Option<usize>,
    /// Stop consuming vertex segments after this many. Guards against very wide synthetic graphs.
    pub vseg_limit: Option<usize>,
}

impl PipelineOptions {
    pub fn build(self) -> Result<Self, PipelineError> {
        if self.layer_pipeline_max_degree == Some(0) {
            return Err(PipelineError::out_of_range(
                "layer_pipeline_max_degree",
                "a positive integer",
                0,
            ));
        }
        if self.vseg_limit == Some(0) {
            return Err(PipelineError::out_of_range(
                "vseg_limit",
                "a positive integer",
                0,
            ));
        }
        Ok(self)
    }

    pub fn mode(&self) -> PipelineMode {
        match (self.partition_interlayer, self.hw_gbuf_save_writeback) {
            (false, false) => PipelineMode::Sequential,
            (true, false) => PipelineMode::Spatial,
            (false, true) => PipelineMode::Temporal,
            (true, true) => PipelineMode::SpatialTemporal,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PipelineMode {
    /// Every layer runs alone on the whole resource.
    Sequential,
    Spatial,
    Temporal,
    SpatialTemporal,
}

impl PipelineMode {
    pub fn spatial(self) -> bool {
        matches!(self, PipelineMode::Spatial | PipelineMode::SpatialTemporal)
    }

    pub fn temporal(self) -> bool {
        matches!(self, PipelineMode::Temporal | PipelineMode::SpatialTemporal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sequential() {
        let options = PipelineOptions::default().build().unwrap();
        assert_eq!(options.mode(), PipelineMode::Sequential);
        assert!(!options.mode().spatial());
        assert!(!options.mode().temporal());
    }

    #[test]
    fn mode_follows_flags() {
        let both = PipelineOptions {
            partition_interlayer: true,
            hw_gbuf_save_writeback: true,
            ..Default::default()
        };
        assert_eq!(both.mode(), PipelineMode::SpatialTemporal);
        assert!(both.mode().spatial() && both.mode().temporal());

        let temporal = PipelineOptions {
            hw_gbuf_save_writeback: true,
            ..Default::default()
        };
        assert_eq!(temporal.mode(), PipelineMode::Temporal);
    }

    #[test]
    fn zero_bounds_are_rejected() {
        let err = PipelineOptions {
            layer_pipeline_max_degree: Some(0),
            ..Default::default()
        }
        .build()
        .unwrap_err();
        assert!(err.to_string().contains("layer_pipeline_max_degree"));

        assert!(
            PipelineOptions {
                vseg_limit: Some(0),
                ..Default::default()
            }
            .build()
            .is_err()
        );
    }
}
