use std::fmt;

use crate::utils::error::PipelineError;

/// Two-dimensional physical extent, e.g. a grid of processing nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PhyDim2 {
    pub h: usize,
    pub w: usize,
}

impl PhyDim2 {
    pub const fn new(h: usize, w: usize) -> Self {
        Self { h, w }
    }

    pub fn size(&self) -> usize {
        self.h * self.w
    }
}

impl fmt::Display for PhyDim2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.h, self.w)
    }
}

/// Hardware resource descriptor. The pipeline search only checks that it is
/// well formed and passes it through to segment validation.
#[derive(Clone, Debug, PartialEq)]
pub struct Resource {
    pub proc_region: PhyDim2,
    pub dim_array: PhyDim2,
    pub size_gbuf: usize,
    pub size_regf: usize,
}

impl Resource {
    pub fn new(
        proc_region: PhyDim2,
        dim_array: PhyDim2,
        size_gbuf: usize,
        size_regf: usize,
    ) -> Result<Self, PipelineError> {
        let resource = Self {
            proc_region,
            dim_array,
            size_gbuf,
            size_regf,
        };
        resource.validate()?;
        Ok(resource)
    }

    pub fn validate(&self) -> Result<(), PipelineError> {
        if self.proc_region.size() == 0 {
            return Err(PipelineError::InvalidResource(format!(
                "proc_region must be non-empty, got {}",
                self.proc_region
            )));
        }
        if self.dim_array.size() == 0 {
            return Err(PipelineError::InvalidResource(format!(
                "dim_array must be non-empty, got {}",
                self.dim_array
            )));
        }
        if self.size_gbuf == 0 || self.size_regf == 0 {
            return Err(PipelineError::InvalidResource(format!(
                "buffer sizes must be positive, got gbuf={} regf={}",
                self.size_gbuf, self.size_regf
            )));
        }
        Ok(())
    }

    /// Number of processing nodes available to the stages of one segment.
    pub fn node_count(&self) -> usize {
        self.proc_region.size()
    }
}
