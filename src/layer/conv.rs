use super::layer::{Layer, LayerKind};

#[derive(Clone, Debug)]
pub struct ConvLayer {
    pub in_features: usize,  // Input channels
    pub out_features: usize, // Output channels
    pub out_size: usize,
    pub kernel_size: usize,
    pub stride: usize,
}

impl ConvLayer {
    pub fn new(in_features: usize, out_features: usize, out_size: usize, kernel_size: usize) -> Self {
        Self::new_with(in_features, out_features, out_size, kernel_size, 1)
    }

    pub fn new_with(
        in_features: usize,
        out_features: usize,
        out_size: usize,
        kernel_size: usize,
        stride: usize,
    ) -> Self {
        Self {
            in_features,
            out_features,
            out_size,
            kernel_size,
            stride,
        }
    }
}

impl Layer for ConvLayer {
    fn kind(&self) -> LayerKind {
        LayerKind::Conv
    }

    fn name(&self) -> String {
        "Conv".to_string()
    }

    fn config_string(&self) -> Option<String> {
        Some(format!("kernel={}, stride={}", self.kernel_size, self.stride))
    }

    fn in_features(&self) -> usize {
        self.in_features
    }

    fn out_features(&self) -> usize {
        self.out_features
    }

    fn out_size(&self) -> usize {
        self.out_size
    }
}
