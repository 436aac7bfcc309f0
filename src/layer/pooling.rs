use super::layer::{Layer, LayerKind};

#[derive(Clone, Debug)]
pub struct PoolingLayer {
    pub features: usize,
    pub out_size: usize,
    pub region: usize,
    pub stride: usize,
}

impl PoolingLayer {
    pub fn new(features: usize, out_size: usize, region: usize) -> Self {
        Self::new_with(features, out_size, region, region)
    }

    pub fn new_with(features: usize, out_size: usize, region: usize, stride: usize) -> Self {
        Self {
            features,
            out_size,
            region,
            stride,
        }
    }
}

impl Layer for PoolingLayer {
    fn kind(&self) -> LayerKind {
        LayerKind::LocalRegion
    }

    fn name(&self) -> String {
        "Pooling".to_string()
    }

    fn config_string(&self) -> Option<String> {
        Some(format!("region={}, stride={}", self.region, self.stride))
    }

    fn in_features(&self) -> usize {
        self.features
    }

    fn out_features(&self) -> usize {
        self.features
    }

    fn out_size(&self) -> usize {
        self.out_size
    }
}
