use super::layer::{Layer, LayerKind};

/// Fully-connected layer. Scheduled as a convolution with a 1x1 output.
#[derive(Clone, Debug)]
pub struct LinearLayer {
    pub in_features: usize,
    pub out_features: usize,
    pub in_size: usize,
}

impl LinearLayer {
    pub fn new(in_features: usize, out_features: usize) -> Self {
        Self::new_with(in_features, out_features, 1)
    }

    pub fn new_with(in_features: usize, out_features: usize, in_size: usize) -> Self {
        Self {
            in_features,
            out_features,
            in_size,
        }
    }
}

impl Layer for LinearLayer {
    fn kind(&self) -> LayerKind {
        LayerKind::FullyConnected
    }

    fn name(&self) -> String {
        "Linear".to_string()
    }

    fn config_string(&self) -> Option<String> {
        if self.in_size > 1 {
            Some(format!("in_size={}", self.in_size))
        } else {
            None
        }
    }

    fn in_features(&self) -> usize {
        self.in_features
    }

    fn out_features(&self) -> usize {
        self.out_features
    }
}
