use super::layer::{Layer, LayerKind};

/// The virtual source of a network. Never part of any vertex.
#[derive(Clone, Debug)]
pub struct InputLayer {
    pub out_features: usize,
    pub out_size: usize,
}

impl InputLayer {
    pub fn new(out_features: usize, out_size: usize) -> Self {
        Self {
            out_features,
            out_size,
        }
    }
}

impl Layer for InputLayer {
    fn kind(&self) -> LayerKind {
        LayerKind::Input
    }

    fn name(&self) -> String {
        "Input".to_string()
    }

    fn input_requirements(&self) -> (usize, Option<usize>) {
        (0, Some(0))
    }

    fn out_features(&self) -> usize {
        self.out_features
    }

    fn out_size(&self) -> usize {
        self.out_size
    }
}
