use super::layer::{Layer, LayerKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementWiseOperation {
    Add,
    Multiply,
    Maximum,
}

impl ElementWiseOperation {
    fn name(&self) -> String {
        match self {
            ElementWiseOperation::Add => "Add".to_string(),
            ElementWiseOperation::Multiply => "Multiply".to_string(),
            ElementWiseOperation::Maximum => "Maximum".to_string(),
        }
    }
}

/// Merges the feature maps of two or more previous layers point by point.
#[derive(Clone, Debug)]
pub struct ElementWiseLayer {
    pub operation: ElementWiseOperation,
    pub features: usize,
    pub out_size: usize,
}

impl ElementWiseLayer {
    pub fn new(operation: ElementWiseOperation, features: usize, out_size: usize) -> Self {
        Self {
            operation,
            features,
            out_size,
        }
    }
}

impl Layer for ElementWiseLayer {
    fn kind(&self) -> LayerKind {
        LayerKind::LocalRegion
    }

    fn name(&self) -> String {
        format!("Eltwise{}", self.operation.name())
    }

    fn input_requirements(&self) -> (usize, Option<usize>) {
        (2, None)
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
