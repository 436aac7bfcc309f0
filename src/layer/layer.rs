use std::fmt;

/// Coarse layer classification used by vertex fusion and stage constraints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerKind {
    Input,
    Conv,
    FullyConnected,
    LocalRegion,
}

impl LayerKind {
    /// Fully-connected layers are convolutions whose kernel covers the whole input.
    pub fn is_conv_type(self) -> bool {
        matches!(self, LayerKind::Conv | LayerKind::FullyConnected)
    }

    pub fn is_local_region(self) -> bool {
        matches!(self, LayerKind::LocalRegion)
    }
}

pub trait Layer: fmt::Debug + Send + Sync {
    fn kind(&self) -> LayerKind;

    // Return a string representation of the layer type
    fn name(&self) -> String;

    // For network verification, how many inputs this layer requires (min and max)
    fn input_requirements(&self) -> (usize, Option<usize>) {
        (1, None)
    }

    // Return optional configuration details for the layer
    fn config_string(&self) -> Option<String> {
        None
    }

    // Number of input feature maps
    fn in_features(&self) -> usize {
        0
    }

    // Number of output feature maps
    fn out_features(&self) -> usize;

    // Output feature map height/width
    fn out_size(&self) -> usize {
        1
    }
}
