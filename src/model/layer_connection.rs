pub type LayerId = usize;

/// A predecessor edge of a layer: either the network's virtual input or another layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LayerConnection {
    Input,
    Layer(LayerId),
}

impl LayerConnection {
    pub fn is_input(&self) -> bool {
        matches!(self, LayerConnection::Input)
    }
}
