use std::collections::HashMap;

use crate::{
    layer::{Layer, LayerKind},
    utils::error::PipelineError,
};

use super::layer_connection::{LayerConnection, LayerId};

/// Name used in `prevs` lists to refer to the network's input layer.
pub const INPUT_LAYER_KEY: &str = "__INPUT__";

#[derive(Debug)]
pub struct NetworkLayer {
    pub name: String,
    pub layer: Box<dyn Layer>,
    pub prevs: Vec<LayerConnection>,
    pub nexts: Vec<LayerId>,
}

impl NetworkLayer {
    pub fn kind(&self) -> LayerKind {
        self.layer.kind()
    }
}

/// A layer DAG. Layers are stored in declaration order, and every layer may only
/// reference layers declared before it, so the declaration order is topological
/// and the graph is acyclic by construction.
#[derive(Debug)]
pub struct Network {
    pub net_name: String,
    input: Option<Box<dyn Layer>>,
    layers: Vec<NetworkLayer>,
    name_to_id: HashMap<String, LayerId>,
}

impl Network {
    pub fn new(net_name: impl Into<String>) -> Self {
        Self {
            net_name: net_name.into(),
            input: None,
            layers: Vec::new(),
            name_to_id: HashMap::new(),
        }
    }

    pub fn set_input(&mut self, layer: Box<dyn Layer>) -> Result<(), PipelineError> {
        if self.input.is_some() {
            return Err(PipelineError::Network(format!(
                "{}: input layer is already set",
                self.net_name
            )));
        }
        if layer.kind() != LayerKind::Input {
            return Err(PipelineError::Network(format!(
                "{}: input layer must be an Input layer, got {}",
                self.net_name,
                layer.name()
            )));
        }
        self.input = Some(layer);
        Ok(())
    }

    /// Add a layer fed by the most recently added layer, or by the input if it is the first.
    pub fn add(&mut self, name: &str, layer: Box<dyn Layer>) -> Result<LayerId, PipelineError> {
        let prev = match self.layers.last() {
            Some(last) => last.name.clone(),
            None => INPUT_LAYER_KEY.to_string(),
        };
        self.add_with(name, layer, &[prev.as_str()])
    }

    pub fn add_with(
        &mut self,
        name: &str,
        layer: Box<dyn Layer>,
        prevs: &[&str],
    ) -> Result<LayerId, PipelineError> {
        if self.input.is_none() {
            return Err(PipelineError::Network(format!(
                "{}: set the input layer before adding layer {}",
                self.net_name, name
            )));
        }
        if name == INPUT_LAYER_KEY || self.contains(name) {
            return Err(PipelineError::Network(format!(
                "{}: layer name {} is already in use",
                self.net_name, name
            )));
        }
        if layer.kind() == LayerKind::Input {
            return Err(PipelineError::Network(format!(
                "{}: layer {} cannot be an Input layer",
                self.net_name, name
            )));
        }

        let mut connections: Vec<LayerConnection> = Vec::with_capacity(prevs.len());
        for &prev in prevs {
            let conn = if prev == INPUT_LAYER_KEY {
                LayerConnection::Input
            } else {
                let id = self.name_to_id.get(prev).copied().ok_or_else(|| {
                    PipelineError::Network(format!(
                        "{}: previous layer {} of layer {} does not exist",
                        self.net_name, prev, name
                    ))
                })?;
                LayerConnection::Layer(id)
            };
            if !connections.contains(&conn) {
                connections.push(conn);
            }
        }

        let (min_inputs, max_inputs) = layer.input_requirements();
        if connections.len() < min_inputs || max_inputs.is_some_and(|max| connections.len() > max) {
            return Err(PipelineError::Network(format!(
                "{}: layer {} ({}) cannot take {} inputs",
                self.net_name,
                name,
                layer.name(),
                connections.len()
            )));
        }

        let id = self.layers.len();
        for conn in &connections {
            if let LayerConnection::Layer(prev_id) = conn {
                self.layers[*prev_id].nexts.push(id);
            }
        }

        self.name_to_id.insert(name.to_string(), id);
        self.layers.push(NetworkLayer {
            name: name.to_string(),
            layer,
            prevs: connections,
            nexts: Vec::new(),
        });

        Ok(id)
    }

    pub fn input_layer(&self) -> Option<&dyn Layer> {
        self.input.as_deref()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layer(&self, id: LayerId) -> &NetworkLayer {
        &self.layers[id]
    }

    pub fn layer_by_name(&self, name: &str) -> Option<&NetworkLayer> {
        self.id_of(name).map(|id| &self.layers[id])
    }

    pub fn id_of(&self, name: &str) -> Option<LayerId> {
        self.name_to_id.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.name_to_id.contains_key(name)
    }

    /// Layers in declaration (topological) order.
    pub fn iter(&self) -> impl Iterator<Item = &NetworkLayer> {
        self.layers.iter()
    }

    pub fn layer_names(&self) -> impl Iterator<Item = &str> {
        self.layers.iter().map(|l| l.name.as_str())
    }

    pub fn prev_layers(&self, id: LayerId) -> &[LayerConnection] {
        &self.layers[id].prevs
    }

    pub fn next_layers(&self, id: LayerId) -> &[LayerId] {
        &self.layers[id].nexts
    }

    /// Layers fed directly by the virtual input.
    pub fn first_layers(&self) -> Vec<LayerId> {
        self.layers
            .iter()
            .enumerate()
            .filter(|(_, l)| l.prevs.iter().any(LayerConnection::is_input))
            .map(|(id, _)| id)
            .collect()
    }

    /// Layers nothing else consumes.
    pub fn last_layers(&self) -> Vec<LayerId> {
        self.layers
            .iter()
            .enumerate()
            .filter(|(_, l)| l.nexts.is_empty())
            .map(|(id, _)| id)
            .collect()
    }
}
