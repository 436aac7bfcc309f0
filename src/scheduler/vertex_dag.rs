use std::collections::{BTreeSet, HashMap};

use crate::{
    model::{LayerConnection, LayerId, Network},
    utils::error::PipelineError,
};

pub type VertexId = usize;

/// Endpoint of a vertex DAG edge. `Input` stands for the network's virtual input
/// and sorts before every real vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VertexRef {
    Input,
    Vertex(VertexId),
}

impl VertexRef {
    /// Flat index with -1 for the virtual input.
    pub fn index(self) -> isize {
        match self {
            VertexRef::Input => -1,
            VertexRef::Vertex(v) => v as isize,
        }
    }

    pub fn vertex(self) -> Option<VertexId> {
        match self {
            VertexRef::Input => None,
            VertexRef::Vertex(v) => Some(v),
        }
    }
}

/// Layers scheduled as one inseparable topological unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vertex {
    pub layers: Vec<LayerId>,
    pub names: Vec<String>,
}

impl Vertex {
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

#[derive(Debug)]
pub struct VertexDag {
    vertices: Vec<Vertex>,
    layer_to_vertex: Vec<VertexId>,
    name_to_vertex: HashMap<String, VertexId>,
    prevs: Vec<BTreeSet<VertexRef>>,
    nexts: Vec<BTreeSet<VertexId>>,
    input_nexts: BTreeSet<VertexId>,
}

impl VertexDag {
    pub fn build(network: &Network) -> Result<Self, PipelineError> {
        if network.is_empty() {
            return Err(PipelineError::InvalidNetwork(format!(
                "{} must contain at least one layer",
                network.net_name
            )));
        }

        let layer_count = network.len();
        let mut vertex_layers: Vec<Vec<LayerId>> = Vec::new();
        let mut layer_to_vertex: Vec<Option<VertexId>> = vec![None; layer_count];

        // Declaration order is topological, so a fused layer's predecessor
        // already has its vertex.
        for layer_id in 0..layer_count {
            let vertex_id = match fusion_target(network, layer_id) {
                Some(prev_id) => layer_to_vertex[prev_id].ok_or_else(|| {
                    PipelineError::InvalidNetwork(format!(
                        "{}: layer {} precedes its predecessor",
                        network.net_name,
                        network.layer(layer_id).name
                    ))
                })?,
                None => {
                    vertex_layers.push(Vec::new());
                    vertex_layers.len() - 1
                }
            };
            vertex_layers[vertex_id].push(layer_id);
            layer_to_vertex[layer_id] = Some(vertex_id);
        }

        let layer_to_vertex: Vec<VertexId> = layer_to_vertex.into_iter().flatten().collect();
        debug_assert_eq!(layer_to_vertex.len(), layer_count);

        let vertex_count = vertex_layers.len();
        let mut prevs: Vec<BTreeSet<VertexRef>> = vec![BTreeSet::new(); vertex_count];
        let mut nexts: Vec<BTreeSet<VertexId>> = vec![BTreeSet::new(); vertex_count];
        let mut input_nexts: BTreeSet<VertexId> = BTreeSet::new();

        for layer in 0..layer_count {
            let vertex = layer_to_vertex[layer];
            for conn in network.prev_layers(layer) {
                match *conn {
                    LayerConnection::Input => {
                        prevs[vertex].insert(VertexRef::Input);
                        input_nexts.insert(vertex);
                    }
                    LayerConnection::Layer(prev_layer) => {
                        let prev_vertex = layer_to_vertex[prev_layer];
                        if prev_vertex == vertex {
                            continue;
                        }
                        debug_assert!(prev_vertex < vertex, "vertex edges must point forward");
                        prevs[vertex].insert(VertexRef::Vertex(prev_vertex));
                        nexts[prev_vertex].insert(vertex);
                    }
                }
            }
        }

        let vertices: Vec<Vertex> = vertex_layers
            .into_iter()
            .map(|layers| Vertex {
                names: layers
                    .iter()
                    .map(|&id| network.layer(id).name.clone())
                    .collect(),
                layers,
            })
            .collect();

        let name_to_vertex = network
            .iter()
            .zip(&layer_to_vertex)
            .map(|(layer, &vertex)| (layer.name.clone(), vertex))
            .collect();

        log::debug!(
            "{}: fused {} layers into {} vertices",
            network.net_name,
            layer_count,
            vertices.len()
        );

        Ok(Self {
            vertices,
            layer_to_vertex,
            name_to_vertex,
            prevs,
            nexts,
            input_nexts,
        })
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id]
    }

    pub fn vertex_of(&self, layer_name: &str) -> Option<VertexId> {
        self.name_to_vertex.get(layer_name).copied()
    }

    pub fn vertex_of_layer(&self, layer: LayerId) -> VertexId {
        self.layer_to_vertex[layer]
    }

    pub fn prev_vertices(&self, id: VertexId) -> &BTreeSet<VertexRef> {
        &self.prevs[id]
    }

    pub fn next_vertices(&self, from: VertexRef) -> &BTreeSet<VertexId> {
        match from {
            VertexRef::Input => &self.input_nexts,
            VertexRef::Vertex(id) => &self.nexts[id],
        }
    }
}

/// The layer whose vertex `layer_id` joins, if any. A local-region layer merges
/// into its single predecessor when that predecessor is a compute layer feeding
/// nothing else. Vertices therefore hold at most one trailing local-region layer.
fn fusion_target(network: &Network, layer_id: LayerId) -> Option<LayerId> {
    let layer = network.layer(layer_id);
    if !layer.kind().is_local_region() {
        return None;
    }

    let [LayerConnection::Layer(prev_id)] = layer.prevs.as_slice() else {
        return None;
    };
    let prev = network.layer(*prev_id);
    if prev.kind().is_local_region() || prev.nexts.as_slice() != [layer_id] {
        return None;
    }

    Some(*prev_id)
}
