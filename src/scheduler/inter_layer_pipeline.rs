use std::collections::BTreeSet;

use crate::{
    hardware::Resource,
    model::Network,
    utils::{error::PipelineError, natural_sort::natural_cmp},
};

use super::{
    options::PipelineOptions,
    pipeline_segment::{PipelineSegment, SegmentContext, SegmentValidator},
    segment_gen::generate_segments,
    vertex_dag::{Vertex, VertexDag, VertexId, VertexRef},
    vertex_segment::VertexSegments,
};

pub const DEFAULT_MAX_UTIL_DROP: f64 = 0.05;

/// Inter-layer pipelining search space of one network on one hardware resource.
#[derive(Debug)]
pub struct InterLayerPipeline {
    network: Network,
    batch_size: usize,
    resource: Resource,
    max_util_drop: f64,
    dag: VertexDag,
}

impl InterLayerPipeline {
    pub fn new(
        network: Network,
        batch_size: usize,
        resource: Resource,
    ) -> Result<Self, PipelineError> {
        Self::with_max_util_drop(network, batch_size, resource, DEFAULT_MAX_UTIL_DROP)
    }

    pub fn with_max_util_drop(
        network: Network,
        batch_size: usize,
        resource: Resource,
        max_util_drop: f64,
    ) -> Result<Self, PipelineError> {
        if network.input_layer().is_none() {
            return Err(PipelineError::InvalidNetwork(format!(
                "{} has no input layer",
                network.net_name
            )));
        }
        resource.validate()?;
        if batch_size == 0 {
            return Err(PipelineError::out_of_range(
                "batch_size",
                "positive",
                batch_size,
            ));
        }
        if !(0.0..=1.0).contains(&max_util_drop) {
            return Err(PipelineError::out_of_range(
                "max_util_drop",
                "within [0, 1]",
                max_util_drop,
            ));
        }

        let dag = VertexDag::build(&network)?;

        Ok(Self {
            network,
            batch_size,
            resource,
            max_util_drop,
            dag,
        })
    }

    pub fn network(&self) -> &Network {
        &self.network
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn resource(&self) -> &Resource {
        &self.resource
    }

    pub fn max_util_drop(&self) -> f64 {
        self.max_util_drop
    }

    pub fn dag(&self) -> &VertexDag {
        &self.dag
    }

    pub fn vertex_list(&self) -> &[Vertex] {
        self.dag.vertices()
    }

    pub fn vertex_of(&self, layer_name: &str) -> Option<VertexId> {
        self.dag.vertex_of(layer_name)
    }

    pub fn prev_vertices(&self, vertex: VertexId) -> &BTreeSet<VertexRef> {
        self.dag.prev_vertices(vertex)
    }

    pub fn next_vertices(&self, from: VertexRef) -> &BTreeSet<VertexId> {
        self.dag.next_vertices(from)
    }

    /// All layer names in natural order ("conv2" before "conv10").
    pub fn ordered_layer_list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.network.layer_names().map(str::to_string).collect();
        names.sort_by(|a, b| natural_cmp(a, b));
        names
    }

    /// Restartable enumeration of admissible vertex segments.
    pub fn gen_vseg(&self) -> VertexSegments<'_> {
        VertexSegments::new(&self.dag)
    }

    pub fn gen_segment(&self, options: &PipelineOptions) -> impl Iterator<Item = PipelineSegment> + '_ {
        generate_segments(&self.network, &self.dag, options)
    }

    /// Candidates from `gen_segment` that `validator` accepts.
    pub fn gen_valid_segments<'a, V>(
        &'a self,
        options: &PipelineOptions,
        validator: &'a V,
    ) -> impl Iterator<Item = PipelineSegment> + 'a
    where
        V: SegmentValidator + ?Sized,
    {
        let ctx = self.segment_context();
        self.gen_segment(options).filter(move |segment| {
            let accepted = validator.validate(segment, &ctx);
            if !accepted {
                log::trace!("validator rejected {}", segment);
            }
            accepted
        })
    }

    pub fn segment_context(&self) -> SegmentContext<'_> {
        SegmentContext {
            network: &self.network,
            batch_size: self.batch_size,
            resource: &self.resource,
            max_util_drop: self.max_util_drop,
        }
    }
}
