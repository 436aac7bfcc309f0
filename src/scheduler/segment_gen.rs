use std::collections::HashSet;

use crate::model::Network;

use super::{
    options::{PipelineMode, PipelineOptions},
    pipeline_segment::{PipelineSegment, count_conv},
    vertex_dag::VertexDag,
    vertex_segment::{VertexSegment, VertexSegments},
};

/// Lazily yield every candidate pipeline segment of `network` under `options`,
/// without duplicates.
///
/// Single-layer segments come first, one per layer in declaration order, for
/// every mode. Then each vertex segment contributes its spatial and/or temporal
/// layouts depending on the mode.
pub fn generate_segments<'a>(
    network: &'a Network,
    dag: &'a VertexDag,
    options: &PipelineOptions,
) -> impl Iterator<Item = PipelineSegment> + 'a {
    let mode = options.mode();
    let max_degree = options.layer_pipeline_max_degree;
    let limit = options.vseg_limit.unwrap_or(usize::MAX);

    let single_layers = network.layer_names().map(PipelineSegment::single_layer);

    let mut consumed = 0usize;
    let vertex_segments = VertexSegments::new(dag)
        .take_while(move |_| mode != PipelineMode::Sequential)
        .take_while(move |_| {
            if consumed == limit {
                log::warn!(
                    "{}: stopped after {} vertex segments, later candidates are skipped",
                    network.net_name,
                    limit
                );
                return false;
            }
            consumed += 1;
            true
        });

    let pipelined =
        vertex_segments.flat_map(move |vseg| vseg_candidates(network, dag, &vseg, mode));

    let mut seen: HashSet<PipelineSegment> = HashSet::new();
    single_layers
        .chain(pipelined)
        .filter(move |segment| max_degree.is_none_or(|d| segment.conv_count(network) <= d))
        .filter(move |segment| seen.insert(segment.clone()))
}

/// Layouts one vertex segment contributes under `mode`.
fn vseg_candidates(
    network: &Network,
    dag: &VertexDag,
    vseg: &VertexSegment,
    mode: PipelineMode,
) -> Vec<PipelineSegment> {
    let vertices = vseg.vertices();
    // a lone single-layer vertex is already a single-layer segment
    if matches!(vertices, [only] if dag.vertex(*only).len() == 1) {
        return Vec::new();
    }

    let mut candidates = Vec::with_capacity(2);

    if mode.spatial() {
        let stages: Vec<Vec<String>> = vertices
            .iter()
            .map(|&v| dag.vertex(v).names.clone())
            .collect();
        let one_conv_per_stage = stages
            .iter()
            .all(|stage| count_conv(network, stage.iter().map(String::as_str)) <= 1);
        if one_conv_per_stage {
            candidates.push(PipelineSegment::new(stages));
        }
    }

    if mode.temporal() {
        let stage: Vec<String> = vertices
            .iter()
            .flat_map(|&v| dag.vertex(v).names.iter().cloned())
            .collect();
        candidates.push(PipelineSegment::new(vec![stage]));
    }

    candidates
}
