use std::collections::BTreeSet;

use crate::scheduler::{
    InterLayerPipeline, PipelineMode, PipelineOptions, SegmentValidator, VertexId, VertexRef,
};

pub fn print_vertex_dag(ilp: &InterLayerPipeline) {
    let network = ilp.network();

    println!("\nVertex DAG: {}", network.net_name);
    println!("================");
    println!(
        "\nLayers: {}   Vertices: {}   Batch Size: {}",
        network.len(),
        ilp.vertex_list().len(),
        ilp.batch_size()
    );
    println!("{:-<130}", "");
    println!(
        "{:<5} {:<36} {:<14} {:<14} {:<6} {:<8} {:<14} {}",
        "ID", "Layers", "Prev", "Next", "Conv", "In", "Out", "Types"
    );
    println!("{:-<130}", "");

    for (vidx, vertex) in ilp.vertex_list().iter().enumerate() {
        let types: Vec<String> = vertex
            .layers
            .iter()
            .map(|&id| {
                let layer = &network.layer(id).layer;
                match layer.config_string() {
                    Some(config) => format!("{}({})", layer.name(), config),
                    None => layer.name(),
                }
            })
            .collect();
        let conv = vertex
            .layers
            .iter()
            .filter(|&&id| network.layer(id).kind().is_conv_type())
            .count();

        let (in_features, out_shape) = match (vertex.layers.first(), vertex.layers.last()) {
            (Some(&head), Some(&tail)) => {
                let tail = &network.layer(tail).layer;
                (
                    network.layer(head).layer.in_features().to_string(),
                    format!("{}x{}x{}", tail.out_features(), tail.out_size(), tail.out_size()),
                )
            }
            _ => (String::from("-"), String::from("-")),
        };

        println!(
            "{:<5} {:<36} {:<14} {:<14} {:<6} {:<8} {:<14} {}",
            vidx,
            truncate(&vertex.names.join(", "), 36),
            format_prevs(ilp.prev_vertices(vidx)),
            format_nexts(ilp.next_vertices(VertexRef::Vertex(vidx))),
            conv,
            in_features,
            out_shape,
            types.join(", ")
        );
    }

    println!("{:-<130}", "");
    println!(
        "Fed by input: {}",
        format_nexts(ilp.next_vertices(VertexRef::Input))
    );
}

pub fn print_segment_summary(ilp: &InterLayerPipeline, max_degree: Option<usize>) {
    let vseg_count = ilp.gen_vseg().count();
    let longest = ilp.gen_vseg().map(|s| s.len()).max().unwrap_or(0);

    println!("\nSegment Summary: {}", ilp.network().net_name);
    println!("================");
    println!("Vertex segments: {} (longest spans {} vertices)", vseg_count, longest);
    println!("{:-<60}", "");
    println!("{:<20} {:<14} {:<12} {}", "Mode", "Candidates", "Max stages", "Max conv");
    println!("{:-<60}", "");

    for (partition_interlayer, hw_gbuf_save_writeback) in
        [(false, false), (true, false), (false, true), (true, true)]
    {
        let options = PipelineOptions {
            partition_interlayer,
            hw_gbuf_save_writeback,
            layer_pipeline_max_degree: max_degree,
            ..Default::default()
        };

        let (count, max_stages, max_conv) = ilp.gen_segment(&options).fold(
            (0usize, 0usize, 0usize),
            |(count, stages, conv), seg| {
                (
                    count + 1,
                    stages.max(seg.len()),
                    conv.max(seg.conv_count(ilp.network())),
                )
            },
        );

        println!(
            "{:<20} {:<14} {:<12} {}",
            mode_name(options.mode()),
            count,
            max_stages,
            max_conv
        );
    }
    println!("{:-<60}", "");
}

/// Report how many candidates of one mode survive `validator`.
pub fn print_validation_summary<V: SegmentValidator + ?Sized>(
    ilp: &InterLayerPipeline,
    options: &PipelineOptions,
    validator: &V,
) {
    let total = ilp.gen_segment(options).count();
    let valid = ilp.gen_valid_segments(options, validator).count();
    println!(
        "\n{}: {} of {} candidates fit {} nodes",
        mode_name(options.mode()),
        valid,
        total,
        ilp.resource().node_count()
    );
}

fn mode_name(mode: PipelineMode) -> &'static str {
    match mode {
        PipelineMode::Sequential => "Sequential",
        PipelineMode::Spatial => "Spatial",
        PipelineMode::Temporal => "Temporal",
        PipelineMode::SpatialTemporal => "Spatial+Temporal",
    }
}

fn format_prevs(prevs: &BTreeSet<VertexRef>) -> String {
    let parts: Vec<String> = prevs.iter().map(|p| p.index().to_string()).collect();
    format!("[{}]", parts.join(", "))
}

fn format_nexts(nexts: &BTreeSet<VertexId>) -> String {
    let parts: Vec<String> = nexts.iter().map(|n| n.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let cut: String = s.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", cut)
    }
}
