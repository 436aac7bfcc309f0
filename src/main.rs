use nnpipe::{
    InterLayerPipeline, Network, PhyDim2, PipelineError, PipelineOptions, Resource,
    StageCountValidator,
    compute::{print_segment_summary, print_validation_summary, print_vertex_dag},
    nets,
};

/* Demo of the search space sizes for a few well-known networks.
    Set RUST_LOG=debug to see vertex fusion results, RUST_LOG=trace for every rejected candidate.
    Resource numbers only matter to the stage count check at the end.
*/

fn main() -> Result<(), PipelineError> {
    env_logger::init();

    let resource = Resource::new(PhyDim2::new(4, 4), PhyDim2::new(16, 16), 65536, 64)?;

    let networks: Vec<Network> = vec![
        nets::zfnet()?,
        nets::vgg16()?,
        nets::resnet("resnet50", &nets::RESNET50_BLOCKS)?,
        nets::googlenet()?,
    ];

    for network in networks {
        let ilp = InterLayerPipeline::new(network, 64, resource.clone())?;

        if ilp.vertex_list().len() <= 20 {
            print_vertex_dag(&ilp);
        }
        print_segment_summary(&ilp, Some(4));

        let options = PipelineOptions {
            partition_interlayer: true,
            hw_gbuf_save_writeback: true,
            ..Default::default()
        }
        .build()?;
        print_validation_summary(&ilp, &options, &StageCountValidator);
    }

    Ok(())
}
