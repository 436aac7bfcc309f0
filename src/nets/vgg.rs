use crate::{layer::Layers, model::Network, utils::error::PipelineError};

// (output channels, number of convolutions) per block
const VGG16_BLOCKS: [(usize, usize); 5] = [(64, 2), (128, 2), (256, 3), (512, 3), (512, 3)];

pub fn vgg16() -> Result<Network, PipelineError> {
    let mut net = Network::new("vgg_net");
    net.set_input(Layers::input(3, 224))?;

    let mut channels = 3;
    let mut size = 224;
    for (block, &(out_channels, convs)) in VGG16_BLOCKS.iter().enumerate() {
        for conv in 0..convs {
            net.add(
                &format!("conv{}_{}", block + 1, conv + 1),
                Layers::conv(channels, out_channels, size, 3),
            )?;
            channels = out_channels;
        }
        size /= 2;
        net.add(&format!("pool{}", block + 1), Layers::pool(channels, size, 2))?;
    }

    net.add("fc1", Layers::linear_with(channels, 4096, size))?;
    net.add("fc2", Layers::linear(4096, 4096))?;
    net.add("fc3", Layers::linear(4096, 1000))?;

    Ok(net)
}
