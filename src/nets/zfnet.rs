use crate::{layer::Layers, model::Network, utils::error::PipelineError};

pub fn zfnet() -> Result<Network, PipelineError> {
    let mut net = Network::new("zfnet");
    net.set_input(Layers::input(3, 224))?;

    net.add("conv1", Layers::conv_with(3, 96, 110, 7, 2))?;
    net.add("pool1", Layers::pool_with(96, 55, 3, 2))?;
    net.add("conv2", Layers::conv_with(96, 256, 26, 5, 2))?;
    net.add("pool2", Layers::pool_with(256, 13, 3, 2))?;
    net.add("conv3", Layers::conv(256, 512, 13, 3))?;
    net.add("conv4", Layers::conv(512, 1024, 13, 3))?;
    net.add("conv5", Layers::conv(1024, 512, 13, 3))?;
    net.add("pool3", Layers::pool_with(512, 6, 3, 2))?;
    net.add("fc1", Layers::linear_with(512, 4096, 6))?;
    net.add("fc2", Layers::linear(4096, 4096))?;
    net.add("fc3", Layers::linear(4096, 1000))?;

    Ok(net)
}
