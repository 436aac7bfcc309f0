use crate::{
    layer::Layers,
    model::{LayerId, Network},
    utils::error::PipelineError,
};

pub const RESNET50_BLOCKS: [usize; 4] = [3, 4, 6, 3];
pub const RESNET152_BLOCKS: [usize; 4] = [3, 8, 36, 3];

/// Bottleneck ResNet. Each block is three convolutions joined with its shortcut
/// by an element-wise add; the first block of every stage projects the shortcut
/// with its own convolution.
pub fn resnet(name: &str, blocks: &[usize]) -> Result<Network, PipelineError> {
    let mut net = Network::new(name);
    net.set_input(Layers::input(3, 224))?;

    net.add("conv1", Layers::conv_with(3, 64, 112, 7, 2))?;
    let mut prev = net.add("pool1", Layers::pool(64, 56, 2))?;

    let mut in_channels = 64;
    let mut size = 56;
    for (stage, &count) in blocks.iter().enumerate() {
        let mid = 64 << stage;
        let out = mid * 4;
        if stage > 0 {
            size /= 2;
        }

        for block in 0..count {
            let prefix = format!("conv{}_{}", stage + 2, block);
            let prev_name = net.layer(prev).name.clone();

            net.add_with(
                &format!("{}_a", prefix),
                Layers::conv(in_channels, mid, size, 1),
                &[prev_name.as_str()],
            )?;
            net.add(&format!("{}_b", prefix), Layers::conv(mid, mid, size, 3))?;
            let c = format!("{}_c", prefix);
            net.add(&c, Layers::conv(mid, out, size, 1))?;

            let shortcut = if block == 0 {
                let br = format!("{}_br", prefix);
                net.add_with(&br, Layers::conv(in_channels, out, size, 1), &[prev_name.as_str()])?;
                br
            } else {
                prev_name
            };

            prev = residual(&mut net, &prefix, &c, &shortcut, out, size)?;
            in_channels = out;
        }
    }

    let prev_name = net.layer(prev).name.clone();
    net.add_with("pool5", Layers::pool(in_channels, 1, size), &[prev_name.as_str()])?;
    net.add("fc", Layers::linear(in_channels, 1000))?;

    Ok(net)
}

fn residual(
    net: &mut Network,
    prefix: &str,
    main: &str,
    shortcut: &str,
    channels: usize,
    size: usize,
) -> Result<LayerId, PipelineError> {
    net.add_with(
        &format!("{}_res", prefix),
        Layers::add(channels, size),
        &[main, shortcut],
    )
}
