use crate::{layer::Layers, model::Network, utils::error::PipelineError};

// 1x1, 3x3 reduce, 3x3, 5x5 reduce, 5x5, pool projection
type InceptionConfig = (usize, usize, usize, usize, usize, usize);

const INCEPTION_3: [(&str, InceptionConfig); 2] = [
    ("3a", (64, 96, 128, 16, 32, 32)),
    ("3b", (128, 128, 192, 32, 96, 64)),
];
const INCEPTION_4: [(&str, InceptionConfig); 5] = [
    ("4a", (192, 96, 208, 16, 48, 64)),
    ("4b", (160, 112, 224, 24, 64, 64)),
    ("4c", (128, 128, 256, 24, 64, 64)),
    ("4d", (112, 144, 288, 32, 64, 64)),
    ("4e", (256, 160, 320, 32, 128, 128)),
];
const INCEPTION_5: [(&str, InceptionConfig); 2] = [
    ("5a", (256, 160, 320, 32, 128, 128)),
    ("5b", (384, 192, 384, 48, 128, 128)),
];

pub fn googlenet() -> Result<Network, PipelineError> {
    let mut net = Network::new("googlenet");
    net.set_input(Layers::input(3, 224))?;

    net.add("conv1", Layers::conv_with(3, 64, 112, 7, 2))?;
    net.add("pool1", Layers::pool(64, 56, 2))?;
    net.add("conv2_3x3_reduce", Layers::conv(64, 64, 56, 1))?;
    net.add("conv2_3x3", Layers::conv(64, 192, 56, 3))?;
    net.add("pool2", Layers::pool(192, 28, 2))?;

    let mut prevs = vec!["pool2".to_string()];
    let mut channels = 192;
    let mut size = 28;

    for (stage, modules) in [&INCEPTION_3[..], &INCEPTION_4[..], &INCEPTION_5[..]]
        .into_iter()
        .enumerate()
    {
        for &(suffix, config) in modules {
            (prevs, channels) = inception(&mut net, suffix, config, &prevs, channels, size)?;
        }

        let pool = format!("pool{}", stage + 3);
        let prev_refs: Vec<&str> = prevs.iter().map(String::as_str).collect();
        let out_size = if stage == 2 { 1 } else { size / 2 };
        net.add_with(&pool, Layers::pool(channels, out_size, size / out_size), &prev_refs)?;
        prevs = vec![pool];
        size = out_size;
    }

    net.add("fc", Layers::linear(channels, 1000))?;

    Ok(net)
}

/// Four parallel branches reading the same inputs. Their outputs are
/// concatenated implicitly by whichever layer takes all four as inputs.
fn inception(
    net: &mut Network,
    suffix: &str,
    config: InceptionConfig,
    prevs: &[String],
    in_channels: usize,
    size: usize,
) -> Result<(Vec<String>, usize), PipelineError> {
    let (c1x1, c3x3_reduce, c3x3, c5x5_reduce, c5x5, pool_proj) = config;
    let prev_refs: Vec<&str> = prevs.iter().map(String::as_str).collect();
    let name = |part: &str| format!("inception_{}_{}", suffix, part);

    net.add_with(&name("1x1"), Layers::conv(in_channels, c1x1, size, 1), &prev_refs)?;

    net.add_with(
        &name("3x3_reduce"),
        Layers::conv(in_channels, c3x3_reduce, size, 1),
        &prev_refs,
    )?;
    net.add(&name("3x3"), Layers::conv(c3x3_reduce, c3x3, size, 3))?;

    net.add_with(
        &name("5x5_reduce"),
        Layers::conv(in_channels, c5x5_reduce, size, 1),
        &prev_refs,
    )?;
    net.add(&name("5x5"), Layers::conv(c5x5_reduce, c5x5, size, 5))?;

    net.add_with(&name("pool"), Layers::pool_with(in_channels, size, 3, 1), &prev_refs)?;
    net.add(&name("pool_proj"), Layers::conv(in_channels, pool_proj, size, 1))?;

    let outputs = ["1x1", "3x3", "5x5", "pool_proj"].map(name).to_vec();
    Ok((outputs, c1x1 + c3x3 + c5x5 + pool_proj))
}
