#![allow(dead_code)]

use std::collections::BTreeSet;

use nnpipe::{
    INPUT_LAYER_KEY, InterLayerPipeline, Layers, Network, PhyDim2, Resource, VertexRef,
    VertexSegment, nets,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

pub const BATCH_SIZE: usize = 4;

pub fn resource() -> Resource {
    Resource::new(PhyDim2::new(4, 4), PhyDim2::new(16, 16), 65536, 64).unwrap()
}

pub fn make_ilp(net: Network) -> InterLayerPipeline {
    InterLayerPipeline::with_max_util_drop(net, BATCH_SIZE, resource(), 0.1).unwrap()
}

/// Simple chain with one fused pooling layer.
pub fn net1() -> Network {
    let mut net = Network::new("net1");
    net.set_input(Layers::input(3, 32)).unwrap();
    net.add("0", Layers::conv(3, 16, 32, 3)).unwrap();
    net.add("1", Layers::conv(16, 32, 32, 3)).unwrap();
    net.add("1p", Layers::pool(32, 16, 2)).unwrap();
    net.add("2", Layers::linear_with(32, 64, 16)).unwrap();
    net.add("3", Layers::linear(64, 10)).unwrap();
    net
}

/// Longer chain.
pub fn net2() -> Network {
    let mut net = Network::new("net2");
    net.set_input(Layers::input(3, 64)).unwrap();
    net.add("0", Layers::conv(3, 16, 64, 3)).unwrap();
    net.add("0p", Layers::pool(16, 32, 2)).unwrap();
    net.add("1", Layers::conv(16, 32, 32, 3)).unwrap();
    net.add("2", Layers::conv(32, 32, 32, 3)).unwrap();
    net.add("2p", Layers::pool(32, 16, 2)).unwrap();
    net.add("3", Layers::conv(32, 64, 16, 3)).unwrap();
    net.add("4", Layers::linear_with(64, 128, 16)).unwrap();
    net.add("5", Layers::linear(128, 10)).unwrap();
    net
}

/// Two first layers merged by an element-wise layer.
pub fn net3() -> Network {
    let mut net = Network::new("net3");
    net.set_input(Layers::input(3, 32)).unwrap();
    net.add_with("0", Layers::conv(3, 16, 32, 3), &[INPUT_LAYER_KEY])
        .unwrap();
    net.add_with("1", Layers::conv(3, 16, 32, 1), &[INPUT_LAYER_KEY])
        .unwrap();
    net.add_with("2", Layers::add(16, 32), &["0", "1"]).unwrap();
    net.add("3", Layers::linear_with(16, 10, 32)).unwrap();
    net
}

/// Fork and join.
pub fn net4() -> Network {
    let mut net = Network::new("net4");
    net.set_input(Layers::input(3, 32)).unwrap();
    net.add("0", Layers::conv(3, 16, 32, 3)).unwrap();
    net.add_with("1", Layers::conv(16, 16, 16, 3), &["0"]).unwrap();
    net.add_with("2", Layers::conv(16, 16, 32, 3), &["0"]).unwrap();
    net.add_with("2p", Layers::pool(16, 16, 2), &["2"]).unwrap();
    net.add_with("3", Layers::add(16, 16), &["1", "2p"]).unwrap();
    net.add("4", Layers::linear_with(16, 10, 16)).unwrap();
    net
}

/// Fan-out, fan-in and unrelated branches.
///
/// ```text
/// 0 -> 1 -> 3 -> {4, 5} -> 6 -> 7 -> 8 -> 10 -> {11, 12, 13} -> 14 -> 15
/// 0 -> 2 ----------------------------> 9 -> 10
/// 1 ------------------------> 7
/// ```
pub fn net5() -> Network {
    let mut net = Network::new("net5");
    net.set_input(Layers::input(8, 16)).unwrap();
    net.add_with("0", Layers::conv(8, 8, 16, 3), &[INPUT_LAYER_KEY])
        .unwrap();
    net.add_with("1", Layers::conv(8, 8, 16, 3), &["0"]).unwrap();
    net.add("1p", Layers::pool(8, 16, 1)).unwrap();
    net.add_with("2", Layers::conv(8, 8, 16, 3), &["0"]).unwrap();
    net.add_with("3", Layers::conv(8, 8, 16, 3), &["1p"]).unwrap();
    net.add_with("4", Layers::conv(8, 8, 16, 3), &["3"]).unwrap();
    net.add("4p", Layers::pool(8, 16, 1)).unwrap();
    net.add_with("5", Layers::conv(8, 8, 16, 3), &["3"]).unwrap();
    net.add_with("6", Layers::add(8, 16), &["4p", "5"]).unwrap();
    net.add_with("7", Layers::mul(8, 16), &["6", "1p"]).unwrap();
    net.add_with("8", Layers::conv(8, 8, 16, 3), &["7"]).unwrap();
    net.add_with("9", Layers::conv(8, 8, 16, 3), &["2"]).unwrap();
    net.add_with("10", Layers::max(8, 16), &["8", "9"]).unwrap();
    net.add_with("11", Layers::conv(8, 8, 16, 3), &["10"]).unwrap();
    net.add_with("12", Layers::conv(8, 8, 16, 3), &["10"]).unwrap();
    net.add_with("13", Layers::conv(8, 8, 16, 3), &["10"]).unwrap();
    net.add_with("14", Layers::add(8, 16), &["11", "12", "13"])
        .unwrap();
    net.add("15", Layers::linear_with(8, 10, 16)).unwrap();
    net
}

/// Hand-crafted networks whose layer names start with their vertex index.
pub fn small_nets() -> Vec<Network> {
    vec![net1(), net2(), net3(), net4(), net5()]
}

pub fn all_nets() -> Vec<Network> {
    let mut nets = small_nets();
    nets.push(nets::zfnet().unwrap());
    nets.push(nets::vgg16().unwrap());
    nets.push(nets::resnet("resnet50", &nets::RESNET50_BLOCKS).unwrap());
    nets.push(nets::googlenet().unwrap());
    nets
}

/// Random layer DAG. Every layer draws one to three predecessors among the
/// input and the layers before it.
pub fn random_net(seed: u64, layers: usize) -> Network {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut net = Network::new(format!("random_{}", seed));
    net.set_input(Layers::input(4, 8)).unwrap();

    for i in 0..layers {
        let mut candidates: Vec<String> = vec![INPUT_LAYER_KEY.to_string()];
        candidates.extend((0..i).map(|j| format!("l{}", j)));

        let wanted = rng.random_range(1..=3usize).min(candidates.len());
        let mut prevs: BTreeSet<usize> = BTreeSet::new();
        // bias towards recent layers so the graph stays deep
        while prevs.len() < wanted {
            let back = rng.random_range(0..candidates.len().min(4));
            prevs.insert(candidates.len() - 1 - back);
        }
        let prev_names: Vec<&str> = prevs.iter().map(|&p| candidates[p].as_str()).collect();

        let layer = match (rng.random_range(0..4u32), prev_names.len()) {
            (0, n) if n >= 2 => Layers::add(4, 8),
            (1, _) => Layers::pool(4, 8, 1),
            (2, _) => Layers::linear(4, 4),
            _ => Layers::conv(4, 4, 8, 3),
        };
        net.add_with(&format!("l{}", i), layer, &prev_names).unwrap();
    }

    net
}

/// Vertex segments as plain index vectors.
pub fn vseg_list(ilp: &InterLayerPipeline) -> Vec<Vec<usize>> {
    ilp.gen_vseg().map(|s| s.vertices().to_vec()).collect()
}

pub fn vseg(vertices: &[usize]) -> VertexSegment {
    VertexSegment::from(vertices)
}

/// Previous vertices of the members of `vertices` that are not members themselves.
pub fn external_prevs(ilp: &InterLayerPipeline, vertices: &[usize]) -> BTreeSet<VertexRef> {
    vertices
        .iter()
        .flat_map(|&v| ilp.prev_vertices(v).iter().copied())
        .filter(|p| !p.vertex().is_some_and(|v| vertices.contains(&v)))
        .collect()
}
