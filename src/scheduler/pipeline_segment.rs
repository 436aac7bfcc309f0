use std::fmt;

use crate::{hardware::Resource, model::Network};

/// Candidate pipeline layout: ordered stages, each an ordered group of layer names.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PipelineSegment {
    stages: Vec<Vec<String>>,
}

impl PipelineSegment {
    pub fn new(stages: Vec<Vec<String>>) -> Self {
        debug_assert!(stages.iter().all(|s| !s.is_empty()), "empty stage");
        Self { stages }
    }

    pub fn single_layer(name: &str) -> Self {
        Self {
            stages: vec![vec![name.to_string()]],
        }
    }

    pub fn stages(&self) -> &[Vec<String>] {
        &self.stages
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn layers(&self) -> impl Iterator<Item = &str> {
        self.stages.iter().flatten().map(String::as_str)
    }

    pub fn layer_count(&self) -> usize {
        self.stages.iter().map(Vec::len).sum()
    }

    pub fn conv_count(&self, network: &Network) -> usize {
        count_conv(network, self.layers())
    }

    pub fn max_stage_conv_count(&self, network: &Network) -> usize {
        self.stages
            .iter()
            .map(|stage| count_conv(network, stage.iter().map(String::as_str)))
            .max()
            .unwrap_or(0)
    }
}

pub(crate) fn count_conv<'a>(network: &Network, layers: impl Iterator<Item = &'a str>) -> usize {
    layers
        .filter(|name| {
            network
                .layer_by_name(name)
                .is_some_and(|l| l.kind().is_conv_type())
        })
        .count()
}

impl fmt::Display for PipelineSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stages: Vec<String> = self
            .stages
            .iter()
            .map(|stage| format!("({})", stage.join(", ")))
            .collect();
        write!(f, "[{}]", stages.join(", "))
    }
}

/// What a validator sees besides the candidate itself.
#[derive(Clone, Copy, Debug)]
pub struct SegmentContext<'a> {
    pub network: &'a Network,
    pub batch_size: usize,
    pub resource: &'a Resource,
    pub max_util_drop: f64,
}

/// Decides whether a structurally admissible candidate can actually be scheduled.
/// Rejection discards the candidate; it is not an error.
pub trait SegmentValidator {
    fn validate(&self, segment: &PipelineSegment, ctx: &SegmentContext<'_>) -> bool;
}

impl<F> SegmentValidator for F
where
    F: Fn(&PipelineSegment, &SegmentContext<'_>) -> bool,
{
    fn validate(&self, segment: &PipelineSegment, ctx: &SegmentContext<'_>) -> bool {
        self(segment, ctx)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct AcceptAll;

impl SegmentValidator for AcceptAll {
    fn validate(&self, _segment: &PipelineSegment, _ctx: &SegmentContext<'_>) -> bool {
        true
    }
}

/// Every stage needs at least one processing node of its own.
#[derive(Clone, Copy, Debug, Default)]
pub struct StageCountValidator;

impl SegmentValidator for StageCountValidator {
    fn validate(&self, segment: &PipelineSegment, ctx: &SegmentContext<'_>) -> bool {
        segment.len() <= ctx.resource.node_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::Layers;

    #[test]
    fn counts_and_display() {
        let mut net = Network::new("seg");
        net.set_input(Layers::input(3, 8)).unwrap();
        net.add("conv1", Layers::conv(3, 8, 8, 3)).unwrap();
        net.add("pool1", Layers::pool(8, 4, 2)).unwrap();
        net.add("fc1", Layers::linear(8, 10)).unwrap();

        let seg = PipelineSegment::new(vec![
            vec!["conv1".to_string(), "pool1".to_string()],
            vec!["fc1".to_string()],
        ]);
        assert_eq!(seg.len(), 2);
        assert_eq!(seg.layer_count(), 3);
        assert_eq!(seg.conv_count(&net), 2);
        assert_eq!(seg.max_stage_conv_count(&net), 1);
        assert_eq!(seg.to_string(), "[(conv1, pool1), (fc1)]");
        assert_eq!(
            PipelineSegment::single_layer("fc1").layers().collect::<Vec<_>>(),
            vec!["fc1"]
        );
    }
}
