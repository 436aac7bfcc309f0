use std::collections::BTreeSet;
use std::fmt;

use super::vertex_dag::{VertexDag, VertexId, VertexRef};

/// Strictly increasing run of vertex indices forming one candidate pipeline span.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexSegment(Vec<VertexId>);

impl VertexSegment {
    pub fn vertices(&self) -> &[VertexId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, vertex: VertexId) -> bool {
        self.0.binary_search(&vertex).is_ok()
    }
}

impl From<Vec<VertexId>> for VertexSegment {
    fn from(mut vertices: Vec<VertexId>) -> Self {
        vertices.sort_unstable();
        vertices.dedup();
        Self(vertices)
    }
}

impl From<&[VertexId]> for VertexSegment {
    fn from(vertices: &[VertexId]) -> Self {
        Self::from(vertices.to_vec())
    }
}

impl fmt::Display for VertexSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, ")")
    }
}

struct SearchState {
    vertices: Vec<VertexId>,
    // previous vertices of the members that lie outside the segment
    external_prevs: BTreeSet<VertexRef>,
    // the last member joins several previous vertices; nothing may follow it
    closed: bool,
}

/// Lazy enumeration of all admissible vertex segments of a DAG.
///
/// Each start vertex seeds a chain that grows by the next topological index
/// while the candidate
///  - shares a dependency with the segment (one of its previous vertices is a
///    member, or is also a previous vertex of some member), and
///  - if it has several previous vertices, finds all of them inside the segment.
///
/// Such a join vertex closes the segment: the chain stops right after it. A
/// join may still start a segment of its own.
///
/// A grown segment is emitted only when every member with several next
/// vertices has either all or none of them inside the segment. Single-vertex
/// segments are always emitted. Segments come out ordered by start vertex and
/// then by length. Every worklist state is a distinct (start, length) pair,
/// so no segment is produced twice.
pub struct VertexSegments<'a> {
    dag: &'a VertexDag,
    worklist: Vec<SearchState>,
    emitted: usize,
}

impl<'a> VertexSegments<'a> {
    pub fn new(dag: &'a VertexDag) -> Self {
        let worklist = (0..dag.len())
            .rev()
            .map(|start| SearchState {
                vertices: vec![start],
                external_prevs: dag.prev_vertices(start).clone(),
                closed: false,
            })
            .collect();

        Self {
            dag,
            worklist,
            emitted: 0,
        }
    }

    fn extend(&self, state: &SearchState) -> Option<SearchState> {
        if state.closed {
            return None;
        }
        let tail = *state.vertices.last()?;
        let candidate = tail + 1;
        if candidate >= self.dag.len() || !self.admits(state, candidate) {
            return None;
        }

        let mut vertices = state.vertices.clone();
        vertices.push(candidate);

        let mut external_prevs = state.external_prevs.clone();
        external_prevs.extend(
            self.dag
                .prev_vertices(candidate)
                .iter()
                .filter(|p| !is_member(&vertices, **p)),
        );

        Some(SearchState {
            vertices,
            external_prevs,
            closed: self.dag.prev_vertices(candidate).len() > 1,
        })
    }

    fn admits(&self, state: &SearchState, candidate: VertexId) -> bool {
        let prevs = self.dag.prev_vertices(candidate);

        let shares_dependency = prevs
            .iter()
            .any(|p| is_member(&state.vertices, *p) || state.external_prevs.contains(p));
        if !shares_dependency {
            return false;
        }

        prevs.len() <= 1 || prevs.iter().all(|p| is_member(&state.vertices, *p))
    }

    fn is_fanout_closed(&self, vertices: &[VertexId]) -> bool {
        vertices.iter().all(|&v| {
            let nexts = self.dag.next_vertices(VertexRef::Vertex(v));
            if nexts.len() <= 1 {
                return true;
            }
            let inside = nexts
                .iter()
                .filter(|&&n| vertices.binary_search(&n).is_ok())
                .count();
            inside == 0 || inside == nexts.len()
        })
    }
}

fn is_member(vertices: &[VertexId], vertex: VertexRef) -> bool {
    vertex
        .vertex()
        .is_some_and(|v| vertices.binary_search(&v).is_ok())
}

impl Iterator for VertexSegments<'_> {
    type Item = VertexSegment;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(state) = self.worklist.pop() {
            if let Some(grown) = self.extend(&state) {
                self.worklist.push(grown);
            }

            if state.vertices.len() > 1 && !self.is_fanout_closed(&state.vertices) {
                continue;
            }

            self.emitted += 1;
            return Some(VertexSegment(state.vertices));
        }

        if self.emitted > 0 {
            log::trace!("enumerated {} vertex segments", self.emitted);
            self.emitted = 0;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{layer::Layers, model::Network};

    fn chain(len: usize) -> VertexDag {
        let mut net = Network::new("chain");
        net.set_input(Layers::input(3, 8)).unwrap();
        for i in 0..len {
            net.add(&format!("{}", i), Layers::conv(3, 3, 8, 3)).unwrap();
        }
        VertexDag::build(&net).unwrap()
    }

    #[test]
    fn chain_yields_every_subrange_in_order() {
        let dag = chain(3);
        let segments: Vec<Vec<VertexId>> = VertexSegments::new(&dag)
            .map(|s| s.vertices().to_vec())
            .collect();
        assert_eq!(
            segments,
            vec![
                vec![0],
                vec![0, 1],
                vec![0, 1, 2],
                vec![1],
                vec![1, 2],
                vec![2]
            ]
        );
    }

    #[test]
    fn join_closes_the_segment() {
        let mut net = Network::new("diamond");
        net.set_input(Layers::input(3, 8)).unwrap();
        net.add("0", Layers::conv(3, 3, 8, 3)).unwrap();
        net.add_with("1", Layers::conv(3, 3, 8, 3), &["0"]).unwrap();
        net.add_with("2", Layers::conv(3, 3, 8, 1), &["0"]).unwrap();
        net.add_with("3", Layers::mul(3, 8), &["1", "2"]).unwrap();
        net.add("4", Layers::conv(3, 3, 8, 3)).unwrap();
        let dag = VertexDag::build(&net).unwrap();

        let segments: Vec<String> = VertexSegments::new(&dag).map(|s| s.to_string()).collect();
        assert_eq!(
            segments,
            vec![
                "(0)",
                "(0, 1, 2)",
                "(0, 1, 2, 3)",
                "(1)",
                "(1, 2)",
                "(1, 2, 3)",
                "(2)",
                "(3)",
                "(3, 4)",
                "(4)"
            ]
        );
    }

    #[test]
    fn segment_from_unsorted_input() {
        let seg = VertexSegment::from(vec![4, 3, 5, 3]);
        assert_eq!(seg.vertices(), &[3, 4, 5]);
        assert!(seg.contains(4));
        assert!(!seg.contains(6));
        assert_eq!(seg.to_string(), "(3, 4, 5)");
    }
}
