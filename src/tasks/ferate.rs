//! Minimum number of new rails so every station is reachable from the source.
//!
//! Stations reachable from the source need nothing. The rest are condensed
//! into strongly connected components; a component that no other unreachable
//! component points into can only be served by a new rail, and one rail into
//! each such component is enough, since everything else unreachable hangs
//! off one of them.

use std::io::Write;

use itertools::Itertools;
use tracing::debug;

use crate::data_handling::{InputError, Tokens};
use crate::graph::scc::tarjan;
use crate::graph::traversal::reachable_from;
use crate::graph::{AdjacencyGraph, Graph, IndexT, MutableGraph};
use crate::tasks::Task;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RailNetwork {
    pub graph: AdjacencyGraph,
    pub source: IndexT,
}

/// rails to build, as 0-based `(from, to)` pairs, all leaving the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RailPlan {
    pub new_rails: Vec<(IndexT, IndexT)>,
}

impl RailPlan {
    pub fn len(&self) -> usize {
        self.new_rails.len()
    }

    pub fn is_empty(&self) -> bool {
        self.new_rails.is_empty()
    }
}

/// Computes one minimum set of rails.
///
/// Each unreachable component with no incoming edge from another unreachable
/// component gets one rail from the source to its smallest station.
pub fn plan_rails(network: &RailNetwork) -> RailPlan {
    let graph = &network.graph;
    let n = graph.n();
    let reached = reachable_from(graph, network.source);
    let condensation = tarjan(graph);

    let mut has_incoming = vec![false; condensation.count];
    let mut representative: Vec<Option<IndexT>> = vec![None; condensation.count];

    for u in (0..n as IndexT).filter(|&u| !reached[u as usize]) {
        let cu = condensation.component_of(u);
        representative[cu as usize].get_or_insert(u);
        for &v in graph.neighbors(u) {
            let cv = condensation.component_of(v);
            if cu != cv {
                has_incoming[cv as usize] = true;
            }
        }
    }

    let targets: Vec<IndexT> = representative
        .iter()
        .zip(has_incoming.iter())
        .filter_map(|(rep, &incoming)| if incoming { None } else { *rep })
        .sorted_unstable()
        .collect();

    debug!(
        stations = n,
        rails = graph.total_edges(),
        reached = reached.iter().filter(|&&r| r).count(),
        components = condensation.count,
        new_rails = targets.len(),
        "condensed rail network"
    );

    RailPlan {
        new_rails: targets.into_iter().map(|t| (network.source, t)).collect(),
    }
}

pub struct Ferate;

impl Task for Ferate {
    const NAME: &'static str = "ferate";

    type Instance = RailNetwork;
    type Answer = RailPlan;

    /// `n m s`, then `m` directed edges `x y`
    fn parse(tokens: &mut Tokens<'_>) -> Result<RailNetwork, InputError> {
        let n = tokens.count("number of stations")?;
        let m = tokens.count("number of rails")?;
        let source = tokens.node(n)?;

        let mut graph = AdjacencyGraph::empty(n);
        for _ in 0..m {
            let from = tokens.node(n)?;
            let to = tokens.node(n)?;
            graph.add_edge(from, to);
        }

        Ok(RailNetwork { graph, source })
    }

    fn solve(network: &RailNetwork) -> Result<RailPlan, InputError> {
        Ok(plan_rails(network))
    }

    fn write_answer<W: Write>(out: &mut W, plan: &RailPlan) -> std::io::Result<()> {
        writeln!(out, "{}", plan.len())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::tasks::{render, solve_str};

    fn network(n: usize, source: IndexT, edges: &[(IndexT, IndexT)]) -> RailNetwork {
        RailNetwork {
            graph: AdjacencyGraph::from_edges(n, edges),
            source,
        }
    }

    // adds the planned rails and checks that every station becomes reachable
    fn plan_connects_everything(network: &RailNetwork, plan: &RailPlan) -> bool {
        let mut graph = network.graph.clone();
        for &(from, to) in &plan.new_rails {
            graph.add_edge(from, to);
        }
        reachable_from(&graph, network.source).iter().all(|&r| r)
    }

    // smallest number of rails from the source found by trying every subset
    fn brute_force_minimum(network: &RailNetwork) -> usize {
        let n = network.graph.n();
        (0u32..1 << n)
            .filter(|mask| {
                let mut graph = network.graph.clone();
                for t in (0..n as IndexT).filter(|t| mask & (1 << t) != 0) {
                    graph.add_edge(network.source, t);
                }
                reachable_from(&graph, network.source).iter().all(|&r| r)
            })
            .map(|mask| mask.count_ones() as usize)
            .min()
            .unwrap_or(0)
    }

    #[test]
    fn test_everything_reachable() {
        let net = network(4, 0, &[(0, 1), (1, 2), (2, 3)]);
        let plan = plan_rails(&net);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_single_station() {
        let plan = plan_rails(&network(1, 0, &[]));
        assert_eq!(plan.len(), 0);
    }

    #[test]
    fn test_isolated_stations_each_need_a_rail() {
        let net = network(4, 1, &[]);
        let plan = plan_rails(&net);
        assert_eq!(plan.new_rails, vec![(1, 0), (1, 2), (1, 3)]);
    }

    #[test]
    fn test_unreachable_chain_needs_one_rail() {
        // 0 reaches 1; 2 -> 3 -> 4 is cut off
        let net = network(5, 0, &[(0, 1), (2, 3), (3, 4)]);
        let plan = plan_rails(&net);
        assert_eq!(plan.new_rails, vec![(0, 2)]);
        assert!(plan_connects_everything(&net, &plan));
    }

    #[test]
    fn test_unreachable_cycle_counts_once() {
        // 3 <-> 4 form a cycle fed by 5; 6 <-> 7 form a closed cycle
        let net = network(
            8,
            0,
            &[(0, 1), (1, 2), (3, 4), (4, 3), (5, 3), (6, 7), (7, 6), (4, 1)],
        );
        let plan = plan_rails(&net);
        assert_eq!(plan.new_rails, vec![(0, 5), (0, 6)]);
        assert!(plan_connects_everything(&net, &plan));
    }

    #[test]
    fn test_edge_into_reached_region_does_not_help() {
        // 2 points at the source but nothing points at 2
        let net = network(3, 0, &[(2, 0), (0, 1)]);
        assert_eq!(plan_rails(&net).len(), 1);
    }

    #[test]
    fn test_self_loops_and_parallel_edges() {
        let net = network(3, 0, &[(1, 1), (1, 2), (1, 2), (2, 2)]);
        assert_eq!(plan_rails(&net).new_rails, vec![(0, 1)]);
    }

    #[test]
    fn test_matches_brute_force_on_random_graphs() {
        let mut rng = StdRng::seed_from_u64(0xfe7a7e);
        for _ in 0..300 {
            let n = rng.random_range(1..=8);
            let m = rng.random_range(0..=2 * n);
            let edges: Vec<(IndexT, IndexT)> = (0..m)
                .map(|_| {
                    (
                        rng.random_range(0..n) as IndexT,
                        rng.random_range(0..n) as IndexT,
                    )
                })
                .collect();
            let net = network(n, rng.random_range(0..n) as IndexT, &edges);

            let plan = plan_rails(&net);
            assert!(plan_connects_everything(&net, &plan), "{net:?}");
            assert_eq!(plan.len(), brute_force_minimum(&net), "{net:?}");
        }
    }

    #[test]
    fn test_parse_and_render() {
        let answer = solve_str::<Ferate>("5 3 1\n1 2\n3 4\n5 4\n").unwrap();
        assert_eq!(render::<Ferate>(&answer), "2\n");
    }

    #[test]
    fn test_parse_rejects_bad_source() {
        assert!(matches!(
            solve_str::<Ferate>("3 0 4\n"),
            Err(InputError::NodeOutOfRange { node: 4, n: 3 })
        ));
    }
}
