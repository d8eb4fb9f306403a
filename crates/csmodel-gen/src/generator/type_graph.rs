use std::collections::{BTreeMap, BTreeSet};

use petgraph::{algo::kosaraju_scc, graphmap::DiGraphMap};

use crate::generator::registry::TypeKey;

/// Groups of models that reference each other, directly or transitively.
///
/// Each group is sorted, and groups are ordered by their first member.
pub(crate) fn detect_cycles(dependencies: &BTreeMap<TypeKey, BTreeSet<TypeKey>>) -> Vec<Vec<String>> {
  let mut graph = DiGraphMap::<&str, ()>::new();
  for (node, deps) in dependencies {
    graph.add_node(node.as_str());
    for dep in deps {
      graph.add_edge(node.as_str(), dep.as_str(), ());
    }
  }

  let mut cycles = kosaraju_scc(&graph)
    .into_iter()
    .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
    .map(|scc| {
      let mut members = scc.into_iter().map(String::from).collect::<Vec<_>>();
      members.sort();
      members
    })
    .collect::<Vec<_>>();
  cycles.sort();
  cycles
}
