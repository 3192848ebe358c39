//! Directed weighted graphs described as text.
//!
//! One edge per line:
//!
//! ```text
//! A -> B : 3
//! B -> C        # cost defaults to 1
//! D             # isolated node
//! ```

use std::collections::HashMap;

use super::problem::{Cost, Problem};

/// A directed graph read from the `FROM -> TO [: COST]` edge syntax.
#[derive(Debug, Clone, Default)]
pub struct GraphProblem {
    /// Successors of each node, in first-appearance order
    adjacency: HashMap<String, Vec<String>>,
    costs: HashMap<(String, String), Cost>,
    /// All nodes, in first-appearance order
    nodes: Vec<String>,
}

impl GraphProblem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an edge list.
    ///
    /// Blank lines and `#` comments are ignored. Repeating an edge keeps a
    /// single successor entry and the last cost given.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::GraphSyntax`] for lines that are not a node or
    /// an edge and [`crate::Error::InvalidCost`] for costs that are not
    /// finite and non-negative.
    pub fn parse(text: &str) -> Result<Self, crate::Error> {
        let mut graph = Self::new();

        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.split('#').next().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }

            let syntax = |message: &str| crate::Error::GraphSyntax {
                line: line_no,
                message: message.to_string(),
            };

            let mut sides = line.split("->");
            let from = sides.next().unwrap_or_default().trim();
            let rest = sides.next();
            if sides.next().is_some() {
                return Err(syntax("more than one '->' on a line"));
            }
            if from.is_empty() {
                return Err(syntax("missing source node"));
            }

            let Some(rest) = rest else {
                if from.contains(':') {
                    return Err(syntax("cost given without an edge"));
                }
                graph.add_node(from);
                continue;
            };

            let (to, cost) = match rest.split_once(':') {
                Some((to, cost)) => (to.trim(), Some(cost.trim())),
                None => (rest.trim(), None),
            };
            if to.is_empty() {
                return Err(syntax("missing target node"));
            }

            let cost = match cost {
                None => 1.0,
                Some(value) => value
                    .parse::<Cost>()
                    .ok()
                    .filter(|c| c.is_finite() && *c >= 0.0)
                    .ok_or_else(|| crate::Error::InvalidCost {
                        line: line_no,
                        value: value.to_string(),
                    })?,
            };

            graph.add_edge(from, to, cost);
        }

        Ok(graph)
    }

    /// Declare a node without edges. Existing nodes are left alone.
    pub fn add_node(&mut self, node: &str) {
        if !self.adjacency.contains_key(node) {
            self.adjacency.insert(node.to_string(), Vec::new());
            self.nodes.push(node.to_string());
        }
    }

    /// Add or re-weight the directed edge `from -> to`.
    pub fn add_edge(&mut self, from: &str, to: &str, cost: Cost) {
        self.add_node(from);
        self.add_node(to);
        if let Some(successors) = self.adjacency.get_mut(from) {
            if !successors.iter().any(|s| s == to) {
                successors.push(to.to_string());
            }
        }
        self.costs.insert((from.to_string(), to.to_string()), cost);
    }

    pub fn contains(&self, node: &str) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Look up a node by name.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownNode`] if the graph never mentions it.
    pub fn require(&self, node: &str) -> Result<String, crate::Error> {
        if self.contains(node) {
            Ok(node.to_string())
        } else {
            Err(crate::Error::UnknownNode {
                node: node.to_string(),
            })
        }
    }

    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }

    pub fn edge_count(&self) -> usize {
        self.costs.len()
    }
}

impl Problem for GraphProblem {
    type State = String;

    fn actions(&self, state: &String) -> Vec<String> {
        self.adjacency.get(state).cloned().unwrap_or_default()
    }

    /// Weight of the edge, or 1 when the graph has no such edge.
    fn cost(&self, from: &String, to: &String) -> Cost {
        self.costs
            .get(&(from.clone(), to.clone()))
            .copied()
            .unwrap_or(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_weighted_and_unweighted_edges() {
        let graph = GraphProblem::parse("A -> B : 3\nA -> C\n\n# comment\nD").unwrap();
        assert_eq!(graph.nodes(), ["A", "B", "C", "D"]);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.actions(&"A".into()), ["B", "C"]);
        assert_eq!(graph.cost(&"A".into(), &"B".into()), 3.0);
        assert_eq!(graph.cost(&"A".into(), &"C".into()), 1.0);
        assert_eq!(graph.cost(&"B".into(), &"D".into()), 1.0);
    }

    #[test]
    fn unknown_state_has_no_successors() {
        let graph = GraphProblem::parse("A -> B").unwrap();
        assert!(graph.actions(&"Z".into()).is_empty());
        assert!(graph.require("Z").is_err());
        assert_eq!(graph.require("B").unwrap(), "B");
    }

    #[test]
    fn repeated_edge_keeps_last_cost_once() {
        let graph = GraphProblem::parse("A -> B : 3\nA -> B : 5").unwrap();
        assert_eq!(graph.actions(&"A".into()), ["B"]);
        assert_eq!(graph.cost(&"A".into(), &"B".into()), 5.0);
    }

    #[test]
    fn rejects_malformed_lines() {
        let err = GraphProblem::parse("A -> B\nA -> -> C").unwrap_err();
        assert!(err.to_string().contains("line 2"));

        assert!(GraphProblem::parse("-> B").is_err());
        assert!(GraphProblem::parse("A -> ").is_err());
        assert!(GraphProblem::parse("A : 3").is_err());

        let err = GraphProblem::parse("A -> B : x").unwrap_err();
        assert!(matches!(err, crate::Error::InvalidCost { line: 1, .. }));
        assert!(GraphProblem::parse("A -> B : -2").is_err());
    }
}
