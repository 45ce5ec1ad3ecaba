//! Human-readable and Graphviz rendering of a [`Graph`].
//!
//! The [`Display`](fmt::Display) output is a debugging aid with one line per node; it is
//! not a stable format. Use the transfer representation for anything that needs to be
//! read back.

use std::{
    fmt::{self, Write},
    hash::Hash,
};

use crate::graph::Graph;

impl<T> fmt::Display for Graph<T>
where
    T: Hash + Eq + Clone + fmt::Display,
{
    /// Writes `<node> -> [<neighbor>, ...]` for every node by ascending index.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (id, node) in self.iter() {
            write!(f, "{node} -> [")?;
            for (position, target) in self.neighbor_ids(id).iter().enumerate() {
                if position > 0 {
                    f.write_str(", ")?;
                }
                if let Some(value) = self.node(*target) {
                    write!(f, "{value}")?;
                }
            }
            f.write_str("]\n")?;
        }
        Ok(())
    }
}

impl<T> Graph<T>
where
    T: Hash + Eq + Clone + fmt::Display,
{
    /// Generates a DOT format representation of the graph for visualization.
    ///
    /// Nodes are named after their [`NodeId`](crate::NodeId) and labeled with their
    /// `Display` output. Parallel edges are emitted once per stored edge.
    ///
    /// # Arguments
    ///
    /// * `title` - Optional graph label
    ///
    /// # Returns
    ///
    /// A string containing the DOT source, suitable for Graphviz.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use keygraph::Graph;
    ///
    /// let mut graph: Graph<&str> = Graph::new();
    /// graph.add_edge("load", "store");
    ///
    /// let dot = graph.to_dot(Some("pipeline"));
    /// assert!(dot.starts_with("digraph G {"));
    /// assert!(dot.contains("n0 [label=\"load\"];"));
    /// assert!(dot.contains("n0 -> n1;"));
    /// ```
    #[must_use]
    pub fn to_dot(&self, title: Option<&str>) -> String {
        let mut dot = String::new();

        dot.push_str("digraph G {\n");
        if let Some(name) = title {
            let _ = writeln!(dot, "    label=\"{}\";", escape_dot(name));
            dot.push_str("    labelloc=t;\n");
        }
        dot.push_str("    node [shape=box];\n\n");

        for (id, node) in self.iter() {
            let _ = writeln!(dot, "    {id} [label=\"{}\"];", escape_dot(&node.to_string()));
        }

        dot.push('\n');

        for (id, _) in self.iter() {
            for target in self.neighbor_ids(id) {
                let _ = writeln!(dot, "    {id} -> {target};");
            }
        }

        dot.push_str("}\n");
        dot
    }
}

/// Escapes characters that are significant inside a quoted DOT label.
fn escape_dot(label: &str) -> String {
    let mut escaped = String::with_capacity(label.len());
    for c in label.chars() {
        match c {
            '\\' | '"' | '<' | '>' | '{' | '}' | '|' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(c),
        }
    }
    escaped
}
