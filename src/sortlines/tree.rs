//! Indentation tree building and structural sorting
//!
//! Converts a flat list of lines into a forest keyed by indentation, sorts every
//! sibling group independently, and flattens the result back into lines. Nested
//! blocks (YAML mappings, outline items, indented config sections) therefore move
//! together with the line that introduces them.
//!
//! # Logic
//!
//! 1. The indentation level of a line is its count of leading whitespace
//!    characters. A tab counts as one, exactly like a space.
//! 2. A stack holds the current ancestor path. Before a new node is pushed, every
//!    node whose level is greater than or equal to the new one is popped and
//!    attached to the node beneath it (or to the forest if the stack empties).
//! 3. Only a strictly shallower node can be a parent, so uneven dedents resolve
//!    by comparison alone and no fixed indent width is assumed.
//!
//! Flattening is a pre-order walk, so `flatten(build_forest(lines)) == lines`.

use serde::Serialize;

/// A line together with the lines nested beneath it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndentationNode {
    pub line: String,
    pub indent_level: usize,
    pub children: Vec<IndentationNode>,
}

/// Root-level nodes in document order.
pub type Forest = Vec<IndentationNode>;

impl IndentationNode {
    pub fn new(line: impl Into<String>) -> Self {
        let line = line.into();
        let indent_level = indent_level(&line);
        IndentationNode {
            line,
            indent_level,
            children: Vec::new(),
        }
    }

    /// Number of lines in this subtree, the node itself included.
    pub fn line_count(&self) -> usize {
        1 + self.children.iter().map(IndentationNode::line_count).sum::<usize>()
    }
}

/// Count of leading whitespace characters. Whitespace-only lines count every
/// character.
pub fn indent_level(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Build a forest from lines in document order.
pub fn build_forest<I, S>(lines: I) -> Forest
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut roots: Forest = Vec::new();
    let mut stack: Vec<IndentationNode> = Vec::new();

    for line in lines {
        let node = IndentationNode::new(line);

        while let Some(top) = stack.last() {
            if top.indent_level < node.indent_level {
                break;
            }
            close_top(&mut stack, &mut roots);
        }

        stack.push(node);
    }

    while !stack.is_empty() {
        close_top(&mut stack, &mut roots);
    }

    roots
}

/// Pop the top of the stack and append it to its parent, which is the node now
/// on top, or to the forest when nothing is left.
fn close_top(stack: &mut Vec<IndentationNode>, roots: &mut Forest) {
    let Some(node) = stack.pop() else {
        return;
    };
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => roots.push(node),
    }
}

/// Sort every sibling group by its own line text, recursively. The sort is
/// stable, so siblings with identical text keep their relative order.
pub fn sort_forest(forest: &mut Forest) {
    forest.sort_by(|a, b| a.line.cmp(&b.line));
    for node in forest.iter_mut() {
        sort_forest(&mut node.children);
    }
}

/// Pre-order walk back to a flat list of lines.
pub fn flatten(forest: Forest) -> Vec<String> {
    let capacity = forest.iter().map(IndentationNode::line_count).sum();
    let mut lines = Vec::with_capacity(capacity);
    for node in forest {
        flatten_into(node, &mut lines);
    }
    lines
}

fn flatten_into(node: IndentationNode, out: &mut Vec<String>) {
    out.push(node.line);
    for child in node.children {
        flatten_into(child, out);
    }
}

/// Build, sort and flatten in one step.
pub fn structural_sort(lines: Vec<String>) -> Vec<String> {
    let mut forest = build_forest(lines);
    sort_forest(&mut forest);
    flatten(forest)
}

/// Render a forest as an indented outline with level annotations.
pub fn to_treeviz(forest: &Forest) -> String {
    let mut out = String::new();
    for node in forest {
        treeviz_node(node, 0, &mut out);
    }
    out
}

fn treeviz_node(node: &IndentationNode, depth: usize, out: &mut String) {
    out.push_str(&"  ".repeat(depth));
    out.push_str(if node.children.is_empty() { "- " } else { "+ " });
    out.push_str(&format!("[{}] {}\n", node.indent_level, node.line.trim_start()));
    for child in &node.children {
        treeviz_node(child, depth + 1, out);
    }
}
