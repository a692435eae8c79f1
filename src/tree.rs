//! Convert an indented relation report into nested JSON-friendly trees.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub name: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    fn leaf(name: &str) -> Self {
        Self {
            name: name.to_string(),
            children: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SenseTree {
    pub sense: u32,
    pub tree: TreeNode,
}

/// Levels are four columns wide.
const INDENT_WIDTH: usize = 4;

/// Parse every `Sense N` block of `report`. The first line after the heading
/// is the root; indented `=>` / `->` lines nest by indentation. A blank line
/// closes the block, so report headers between blocks are skipped.
pub fn parse_report(report: &str) -> Vec<SenseTree> {
    let mut trees = Vec::new();
    let mut sense: Option<u32> = None;
    let mut stack: Vec<TreeNode> = Vec::new();

    for line in report.lines() {
        if let Some(n) = line.strip_prefix("Sense ") {
            finish(&mut trees, sense.take(), &mut stack);
            sense = n.trim().parse().ok();
            continue;
        }
        if line.trim().is_empty() {
            finish(&mut trees, sense.take(), &mut stack);
            continue;
        }
        if sense.is_none() {
            continue;
        }

        let content = line.trim();
        let content = content
            .strip_prefix("=>")
            .or_else(|| content.strip_prefix("->"))
            .unwrap_or(content)
            .trim();

        if stack.is_empty() {
            stack.push(TreeNode::leaf(content));
            continue;
        }

        let indent = line.len() - line.trim_start().len();
        let level = (indent / INDENT_WIDTH).max(1);
        while stack.len() > level {
            collapse_top(&mut stack);
        }
        stack.push(TreeNode::leaf(content));
    }

    finish(&mut trees, sense, &mut stack);
    trees
}

fn collapse_top(stack: &mut Vec<TreeNode>) {
    if let Some(child) = stack.pop()
        && let Some(parent) = stack.last_mut()
    {
        parent.children.push(child);
    }
}

fn finish(trees: &mut Vec<SenseTree>, sense: Option<u32>, stack: &mut Vec<TreeNode>) {
    while stack.len() > 1 {
        collapse_top(stack);
    }
    if let (Some(sense), Some(root)) = (sense, stack.pop()) {
        trees.push(SenseTree { sense, tree: root });
    }
    stack.clear();
}
