// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A literal tree of named nodes.
//!
//! The context is `Option<&TreeNode>`: the root, or `None` for an absent
//! tree. An empty branch asks for the root itself.

use std::convert::Infallible;

use crate::engine::{ChildSource, ChildrenSource, ResultSink};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub name: String,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }

    pub fn leaf(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }
}

/// Child lookup for [`TreeNode`] trees, in both contract forms.
#[derive(Debug, Default, Clone, Copy)]
pub struct TreeChildren;

impl<'t> ChildSource<Option<&'t TreeNode>, &'t TreeNode> for TreeChildren {
    type Error = Infallible;

    fn child_at(
        &mut self,
        root: &Option<&'t TreeNode>,
        branch: &[&'t TreeNode],
        index: usize,
    ) -> Result<Option<&'t TreeNode>, Infallible> {
        let Some(root) = *root else {
            return Ok(None);
        };
        Ok(match branch.last() {
            None => (index == 0).then_some(root),
            Some(&parent) => parent.children.get(index),
        })
    }
}

impl<'t> ChildrenSource<Option<&'t TreeNode>, &'t TreeNode> for TreeChildren {
    type Children = std::slice::Iter<'t, TreeNode>;

    fn children(
        &mut self,
        root: &Option<&'t TreeNode>,
        branch: &[&'t TreeNode],
    ) -> Option<Self::Children> {
        let root = (*root)?;
        match branch.last() {
            None => Some(std::slice::from_ref(root).iter()),
            Some(&parent) => Some(parent.children.iter()),
        }
    }
}

/// Concatenate the names along a branch.
pub fn branch_to_string(branch: &[&TreeNode]) -> String {
    branch.iter().map(|node| node.name.as_str()).collect()
}

/// Sink recording each branch as [`branch_to_string`].
#[derive(Debug, Default, Clone)]
pub struct BranchNames {
    pub names: Vec<String>,
}

impl<'t> ResultSink<Option<&'t TreeNode>, &'t TreeNode> for BranchNames {
    type Error = Infallible;

    fn on_result(
        &mut self,
        _root: &Option<&'t TreeNode>,
        branch: &[&'t TreeNode],
    ) -> Result<(), Infallible> {
        self.names.push(branch_to_string(branch));
        Ok(())
    }
}

/// Build a tree where every inner node has `children` children and every
/// root-to-leaf path has `depth` nodes. Children are named after their
/// parent with their 1-based index appended; the root is `"0"`.
pub fn balanced_tree(children: usize, depth: usize) -> TreeNode {
    let mut root = TreeNode::leaf("0");
    grow(&mut root, children, depth);
    root
}

fn grow(node: &mut TreeNode, children: usize, depth: usize) {
    if depth <= 1 {
        return;
    }
    node.children = (1..=children)
        .map(|i| {
            let mut child = TreeNode::leaf(format!("{}{}", node.name, i));
            grow(&mut child, children, depth - 1);
            child
        })
        .collect();
}
