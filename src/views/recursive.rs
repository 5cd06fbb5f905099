// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Naive recursive traversal.
//!
//! Runs the whole traversal in one call, one stack frame per level, and
//! streams every branch to the sink. Not resumable, and deep trees grow the
//! native stack. It is the oracle the resumable engine is checked against.

use crate::engine::{ChildrenSource, ResultSink};

pub struct RecursiveDfs<C, T, S, R> {
    context: C,
    children_source: S,
    result_sink: R,
    max_depth: Option<usize>,
    branch: Vec<T>,
}

impl<C, T, S, R> RecursiveDfs<C, T, S, R>
where
    S: ChildrenSource<C, T>,
    R: ResultSink<C, T>,
{
    pub fn new(context: C, children_source: S, result_sink: R, max_depth: Option<usize>) -> Self {
        Self {
            context,
            children_source,
            result_sink,
            max_depth: max_depth.filter(|&limit| limit > 0),
            branch: Vec::new(),
        }
    }

    /// Visit every branch. Stops at the first sink error.
    pub fn run(&mut self) -> Result<(), R::Error> {
        self.branch.clear();
        self.visit()
    }

    fn visit(&mut self) -> Result<(), R::Error> {
        if self
            .max_depth
            .is_some_and(|limit| self.branch.len() >= limit)
        {
            return self.result_sink.on_result(&self.context, &self.branch);
        }

        let mut children = 0;
        if let Some(nodes) = self.children_source.children(&self.context, &self.branch) {
            for node in nodes {
                children += 1;
                self.branch.push(node);
                let visited = self.visit();
                // the branch ends with our node whatever happened below
                self.branch.pop();
                visited?;
            }
        }

        if children == 0 && !self.branch.is_empty() {
            self.result_sink.on_result(&self.context, &self.branch)?;
        }
        Ok(())
    }

    pub fn result_sink(&self) -> &R {
        &self.result_sink
    }

    pub fn into_result_sink(self) -> R {
        self.result_sink
    }
}
