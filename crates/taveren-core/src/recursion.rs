//! Depth-limited iterative execution.
//!
//! A step function is applied repeatedly to a context until it reports a
//! result. Each continuation counts as one level of depth.

use thiserror::Error;

pub const DEFAULT_MAX_DEPTH: usize = 5;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GuardError {
    #[error("Maximum recursion depth {max_depth} exceeded at depth {depth}")]
    DepthExceeded { max_depth: usize, depth: usize },
}

/// Outcome of a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<C, R> {
    /// Run another step with this context, one level deeper.
    Continue(C),
    Done(R),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecursiveExecutor {
    pub max_depth: usize,
}

impl Default for RecursiveExecutor {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl RecursiveExecutor {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Drive `step` from `context` until it finishes.
    ///
    /// Depth starts at 0 and the step at depth `max_depth` still runs; asking
    /// to continue past it fails without calling `step` again.
    pub fn run<C, R, F>(&self, context: C, mut step: F) -> Result<R, GuardError>
    where
        F: FnMut(C) -> Step<C, R>,
    {
        let mut depth = 0;
        let mut context = context;
        loop {
            if depth > self.max_depth {
                tracing::debug!(depth, max_depth = self.max_depth, "Depth guard tripped");
                return Err(GuardError::DepthExceeded {
                    max_depth: self.max_depth,
                    depth,
                });
            }
            match step(context) {
                Step::Done(result) => return Ok(result),
                Step::Continue(next) => {
                    context = next;
                    depth += 1;
                }
            }
        }
    }
}
