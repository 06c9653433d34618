//! Evaluation context configuration

use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::EvalError;

/// Default limit on nested applications.
///
/// Evaluation grows the host stack on demand, so the limit only guards
/// against unbounded recursion, not against ordinary deep programs.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 1_000_000;

/// Configuration and state for evaluation.
///
/// This is passed through all evaluation calls and controls
/// behavior like recursion limits and interruption.
#[derive(Debug, Clone)]
pub struct EvalContext {
    /// Maximum call depth (stack overflow protection)
    pub max_call_depth: usize,

    /// Interrupt flag - set to true to abort evaluation
    pub interrupt: Arc<AtomicBool>,

    /// Number of applications currently in progress
    depth: Cell<usize>,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            max_call_depth: DEFAULT_MAX_CALL_DEPTH,
            interrupt: Arc::new(AtomicBool::new(false)),
            depth: Cell::new(0),
        }
    }
}

impl EvalContext {
    /// Create a new context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with a custom call depth limit.
    pub fn with_max_call_depth(max_depth: usize) -> Self {
        Self {
            max_call_depth: max_depth,
            ..Default::default()
        }
    }

    /// Check if evaluation has been interrupted.
    pub fn is_interrupted(&self) -> bool {
        self.interrupt.load(Ordering::Relaxed)
    }

    /// Request interruption of evaluation.
    pub fn interrupt(&self) {
        self.interrupt.store(true, Ordering::Relaxed);
    }

    /// Reset the interrupt flag.
    pub fn reset_interrupt(&self) {
        self.interrupt.store(false, Ordering::Relaxed);
    }

    // ═══════════════════════════════════════════════════════════════════
    // Call Depth Tracking (Stack Overflow Protection)
    // ═══════════════════════════════════════════════════════════════════

    /// Enter a function call. Returns error if max depth exceeded.
    ///
    /// The depth is released when the returned guard is dropped, including
    /// when the call fails.
    pub fn enter_call(&self) -> Result<CallGuard<'_>, EvalError> {
        let depth = self.depth.get();
        if depth >= self.max_call_depth {
            tracing::debug!(depth, max = self.max_call_depth, "call depth limit reached");
            return Err(EvalError::StackOverflow {
                depth,
                max: self.max_call_depth,
            });
        }
        self.depth.set(depth + 1);
        Ok(CallGuard { ctx: self })
    }

    /// Get current call depth.
    pub fn call_depth(&self) -> usize {
        self.depth.get()
    }
}

/// RAII guard that leaves a call when dropped.
#[derive(Debug)]
pub struct CallGuard<'a> {
    ctx: &'a EvalContext,
}

impl<'a> Drop for CallGuard<'a> {
    fn drop(&mut self) {
        self.ctx.depth.set(self.ctx.depth.get().saturating_sub(1));
    }
}
