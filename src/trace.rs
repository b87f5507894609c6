//! Step-by-step trace of a single transform call.
//!
//! A transform reports each unit of work (a letter, a digraph, a block) to a
//! [`Recorder`]. [`Trace`] keeps the steps in the order they happened;
//! [`Discard`] drops them. Steps are built lazily through a closure, so a
//! discarded trace never formats a description.

use serde::{Deserialize, Serialize};

/// Which Playfair rule produced a digraph substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DigraphRule {
    SameRow,
    SameColumn,
    Rectangle,
}

impl DigraphRule {
    /// Short label used in step descriptions.
    pub fn label(&self) -> &'static str {
        match self {
            DigraphRule::SameRow => "Same row",
            DigraphRule::SameColumn => "Same column",
            DigraphRule::Rectangle => "Rectangle",
        }
    }
}

/// Structured data attached to a step, enough to redraw the explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepDetail {
    /// No structured data.
    None,
    /// One letter substituted through a rank formula.
    Letter {
        input: char,
        input_rank: u8,
        /// Key rank applied to this letter (shift, `b`, or key-stream letter).
        key_rank: u8,
        output_rank: u8,
        output: char,
    },
    /// One Playfair digraph, with grid coordinates as `(row, col)`.
    Digraph {
        input: [char; 2],
        positions: [(u8, u8); 2],
        rule: DigraphRule,
        output: [char; 2],
    },
    /// One Hill block, as rank vectors.
    Block { input: Vec<u8>, output: Vec<u8> },
}

/// A single, self-contained explanation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep {
    pub description: String,
    pub detail: StepDetail,
}

impl TraceStep {
    /// A step with a description and no structured data.
    pub fn note(description: impl Into<String>) -> Self {
        TraceStep {
            description: description.into(),
            detail: StepDetail::None,
        }
    }

    /// A step with structured data.
    pub fn with_detail(description: impl Into<String>, detail: StepDetail) -> Self {
        TraceStep {
            description: description.into(),
            detail,
        }
    }
}

/// Sink for trace steps produced during a transform.
pub trait Recorder {
    /// Appends the step produced by `step`. Implementations may skip
    /// calling `step` entirely.
    fn record<F>(&mut self, step: F)
    where
        F: FnOnce() -> TraceStep;
}

/// Ordered, append-only list of steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<TraceStep>,
}

impl Trace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps in recording order.
    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    /// Iterates over the step descriptions.
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|s| s.description.as_str())
    }

    /// Consumes the trace, returning its steps.
    pub fn into_steps(self) -> Vec<TraceStep> {
        self.steps
    }
}

impl Recorder for Trace {
    fn record<F>(&mut self, step: F)
    where
        F: FnOnce() -> TraceStep,
    {
        self.steps.push(step());
    }
}

impl IntoIterator for Trace {
    type Item = TraceStep;
    type IntoIter = std::vec::IntoIter<TraceStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

/// Recorder that throws every step away without building it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl Recorder for Discard {
    fn record<F>(&mut self, _step: F)
    where
        F: FnOnce() -> TraceStep,
    {
    }
}
