//! Counterexamples for violated properties.
//!
//! A counterexample is the sequence of states leading to a violation,
//! plus the DST seed that reproduces it when one is known.

use std::fmt::Write;

/// One state in a counterexample trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSnapshot {
    /// Step number (1-based)
    pub step: u64,
    /// What happened at this step
    pub description: String,
    /// Named variable values at this step
    pub variables: Vec<(String, String)>,
}

/// Trace of states leading to a property violation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Counterexample {
    /// DST seed that reproduces this trace
    pub dst_seed: Option<u64>,
    /// States in order
    pub states: Vec<StateSnapshot>,
}

impl Counterexample {
    /// Create an empty counterexample with no seed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty counterexample reproducible via `seed`.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            dst_seed: Some(seed),
            states: Vec::new(),
        }
    }

    /// Append a state to the trace.
    pub fn add_state(&mut self, state: StateSnapshot) {
        debug_assert!(state.step > 0, "Step must be positive");
        debug_assert!(
            self.states.last().map_or(true, |last| last.step <= state.step),
            "States must be added in step order"
        );
        self.states.push(state);
    }

    /// Render the trace as a vertical step diagram.
    #[must_use]
    pub fn render_diagram(&self) -> String {
        let mut out = String::new();

        if let Some(seed) = self.dst_seed {
            let _ = writeln!(out, "Reproduce with DST_SEED={}", seed);
        }

        for (i, state) in self.states.iter().enumerate() {
            let _ = writeln!(out, "  [{}] {}", state.step, state.description);
            for (name, value) in &state.variables {
                let _ = writeln!(out, "      {} = {}", name, value);
            }
            if i + 1 < self.states.len() {
                out.push_str("   |\n");
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_without_seed() {
        let mut ce = Counterexample::new();
        ce.add_state(StateSnapshot {
            step: 1,
            description: "push (1, 2)".to_string(),
            variables: vec![("size".to_string(), "1".to_string())],
        });
        ce.add_state(StateSnapshot {
            step: 2,
            description: "pop".to_string(),
            variables: Vec::new(),
        });

        let diagram = ce.render_diagram();
        assert!(!diagram.contains("DST_SEED"));
        assert!(diagram.contains("[1] push (1, 2)"));
        assert!(diagram.contains("size = 1"));
        assert!(diagram.contains("[2] pop"));
    }

    #[test]
    fn test_render_with_seed() {
        let ce = Counterexample::with_seed(12345);
        assert!(ce.render_diagram().starts_with("Reproduce with DST_SEED=12345"));
    }
}
