//! Property verification types.
//!
//! Every invariant checked against a stack produces a `PropertyResult`.
//! A failing result names the operation step at which the violation was
//! observed, so a report can point straight at the first bad step of a
//! recorded run.

use std::fmt::Write;

use crate::counterexample::Counterexample;

/// Result of checking a single property.
#[derive(Debug, Clone)]
pub struct PropertyResult {
    /// Property name (e.g., "SizeMatchesChain")
    pub name: &'static str,

    /// Whether the property holds
    pub holds: bool,

    /// Description of violation if property doesn't hold
    pub violation: Option<String>,

    /// Operation step (1-based) at which the violation was observed
    pub step: Option<u64>,

    /// Trace reproducing the violation
    pub counterexample: Option<Counterexample>,
}

impl PropertyResult {
    /// Create a passing property result.
    #[must_use]
    pub fn pass(name: &'static str) -> Self {
        debug_assert!(!name.is_empty(), "Property name must not be empty");

        Self {
            name,
            holds: true,
            violation: None,
            step: None,
            counterexample: None,
        }
    }

    /// Create a failing property result.
    ///
    /// The step defaults to the last state of the counterexample, if any.
    #[must_use]
    pub fn fail(
        name: &'static str,
        violation: String,
        counterexample: Option<Counterexample>,
    ) -> Self {
        debug_assert!(!name.is_empty(), "Property name must not be empty");
        debug_assert!(!violation.is_empty(), "Violation description must not be empty");

        let step = counterexample
            .as_ref()
            .and_then(|ce| ce.states.last())
            .map(|state| state.step);

        Self {
            name,
            holds: false,
            violation: Some(violation),
            step,
            counterexample,
        }
    }

    /// Pin a failing result to the step where it was observed.
    #[must_use]
    pub fn at_step(mut self, step: u64) -> Self {
        debug_assert!(!self.holds, "Only violations carry a step");
        debug_assert!(step > 0, "Step must be positive");
        self.step = Some(step);
        self
    }

    /// Single-line status, e.g. `ok LifoOrder` or
    /// `VIOLATED LifoOrder @ step 7: pop returned (1, 1) ...`.
    #[must_use]
    pub fn format_status(&self) -> String {
        if self.holds {
            return format!("ok {}", self.name);
        }

        let mut line = format!("VIOLATED {}", self.name);
        if let Some(step) = self.step {
            let _ = write!(line, " @ step {}", step);
        }
        let _ = write!(
            line,
            ": {}",
            self.violation.as_deref().unwrap_or("no description")
        );
        line
    }
}

/// A set of invariants evaluated together against one state.
pub trait PropertyChecker {
    /// Evaluate every invariant, holding or not, in a fixed order.
    fn check_all(&self) -> Vec<PropertyResult>;

    /// Only the violated invariants.
    fn violations(&self) -> Vec<PropertyResult> {
        self.check_all().into_iter().filter(|r| !r.holds).collect()
    }

    /// `Err` with the earliest violation by step; unstepped violations
    /// sort after stepped ones, in check order.
    fn verify_all(&self) -> Result<(), PropertyResult> {
        match earliest(self.violations()) {
            Some(first) => Err(first),
            None => Ok(()),
        }
    }

    fn all_hold(&self) -> bool {
        self.violations().is_empty()
    }

    fn summary(&self) -> PropertySummary {
        PropertySummary::from_results(self.check_all())
    }
}

fn earliest(violations: Vec<PropertyResult>) -> Option<PropertyResult> {
    violations
        .into_iter()
        .enumerate()
        .min_by_key(|(index, r)| (r.step.unwrap_or(u64::MAX), *index))
        .map(|(_, r)| r)
}

/// Outcome of one `check_all` pass.
#[derive(Debug, Clone)]
pub struct PropertySummary {
    /// Invariants that hold
    pub holding: u64,
    /// Invariants that are violated
    pub violated: u64,
    /// Individual results, in check order
    pub results: Vec<PropertyResult>,
}

impl PropertySummary {
    /// Tally a batch of results.
    #[must_use]
    pub fn from_results(results: Vec<PropertyResult>) -> Self {
        let holding = results.iter().filter(|r| r.holds).count() as u64;
        let violated = results.len() as u64 - holding;

        Self {
            holding,
            violated,
            results,
        }
    }

    /// Violation with the lowest step.
    #[must_use]
    pub fn first_violation(&self) -> Option<&PropertyResult> {
        self.results
            .iter()
            .enumerate()
            .filter(|(_, r)| !r.holds)
            .min_by_key(|(index, r)| (r.step.unwrap_or(u64::MAX), *index))
            .map(|(_, r)| r)
    }

    /// Multi-line report: a header naming the first bad step, one line per
    /// invariant, then the trace of the first violation.
    #[must_use]
    pub fn format_report(&self) -> String {
        let total = self.holding + self.violated;
        let mut report = match self.first_violation() {
            None => format!("Invariants: all {} hold\n", total),
            Some(first) => {
                let location = match first.step {
                    Some(step) => format!("step {}", step),
                    None => "final state".to_string(),
                };
                format!(
                    "Invariants: {} of {} hold; first violation at {} ({})\n",
                    self.holding, total, location, first.name
                )
            }
        };

        for result in &self.results {
            report.push_str("  ");
            report.push_str(&result.format_status());
            report.push('\n');
        }

        if let Some(ce) = self.first_violation().and_then(|r| r.counterexample.as_ref()) {
            report.push_str("\nTrace:\n");
            report.push_str(&ce.render_diagram());
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::counterexample::StateSnapshot;

    struct FixedChecker(Vec<PropertyResult>);

    impl PropertyChecker for FixedChecker {
        fn check_all(&self) -> Vec<PropertyResult> {
            self.0.clone()
        }
    }

    fn trace_to(step: u64) -> Counterexample {
        let mut ce = Counterexample::with_seed(99);
        ce.add_state(StateSnapshot {
            step,
            description: "pop returned (1, 1)".to_string(),
            variables: vec![("expected".to_string(), "(2, 2)".to_string())],
        });
        ce
    }

    #[test]
    fn test_pass_has_no_step() {
        let result = PropertyResult::pass("SizeMatchesChain");
        assert!(result.holds);
        assert!(result.violation.is_none());
        assert!(result.step.is_none());
        assert_eq!(result.format_status(), "ok SizeMatchesChain");
    }

    #[test]
    fn test_fail_takes_step_from_trace() {
        let result = PropertyResult::fail("LifoOrder", "bad pop".to_string(), Some(trace_to(7)));
        assert!(!result.holds);
        assert_eq!(result.step, Some(7));
        assert_eq!(result.format_status(), "VIOLATED LifoOrder @ step 7: bad pop");
    }

    #[test]
    fn test_at_step_overrides() {
        let result = PropertyResult::fail("SizeMatchesChain", "size 3, 2 nodes".to_string(), None);
        assert_eq!(result.format_status(), "VIOLATED SizeMatchesChain: size 3, 2 nodes");

        let result = result.at_step(4);
        assert_eq!(result.step, Some(4));
        assert!(result.format_status().contains("@ step 4"));
    }

    #[test]
    fn test_verify_all_returns_earliest_step() {
        let checker = FixedChecker(vec![
            PropertyResult::pass("A"),
            PropertyResult::fail("B", "b broke".to_string(), None).at_step(9),
            PropertyResult::fail("C", "c broke".to_string(), None),
            PropertyResult::fail("D", "d broke".to_string(), None).at_step(3),
        ]);

        assert!(!checker.all_hold());
        assert_eq!(checker.violations().len(), 3);
        assert_eq!(checker.verify_all().unwrap_err().name, "D");
    }

    #[test]
    fn test_unstepped_violations_keep_check_order() {
        let checker = FixedChecker(vec![
            PropertyResult::fail("B", "b broke".to_string(), None),
            PropertyResult::fail("C", "c broke".to_string(), None),
        ]);
        assert_eq!(checker.verify_all().unwrap_err().name, "B");
    }

    #[test]
    fn test_report_for_clean_run() {
        let checker = FixedChecker(vec![PropertyResult::pass("A"), PropertyResult::pass("B")]);
        assert!(checker.verify_all().is_ok());

        let report = checker.summary().format_report();
        assert!(report.starts_with("Invariants: all 2 hold\n"));
        assert!(!report.contains("Trace:"));
    }

    #[test]
    fn test_report_names_first_bad_step() {
        let checker = FixedChecker(vec![
            PropertyResult::pass("SizeMatchesChain"),
            PropertyResult::fail("ContentsMatchHistory", "lost (2, 2)".to_string(), None)
                .at_step(12),
            PropertyResult::fail("LifoOrder", "bad pop".to_string(), Some(trace_to(5))),
        ]);

        let summary = checker.summary();
        assert_eq!(summary.holding, 1);
        assert_eq!(summary.violated, 2);
        assert_eq!(summary.first_violation().map(|r| r.name), Some("LifoOrder"));

        let report = summary.format_report();
        assert!(report.starts_with(
            "Invariants: 1 of 3 hold; first violation at step 5 (LifoOrder)\n"
        ));
        assert!(report.contains("  ok SizeMatchesChain\n"));
        assert!(report.contains("Trace:"));
        assert!(report.contains("DST_SEED=99"));
    }
}
