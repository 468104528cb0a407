//! Linear step wizard: personal → education → experience → skills →
//! projects → finish.
//!
//! The single navigational invariant: a direct jump may only target the
//! current step or an earlier one. Skipping ahead is refused no matter where
//! the request comes from. `next`/`back` clamp at the ends instead of
//! wrapping or erroring.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Personal,
    Education,
    Experience,
    Skills,
    Projects,
    Finish,
}

impl Step {
    /// All steps in wizard order.
    pub const ALL: [Step; 6] = [
        Step::Personal,
        Step::Education,
        Step::Experience,
        Step::Skills,
        Step::Projects,
        Step::Finish,
    ];

    pub fn index(self) -> usize {
        Step::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::Personal => "Personal",
            Step::Education => "Education",
            Step::Experience => "Experience",
            Step::Skills => "Skills",
            Step::Projects => "Projects",
            Step::Finish => "Finish",
        }
    }

    pub fn is_first(self) -> bool {
        self == Step::Personal
    }

    /// The terminal step. There is no "next" beyond it — finishing triggers
    /// export instead.
    pub fn is_last(self) -> bool {
        self == Step::Finish
    }
}

/// Tracks the wizard position. Only the current step is kept — there is no
/// history and no branching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepController {
    current: Step,
}

impl Default for StepController {
    fn default() -> Self {
        Self::new()
    }
}

impl StepController {
    pub fn new() -> Self {
        Self {
            current: Step::Personal,
        }
    }

    pub fn current(&self) -> Step {
        self.current
    }

    /// Advances one step; no-op at the terminal step.
    pub fn next(&mut self) {
        let idx = self.current.index();
        if idx + 1 < Step::ALL.len() {
            self.current = Step::ALL[idx + 1];
        }
    }

    /// Retreats one step; no-op at the first step.
    pub fn back(&mut self) {
        let idx = self.current.index();
        if idx > 0 {
            self.current = Step::ALL[idx - 1];
        }
    }

    /// Jumps directly to `step` if it is at or before the current step.
    /// Forward jumps are refused. Returns whether the jump happened.
    pub fn jump_to(&mut self, step: Step) -> bool {
        if step.index() <= self.current.index() {
            self.current = step;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_personal() {
        assert_eq!(StepController::new().current(), Step::Personal);
    }

    #[test]
    fn test_next_walks_the_full_sequence() {
        let mut c = StepController::new();
        let mut seen = vec![c.current()];
        for _ in 0..5 {
            c.next();
            seen.push(c.current());
        }
        assert_eq!(seen, Step::ALL.to_vec());
    }

    #[test]
    fn test_next_noop_at_finish() {
        let mut c = StepController::new();
        for _ in 0..10 {
            c.next();
        }
        assert_eq!(c.current(), Step::Finish);
    }

    #[test]
    fn test_back_noop_at_personal() {
        let mut c = StepController::new();
        c.back();
        assert_eq!(c.current(), Step::Personal);
    }

    #[test]
    fn test_jump_backward_allowed() {
        let mut c = StepController::new();
        c.next();
        c.next();
        c.next(); // Skills
        assert!(c.jump_to(Step::Education));
        assert_eq!(c.current(), Step::Education);
    }

    #[test]
    fn test_jump_to_current_allowed() {
        let mut c = StepController::new();
        c.next(); // Education
        assert!(c.jump_to(Step::Education));
        assert_eq!(c.current(), Step::Education);
    }

    #[test]
    fn test_jump_forward_refused() {
        let mut c = StepController::new();
        c.next(); // Education
        assert!(!c.jump_to(Step::Projects));
        assert_eq!(c.current(), Step::Education);
    }

    #[test]
    fn test_jump_never_increases_index() {
        // Property from the contract: after any jump_to, the index is <= the
        // index before the call.
        let mut c = StepController::new();
        c.next();
        c.next(); // Experience
        let before = c.current().index();
        for step in Step::ALL {
            let mut probe = c.clone();
            probe.jump_to(step);
            assert!(probe.current().index() <= before);
        }
    }

    #[test]
    fn test_going_back_restricts_forward_jumps() {
        // After retreating, the previously-visited step is no longer a legal
        // jump target — only next() can reach it again.
        let mut c = StepController::new();
        c.next();
        c.next(); // Experience
        c.back(); // Education
        assert!(!c.jump_to(Step::Experience));
        assert_eq!(c.current(), Step::Education);
    }

    #[test]
    fn test_labels_and_order() {
        let labels: Vec<_> = Step::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec!["Personal", "Education", "Experience", "Skills", "Projects", "Finish"]
        );
        assert!(Step::Personal.is_first());
        assert!(Step::Finish.is_last());
    }
}
