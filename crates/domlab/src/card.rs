//! Per-card sandbox state.

use zoon::Mutable;

use crate::lesson::{LessonRecord, lessons};
use crate::sandbox::{RunOutcome, SandboxRunner, ScriptHost};

/// State owned by one rendered lesson card and nothing else.
#[derive(Clone)]
pub struct CardState {
    pub index: usize,
    pub record: &'static LessonRecord,
    /// Current editor text; starts as the practice seed.
    pub editable_code: Mutable<String>,
    pub last_run_outcome: Mutable<RunOutcome>,
}

impl CardState {
    pub fn new(index: usize, record: &'static LessonRecord) -> Self {
        Self {
            index,
            record,
            editable_code: Mutable::new(record.practice_seed.to_string()),
            last_run_outcome: Mutable::new(RunOutcome::Idle),
        }
    }

    pub fn edit(&self, text: impl Into<String>) {
        self.editable_code.set_neq(text.into());
    }

    pub fn entrance_delay(&self) -> u32 {
        LessonRecord::entrance_delay(self.index)
    }

    /// Runs whatever the editor holds right now.
    pub fn run<H: ScriptHost>(&self, runner: &SandboxRunner<H>, target: &H::Target) -> RunOutcome {
        let code = self.editable_code.get_cloned();
        let outcome = runner.run(&code, target);
        self.last_run_outcome.set(outcome.clone());
        outcome
    }
}

/// One card per lesson, in presentation order.
pub fn deck() -> Vec<CardState> {
    lessons()
        .iter()
        .enumerate()
        .map(|(index, record)| CardState::new(index, record))
        .collect()
}
