//! In-memory stand-ins for the browser, used to drive the sandbox in tests.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::sandbox::{Bindings, ExecutionFailure, OutputRegion, ScriptHost, VisualState};

#[derive(Default)]
struct MemoryContent {
    lines: Vec<String>,
    visual_state: VisualState,
    state_history: Vec<VisualState>,
}

/// Output region that records lines and visual states.
#[derive(Clone, Default)]
pub struct MemoryOutput {
    content: Rc<RefCell<MemoryContent>>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.content.borrow().lines.clone()
    }

    pub fn visual_state(&self) -> VisualState {
        self.content.borrow().visual_state
    }

    /// Every state set since creation, oldest first.
    pub fn state_history(&self) -> Vec<VisualState> {
        self.content.borrow().state_history.clone()
    }
}

impl OutputRegion for MemoryOutput {
    fn clear(&self) {
        self.content.borrow_mut().lines.clear();
    }

    fn push_line(&self, line: &str) {
        self.content.borrow_mut().lines.push(line.to_string());
    }

    fn set_visual_state(&self, state: VisualState) {
        let mut content = self.content.borrow_mut();
        content.visual_state = state;
        content.state_history.push(state);
    }
}

type Script = Box<dyn Fn(&Bindings<MemoryOutput>) -> Result<(), ExecutionFailure>>;

/// Host that maps exact program texts to Rust closures.
///
/// Unknown texts fail like an undefined identifier would.
#[derive(Default)]
pub struct ScriptedHost {
    scripts: BTreeMap<String, Script>,
    executed: RefCell<Vec<String>>,
}

impl ScriptedHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(
        mut self,
        code: &str,
        script: impl Fn(&Bindings<MemoryOutput>) -> Result<(), ExecutionFailure> + 'static,
    ) -> Self {
        self.scripts.insert(code.to_string(), Box::new(script));
        self
    }

    /// Program texts received by `execute`, in call order.
    pub fn executed(&self) -> Vec<String> {
        self.executed.borrow().clone()
    }
}

impl ScriptHost for ScriptedHost {
    type Target = MemoryOutput;

    fn execute(
        &self,
        code: &str,
        bindings: Bindings<MemoryOutput>,
    ) -> Result<(), ExecutionFailure> {
        self.executed.borrow_mut().push(code.to_string());
        match self.scripts.get(code) {
            Some(script) => script(&bindings),
            None => {
                let name = code.split(['(', ' ', '.']).next().unwrap_or(code);
                Err(ExecutionFailure::new(format!("{name} is not defined")))
            }
        }
    }
}
