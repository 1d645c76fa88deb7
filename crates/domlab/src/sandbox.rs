//! Runs user-supplied practice code against one output region.
//!
//! Executed code sees exactly two names: `output`, the region itself, and
//! `console`, whose `log` renders one line per call into that region. What
//! else the code can reach depends on the [`ScriptHost`]; the browser host
//! gives it the whole page (see `platform::browser::JsHost`).

/// Result of the most recent activation of a card's run control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RunOutcome {
    #[default]
    Idle,
    Success,
    Failure(String),
}

impl RunOutcome {
    pub fn visual_state(&self) -> VisualState {
        match self {
            Self::Idle => VisualState::Neutral,
            Self::Success => VisualState::Success,
            Self::Failure(_) => VisualState::Error,
        }
    }
}

/// Styling state of an output region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisualState {
    #[default]
    Neutral,
    Success,
    Error,
}

impl VisualState {
    /// Class added next to `output`; empty for the neutral state.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Neutral => "",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Any parse or runtime fault raised by executed code.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Error: {message}")]
pub struct ExecutionFailure {
    pub message: String,
}

impl ExecutionFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One argument passed to `console.log`, already converted to text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogArg {
    /// Object rendered as a JSON-style dump.
    Structured(String),
    /// Any other value in its default string form.
    Plain(String),
}

impl LogArg {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Structured(text) | Self::Plain(text) => text,
        }
    }
}

pub fn format_log_line(args: &[LogArg]) -> String {
    args.iter().map(LogArg::as_str).collect::<Vec<_>>().join(" ")
}

/// Where a run writes what it produces.
///
/// Implementations are cheap handles; clones refer to the same region.
pub trait OutputRegion: Clone + 'static {
    /// Remove everything previously rendered.
    fn clear(&self);

    /// Append one line of text.
    fn push_line(&self, line: &str);

    /// Replace the whole content with a single text line.
    fn show_error(&self, line: &str) {
        self.clear();
        self.push_line(line);
    }

    fn set_visual_state(&self, state: VisualState);
}

/// The `console` binding handed to executed code.
#[derive(Clone)]
pub struct Logger<T> {
    target: T,
}

impl<T: OutputRegion> Logger<T> {
    pub fn new(target: T) -> Self {
        Self { target }
    }

    pub fn log(&self, args: &[LogArg]) {
        self.target.push_line(&format_log_line(args));
    }
}

/// The only names visible to executed code.
#[derive(Clone)]
pub struct Bindings<T> {
    pub output: T,
    pub console: Logger<T>,
}

impl<T: OutputRegion> Bindings<T> {
    pub fn new(target: T) -> Self {
        Self {
            console: Logger::new(target.clone()),
            output: target,
        }
    }
}

/// Something able to evaluate program text with the two bindings in scope.
pub trait ScriptHost {
    type Target: OutputRegion;

    fn execute(&self, code: &str, bindings: Bindings<Self::Target>)
    -> Result<(), ExecutionFailure>;
}

pub struct SandboxRunner<H> {
    host: H,
}

impl<H: ScriptHost> SandboxRunner<H> {
    pub fn new(host: H) -> Self {
        Self { host }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Executes `code` synchronously. Failures stay inside this call.
    pub fn run(&self, code: &str, target: &H::Target) -> RunOutcome {
        target.clear();
        target.set_visual_state(VisualState::Neutral);
        match self.host.execute(code, Bindings::new(target.clone())) {
            Ok(()) => {
                target.set_visual_state(VisualState::Success);
                RunOutcome::Success
            }
            Err(failure) => {
                target.set_visual_state(VisualState::Error);
                target.show_error(&failure.to_string());
                RunOutcome::Failure(failure.message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_harness::{MemoryOutput, ScriptedHost};

    fn plain(text: &str) -> LogArg {
        LogArg::Plain(text.to_string())
    }

    #[test]
    fn test_log_arguments_are_joined_with_one_space() {
        let line = format_log_line(&[plain("Page title:"), plain("DOM Practice")]);
        assert_eq!(line, "Page title: DOM Practice");
    }

    #[test]
    fn test_structured_arguments_keep_their_dump() {
        let line = format_log_line(&[
            plain("Selected element:"),
            LogArg::Structured(r#"{"id":"demoElement"}"#.to_string()),
            plain("42"),
        ]);
        assert_eq!(line, r#"Selected element: {"id":"demoElement"} 42"#);
    }

    #[test]
    fn test_log_without_arguments_is_an_empty_line() {
        assert_eq!(format_log_line(&[]), "");
    }

    #[test]
    fn test_failure_display_has_error_prefix() {
        let failure = ExecutionFailure::new("x is not defined");
        assert_eq!(failure.to_string(), "Error: x is not defined");
    }

    #[test]
    fn test_successful_run_keeps_logged_lines() {
        let host = ScriptedHost::new().script("log-title", |bindings| {
            bindings
                .console
                .log(&[plain("Page title:"), plain("DOM Practice")]);
            Ok(())
        });
        let runner = SandboxRunner::new(host);
        let output = MemoryOutput::new();

        let outcome = runner.run("log-title", &output);

        assert_eq!(outcome, RunOutcome::Success);
        assert_eq!(output.lines(), ["Page title: DOM Practice"]);
        assert_eq!(output.visual_state(), VisualState::Success);
    }

    #[test]
    fn test_failed_run_replaces_content_with_error_line() {
        let host = ScriptedHost::new().script("half-done", |bindings| {
            bindings.console.log(&[plain("before the fault")]);
            Err(ExecutionFailure::new("x is not defined"))
        });
        let runner = SandboxRunner::new(host);
        let output = MemoryOutput::new();

        let outcome = runner.run("half-done", &output);

        assert_eq!(outcome, RunOutcome::Failure("x is not defined".to_string()));
        assert_eq!(output.lines(), ["Error: x is not defined"]);
        assert_eq!(output.visual_state(), VisualState::Error);
    }

    #[test]
    fn test_direct_output_writes_are_preserved() {
        let host = ScriptedHost::new().script("append", |bindings| {
            bindings.output.push_line("<p>Created dynamically!</p>");
            Ok(())
        });
        let runner = SandboxRunner::new(host);
        let output = MemoryOutput::new();

        runner.run("append", &output);

        assert_eq!(output.lines(), ["<p>Created dynamically!</p>"]);
        assert_eq!(output.visual_state(), VisualState::Success);
    }

    #[test]
    fn test_silent_success_leaves_region_empty() {
        let runner = SandboxRunner::new(ScriptedHost::new().script("noop", |_| Ok(())));
        let output = MemoryOutput::new();
        output.push_line("stale");

        assert_eq!(runner.run("noop", &output), RunOutcome::Success);
        assert!(output.lines().is_empty());
        assert_eq!(output.visual_state(), VisualState::Success);
    }

    #[test]
    fn test_repeated_runs_render_identically() {
        let host = ScriptedHost::new().script("twice", |bindings| {
            bindings.console.log(&[plain("a"), plain("b")]);
            bindings.console.log(&[plain("c")]);
            Ok(())
        });
        let runner = SandboxRunner::new(host);
        let output = MemoryOutput::new();

        runner.run("twice", &output);
        let first = output.lines();
        runner.run("twice", &output);

        assert_eq!(output.lines(), first);
        assert_eq!(first, ["a b", "c"]);
    }

    #[test]
    fn test_error_state_is_reset_by_next_run() {
        let host = ScriptedHost::new().script("ok", |_| Ok(()));
        let runner = SandboxRunner::new(host);
        let output = MemoryOutput::new();

        runner.run("unknownFunction()", &output);
        assert_eq!(output.visual_state(), VisualState::Error);

        runner.run("ok", &output);
        assert_eq!(output.visual_state(), VisualState::Success);
        assert!(output.lines().is_empty());
        assert_eq!(
            output.state_history(),
            [
                VisualState::Neutral,
                VisualState::Error,
                VisualState::Neutral,
                VisualState::Success,
            ]
        );
    }

    #[test]
    fn test_outcome_maps_to_visual_state() {
        assert_eq!(RunOutcome::Idle.visual_state(), VisualState::Neutral);
        assert_eq!(RunOutcome::Success.visual_state().class_name(), "success");
        assert_eq!(
            RunOutcome::Failure("boom".to_string()).visual_state().class_name(),
            "error"
        );
    }
}
