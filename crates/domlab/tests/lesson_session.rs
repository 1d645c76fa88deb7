//! A whole page session driven through in-memory outputs.

use domlab::card::deck;
use domlab::sandbox::{ExecutionFailure, LogArg, RunOutcome, SandboxRunner, VisualState};
use domlab::test_harness::{MemoryOutput, ScriptedHost};

fn text(value: &str) -> LogArg {
    LogArg::Plain(value.to_string())
}

#[test]
fn cards_run_independently() {
    let host = ScriptedHost::new()
        .script("console.log('Page title:', document.title)", |bindings| {
            bindings.console.log(&[text("Page title:"), text("DOM Practice")]);
            Ok(())
        })
        .script("throw new Error('boom')", |_| {
            Err(ExecutionFailure::new("boom"))
        });
    let runner = SandboxRunner::new(host);
    let cards = deck();
    let outputs: Vec<_> = cards.iter().map(|_| MemoryOutput::new()).collect();

    cards[0].edit("console.log('Page title:', document.title)");
    cards[1].edit("throw new Error('boom')");
    cards[0].run(&runner, &outputs[0]);
    cards[1].run(&runner, &outputs[1]);

    assert_eq!(outputs[0].lines(), ["Page title: DOM Practice"]);
    assert_eq!(outputs[0].visual_state(), VisualState::Success);
    assert_eq!(outputs[1].lines(), ["Error: boom"]);
    assert_eq!(outputs[1].visual_state(), VisualState::Error);

    // Untouched cards stay idle.
    for (card, output) in cards.iter().zip(&outputs).skip(2) {
        assert_eq!(*card.last_run_outcome.lock_ref(), RunOutcome::Idle);
        assert!(output.lines().is_empty());
        assert!(output.state_history().is_empty());
    }
}

#[test]
fn rapid_reruns_of_one_card_own_their_output() {
    let host = ScriptedHost::new().script("console.log(1, {})", |bindings| {
        bindings
            .console
            .log(&[text("1"), LogArg::Structured("{}".to_string())]);
        Ok(())
    });
    let runner = SandboxRunner::new(host);
    let cards = deck();
    let output = MemoryOutput::new();

    cards[3].edit("console.log(1, {})");
    for _ in 0..5 {
        assert_eq!(cards[3].run(&runner, &output), RunOutcome::Success);
    }

    assert_eq!(output.lines(), ["1 {}"]);
    assert_eq!(runner.host().executed().len(), 5);
}

#[test]
fn editing_back_to_a_broken_program_reports_again() {
    let runner = SandboxRunner::new(ScriptedHost::new().script("fine", |_| Ok(())));
    let card = deck().remove(4);
    let output = MemoryOutput::new();

    card.edit("missing()");
    card.run(&runner, &output);
    card.edit("fine");
    card.run(&runner, &output);
    card.edit("missing()");
    let outcome = card.run(&runner, &output);

    assert_eq!(outcome, RunOutcome::Failure("missing is not defined".to_string()));
    assert_eq!(output.lines(), ["Error: missing is not defined"]);
    assert_eq!(
        runner.host().executed(),
        ["missing()", "fine", "missing()"]
    );
}
