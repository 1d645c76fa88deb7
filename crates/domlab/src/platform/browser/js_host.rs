//! Evaluates practice code as JavaScript in the page itself.
//!
//! The code is compiled with the `Function` constructor, so only `output` and
//! `console` are bound as parameters, but `document`, `window` and every other
//! global stay reachable. There is no isolation and no way to interrupt a
//! runaway loop.

use js_sys::{Array, Function, JSON, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::DomOutput;
use crate::sandbox::{Bindings, ExecutionFailure, LogArg, Logger, ScriptHost};

const PARAMETERS: [&str; 2] = ["output", "console"];

// `log` must accept any number of arguments, which a Rust closure cannot.
const CONSOLE_FACTORY: &str = "return { log: (...args) => sink(args) };";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_name = String)]
    fn js_string(value: &JsValue) -> String;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct JsHost;

impl ScriptHost for JsHost {
    type Target = DomOutput;

    fn execute(
        &self,
        code: &str,
        bindings: Bindings<DomOutput>,
    ) -> Result<(), ExecutionFailure> {
        let Bindings { output, console } = bindings;
        call_with_bindings(code, &output, console)
            .map_err(|error| ExecutionFailure::new(error_message(&error)))
    }
}

fn call_with_bindings(
    code: &str,
    output: &DomOutput,
    console: Logger<DomOutput>,
) -> Result<(), JsValue> {
    let function = compile(&PARAMETERS, code)?;
    let console = console_object(console)?;
    function.call2(&JsValue::UNDEFINED, output.element(), &console)?;
    Ok(())
}

/// `new Function(...parameters, body)`, with syntax errors returned instead of thrown.
fn compile(parameters: &[&str], body: &str) -> Result<Function, JsValue> {
    let constructor: Function = Reflect::get(&js_sys::global(), &"Function".into())?.dyn_into()?;
    let arguments: Array = parameters
        .iter()
        .copied()
        .chain([body])
        .map(JsValue::from_str)
        .collect();
    Reflect::construct(&constructor, &arguments)?.dyn_into()
}

fn console_object(logger: Logger<DomOutput>) -> Result<JsValue, JsValue> {
    // Lesson code keeps `console` inside event handlers, so the sink has to
    // outlive this run.
    let sink = Closure::<dyn Fn(Array) -> Result<(), JsValue>>::new(move |args: Array| {
        let args = args
            .iter()
            .map(|arg| log_arg(&arg))
            .collect::<Result<Vec<_>, _>>()?;
        logger.log(&args);
        Ok(())
    });
    compile(&["sink"], CONSOLE_FACTORY)?.call1(&JsValue::UNDEFINED, &sink.into_js_value())
}

/// Objects become a JSON dump, anything else goes through `String(value)`.
fn log_arg(value: &JsValue) -> Result<LogArg, JsValue> {
    if value.is_object() {
        let dump = JSON::stringify(value)?;
        Ok(LogArg::Structured(dump.as_string().unwrap_or_default()))
    } else {
        Ok(LogArg::Plain(js_string(value)))
    }
}

/// `String(error.message)`; thrown primitives have no message.
fn error_message(error: &JsValue) -> String {
    let message = if error.is_object() || error.is_function() {
        Reflect::get(error, &"message".into()).unwrap_or(JsValue::UNDEFINED)
    } else {
        JsValue::UNDEFINED
    };
    js_string(&message)
}
