//! The command interpreter
//!
//! Owns the image store and the verb registry, and runs the
//! parse/dispatch cycle: one line is parsed into a verb and operands,
//! validated against the registry, and executed against the store.
//! Scripted and interactive sessions share this cycle exactly; they
//! differ only in where lines come from and whether a prompt is
//! printed.
//!
//! A failed command reports its error and leaves the store exactly as
//! it was; the session continues unless the run was configured to
//! halt on the first error.

use crate::command::parse_line;
use crate::error::{ScriptError, ScriptResult};
use crate::registry::Registry;
use rasterlab_core::ImageStore;
use rasterlab_io::IoError;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use tracing::{debug, warn};

/// Nested `run` commands may only go this deep.
const MAX_SCRIPT_DEPTH: usize = 16;

/// Session-level settings, fixed for the lifetime of a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Abort a scripted run at the first failing command instead of
    /// reporting it and continuing. Interactive sessions always
    /// continue.
    pub halt_on_error: bool,
}

/// What the session should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Read the next command.
    Continue,
    /// End the session.
    Exit,
}

/// Write one report line to the session output.
pub(crate) fn emit(out: &mut dyn Write, line: &str) -> ScriptResult<()> {
    writeln!(out, "{line}").map_err(IoError::from)?;
    Ok(())
}

/// The controller: store + registry + run loop.
pub struct Interpreter {
    registry: Registry,
    store: ImageStore,
    options: Options,
    depth: usize,
}

impl Interpreter {
    /// Create an interpreter with an empty store.
    pub fn new(options: Options) -> Self {
        Self::with_store(ImageStore::new(), options)
    }

    /// Create an interpreter over an existing store.
    pub fn with_store(store: ImageStore, options: Options) -> Self {
        Interpreter {
            registry: Registry::standard(),
            store,
            options,
            depth: 0,
        }
    }

    /// The model.
    pub fn store(&self) -> &ImageStore {
        &self.store
    }

    /// Mutable access to the model.
    pub fn store_mut(&mut self) -> &mut ImageStore {
        &mut self.store
    }

    /// Session settings.
    pub fn options(&self) -> Options {
        self.options
    }

    /// Parse and dispatch one line.
    ///
    /// Blank and comment lines succeed with [`Outcome::Continue`] and
    /// no side effects. Errors are returned, not reported; the run
    /// loops own the reporting policy.
    pub fn execute_line(&mut self, line: &str, out: &mut dyn Write) -> ScriptResult<Outcome> {
        let Some(request) = parse_line(line) else {
            return Ok(Outcome::Continue);
        };
        let spec = self
            .registry
            .find(&request.verb)
            .ok_or_else(|| ScriptError::UnknownCommand(request.verb.clone()))?;
        if request.args.len() < spec.min_args || request.args.len() > spec.max_args {
            return Err(ScriptError::BadArity {
                verb: spec.verb,
                usage: spec.usage,
            });
        }
        debug!(verb = spec.verb, operands = request.args.len(), "dispatching");
        (spec.run)(self, &request.args, out)
    }

    /// Execute commands from a line source until it is exhausted or an
    /// `exit` command is reached.
    ///
    /// Failing commands are reported on `out`; with
    /// `Options::halt_on_error` set the first failure also aborts the
    /// run and is returned to the caller.
    pub fn run_lines<R: BufRead>(&mut self, reader: R, out: &mut dyn Write) -> ScriptResult<()> {
        for line in reader.lines() {
            let line = line.map_err(IoError::from)?;
            match self.execute_line(&line, out) {
                Ok(Outcome::Continue) => {}
                Ok(Outcome::Exit) => return Ok(()),
                Err(err) => {
                    warn!(error = %err, "command failed");
                    emit(out, &format!("error: {err}"))?;
                    if self.options.halt_on_error {
                        return Err(err);
                    }
                }
            }
        }
        Ok(())
    }

    /// Interactive session: prompt, read, dispatch, repeat until EOF
    /// or `exit`.
    ///
    /// Interactive sessions never halt on a failing command; the error
    /// is reported and the prompt returns.
    pub fn run_interactive<R: BufRead>(
        &mut self,
        mut input: R,
        out: &mut dyn Write,
    ) -> ScriptResult<()> {
        let mut line = String::new();
        loop {
            write!(out, "> ").map_err(IoError::from)?;
            out.flush().map_err(IoError::from)?;
            line.clear();
            if input.read_line(&mut line).map_err(IoError::from)? == 0 {
                return Ok(());
            }
            match self.execute_line(&line, out) {
                Ok(Outcome::Continue) => {}
                Ok(Outcome::Exit) => return Ok(()),
                Err(err) => {
                    warn!(error = %err, "command failed");
                    emit(out, &format!("error: {err}"))?;
                }
            }
        }
    }

    /// Execute a script file in the current session (the `run`
    /// command). Inherits the session's error policy.
    pub(crate) fn run_script(&mut self, path: &str, out: &mut dyn Write) -> ScriptResult<()> {
        if self.depth >= MAX_SCRIPT_DEPTH {
            return Err(ScriptError::NestingLimit(MAX_SCRIPT_DEPTH));
        }
        let file = File::open(path).map_err(IoError::from)?;
        self.depth += 1;
        let result = self.run_lines(BufReader::new(file), out);
        self.depth -= 1;
        result
    }
}
