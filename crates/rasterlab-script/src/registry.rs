//! Command registry
//!
//! Dispatch is a flat table: one [`CommandSpec`] per verb carrying the
//! operand arity range, a usage string, and a handler function. No
//! class-per-command hierarchy; operand validation happens in the
//! handler with typed parses.

use crate::error::{ScriptError, ScriptResult};
use crate::histogram_view;
use crate::interpreter::{Interpreter, Outcome, emit};
use rasterlab_core::{Channel, Image};
use rasterlab_ops as ops;
use std::io::Write;
use std::str::FromStr;

/// Handler signature shared by every command.
pub type Handler = fn(&mut Interpreter, &[String], &mut dyn Write) -> ScriptResult<Outcome>;

/// One registry row: verb, operand arity, usage, handler.
#[derive(Clone, Copy)]
pub struct CommandSpec {
    pub verb: &'static str,
    pub min_args: usize,
    pub max_args: usize,
    pub usage: &'static str,
    pub run: Handler,
}

/// The verb → command table.
pub struct Registry {
    specs: Vec<CommandSpec>,
}

impl Registry {
    /// The full standard command surface.
    pub fn standard() -> Self {
        let specs = vec![
            CommandSpec {
                verb: "load",
                min_args: 2,
                max_args: 2,
                usage: "load <path> <name>",
                run: cmd_load,
            },
            CommandSpec {
                verb: "save",
                min_args: 2,
                max_args: 2,
                usage: "save <name> <path>",
                run: cmd_save,
            },
            CommandSpec {
                verb: "remove",
                min_args: 1,
                max_args: 1,
                usage: "remove <name>",
                run: cmd_remove,
            },
            CommandSpec {
                verb: "list",
                min_args: 0,
                max_args: 0,
                usage: "list",
                run: cmd_list,
            },
            CommandSpec {
                verb: "greyscale",
                min_args: 2,
                max_args: 3,
                usage: "greyscale <src> [mask] <dest>",
                run: cmd_greyscale,
            },
            CommandSpec {
                verb: "sepia",
                min_args: 2,
                max_args: 3,
                usage: "sepia <src> [mask] <dest>",
                run: cmd_sepia,
            },
            CommandSpec {
                verb: "component",
                min_args: 3,
                max_args: 3,
                usage: "component <src> <red|green|blue> <dest>",
                run: cmd_component,
            },
            CommandSpec {
                verb: "brighten",
                min_args: 3,
                max_args: 3,
                usage: "brighten <src> <delta> <dest>",
                run: cmd_brighten,
            },
            CommandSpec {
                verb: "blur",
                min_args: 2,
                max_args: 3,
                usage: "blur <src> [mask] <dest>",
                run: cmd_blur,
            },
            CommandSpec {
                verb: "sharpen",
                min_args: 2,
                max_args: 3,
                usage: "sharpen <src> [mask] <dest>",
                run: cmd_sharpen,
            },
            CommandSpec {
                verb: "levels",
                min_args: 5,
                max_args: 5,
                usage: "levels <src> <black> <mid> <white> <dest>",
                run: cmd_levels,
            },
            CommandSpec {
                verb: "compress",
                min_args: 3,
                max_args: 3,
                usage: "compress <src> <percent> <dest>",
                run: cmd_compress,
            },
            CommandSpec {
                verb: "downscale",
                min_args: 4,
                max_args: 4,
                usage: "downscale <src> <width> <height> <dest>",
                run: cmd_downscale,
            },
            CommandSpec {
                verb: "split",
                min_args: 4,
                max_args: 4,
                usage: "split <src> <destR> <destG> <destB>",
                run: cmd_split,
            },
            CommandSpec {
                verb: "combine",
                min_args: 4,
                max_args: 4,
                usage: "combine <srcR> <srcG> <srcB> <dest>",
                run: cmd_combine,
            },
            CommandSpec {
                verb: "histogram",
                min_args: 2,
                max_args: 2,
                usage: "histogram <src> <dest>",
                run: cmd_histogram,
            },
            CommandSpec {
                verb: "run",
                min_args: 1,
                max_args: 1,
                usage: "run <scriptpath>",
                run: cmd_run,
            },
            CommandSpec {
                verb: "exit",
                min_args: 0,
                max_args: 0,
                usage: "exit",
                run: cmd_exit,
            },
            CommandSpec {
                verb: "quit",
                min_args: 0,
                max_args: 0,
                usage: "quit",
                run: cmd_exit,
            },
        ];
        Registry { specs }
    }

    /// Look up a verb.
    pub fn find(&self, verb: &str) -> Option<CommandSpec> {
        self.specs.iter().copied().find(|s| s.verb == verb)
    }

    /// All registered commands.
    pub fn specs(&self) -> &[CommandSpec] {
        &self.specs
    }
}

/// Parse one typed operand, mapping failures to a usage-level error.
fn parse_operand<T: FromStr>(verb: &'static str, what: &str, token: &str) -> ScriptResult<T> {
    token.parse().map_err(|_| ScriptError::BadOperand {
        verb,
        message: format!("{what} \"{token}\" is not valid"),
    })
}

/// Shared path for the unary image ops that accept an optional mask:
/// run `op` over the whole source, then merge through the mask if one
/// was named. The store is only written after the whole pipeline
/// succeeded.
fn unary_masked(
    interp: &mut Interpreter,
    args: &[String],
    op: fn(&Image) -> Image,
) -> ScriptResult<Outcome> {
    let (src, mask, dest) = match args {
        [s, d] => (s, None, d),
        [s, m, d] => (s, Some(m), d),
        _ => unreachable!("arity checked by dispatch"),
    };
    let source = interp.store().get(src)?;
    let processed = op(&source);
    let result = match mask {
        None => processed,
        Some(m) => {
            let mask_img = interp.store().get(m)?;
            ops::apply_with_mask(&source, &mask_img, &processed)?
        }
    };
    interp.store_mut().insert(dest, result)?;
    Ok(Outcome::Continue)
}

fn cmd_load(interp: &mut Interpreter, args: &[String], _out: &mut dyn Write) -> ScriptResult<Outcome> {
    let img = rasterlab_io::read_image(&args[0])?;
    interp.store_mut().insert(&args[1], img)?;
    Ok(Outcome::Continue)
}

fn cmd_save(interp: &mut Interpreter, args: &[String], _out: &mut dyn Write) -> ScriptResult<Outcome> {
    let img = interp.store().get(&args[0])?;
    rasterlab_io::write_image(&img, &args[1])?;
    Ok(Outcome::Continue)
}

fn cmd_remove(interp: &mut Interpreter, args: &[String], _out: &mut dyn Write) -> ScriptResult<Outcome> {
    interp.store_mut().remove(&args[0]);
    Ok(Outcome::Continue)
}

fn cmd_list(interp: &mut Interpreter, _args: &[String], out: &mut dyn Write) -> ScriptResult<Outcome> {
    for name in interp.store().names() {
        emit(out, &name)?;
    }
    Ok(Outcome::Continue)
}

fn cmd_greyscale(interp: &mut Interpreter, args: &[String], _out: &mut dyn Write) -> ScriptResult<Outcome> {
    unary_masked(interp, args, ops::greyscale)
}

fn cmd_sepia(interp: &mut Interpreter, args: &[String], _out: &mut dyn Write) -> ScriptResult<Outcome> {
    unary_masked(interp, args, ops::sepia)
}

fn cmd_blur(interp: &mut Interpreter, args: &[String], _out: &mut dyn Write) -> ScriptResult<Outcome> {
    unary_masked(interp, args, ops::blur)
}

fn cmd_sharpen(interp: &mut Interpreter, args: &[String], _out: &mut dyn Write) -> ScriptResult<Outcome> {
    unary_masked(interp, args, ops::sharpen)
}

fn cmd_component(interp: &mut Interpreter, args: &[String], _out: &mut dyn Write) -> ScriptResult<Outcome> {
    let channel = match args[1].as_str() {
        "red" => Channel::Red,
        "green" => Channel::Green,
        "blue" => Channel::Blue,
        other => {
            return Err(ScriptError::BadOperand {
                verb: "component",
                message: format!("channel must be red, green, or blue, got \"{other}\""),
            });
        }
    };
    let source = interp.store().get(&args[0])?;
    let result = ops::component(&source, channel);
    interp.store_mut().insert(&args[2], result)?;
    Ok(Outcome::Continue)
}

fn cmd_brighten(interp: &mut Interpreter, args: &[String], _out: &mut dyn Write) -> ScriptResult<Outcome> {
    let delta: i32 = parse_operand("brighten", "delta", &args[1])?;
    let source = interp.store().get(&args[0])?;
    let result = ops::brighten(&source, delta);
    interp.store_mut().insert(&args[2], result)?;
    Ok(Outcome::Continue)
}

fn cmd_levels(interp: &mut Interpreter, args: &[String], _out: &mut dyn Write) -> ScriptResult<Outcome> {
    let black: u16 = parse_operand("levels", "black point", &args[1])?;
    let mid: u16 = parse_operand("levels", "mid point", &args[2])?;
    let white: u16 = parse_operand("levels", "white point", &args[3])?;
    let source = interp.store().get(&args[0])?;
    let result = ops::levels(&source, black, mid, white)?;
    interp.store_mut().insert(&args[4], result)?;
    Ok(Outcome::Continue)
}

fn cmd_compress(interp: &mut Interpreter, args: &[String], _out: &mut dyn Write) -> ScriptResult<Outcome> {
    let percent: f64 = parse_operand("compress", "percentage", &args[1])?;
    let source = interp.store().get(&args[0])?;
    let result = ops::compress(&source, percent)?;
    interp.store_mut().insert(&args[2], result)?;
    Ok(Outcome::Continue)
}

fn cmd_downscale(interp: &mut Interpreter, args: &[String], _out: &mut dyn Write) -> ScriptResult<Outcome> {
    let width: u32 = parse_operand("downscale", "width", &args[1])?;
    let height: u32 = parse_operand("downscale", "height", &args[2])?;
    let source = interp.store().get(&args[0])?;
    let result = ops::downscale(&source, width, height)?;
    interp.store_mut().insert(&args[3], result)?;
    Ok(Outcome::Continue)
}

fn cmd_split(interp: &mut Interpreter, args: &[String], _out: &mut dyn Write) -> ScriptResult<Outcome> {
    let source = interp.store().get(&args[0])?;
    let [r, g, b] = ops::split(&source);
    interp.store_mut().insert(&args[1], r)?;
    interp.store_mut().insert(&args[2], g)?;
    interp.store_mut().insert(&args[3], b)?;
    Ok(Outcome::Continue)
}

fn cmd_combine(interp: &mut Interpreter, args: &[String], _out: &mut dyn Write) -> ScriptResult<Outcome> {
    let red = interp.store().get(&args[0])?;
    let green = interp.store().get(&args[1])?;
    let blue = interp.store().get(&args[2])?;
    let result = ops::combine(&red, &green, &blue)?;
    interp.store_mut().insert(&args[3], result)?;
    Ok(Outcome::Continue)
}

fn cmd_histogram(interp: &mut Interpreter, args: &[String], _out: &mut dyn Write) -> ScriptResult<Outcome> {
    histogram_view::generate_and_store_histogram(interp.store_mut(), &args[0], &args[1])?;
    Ok(Outcome::Continue)
}

fn cmd_run(interp: &mut Interpreter, args: &[String], out: &mut dyn Write) -> ScriptResult<Outcome> {
    interp.run_script(&args[0], out)?;
    Ok(Outcome::Continue)
}

fn cmd_exit(_interp: &mut Interpreter, _args: &[String], _out: &mut dyn Write) -> ScriptResult<Outcome> {
    Ok(Outcome::Exit)
}
