//! rasterlab-script - The command interpreter (controller)
//!
//! Drives the engine from a small textual command language. One line
//! is one command; scripted and interactive sessions share the same
//! parse/dispatch path and differ only in their line source.
//!
//! # Command surface
//!
//! Operands named `<src>`, `<mask>`, and image destinations refer to
//! names in the session's image store. `[mask]` restricts the
//! operation to pixels the mask image selects (white selects).
//!
//! | verb        | operands                             | effect |
//! |-------------|--------------------------------------|--------|
//! | `load`      | `<path> <name>`                      | decode a file into the store |
//! | `save`      | `<name> <path>`                      | encode a stored image to disk |
//! | `remove`    | `<name>`                             | drop an entry (absent name is a no-op) |
//! | `list`      | (none)                               | print stored names |
//! | `greyscale` | `<src> [mask] <dest>`                | Rec. 709 luma greyscale |
//! | `sepia`     | `<src> [mask] <dest>`                | sepia tone transform |
//! | `component` | `<src> <red\|green\|blue> <dest>`    | extract one channel |
//! | `brighten`  | `<src> <delta> <dest>`               | add a signed delta, clamped |
//! | `blur`      | `<src> [mask] <dest>`                | 3x3 Gaussian convolution |
//! | `sharpen`   | `<src> [mask] <dest>`                | 5x5 sharpening convolution |
//! | `levels`    | `<src> <black> <mid> <white> <dest>` | quadratic tone remap |
//! | `compress`  | `<src> <percent> <dest>`             | Haar coefficient thresholding |
//! | `downscale` | `<src> <width> <height> <dest>`      | block-average resize |
//! | `split`     | `<src> <destR> <destG> <destB>`      | channel decomposition |
//! | `combine`   | `<srcR> <srcG> <srcB> <dest>`        | channel interleaving |
//! | `histogram` | `<src> <dest>`                       | render a 256x256 histogram chart |
//! | `run`       | `<scriptpath>`                       | execute a script file |
//! | `exit`      | (none; alias `quit`)                 | end the session |
//!
//! Unknown verbs, malformed arity, and bad operands are rejected
//! without crashing the session; a failed command never leaves the
//! store partially mutated.

pub mod command;
mod error;
pub mod histogram_view;
pub mod interpreter;
pub mod registry;

pub use command::{Request, parse_line};
pub use error::{ScriptError, ScriptResult};
pub use histogram_view::{
    CHART_SIZE, calculate_histogram_data, generate_and_store_histogram, render_histogram,
};
pub use interpreter::{Interpreter, Options, Outcome};
pub use registry::{CommandSpec, Registry};
