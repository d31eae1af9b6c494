//! Entry point: selects interactive or scripted mode and feeds the
//! interpreter. All engine logic lives in the library crates; this is
//! only argument handling and wiring.

use rasterlab::script::{Interpreter, Options};
use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

enum Mode {
    Interactive,
    Script(String),
}

const USAGE: &str = "usage: rasterlab [-text | -file <script> [--fail-fast]]";

fn parse_args(args: &[String]) -> Result<(Mode, Options), String> {
    let mut mode = Mode::Interactive;
    let mut options = Options::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-text" => mode = Mode::Interactive,
            "-file" => {
                let path = iter
                    .next()
                    .ok_or_else(|| "-file needs a script path".to_string())?;
                mode = Mode::Script(path.clone());
            }
            "--fail-fast" => options.halt_on_error = true,
            other => return Err(format!("unrecognized argument \"{other}\"")),
        }
    }
    Ok((mode, options))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (mode, options) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("rasterlab: {message}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    let mut session = Interpreter::new(options);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match mode {
        Mode::Interactive => {
            let stdin = std::io::stdin();
            session.run_interactive(stdin.lock(), &mut out)
        }
        Mode::Script(path) => match File::open(&path) {
            Ok(file) => session.run_lines(BufReader::new(file), &mut out),
            Err(err) => {
                eprintln!("rasterlab: cannot open \"{path}\": {err}");
                return ExitCode::FAILURE;
            }
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("rasterlab: {err}");
            ExitCode::FAILURE
        }
    }
}
