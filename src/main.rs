//! Interactive interpolation tool.
//!
//! ```text
//! nodal [--log-level <trace|debug|info|warn|error>] [--log-format <pretty|compact|json>]
//!       [--plot-resolution <n>]
//! ```
//!
//! Menu-driven: load points by hand, from an `x,y` file or by sampling a
//! test function, then inspect difference tables, evaluate the three
//! interpolants at a point, or write plot data as JSON.

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use thiserror::Error;

use nodal::interpolation::points::validate_count;
use nodal::interpolation::{Sample, TestFunction};
use nodal::observe::{init_logging, LogConfig};
use nodal::session::{Session, SessionCfg, SessionError};

const DEFAULT_PLOT_PATH: &str = "plot.json";

const USAGE: &str = "usage: nodal [--log-level <level>] [--log-format <pretty|compact|json>] [--plot-resolution <n>]";

#[derive(Debug, Error)]
enum CliError {
    #[error("end of input")]
    Eof,

    #[error("could not read input: {0}")]
    Io(#[from] io::Error),

    #[error("`{0}` is not a valid number")]
    Invalid(String),

    #[error("unknown choice `{0}`")]
    UnknownChoice(String),

    #[error(transparent)]
    Session(#[from] SessionError),
}

#[derive(Debug, Default)]
struct Options {
    log: LogConfig,
    session: SessionCfg,
}

impl Options {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, String> {
        let mut opts = Options::default();
        while let Some(arg) = args.next() {
            let mut value = |name: &str| args.next().ok_or_else(|| format!("missing value for {name}"));
            match arg.as_str() {
                "--log-level"       => opts.log.level = value("--log-level")?.parse()?,
                "--log-format"      => opts.log.format = value("--log-format")?.parse()?,
                "--plot-resolution" => {
                    let v = value("--plot-resolution")?;
                    let n = v.parse::<usize>().map_err(|_| format!("invalid plot resolution `{v}`"))?;
                    opts.session = opts.session.with_plot_resolution(n);
                }
                "-h" | "--help" => return Err(USAGE.to_string()),
                other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
            }
        }
        Ok(opts)
    }
}

/// Line-oriented prompt over any buffered reader.
struct Prompt<R> {
    reader: R,
}

impl<R: BufRead> Prompt<R> {
    fn new(reader: R) -> Self {
        Self { reader }
    }

    fn ask(&mut self, msg: &str) -> Result<String, CliError> {
        println!("{msg}");
        io::stdout().flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(CliError::Eof);
        }
        Ok(line.trim().to_string())
    }

    fn ask_parse<T: FromStr>(&mut self, msg: &str) -> Result<T, CliError> {
        let answer = self.ask(msg)?;
        answer.parse().map_err(|_| CliError::Invalid(answer))
    }
}

fn print_menu() {
    println!();
    println!("1. Enter points from keyboard");
    println!("2. Load points from file");
    println!("3. Generate points from a function");
    println!("4. Show finite-difference table");
    println!("5. Show divided-difference table");
    println!("6. Interpolate at x");
    println!("7. Write plot data");
    println!("8. Exit");
}

fn enter_points<R: BufRead>(session: &mut Session, prompt: &mut Prompt<R>) -> Result<(), CliError> {
    let n: usize = prompt.ask_parse("Number of points:")?;
    validate_count(n).map_err(SessionError::from)?;

    let mut samples = Vec::new();
    for i in 0..n {
        let x = prompt.ask_parse(&format!("x[{i}]:"))?;
        let y = prompt.ask_parse(&format!("y[{i}]:"))?;
        samples.push(Sample::new(x, y));
    }
    session.set_manual(samples)?;
    println!("Stored {n} points ({}).", session.spacing());
    Ok(())
}

fn load_points<R: BufRead>(session: &mut Session, prompt: &mut Prompt<R>) -> Result<(), CliError> {
    let path = PathBuf::from(prompt.ask("File name (one `x,y` per line):")?);
    let n = session.load_file(&path)?;
    println!("Loaded {n} points from {} ({}).", path.display(), session.spacing());
    Ok(())
}

fn generate_points<R: BufRead>(session: &mut Session, prompt: &mut Prompt<R>) -> Result<(), CliError> {
    let choice = prompt.ask("Function: 1) sin(x)  2) x^2")?;
    let function = match choice.as_str() {
        "1" => TestFunction::Sin,
        "2" => TestFunction::Square,
        _ => return Err(CliError::UnknownChoice(choice)),
    };
    let a = prompt.ask_parse("Interval start:")?;
    let b = prompt.ask_parse("Interval end:")?;
    let n = prompt.ask_parse("Number of points:")?;
    session.generate(function, a, b, n)?;
    println!("Generated {n} points of {function} on [{a}, {b}].");
    Ok(())
}

fn write_plot<R: BufRead>(session: &Session, prompt: &mut Prompt<R>) -> Result<(), CliError> {
    let bundle = session.plot()?;
    let answer = prompt.ask(&format!("Output file [{DEFAULT_PLOT_PATH}]:"))?;
    let path = PathBuf::from(if answer.is_empty() { DEFAULT_PLOT_PATH } else { answer.as_str() });
    bundle.write_json(&path)?;
    println!("Wrote {} curves to {}.", bundle.curves.len(), path.display());
    Ok(())
}

/// Runs one menu action. `Ok(false)` ends the session.
fn step<R: BufRead>(session: &mut Session, prompt: &mut Prompt<R>) -> Result<bool, CliError> {
    print_menu();
    let choice = prompt.ask("Choice:")?;
    match choice.as_str() {
        "1" => enter_points(session, prompt)?,
        "2" => load_points(session, prompt)?,
        "3" => generate_points(session, prompt)?,
        "4" => print!("Finite differences:\n{}", session.difference_table()?),
        "5" => print!("Divided differences:\n{}", session.divided_difference_table()?),
        "6" => {
            let x = prompt.ask_parse("x:")?;
            print!("{}", session.query(x)?);
        }
        "7" => write_plot(session, prompt)?,
        "8" => return Ok(false),
        _ => return Err(CliError::UnknownChoice(choice)),
    }
    Ok(true)
}

fn main() -> ExitCode {
    let opts = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(msg) => {
            eprintln!("{msg}");
            return ExitCode::from(2);
        }
    };
    init_logging(&opts.log);

    let mut session = match Session::new(opts.session) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock());

    loop {
        match step(&mut session, &mut prompt) {
            Ok(true) => {}
            Ok(false) | Err(CliError::Eof) => break,
            Err(CliError::Io(e)) => {
                tracing::error!(error = %e, "stdin failed");
                return ExitCode::FAILURE;
            }
            Err(e) => println!("Error: {e}"),
        }
    }
    ExitCode::SUCCESS
}
