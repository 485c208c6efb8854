use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use anstream::{eprintln, print, println};
use anstyle::{AnsiColor, Style};
use clap::{Parser, Subcommand};
use nepdai::{
    check_syntax,
    error::Error,
    interpreter::{evaluator::core::Interpreter, token::Token},
    parse, tokenize,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const ERROR: Style = AnsiColor::Red.on_default();
const HEADING: Style = AnsiColor::Blue.on_default();
const DETAIL: Style = AnsiColor::BrightBlack.on_default();
const PROMPT: Style = AnsiColor::Green.on_default();

/// nepdai is a small scripting language with Nepali keywords. Every program
/// file starts with `Namaste Dai`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Print debug logs of every interpreter stage to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Accept files that do not start with `Namaste Dai`.
    #[arg(long, global = true)]
    no_entry_marker: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a `.nepdai` program.
    Run {
        /// The program file.
        file:  PathBuf,
        /// Show the source, tokens and syntax tree before the output.
        #[arg(short, long)]
        debug: bool,
    },
    /// Show the tokens of a program.
    Tokens {
        /// The program file.
        file: PathBuf,
    },
    /// Show the syntax tree of a program.
    Ast {
        /// The program file.
        file: PathBuf,
    },
    /// Report every syntax error in a program without running it.
    Check {
        /// The program file.
        file: PathBuf,
    },
    /// Run a snippet given on the command line. No entry marker is needed.
    Eval {
        /// The source code.
        code: String,
    },
    /// Start an interactive session.
    Repl,
}

/// Failures reported by the command line front end.
enum CliError {
    /// The program file could not be read or has the wrong extension.
    File(String),
    /// One of the interpreter stages failed.
    Program(Error),
    /// Several syntax errors were found by `check`.
    Syntax(usize),
}

impl From<Error> for CliError {
    fn from(error: Error) -> Self {
        Self::Program(error)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    let require_marker = !args.no_entry_marker;
    let result = match args.command {
        Command::Run { file, debug } => run_file(&file, debug, require_marker),
        Command::Tokens { file } => show_tokens(&file, require_marker),
        Command::Ast { file } => show_ast(&file, require_marker),
        Command::Check { file } => check_file(&file, require_marker),
        Command::Eval { code } => Interpreter::new().run_source(&code, false)
                                                    .map(|_| ())
                                                    .map_err(CliError::from),
        Command::Repl => {
            repl();
            Ok(())
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::File(message)) => {
            eprintln!("{ERROR}Error: {message}{ERROR:#}");
            ExitCode::FAILURE
        },
        Err(CliError::Program(error)) => {
            report(&error);
            ExitCode::FAILURE
        },
        Err(CliError::Syntax(count)) => {
            eprintln!("{ERROR}Found {count} syntax error(s).{ERROR:#}");
            ExitCode::FAILURE
        },
    }
}

/// Installs the log subscriber. The filter comes from `NEPDAI_LOG`, then
/// `RUST_LOG`; `--verbose` forces `debug`. Logs go to stderr.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("NEPDAI_LOG").or_else(|_| EnvFilter::try_from_default_env())
                                             .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry().with(fmt::layer().with_target(true)
                                                    .with_level(true)
                                                    .with_writer(io::stderr))
                                  .with(filter)
                                  .init();
}

/// Prints an error and, when known, where it happened.
fn report(error: &Error) {
    tracing::debug!(kind = %error.kind(), "program failed");
    eprintln!("{}", render_error(error));
}

fn render_error(error: &Error) -> String {
    let mut text = format!("{ERROR}Error:{ERROR:#} {error}");
    if let Some(position) = error.position() {
        text.push_str(&format!("\n{ERROR}At line {}, column {}{ERROR:#}",
                               position.line, position.column));
    }
    text
}

fn read_source(file: &Path) -> Result<String, CliError> {
    fs::read_to_string(file).map_err(|e| {
                                CliError::File(format!("Failed to read the input file '{}': {e}",
                                                       file.display()))
                            })
}

fn run_file(file: &Path, debug: bool, require_marker: bool) -> Result<(), CliError> {
    if file.extension().is_none_or(|ext| ext != "nepdai") {
        return Err(CliError::File("File must have .nepdai extension.".to_string()));
    }
    let source = read_source(file)?;

    if debug {
        let tokens = tokenize(&source, require_marker).map_err(Error::from)?;
        println!("{HEADING}=== Nepdai Debug Mode ==={HEADING:#}\n");
        println!("{HEADING}Source Code:{HEADING:#}\n{DETAIL}{source}{DETAIL:#}\n");
        println!("{HEADING}Tokens:{HEADING:#}");
        print_tokens(&tokens);
        let program = parse(&tokens).map_err(Error::from)?;
        println!("\n{HEADING}AST:{HEADING:#}\n{DETAIL}{program:#?}{DETAIL:#}\n");
        println!("{HEADING}Output:{HEADING:#}");
    }

    Interpreter::new().run_source(&source, require_marker)?;
    Ok(())
}

fn show_tokens(file: &Path, require_marker: bool) -> Result<(), CliError> {
    let source = read_source(file)?;
    let tokens = tokenize(&source, require_marker).map_err(Error::from)?;
    print_tokens(&tokens);
    Ok(())
}

fn print_tokens(tokens: &[Token]) {
    for (index, token) in tokens.iter().enumerate() {
        let kind = format!("{:?}", token.kind);
        let value = token.value
                         .as_ref()
                         .map(|value| format!(" ({value})"))
                         .unwrap_or_default();
        println!("{DETAIL}{index:>3}: {kind:<15} \"{}\"{value} at {}{DETAIL:#}",
                 token.lexeme, token.position);
    }
}

fn show_ast(file: &Path, require_marker: bool) -> Result<(), CliError> {
    let source = read_source(file)?;
    let tokens = tokenize(&source, require_marker).map_err(Error::from)?;
    let program = parse(&tokens).map_err(Error::from)?;
    println!("{program:#?}");
    Ok(())
}

fn check_file(file: &Path, require_marker: bool) -> Result<(), CliError> {
    let source = read_source(file)?;
    let tokens = tokenize(&source, require_marker).map_err(Error::from)?;
    let errors = check_syntax(&tokens);

    for error in &errors {
        let position = error.position();
        eprintln!("{}:{position}: {ERROR}{error}{ERROR:#}", file.display());
    }

    if errors.is_empty() {
        println!("{}: no syntax errors", file.display());
        Ok(())
    } else {
        Err(CliError::Syntax(errors.len()))
    }
}

/// Reads statements line by line and runs each in one persistent session.
/// Non-`khali` results are echoed. `exit` or `quit` ends the session.
fn repl() {
    println!("{HEADING}=== Nepdai REPL ==={HEADING:#}");
    println!("{DETAIL}Type \"exit\" to quit{DETAIL:#}\n");

    let mut interpreter = Interpreter::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{PROMPT}nepdai> {PROMPT:#}");
        if io::stdout().flush().is_err() {
            break;
        }

        let Some(Ok(line)) = lines.next() else {
            break;
        };
        let input = line.trim();

        match input {
            "" => continue,
            "exit" | "quit" => {
                println!("{HEADING}Goodbye!{HEADING:#}");
                break;
            },
            _ => {},
        }

        match interpreter.run_source(input, false) {
            Ok(value) if !value.is_null() => println!("{PROMPT}=>{PROMPT:#} {value}"),
            Ok(_) => {},
            Err(error) => report(&error),
        }
    }
}

#[cfg(test)]
mod tests {
    use anstream::adapter::strip_str;

    use super::*;

    #[test]
    fn errors_are_red_on_terminals() {
        let error = nepdai::run("lekh x;", false).unwrap_err();
        let text = render_error(&error);

        assert!(text.starts_with("\x1b[31mError:\x1b[0m "));
        let position = error.position().unwrap();
        assert_eq!(strip_str(&text).to_string(),
                   format!("Error: {error}\nAt line {}, column {}",
                           position.line, position.column));
    }

    #[test]
    fn styles_strip_to_plain_text() {
        let line = format!("{PROMPT}nepdai> {PROMPT:#}{HEADING}Goodbye!{HEADING:#}{DETAIL}hint{DETAIL:#}");

        assert_eq!(strip_str(&line).to_string(), "nepdai> Goodbye!hint");
    }
}
