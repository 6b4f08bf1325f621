use std::io::IsTerminal;

use clap::Parser;
use miette::{Result, bail, miette};
use tally::{Bindings, Expression, render_error};
use tally_cli::bind::{build_bindings, parse_binding};
use tally_cli::session::Session;

/// Tally - a left-to-right chain-expression interpreter
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(about = "Evaluate chain expressions over single-character variables", long_about = None)]
struct Args {
    /// Print the parsed AST (for debugging)
    #[arg(long)]
    debug_parse: bool,

    /// Bind a variable, e.g. --bind a=5 (repeatable)
    #[arg(long = "bind", value_name = "NAME=VALUE", value_parser = parse_binding)]
    bind: Vec<(char, i64)>,

    /// Expression to evaluate (if not provided, reads from stdin)
    expression: Option<String>,
}

fn run_once(source: &str, bindings: &Bindings, debug_parse: bool) -> Result<()> {
    let expr = match Expression::parse(source) {
        Ok(expr) => expr,
        Err(e) => {
            render_error(&e);
            bail!("malformed expression");
        }
    };

    if debug_parse {
        println!("=== Parsed AST ===");
        println!("{:#?}", expr.ast());
        println!();
    }

    let variables = expr.variables();
    for name in &variables {
        if !bindings.contains(*name) {
            bail!("variable '{name}' has no --bind entry");
        }
    }
    for (name, _) in bindings.iter() {
        if !variables.contains(&name) {
            bail!("variable '{name}' does not appear in the expression");
        }
    }

    match expr.eval(bindings) {
        Ok(value) => {
            println!("{expr} = {value}");
            Ok(())
        }
        Err(e) => {
            render_error(&e);
            bail!("evaluation failed");
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap();

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!(?args, "parsed command line");

    let bindings = build_bindings(&args.bind).map_err(|e| miette!(e))?;

    // One-shot mode: evaluate the argument against the --bind table
    if let Some(expression) = args.expression {
        return run_once(&expression, &bindings, args.debug_parse);
    }

    // Otherwise, check if we're in interactive or pipe mode
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let interactive = stdin.is_terminal();
    let color = stdout.is_terminal();

    let mut session = Session::new(stdin.lock(), stdout.lock())
        .with_bindings(bindings)
        .with_debug_parse(args.debug_parse)
        .with_color(color);

    let result = if interactive {
        session.run_interactive()
    } else {
        session.run_pipe()
    };
    result.map_err(|e| miette!("I/O error: {e}"))
}
