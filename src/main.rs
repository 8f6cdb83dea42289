use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use neu_rpn::{Expr, RpnPrinter, Token, TokenType};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "neu-rpn", version, about = "Print neu expressions in reverse polish notation")]
struct Cli {
    /// JSON expression tree to print, `-` for stdin. Prints a sample tree when omitted.
    path: Option<PathBuf>,

    /// Raise log verbosity (repeatable). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let expr = match &cli.path {
        None => sample(),
        Some(path) if path.as_os_str() == "-" => {
            Expr::from_reader(io::stdin().lock()).context("read expression tree from stdin")?
        }
        Some(path) => Expr::from_path(path)
            .with_context(|| format!("load expression tree '{}'", path.display()))?,
    };
    debug!(?expr, "expression tree");

    let printer = RpnPrinter;
    println!("{}", printer.print(&expr));
    Ok(())
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}

/// `(1 + 2) * (4 - 3)`
fn sample() -> Expr {
    Expr::binary(
        Expr::binary(
            Expr::literal(1.0),
            Token::symbol(TokenType::Plus, 1),
            Expr::literal(2.0),
        ),
        Token::symbol(TokenType::Star, 1),
        Expr::binary(
            Expr::literal(4.0),
            Token::symbol(TokenType::Minus, 1),
            Expr::literal(3.0),
        ),
    )
}
