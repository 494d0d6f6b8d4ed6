use std::io;
use std::path::PathBuf;

use clap::Parser;
use pcomb_cli::{
    config::CalcConfig,
    grammar::Calculator,
    repl::{self, Mode},
    CalcResult,
};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(author, version, about = "Integer calculator reading one expression per line", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(short, long, default_value = "calc.json")]
    config: PathBuf,

    /// Enable debug mode
    #[arg(short, long)]
    verbose: bool,

    /// Report trailing input as a parse error instead of excessive input
    #[arg(long)]
    strict: bool,

    /// Print the parsed expression before its value
    #[arg(long)]
    show_ast: bool,
}

fn run(cli: &Cli) -> CalcResult<()> {
    let mut config = CalcConfig::load(&cli.config)?;
    if cli.show_ast {
        config.show_ast = true;
    }
    info!("Config loaded.");
    debug!("config: {:?}", config);

    let calculator = Calculator::new(&config.lex)?;
    let mode = if cli.strict { Mode::Strict } else { Mode::Lenient };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl::run(&calculator, &config, mode, stdin.lock(), &mut stdout)
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into())
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
