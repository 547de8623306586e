use clap::{Parser as ClapParser, Subcommand};
use relexpr::cli::{
    self, CheckOptions, CheckResult, CliError, ContainsOptions, RelationOptions,
};
use std::io::{self, Read};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(ClapParser)]
#[command(name = "relexpr")]
#[command(about = "relexpr - Parse and compare relation expressions like `owner.[pets, address]`")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a relation expression and print its canonical form
    Check {
        /// The relation expression (reads from stdin if not provided)
        expression: Option<String>,

        /// Print the parsed tree as JSON
        #[arg(short, long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Descend into an expression through one or more relation names
    Relation {
        /// The relation expression to walk
        expression: String,

        /// Relation names, outermost first
        #[arg(required = true)]
        path: Vec<String>,

        /// Print the result as JSON
        #[arg(short, long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },

    /// Check whether OTHER is a sub-expression of EXPRESSION
    Contains {
        /// The containing expression
        expression: String,

        /// The candidate sub-expression
        other: String,
    },

    /// Show the relation expression syntax reference
    Syntax,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check {
            expression,
            json,
            pretty,
        } => run_check(expression, json, pretty),
        Commands::Relation {
            expression,
            path,
            json,
            pretty,
        } => run_relation(RelationOptions {
            expression,
            path,
            json,
            pretty,
        }),
        Commands::Contains { expression, other } => {
            cli::execute_contains(&ContainsOptions { expression, other }).map(|contained| {
                println!("{}", contained);
            })
        }
        Commands::Syntax => {
            print!("{}", cli::syntax_reference());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_check(expression: Option<String>, json: bool, pretty: bool) -> Result<(), CliError> {
    let expression = match expression {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Some(buffer)
        }
        None => None,
    };

    let options = CheckOptions {
        expression,
        json,
        pretty,
    };

    match cli::execute_check(&options)? {
        CheckResult::Empty => println!("Expression is empty"),
        CheckResult::Valid(rendered) => println!("{}", rendered),
    }
    Ok(())
}

fn run_relation(options: RelationOptions) -> Result<(), CliError> {
    match cli::execute_relation(&options)? {
        Some(rendered) => println!("{}", rendered),
        None => println!("null"),
    }
    Ok(())
}
