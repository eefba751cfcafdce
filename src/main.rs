use aqlir::ParseOptions;
use aqlir::cli::{self, CheckOptions, CheckResult, CliError};
use clap::{Parser as ClapParser, Subcommand};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "aqlir")]
#[command(about = "aqlir - parse traversal/filter queries into their IR")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a query and print its IR as JSON
    Check {
        /// The query (reads from stdin if not provided)
        query: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate syntax, don't print the IR
        #[arg(long)]
        syntax_only: bool,

        /// Maximum nesting of expressions and subqueries
        #[arg(long, default_value_t = ParseOptions::default().max_depth)]
        max_depth: usize,

        /// Elide FILTER/SORT bodies as if the query were LET-bound
        #[arg(long)]
        let_context: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            query,
            pretty,
            syntax_only,
            max_depth,
            let_context,
        } => run_check(
            query,
            pretty,
            syntax_only,
            ParseOptions {
                max_depth,
                let_context,
            },
        ),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_check(
    query: Option<String>,
    pretty: bool,
    syntax_only: bool,
    parse: ParseOptions,
) -> Result<(), CliError> {
    let query = match query {
        Some(q) => q,
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
        None => return Err(CliError::NoInput),
    };

    let options = CheckOptions {
        query,
        pretty,
        syntax_only,
        parse,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Success(json) => println!("{}", json),
    }
    Ok(())
}
