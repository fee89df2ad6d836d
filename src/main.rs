//! fmconv - blog post frontmatter converter
//!
//! Rewrites the YAML header of blog posts from the `title/summary/date/tags/draft`
//! schema to `title/description/publishDate/tags/draft`, one file or a whole
//! directory at a time, leaving the post body untouched.

use clap::Parser;

mod cli;
mod commands;
mod converter;
mod error;
mod frontmatter;
mod logging;
#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Convert(args) => commands::convert::run(args, cli.quiet),
        Commands::Batch(args) => commands::batch::run(&args, cli.quiet),
        Commands::Preview(args) => commands::preview::run(&args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
