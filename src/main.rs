use clap::Parser;
use tracing_subscriber::EnvFilter;

use fasta_utils::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("fasta_utils=debug,info")
    } else {
        EnvFilter::new("fasta_utils=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Sort(args) => {
            cli::sort::run(args, cli.format, cli.line_width)?;
        }
        cli::Commands::Uniq(args) => {
            cli::uniq::run(args, cli.format, cli.line_width)?;
        }
        cli::Commands::SplitEvery(args) => {
            cli::split_every::run(args, cli.format, cli.line_width)?;
        }
        cli::Commands::SplitLen(args) => {
            cli::split_len::run(args, cli.format, cli.line_width)?;
        }
    }

    Ok(())
}
