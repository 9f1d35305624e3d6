use color_eyre::eyre::Result;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

mod cli;
mod score;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::WARN)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .init();

    if let Err(err) = run() {
        let chain = err
            .chain()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(": ");
        error!("{chain}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    color_eyre::install()?;

    let args = cli::Cli::parse_args()?;
    score::write_score(&args.output_path)?;

    Ok(())
}
