use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use destlens_report::cli::{Cli, Commands};
use destlens_report::run::{run_assess, run_classify, run_gap};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            input,
            builtin,
            lexicon,
            thresholds,
            output,
            verbose,
        } => {
            init_logging(verbose);
            run_classify(
                &input,
                &builtin,
                lexicon.as_deref(),
                thresholds.as_deref(),
                output.as_deref(),
            )?;
        }

        Commands::Assess {
            input,
            themes,
            thresholds,
            output,
            verbose,
        } => {
            init_logging(verbose);
            let report = run_assess(
                &input,
                themes.as_deref(),
                thresholds.as_deref(),
                output.as_deref(),
            )?;
            eprintln!("{}", report.summary);
        }

        Commands::Gap {
            input,
            templates,
            thresholds,
            output,
            verbose,
        } => {
            init_logging(verbose);
            let report = run_gap(
                &input,
                templates.as_deref(),
                thresholds.as_deref(),
                output.as_deref(),
            )?;
            eprintln!("{}", report.summary);
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "destlens=debug"
    } else {
        "destlens=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
