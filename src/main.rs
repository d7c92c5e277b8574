use anyhow::{Context, Result};
use clap::Parser;
use rpmspec_writer::{load_record, output, render_spec, render_spec_summary};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;

use cli::{CheckArgs, Command, RenderArgs, RootArgs};

fn main() -> Result<()> {
    let args = RootArgs::parse();
    init_tracing(args.command.verbose());

    match args.command {
        Command::Render(args) => run_render(args),
        Command::Check(args) => run_check(args),
    }
}

/// `RUST_LOG` wins; otherwise `--verbose` selects debug output.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "debug" } else { "warn" })
    });
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(filter)
        .init();
}

fn run_render(args: RenderArgs) -> Result<()> {
    let record = load_record(&args.record)?;
    let text = render_spec(&record);
    output::write_spec(args.out.as_deref(), &text)
}

fn run_check(args: CheckArgs) -> Result<()> {
    let record = load_record(&args.record)?;
    let rendered = render_spec_summary(&record);
    let summary = &rendered.summary;
    if args.json {
        let text = serde_json::to_string_pretty(summary).context("serialize render summary")?;
        println!("{text}");
        return Ok(());
    }
    let sections = if summary.sections.is_empty() {
        "none".to_string()
    } else {
        summary.sections.join(", ")
    };
    println!(
        "{}: {} header lines, description: {}, sections: {}, {} lines total",
        record.tags.name,
        summary.header_lines,
        if summary.description { "yes" } else { "no" },
        sections,
        summary.total_lines
    );
    Ok(())
}
