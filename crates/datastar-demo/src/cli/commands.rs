use super::setup::{Cli, Commands};
use crate::config::DemoConfig;
use crate::page::build_page;
use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use datastar_attrs::{encode, Modifier, DIRECTIVES};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = DemoConfig::load(cli.config.as_deref()).context("loading configuration")?;
    tracing::debug!(?config, "configuration loaded");

    // Naked invocation generates the page.
    match cli.command.unwrap_or(Commands::Generate { out: None }) {
        Commands::Generate { out } => handle_generate(&config, out),
        Commands::Catalog => handle_catalog(),
    }
}

/// `RUST_LOG` wins; otherwise `--verbose` picks debug over warn.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn handle_generate(config: &DemoConfig, out: Option<PathBuf>) -> Result<()> {
    let path = out.unwrap_or_else(|| config.output.clone());
    write_page(config, &path)?;
    println!("{} Generated {}", style("✓").green(), path.display());
    Ok(())
}

fn write_page(config: &DemoConfig, path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating directory {}", dir.display()))?;
    }
    let page = build_page(config).context("building demo page")?;
    let html = page.into_string();
    fs::write(path, &html).with_context(|| format!("writing {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = html.len(), "wrote demo page");
    Ok(())
}

fn handle_catalog() -> Result<()> {
    print!("{}", render_catalog()?);
    Ok(())
}

fn render_catalog() -> Result<String> {
    let mut out = String::new();

    writeln!(out, "{}", style("Behavior modifiers").bold())?;
    for modifier in Modifier::BEHAVIOR {
        writeln!(out, "  {modifier}")?;
    }

    writeln!(out, "{}", style("Format modifiers").bold())?;
    for modifier in Modifier::FORMAT {
        writeln!(out, "  {modifier}")?;
    }

    writeln!(out, "{}", style("Value modifiers").bold())?;
    let examples = [
        (encode::duration(chrono::TimeDelta::milliseconds(500))?, "duration(500ms)"),
        (encode::threshold(0.25)?, "threshold(0.25)"),
        (encode::threshold(1.0)?, "threshold(1.0)"),
    ];
    for (modifier, source) in examples {
        writeln!(out, "  {:<10} {}", modifier.to_string(), style(source).dim())?;
    }

    writeln!(out, "{}", style("Directives").bold())?;
    for spec in DIRECTIVES {
        let name = if spec.parameterized {
            format!("data-{}:<event>", spec.keyword)
        } else {
            format!("data-{}", spec.keyword)
        };
        let modifiers = if spec.modifiers { " +modifiers" } else { "" };
        writeln!(
            out,
            "  {name:<30} {}{}",
            spec.value.describe(),
            style(modifiers).dim()
        )?;
    }

    Ok(out)
}
