use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use linecalc::calculator::copy_to_clipboard;
use linecalc::config::Config;
use linecalc::docs;
use linecalc::render;
use linecalc::sheet::Sheet;
use linecalc::watch::watch_file;

#[derive(Parser)]
#[command(version, about, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Document to evaluate. Reads stdin when omitted.
    file: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,

    /// Re-evaluate the file every time it changes.
    #[arg(long, requires = "file")]
    watch: bool,

    /// Print the sum of all results after the sheet.
    #[arg(long)]
    total: bool,

    /// Copy the last result to the clipboard.
    #[arg(long)]
    copy: bool,

    /// Path to a config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Decimal places to show.
    #[arg(long)]
    precision: Option<usize>,

    /// Do not group thousands with commas.
    #[arg(long)]
    no_separators: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Show the syntax guide.
    Docs,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("LINECALC_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Some(Command::Docs) = cli.command {
        print!("{}", docs::guide()?);
        return Ok(());
    }

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(precision) = cli.precision {
        config.precision = precision;
    }
    if cli.no_separators {
        config.thousands_separator = false;
    }

    let mut sheet = Sheet::new(config.number_format());

    match &cli.file {
        Some(path) if cli.watch => {
            info!(path = %path.display(), "watching");
            watch_file(path, &mut sheet, |sheet| {
                // Clear the terminal before each redraw
                print!("\x1b[2J\x1b[H");
                print_sheet(sheet, &cli, &config).is_ok()
            })?;
            return Ok(());
        }
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            sheet.set_text(&text);
            print_sheet(&sheet, &cli, &config)?;
        }
        None if io::stdin().is_terminal() => interactive(&mut sheet, &config)?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            sheet.set_text(&text);
            print_sheet(&sheet, &cli, &config)?;
        }
    }

    if cli.copy
        && let Some(text) = sheet.last_success().and_then(|item| item.text_for_clipboard())
    {
        copy_to_clipboard(text)?;
        info!(%text, "copied result");
    }

    Ok(())
}

fn print_sheet(sheet: &Sheet, cli: &Cli, config: &Config) -> Result<()> {
    let output = if cli.json {
        render::json(sheet.items())?
    } else if cli.total {
        format!(
            "{}{}",
            render::overlay(sheet.items(), config),
            render::total_line(sheet, config)
        )
    } else {
        render::overlay(sheet.items(), config)
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output.trim_end_matches('\n'))?;
    stdout.flush()?;
    Ok(())
}

/// Evaluate lines as they are typed, one result per line.
fn interactive(sheet: &mut Sheet, config: &Config) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    write!(stdout, "> ")?;
    stdout.flush()?;
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;
        let item = sheet.push_line(&line);
        let result = render::result_column(item, config);
        if !result.is_empty() {
            writeln!(stdout, "  {}", result)?;
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }
    writeln!(stdout)?;
    Ok(())
}
