//! sumcalc - add two numbers in the terminal
//!
//! Runs the calculator card as a full-screen TUI, or computes once and
//! exits with `--compute A B`.

mod headless;
mod logging;

use clap::Parser;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use logging::LogTarget;
use ratatui::prelude::*;
use std::io::stdout;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use sumcalc_core::{AppCoordinator, Config, InputEvent};
use sumcalc_ui::{App, CalculatorView};

/// Add two numbers in the terminal
#[derive(Parser, Debug)]
#[command(name = "sumcalc")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Built-in theme: dark, light or nord
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log file for the UI session
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,

    /// Add two numbers and exit without starting the UI
    #[arg(
        long,
        num_args = 2,
        value_names = ["A", "B"],
        allow_hyphen_values = true
    )]
    compute: Option<Vec<String>>,

    /// Print the --compute result as JSON
    #[arg(long, requires = "compute")]
    json: bool,
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)
            .wrap_err_with(|| format!("loading config {}", path.display()))?,
        None => Config::load().unwrap_or_else(|e| {
            eprintln!("Warning: Failed to load configuration: {e}");
            eprintln!("Using default configuration...");
            Config::default()
        }),
    };
    config.apply_overrides(cli.theme.clone(), cli.log_file.clone());

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(ExitCode::SUCCESS);
    }

    if let Some(operands) = &cli.compute {
        logging::init(&LogTarget::Stderr, &config.logging.level, cli.verbose)?;
        let (a, b) = match operands.as_slice() {
            [a, b] => (a.as_str(), b.as_str()),
            _ => color_eyre::eyre::bail!("--compute takes exactly two values"),
        };
        let ok = headless::compute(
            a,
            b,
            cli.json,
            &mut std::io::stdout().lock(),
            &mut std::io::stderr().lock(),
        )?;
        return Ok(if ok {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    let target = logging::ui_target(config.log_path(), config.logging.file.is_some())?;
    logging::init(&target, &config.logging.level, cli.verbose)?;

    let theme = config.theme()?;
    tracing::info!(theme = %theme.name, "starting sumcalc");

    let mut app = App::with_theme(Box::new(CalculatorView::new(theme.clone())), theme);
    app.set_show_help(config.ui.show_help);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_app(
        &mut terminal,
        &mut app,
        Duration::from_millis(config.ui.tick_rate_ms),
    );

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    tracing::info!("sumcalc exited");
    result.map(|()| ExitCode::SUCCESS)
}

fn run_app<B>(terminal: &mut Terminal<B>, app: &mut App, tick_rate: Duration) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: std::error::Error + Send + Sync + 'static,
{
    loop {
        // Render
        terminal.draw(|frame| app.render(frame))?;

        // Handle events
        if event::poll(tick_rate)? {
            match event::read()? {
                // Key releases and repeats are ignored
                Event::Key(key) if key.kind != KeyEventKind::Press => {}
                event => app.dispatch(InputEvent::from(event).into()),
            }
        }

        // Check quit
        if app.should_quit() {
            break;
        }

        app.tick();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_compute_accepts_negative_operands() {
        let cli = Cli::try_parse_from(["sumcalc", "--compute", "2.5", "-1.5"]).expect("parse");
        assert_eq!(
            cli.compute,
            Some(vec!["2.5".to_string(), "-1.5".to_string()])
        );
    }

    #[test]
    fn test_json_requires_compute() {
        assert!(Cli::try_parse_from(["sumcalc", "--json"]).is_err());
    }
}
