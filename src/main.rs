//! main.rs
//! Entry point for horse

use horse::app::{AppState, Outcome};
use horse::config::Config;
use horse::core::terminal;
use horse::utils::cli::{Cli, KEYBINDS_TEXT};
use horse::utils::logging::init_logging;
use horse::utils::{clean_path, write_last_path};

use anyhow::Context;
use clap::Parser;

fn main() -> anyhow::Result<()> {
    std::panic::set_hook(Box::new(|info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let mut stderr = std::io::stderr();
        let _ = crossterm::execute!(
            stderr,
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::cursor::Show
        );

        eprintln!("\n[horse] Error occurred: {}", info);

        #[cfg(debug_assertions)]
        {
            let bt = std::backtrace::Backtrace::force_capture();
            eprintln!("\nStack Backtrace:\n{}", bt);
        }
    }));

    let cli = Cli::parse();

    if cli.keybinds {
        print!("{}", KEYBINDS_TEXT);
        return Ok(());
    }

    if cli.init {
        let path = Config::default_path();
        Config::generate_default(&path)
            .with_context(|| format!("could not write config to {}", path.display()))?;
        return Ok(());
    }

    let log_guard = init_logging();

    let mut config = Config::load();
    if let Some(preview) = cli.preview_override() {
        config.general_mut().set_preview(preview);
    }

    let cwd = std::env::current_dir().context("could not determine the working directory")?;
    let start = clean_path(&match &cli.path {
        Some(path) => cwd.join(path),
        None => cwd,
    });

    let mut app = match AppState::from_dir(&config, &start) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "cannot open start directory");
            eprintln!("[horse] Error: {}", e);
            drop(log_guard);
            std::process::exit(1);
        }
    };

    let outcome = terminal::run_terminal(&mut app).context("terminal session failed")?;
    tracing::debug!(?outcome, "session ended");

    match &outcome {
        Outcome::Exit(_) => {
            drop(log_guard);
            std::process::exit(outcome.exit_code());
        }
        Outcome::Unsupported(message) => {
            eprintln!("[horse] {}", message);
        }
        Outcome::EmitPath(..) => {
            if let Some(line) = outcome.shell_line() {
                println!("{}", line);
            }
            if let (Some(marker), Some(chosen)) =
                (config.general().last_path_file(), outcome.emitted_path())
                && let Err(e) = write_last_path(marker, chosen)
            {
                tracing::warn!(marker = %marker.display(), error = %e, "could not record last path");
            }
        }
    }
    Ok(())
}
