//! Feedbackify admin CLI entry point.
//!
//! A headless front end to the settings manager: it drives the same UI bridge
//! commands a web admin page would, so the CLI sees exactly the validation
//! and persistence behaviour of the form.
//!
//! # Usage
//!
//! ```text
//! feedbackify-admin [--config PATH] <COMMAND>
//!
//! Commands:
//!   show     Print the current settings as JSON
//!   set      Change one or more settings and save them
//!   schema   Print the settings form schema as JSON
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable             | Default                      | Description              |
//! |----------------------|------------------------------|--------------------------|
//! | `FEEDBACKIFY_CONFIG` | platform config dir          | Path of `settings.toml`  |
//! | `RUST_LOG`           | `info`                       | Log filter               |
//!
//! Logs go to stderr so that stdout carries only the JSON output.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use feedbackify_admin::infrastructure::storage::TomlFileStore;
use feedbackify_admin::infrastructure::ui_bridge::{self, AppState, SettingsFormDto};
use feedbackify_core::{ButtonPosition, VisibilityMode};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Feedbackify widget settings administration.
#[derive(Debug, Parser)]
#[command(
    name = "feedbackify-admin",
    about = "View and change the Feedbackify feedback-widget settings",
    version
)]
struct Cli {
    /// Path of the settings file.
    ///
    /// Defaults to `settings.toml` in the platform config directory.
    #[arg(long, global = true, env = "FEEDBACKIFY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the current settings as JSON.
    Show,
    /// Change one or more settings and save them.
    Set(SetArgs),
    /// Print the settings form schema as JSON.
    Schema,
}

/// Fields left out keep their current value.
#[derive(Debug, clap::Args)]
struct SetArgs {
    /// Feedbackify form ID.
    #[arg(long)]
    id: Option<String>,

    /// Button color as `#RGB` or `#RRGGBB`; pass an empty string for transparent.
    #[arg(long)]
    color: Option<String>,

    /// Side of the page the button is docked to.
    #[arg(long, value_enum)]
    position: Option<PositionArg>,

    /// How the page list is interpreted.
    #[arg(long, value_enum)]
    visibility: Option<VisibilityArg>,

    /// Page patterns, one per line.
    #[arg(long)]
    pages: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PositionArg {
    Left,
    Right,
}

impl From<PositionArg> for ButtonPosition {
    fn from(arg: PositionArg) -> Self {
        match arg {
            PositionArg::Left => ButtonPosition::Left,
            PositionArg::Right => ButtonPosition::Right,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum VisibilityArg {
    AllExceptListed,
    ListedOnly,
}

impl From<VisibilityArg> for VisibilityMode {
    fn from(arg: VisibilityArg) -> Self {
        match arg {
            VisibilityArg::AllExceptListed => VisibilityMode::AllExceptListed,
            VisibilityArg::ListedOnly => VisibilityMode::ListedOnly,
        }
    }
}

impl SetArgs {
    /// Overlays the given fields onto `form`.
    fn apply(self, form: &mut SettingsFormDto) {
        if let Some(id) = self.id {
            form.feedbackify_id = id;
        }
        if let Some(color) = self.color {
            form.button_color = color;
        }
        if let Some(position) = self.position {
            form.button_position = ButtonPosition::from(position).as_str().to_string();
        }
        if let Some(visibility) = self.visibility {
            form.visibility_mode = VisibilityMode::from(visibility).as_str().to_string();
        }
        if let Some(pages) = self.pages {
            form.visibility_pages = pages;
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let store = match cli.config {
        Some(path) => TomlFileStore::new(path),
        None => TomlFileStore::open_default()
            .context("cannot locate the settings file; pass --config or set FEEDBACKIFY_CONFIG")?,
    };
    info!(path = %store.path().display(), "using settings file");
    let state = AppState::new(store);

    match cli.command {
        Command::Show => {
            let result = ui_bridge::get_settings(state).await;
            let Some(form) = result.data else {
                bail!(result.error.unwrap_or_else(|| "failed to load settings".to_string()));
            };
            print_json(&form)?;
        }
        Command::Set(args) => {
            let current = ui_bridge::get_settings(state.clone()).await;
            let Some(mut form) = current.data else {
                bail!(current.error.unwrap_or_else(|| "failed to load settings".to_string()));
            };
            args.apply(&mut form);

            let result = ui_bridge::submit_settings(state, form).await;
            if !result.success {
                if result.field_errors.is_empty() {
                    bail!(result.error.unwrap_or_else(|| "failed to save settings".to_string()));
                }
                for field_error in &result.field_errors {
                    eprintln!("{field_error}");
                }
                return Ok(ExitCode::FAILURE);
            }
            println!("The configuration options have been saved.");
        }
        Command::Schema => {
            let result = ui_bridge::get_form_schema().await;
            print_json(&result.data.unwrap_or_default())?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to encode JSON output")?;
    println!("{json}");
    Ok(())
}
