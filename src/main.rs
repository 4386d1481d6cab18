use anyhow::Result;
use clap::Parser;
use std::path::Path;
use virtlist::{
    cli::{Cli, Commands, ConfigAction, run_inspect},
    config::{AppConfig, CONFIG_KEYS},
    console::{console, init_console},
    tui,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match cli.config.clone() {
        Some(path) => path,
        None => AppConfig::config_path()?,
    };
    let loaded = AppConfig::load_from(&config_path);
    let config = loaded.as_ref().cloned().unwrap_or_default();

    // CLI verbosity flags take precedence over the config file
    let effective_verbosity = cli.get_effective_verbosity(config.get_verbosity());
    init_console(effective_verbosity);

    match loaded {
        Ok(_) => console().verbose(&format!("Using config {}", config_path.display())),
        Err(e) => console().warning(&format!(
            "Ignoring config at {}: {}",
            config_path.display(),
            e
        )),
    }

    let command = cli.command.unwrap_or(Commands::View {
        items: None,
        item_height: None,
    });

    match command {
        Commands::View { items, item_height } => {
            handle_view(items, item_height, &config).await?;
        }
        Commands::Inspect(args) => {
            let report = run_inspect(&args);
            console().plain(&report.to_string());
        }
        Commands::Config { action } => {
            handle_config(action, &config_path)?;
        }
    }

    Ok(())
}

async fn handle_view(
    items: Option<usize>,
    item_height: Option<f64>,
    config: &AppConfig,
) -> Result<()> {
    let items = items.unwrap_or(config.list.item_count);
    let item_height = item_height.unwrap_or(config.list.item_height);
    if !(item_height.is_finite() && item_height >= 1.0) {
        anyhow::bail!("--item-height must be at least one row, got {}", item_height);
    }

    let summary = tui::run(config, items, item_height).await?;
    console().session_finished(summary.start, summary.total);
    console().verbose(&format!(
        "Last window: {} items from index {}",
        summary.count, summary.start
    ));
    Ok(())
}

fn handle_config(action: ConfigAction, path: &Path) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = AppConfig::read(path)?;
            console().plain(&format!("# {}", path.display()));
            console().plain(&format!("verbosity = {}", config.get_verbosity()));
            console().plain("[list]");
            console().field("item_count", &config.list.item_count);
            console().field("item_height", &config.list.item_height);
            console().field("wheel_step", &config.list.wheel_step);
            console().plain("[drag]");
            console().field("vertical_tolerance", &config.drag.vertical_tolerance);
            console().field("horizontal_tolerance", &config.drag.horizontal_tolerance);
        }
        ConfigAction::Set { key, value } => {
            let mut config = AppConfig::read(path)?;
            if let Err(e) = config.set_value(&key, &value) {
                console().error(&e.to_string());
                console().plain(&format!("Available keys: {}", CONFIG_KEYS.join(", ")));
                return Ok(());
            }
            config.save_to(path)?;
            console().success(&format!("Set {} = {}", key, value));
        }
    }
    Ok(())
}
