use std::path::PathBuf;

use alertkit::config::Config;
use alertkit::logging::init_tracing;
use alertkit::ui::app::App;
use alertkit::ui::runtime;
use anyhow::{bail, Context};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "alertkit", version, about = "Alert dialogs driven by application state")]
struct Cli {
    /// Config file (defaults to the platform config directory).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Open this preset on startup.
    #[arg(long)]
    preset: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = load_config(&cli)?;

    let mut app = App::new(config.alerts()?, config.labels.clone());
    if let Some(name) = cli.preset.as_deref() {
        if !app.open_preset_by_name(name) {
            bail!("unknown preset '{}'", name);
        }
    }

    runtime::run(app).context("terminal UI failed")?;
    Ok(())
}

/// `--config` when given, otherwise the platform config file.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Config::load().context("loading default config"),
    }
}

#[cfg(test)]
mod tests {
    use alertkit::config::Config;
    use clap::Parser;
    use std::path::PathBuf;

    use super::{load_config, Cli};

    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["alertkit"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.preset.is_none());
    }

    #[test]
    fn parse_config_and_preset() {
        let cli =
            Cli::try_parse_from(["alertkit", "--config", "/tmp/a.toml", "--preset", "delete"])
                .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/a.toml")));
        assert_eq!(cli.preset.as_deref(), Some("delete"));
    }

    #[test]
    fn explicit_config_path_is_used() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[labels]\ncancel = \"Back\"\n").unwrap();

        let cli = Cli::try_parse_from(["alertkit", "--config", path.to_str().unwrap()]).unwrap();
        let config = load_config(&cli).unwrap();
        assert_eq!(config.labels.cancel, "Back");
        assert_eq!(config.presets, Config::default().presets);
    }
}
