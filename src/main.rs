use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use anylocale::config::Config;
use anylocale::{logging, LocaleStore, TomlPreferences};

#[derive(Parser)]
#[command(name = "anylocale", version, about = "Show or change the persisted display locale")]
struct Cli {
    /// Config file (default: <config_dir>/anylocale/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Preferences file, overriding the one named in the config
    #[arg(long, value_name = "PATH")]
    preferences: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the active locale
    Show,
    /// Switch to TAG and save it
    Set { tag: String },
    /// List supported locales, marking the active one
    List,
}

fn main() -> Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let preferences_path = cli
        .preferences
        .unwrap_or_else(|| config.persistence.preferences_path());
    let preferences = Arc::new(TomlPreferences::new(preferences_path));
    let store = LocaleStore::open(preferences, config.store_options());

    match cli.command {
        Command::Show => println!("{}", store.current()),
        Command::Set { tag } => {
            let previous = store.current();
            let _announce = store.subscribe(move |locale| println!("{previous} -> {locale}"));

            if !store.set_locale(&tag) {
                bail!("Locale '{}' was not applied", tag);
            }
            store.flush();
            if store.persist_failures() > 0 {
                bail!("Locale switched to '{}' but could not be saved", tag);
            }
        }
        Command::List => {
            let current = store.current();
            let active = store.supported().find(&current).map(|o| o.tag.clone());
            for option in store.supported().options() {
                let marker = if Some(&option.tag) == active.as_ref() {
                    "*"
                } else {
                    " "
                };
                println!("{} {:<8} {}", marker, option.tag.as_str(), option.native_name);
            }
        }
    }

    Ok(())
}
