use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use greeter_sessions::{
    util, Config, ListModel, ModelIndex, SessionList, SessionsModel, Value, ICON_ROLE,
};

#[derive(Debug, Parser)]
#[command(name = "greeter-sessions", version, about = "List greeter sessions and their badges")]
struct Cli {
    /// Config file to read instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding config.toml (default: $XDG_CONFIG_HOME/greeter-sessions)
    #[arg(long, global = true, conflicts_with = "config")]
    config_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List installed sessions in display order
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the role names the model exposes
    Roles,
    /// Resolve the badge for a session name
    Icon {
        name: String,
        /// Search directory, repeatable; replaces the configured list
        #[arg(long = "search-dir")]
        search_dirs: Vec<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => {
            util::init_config_dir(cli.config_dir.clone());
            Config::load()
        }
    };

    match cli.command {
        Command::List { json } => list(&config, json),
        Command::Roles => {
            let model = SessionsModel::new(SessionList::default(), config.icon_search_dirs);
            for (role, name) in model.role_names() {
                println!("{role}\t{name}");
            }
            Ok(())
        }
        Command::Icon { name, search_dirs } => {
            let dirs = if search_dirs.is_empty() {
                config.icon_search_dirs
            } else {
                search_dirs
            };
            println!("{}", greeter_sessions::icon_url(&name, &dirs).display());
            Ok(())
        }
    }
}

fn list(config: &Config, json: bool) -> Result<()> {
    let model = SessionsModel::from_config(config);

    if json {
        let role_names = model.role_names();
        // One object per session, keyed by role name
        let rows: Vec<BTreeMap<&str, Value>> = model
            .sorted_rows()
            .iter()
            .map(|&row| {
                let index = ModelIndex::new(row, 0);
                role_names
                    .iter()
                    .map(|(role, name)| (name.as_str(), model.data(&index, *role)))
                    .collect()
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    for &row in model.sorted_rows() {
        let session = &model.source().sessions()[row];
        println!(
            "{:<24} {:<8} {:<24} {}",
            session.key,
            session.session_type,
            session.name,
            model.data(&ModelIndex::new(row, 0), ICON_ROLE).to_text()
        );
    }
    Ok(())
}
