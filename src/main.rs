//! dropselect - Entry Point

use clap::Parser;
use dropselect::model::{RawItem, ValueInput};
use dropselect::source::{read_items_file, JsonFileLoader};
use dropselect::state::Select;
use std::path::PathBuf;
use tracing::info;

/// dropselect - pick one or more items from a JSON list in the terminal
#[derive(Parser, Debug)]
#[command(name = "dropselect")]
#[command(version)]
#[command(about = "Interactive select/combobox over a JSON item list")]
pub struct Args {
    /// JSON file holding an array of strings or objects
    pub items: PathBuf,

    /// Re-read the file through the async loader on every filter change
    #[arg(long)]
    pub load: bool,

    /// Allow selecting several items
    #[arg(short, long)]
    pub multiple: bool,

    /// Group items by this field
    #[arg(short, long)]
    pub group_by: Option<String>,

    /// Initially selected ids (repeat for multiple)
    #[arg(long = "value")]
    pub values: Vec<String>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    fn initial_value(&self) -> ValueInput {
        match self.values.as_slice() {
            [] => ValueInput::None,
            [one] if !self.multiple => ValueInput::Text(one.clone()),
            many => ValueInput::List(many.iter().cloned().map(RawItem::Text).collect()),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = dropselect::config::load_config_with_precedence(args.config.clone())?;
        let merged = dropselect::config::merge_config(config_file);
        let with_env = dropselect::config::apply_env_overrides(merged);

        let multiple_override = args.multiple.then_some(true);
        dropselect::config::apply_cli_overrides(with_env, multiple_override, args.group_by.clone())
    };

    dropselect::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let builder = Select::builder(config.select.clone()).value(args.initial_value());
    let select = if args.load {
        builder
            .loader(JsonFileLoader::new(&args.items, config.select.label.clone()))
            .build()
    } else {
        let items = read_items_file(&args.items).map_err(dropselect::model::AppError::from)?;
        builder.items(items).build()
    };

    let value = dropselect::view::run_with_select(
        select,
        dropselect::view::CliArgs {
            no_color: args.no_color,
        },
    )?;

    info!(selected = value.len(), "Exiting");
    println!("{}", serde_json::to_string(&value)?);

    Ok(())
}
