use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use bazaar_finder::Mode;

#[derive(Debug, Parser)]
#[command(name = "bazaar-finder")]
#[command(about = "Search Grand Bazaar recipes and windmill goods by ingredient", long_about = None)]
pub struct Cli {
    /// Directory holding recipes.ron and windmill.ron
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Catalog to open with
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Write the built-in catalogs to the data directory and exit
    #[arg(long)]
    pub export_data: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Recipes,
    Goods,
    All,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Recipes => Mode::Recipes,
            ModeArg::Goods => Mode::Goods,
            ModeArg::All => Mode::All,
        }
    }
}
