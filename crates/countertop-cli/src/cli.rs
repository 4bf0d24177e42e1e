//! CLI definition using clap

use clap::{Parser, Subcommand};
use countertop_types::{OutputFormat, Severity};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "countertop-pricing")]
#[command(version)]
#[command(about = "Countertop pricing: estimates, material matching and project quotes")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Materials CSV. Uses config value if not specified.
    #[arg(long, global = true)]
    pub materials: Option<PathBuf>,

    /// Labor CSV. Uses config value if not specified.
    #[arg(long, global = true)]
    pub labor: Option<PathBuf>,

    /// Quote price list CSV. Uses config value if not specified.
    #[arg(long, global = true)]
    pub price_list: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Debug logging on stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate a countertop from its dimensions
    Estimate {
        /// Material color name (e.g., "Frost-N")
        #[arg(long, short = 'm')]
        material: String,

        /// Length in inches
        #[arg(long, short = 'l')]
        length: f64,

        /// Width in inches
        #[arg(long, short = 'w')]
        width: f64,

        /// Slab length in inches (slab count is 0 without both slab sides)
        #[arg(long)]
        slab_length: Option<f64>,

        /// Slab width in inches
        #[arg(long)]
        slab_width: Option<f64>,

        /// Labor key. "Default" labor applies if not specified.
        #[arg(long, short = 'k')]
        labor_key: Option<String>,
    },

    /// Match observed attributes against the catalog
    Match {
        /// Stone type (e.g., "Quartz", "Marble")
        #[arg(long, short = 's')]
        stone_type: String,

        /// Color and pattern description
        #[arg(long, short = 'c')]
        color: String,

        /// Damage type (e.g., "Chip")
        #[arg(long, default_value = "")]
        damage: String,

        /// Damage severity (None, Low, Moderate, Severe)
        #[arg(long, default_value = "None")]
        severity: Severity,
    },

    /// Match a saved vision provider response against the catalog
    Analyze {
        /// Response file, or "-" for stdin
        response: PathBuf,
    },

    /// Print the prompt to send to the vision provider
    Prompt,

    /// Preliminary quote for a whole project
    Quote {
        /// Total countertop area in square feet
        #[arg(long)]
        sq_ft: f64,

        /// Price list category
        #[arg(long, default_value = "granite and quartz")]
        category: String,

        #[arg(long)]
        customer: Option<String>,

        #[arg(long)]
        vendor: Option<String>,

        #[arg(long)]
        color: Option<String>,

        /// Include demolition of existing tops
        #[arg(long)]
        demo: bool,

        /// Number of sink cutouts
        #[arg(long, default_value_t = 0.0)]
        sinks: f64,

        /// Sink cutouts are premium
        #[arg(long)]
        premium_sink: bool,

        /// Number of cooktop cutouts
        #[arg(long, default_value_t = 0.0)]
        cooktops: f64,

        /// Cooktop cutouts are premium
        #[arg(long)]
        premium_cooktop: bool,

        /// Include backsplash
        #[arg(long)]
        backsplash: bool,

        /// Edge detail (standard, premium, custom)
        #[arg(long, default_value = "standard")]
        edge: String,
    },

    /// Care and repair guidance for a damage report
    Recommend {
        /// Damage severity (None, Low, Moderate, Severe)
        #[arg(long)]
        severity: Severity,

        /// Stone type
        #[arg(long, short = 's', default_value = "")]
        stone_type: String,
    },

    /// Load the sheets and list the catalog
    Catalog {
        /// List every skipped row with its reason
        #[arg(long)]
        skipped: bool,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set materials CSV path
        #[arg(long)]
        set_materials: Option<PathBuf>,

        /// Set labor CSV path
        #[arg(long)]
        set_labor: Option<PathBuf>,

        /// Set quote price list CSV path
        #[arg(long)]
        set_price_list: Option<PathBuf>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set log filter (e.g., "info", "countertop_store=debug")
        #[arg(long)]
        set_log_level: Option<String>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}
