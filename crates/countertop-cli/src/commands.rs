//! Command handlers

use std::io::Read;
use std::path::{Path, PathBuf};

use countertop_app::repository::open_catalog_sources;
use countertop_app::{Config, PricingService};
use countertop_domain::derive_recommendations;
use countertop_types::{
    CutoutGrade, EdgeDetail, EstimateRequest, ObservedAttributes, OutputFormat, QuoteRequest,
    Result, Severity,
};
use countertop_vision::STONE_ANALYSIS_PROMPT;
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::output;

pub fn execute(cli: Cli, mut config: Config) -> Result<()> {
    // Override from CLI args
    if cli.materials.is_some() {
        config.materials_csv = cli.materials.clone();
    }
    if cli.labor.is_some() {
        config.labor_csv = cli.labor.clone();
    }
    if cli.price_list.is_some() {
        config.price_list_csv = cli.price_list.clone();
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Estimate {
            material,
            length,
            width,
            slab_length,
            slab_width,
            labor_key,
        } => {
            let req = EstimateRequest {
                material_name: material,
                length_inches: Some(length),
                width_inches: Some(width),
                slab_length_inches: slab_length,
                slab_width_inches: slab_width,
                labor_key,
            };
            cmd_estimate(&config, output_format, &req)
        }

        Commands::Match {
            stone_type,
            color,
            damage,
            severity,
        } => {
            let attrs = ObservedAttributes {
                stone_type,
                color_and_pattern: color,
                damage_type: damage,
                severity,
            };
            cmd_match(&config, output_format, &attrs)
        }

        Commands::Analyze { response } => cmd_analyze(&config, output_format, &response),

        Commands::Prompt => {
            println!("{}", *STONE_ANALYSIS_PROMPT);
            Ok(())
        }

        Commands::Quote {
            sq_ft,
            category,
            customer,
            vendor,
            color,
            demo,
            sinks,
            premium_sink,
            cooktops,
            premium_cooktop,
            backsplash,
            edge,
        } => {
            let req = QuoteRequest {
                total_sq_ft: Some(sq_ft),
                material_category: category,
                customer_name: customer,
                vendor,
                color,
                demo,
                sink_qty: Some(sinks),
                sink_type: grade(premium_sink),
                cooktop_qty: Some(cooktops),
                cooktop_type: grade(premium_cooktop),
                backsplash,
                edge_detail: EdgeDetail::from(edge),
            };
            cmd_quote(&config, output_format, &req)
        }

        Commands::Recommend {
            severity,
            stone_type,
        } => cmd_recommend(output_format, severity, &stone_type),

        Commands::Catalog { skipped } => cmd_catalog(&config, output_format, skipped),

        Commands::Config {
            show,
            set_materials,
            set_labor,
            set_price_list,
            set_output,
            set_log_level,
            reset,
        } => cmd_config(
            show,
            set_materials,
            set_labor,
            set_price_list,
            set_output,
            set_log_level,
            reset,
        ),
    }
}

fn grade(premium: bool) -> CutoutGrade {
    if premium {
        CutoutGrade::Premium
    } else {
        CutoutGrade::Standard
    }
}

fn cmd_estimate(config: &Config, output_format: OutputFormat, req: &EstimateRequest) -> Result<()> {
    let service = PricingService::open(config)?;
    let result = service.estimate(req)?;
    output::print_estimate(output_format, &result)
}

fn cmd_match(config: &Config, output_format: OutputFormat, attrs: &ObservedAttributes) -> Result<()> {
    let service = PricingService::open(config)?;
    let result = service.match_attributes(attrs);
    output::print_match(output_format, &result)
}

fn cmd_analyze(config: &Config, output_format: OutputFormat, response: &Path) -> Result<()> {
    let text = read_response(response)?;
    debug!(bytes = text.len(), "read provider response");

    let service = PricingService::open(config)?;
    let analysis = service.analyze_response(&text);
    output::print_analysis(output_format, &analysis)
}

fn read_response(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(std::fs::read_to_string(path)?)
}

fn cmd_quote(config: &Config, output_format: OutputFormat, req: &QuoteRequest) -> Result<()> {
    let service = PricingService::open(config)?;
    let quote = service.quote(req)?;
    output::print_quote(output_format, &quote)
}

fn cmd_recommend(output_format: OutputFormat, severity: Severity, stone_type: &str) -> Result<()> {
    let recs = derive_recommendations(severity, stone_type);
    output::print_recommendations(output_format, &recs)
}

fn cmd_catalog(config: &Config, output_format: OutputFormat, show_skipped: bool) -> Result<()> {
    let service = PricingService::new(open_catalog_sources(config)?);
    let report = service.reload()?;
    output::print_catalog(output_format, &service.catalog(), &report, show_skipped)
}

fn cmd_config(
    show: bool,
    set_materials: Option<PathBuf>,
    set_labor: Option<PathBuf>,
    set_price_list: Option<PathBuf>,
    set_output: Option<OutputFormat>,
    set_log_level: Option<String>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(path) = set_materials {
        config.materials_csv = Some(path);
        modified = true;
    }

    if let Some(path) = set_labor {
        config.labor_csv = Some(path);
        modified = true;
    }

    if let Some(path) = set_price_list {
        config.price_list_csv = Some(path);
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(level) = set_log_level {
        config.log_level = level;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("\n{}", config);
    }

    Ok(())
}
