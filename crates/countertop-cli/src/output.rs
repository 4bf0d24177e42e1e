//! Output formatting module

use countertop_store::{Catalog, LoadReport};
use countertop_types::{
    EstimateResult, MatchResult, OutputFormat, QuoteBreakdown, Recommendations, Result,
};
use countertop_vision::StoneAnalysis;
use serde::Serialize;

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(value)?;
    println!("{}", content);
    Ok(())
}

pub fn print_estimate(output_format: OutputFormat, result: &EstimateResult) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(result);
    }

    println!("\nEstimate");
    println!("========");
    println!("Material:        {}", result.material);
    println!(
        "Dimensions:      {} x {} in",
        result.length_inches, result.width_inches
    );
    println!("Area:            {:.2} sq ft", result.base_sq_ft);
    println!("With waste:      {:.2} sq ft", result.final_sq_ft);
    if let (Some(l), Some(w)) = (result.slab_length_inches, result.slab_width_inches) {
        println!("Slabs:           {} ({} x {} in)", result.slab_count, l, w);
    }
    println!("\n--- Pricing ---");
    println!("Base cost:       ${:.2} / sq ft", result.base_cost);
    println!("Marked up:       ${:.2} / sq ft", result.marked_up_cost);
    println!(
        "{:<17}${:.2}",
        format!("Labor ({}):", result.labor_key),
        result.labor_cost
    );
    println!("---------------");
    println!("Total:           ${:.2}", result.total_estimate);

    Ok(())
}

fn print_recommendation_lines(recs: &Recommendations) {
    println!("Professional:    {}", recs.professional_recommendation);
    println!("Cleaning:        {}", recs.cleaning_recommendation);
    println!("Repair:          {}", recs.repair_recommendation);
}

fn print_match_table(result: &MatchResult) {
    println!("\nMaterial Match");
    println!("==============");
    println!("Suggestion:      {}", result.color_match_suggestion);
    println!("Estimated cost:  {}", result.estimated_cost);
    println!("Composition:     {}", result.material_composition);
    println!(
        "Natural stone:   {}",
        if result.is_natural_stone { "Yes" } else { "No" }
    );
    println!();
    print_recommendation_lines(&result.recommendations);

    if result.possible_matches.is_empty() {
        return;
    }
    println!("\nPossible matches ({}):", result.possible_matches.len());
    println!(
        "{:<28} {:<12} {:<10} {:>12}",
        "Color", "Material", "Thickness", "Replacement"
    );
    for m in &result.possible_matches {
        println!(
            "{:<28} {:<12} {:<10} {:>12}",
            m.color_name, m.material, m.thickness, m.replacement_cost
        );
    }
}

pub fn print_match(output_format: OutputFormat, result: &MatchResult) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(result);
    }
    print_match_table(result);
    Ok(())
}

pub fn print_analysis(output_format: OutputFormat, analysis: &StoneAnalysis) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(analysis);
    }
    match analysis {
        StoneAnalysis::Matched(result) => print_match_table(result),
        StoneAnalysis::Unavailable { error } => {
            println!("\nMaterial Match");
            println!("==============");
            println!("Unavailable:     {}", error);
        }
    }
    Ok(())
}

pub fn print_quote(output_format: OutputFormat, quote: &QuoteBreakdown) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(quote);
    }

    println!("\nPreliminary Quote");
    println!("=================");
    println!("Customer:        {}", quote.customer_name);
    println!("Vendor:          {}", quote.vendor);
    println!("Color:           {}", quote.color);
    println!("Category:        {}", quote.material_category);
    println!("Area:            {:.2} sq ft", quote.total_sq_ft);
    println!("Slabs:           {}", quote.slab_count);
    println!("\n--- Costs ---");
    println!(
        "Material:        ${:.2} (${:.2} / sq ft)",
        quote.material_cost, quote.price_per_sq_ft
    );
    println!("Sink cutouts:    ${:.2}", quote.sink_cost);
    println!("Cooktop cutouts: ${:.2}", quote.cooktop_cost);
    println!("Backsplash:      ${:.2}", quote.backsplash_cost);
    println!("-------------");
    println!("Total:           ${:.2}", quote.preliminary_total);

    Ok(())
}

pub fn print_recommendations(output_format: OutputFormat, recs: &Recommendations) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(recs);
    }
    println!("\nRecommendations");
    println!("===============");
    print_recommendation_lines(recs);
    Ok(())
}

#[derive(Serialize)]
struct CatalogView<'a> {
    catalog: &'a Catalog,
    report: &'a LoadReport,
}

pub fn print_catalog(
    output_format: OutputFormat,
    catalog: &Catalog,
    report: &LoadReport,
    show_skipped: bool,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(&CatalogView { catalog, report });
    }

    println!("\nCatalog v{}", catalog.version());
    println!("==========");
    if let Some(loaded_at) = catalog.loaded_at() {
        println!("Loaded at:       {}", loaded_at.format("%Y-%m-%d %H:%M:%S UTC"));
    }
    println!("Fingerprint:     {}", catalog.fingerprint());
    println!(
        "Accepted:        {} materials, {} labor, {} price list",
        report.materials_accepted, report.labor_accepted, report.price_list_accepted
    );
    println!("Skipped rows:    {}", report.skipped_count());

    println!("\nMaterials:");
    println!(
        "{:<28} {:<14} {:<12} {:<8} {:>10} {:>10}",
        "Color", "Vendor", "Material", "Thick", "Cost/SqFt", "Total/SqFt"
    );
    for m in catalog.materials() {
        println!(
            "{:<28} {:<14} {:<12} {:<8} {:>10.2} {:>10.2}",
            m.name, m.vendor, m.material_type, m.thickness, m.cost_per_area, m.total_per_area
        );
    }

    println!("\nLabor:");
    for l in catalog.labor() {
        println!("  {:<26} ${:.2}", l.key, l.cost);
    }

    if !catalog.price_list().is_empty() {
        println!("\nQuote price list:");
        for p in catalog.price_list() {
            println!("  {:<26} ${:.2} / sq ft", p.material, p.price);
        }
    }

    if show_skipped && !report.skipped.is_empty() {
        println!("\nSkipped:");
        for s in &report.skipped {
            println!("  {} row {}: {}", s.table, s.row, s.reason);
        }
    }

    Ok(())
}
