//! Output formatting module

use routeopt_domain::model::CenterCatalog;
use routeopt_types::{GridRow, OutputFormat, Result};

/// Print the assignment grid as an aligned table or JSON
pub fn output_assignment(
    output_format: OutputFormat,
    rows: &[GridRow],
    catalog: &CenterCatalog,
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(rows)?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nOptimal DC Assignment");
    println!("=====================");
    println!(
        "{:<20} {:<12} {:<12} {:<14} {:>6}",
        "Zone", "Current DC", "Optimal DC", "User Input DC", "Flag"
    );
    println!("{}", "-".repeat(68));
    for row in rows {
        println!(
            "{:<20} {:<12} {:<12} {:<14} {:>6}",
            truncate_str(&row.zone, 19),
            row.current_dc.as_deref().unwrap_or("-"),
            row.optimal_dc,
            row.user_input_dc,
            if row.flagged { "*" } else { "" }
        );
    }

    println!();
    println!("Zones per DC");
    println!("------------");
    for center in catalog.centers() {
        let count = rows.iter().filter(|r| r.user_input_dc == center.name).count();
        println!("{:<12} {:>5}", center.name, count);
    }
    let diverged = rows.iter().filter(|r| r.flagged).count();
    println!();
    println!("Total zones:     {}", rows.len());
    println!("User overrides:  {}", diverged);

    Ok(())
}

/// Print the center catalog
pub fn output_centers(output_format: OutputFormat, catalog: &CenterCatalog) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(catalog.centers())?;
        println!("{}", content);
        return Ok(());
    }

    println!("\nDistribution Centers");
    println!("====================");
    println!(
        "{:<12} {:>12} {:>12} {:<10}",
        "Name", "Lat", "Lng", "Color"
    );
    println!("{}", "-".repeat(50));
    for center in catalog.centers() {
        println!(
            "{:<12} {:>12.5} {:>12.5} {:<10}",
            center.name, center.lat, center.lng, center.color
        );
    }

    Ok(())
}

fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let truncated: String = s.chars().take(max_len.saturating_sub(2)).collect();
        format!("{}..", truncated)
    } else {
        s.to_string()
    }
}
