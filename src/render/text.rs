use crate::core::report::LiabilityReport;
use crate::render::currency::{format_currency, group_thousands};
use std::fmt;

const WIDTH: usize = 70;

/// Human-readable rendering of a [`LiabilityReport`].
pub struct TextReport<'a>(pub &'a LiabilityReport);

pub fn render_text(report: &LiabilityReport) -> String {
    TextReport(report).to_string()
}

fn heavy_rule(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", "=".repeat(WIDTH))
}

fn light_rule(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", "-".repeat(WIDTH))
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f)?;
    light_rule(f)?;
    writeln!(f, "{}", title)?;
    light_rule(f)
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;

        writeln!(f)?;
        heavy_rule(f)?;
        writeln!(f, "   PFAS LIABILITY EXPOSURE REPORT")?;
        heavy_rule(f)?;

        let utility = &report.utility;
        writeln!(f)?;
        writeln!(f, "Utility: {}", utility.name)?;
        writeln!(
            f,
            "Population Served: {}",
            group_thousands(utility.population_served)
        )?;
        writeln!(f, "Daily Flow: {:.1} MGD", utility.daily_flow)?;
        writeln!(
            f,
            "Estimated Exposure Duration: {} years",
            utility.years_of_exposure
        )?;

        section(f, "PFAS LEVELS")?;
        writeln!(
            f,
            "{:<12} {:<15} {:<12} {:<12}",
            "Compound", "Level (ppt)", "MCL (ppt)", "Status"
        )?;
        light_rule(f)?;
        for level in &report.pfas_levels {
            let limit = match level.limit {
                Some(limit) => format!("{:.1}", limit),
                None => "N/A".to_string(),
            };
            let status = if level.exceeds_limit {
                "❌ EXCEEDS"
            } else {
                "✅ OK"
            };
            writeln!(
                f,
                "{:<12} {:<15.1} {:<12} {:<12}",
                level.compound.name(),
                level.concentration,
                limit,
                status
            )?;
        }

        let compliance = if report.compliance_status {
            "✅ IN COMPLIANCE"
        } else {
            "❌ NOT IN COMPLIANCE"
        };
        writeln!(f)?;
        writeln!(f, "Overall Status: {}", compliance)?;

        let regulatory = &report.regulatory_penalties;
        section(f, "REGULATORY PENALTIES (Annual)")?;
        writeln!(
            f,
            "Total Annual Penalties: {}",
            format_currency(regulatory.total)
        )?;
        for (compound, penalty) in &regulatory.per_compound {
            writeln!(
                f,
                "  - {}: {}",
                compound,
                format_currency(penalty.annual_penalty)
            )?;
        }

        let litigation = &report.litigation_exposure;
        section(f, "LITIGATION EXPOSURE")?;
        writeln!(
            f,
            "Affected Population: {}",
            group_thousands(litigation.affected_population)
        )?;
        writeln!(f, "Low Estimate:  {}", format_currency(litigation.low))?;
        writeln!(f, "Mid Estimate:  {}", format_currency(litigation.mid))?;
        writeln!(f, "High Estimate: {}", format_currency(litigation.high))?;

        let treatment = &report.treatment_costs;
        section(f, &format!("TREATMENT COSTS ({}-Year)", treatment.years))?;
        writeln!(
            f,
            "Technology: {}",
            treatment.technology.as_str().to_uppercase()
        )?;
        writeln!(f, "Capital Cost: {}", format_currency(treatment.capital))?;
        writeln!(f, "Annual O&M: {}", format_currency(treatment.annual_om))?;
        writeln!(
            f,
            "Total ({}-year): {}",
            treatment.years,
            format_currency(treatment.total)
        )?;

        writeln!(f)?;
        heavy_rule(f)?;
        writeln!(f, "TOTAL LIABILITY EXPOSURE")?;
        heavy_rule(f)?;
        let total = &report.total_exposure;
        writeln!(f)?;
        writeln!(f, "  Low Estimate:  {}", format_currency(total.low))?;
        writeln!(f, "  Mid Estimate:  {}", format_currency(total.mid))?;
        writeln!(f, "  High Estimate: {}", format_currency(total.high))?;

        section(f, "⚠️  DISCLAIMER")?;
        writeln!(f, "{}", report.disclaimer)?;
        writeln!(f)?;
        heavy_rule(f)
    }
}
