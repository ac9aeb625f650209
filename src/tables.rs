use agrisolar::{
    estimator::{Assumptions, Estimate, FarmProfile},
    quantity::time::Years,
};
use average::Mean;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::cli::SweepRow;

const ACCENT: Color = Color::Blue;

pub fn build_estimate_table(
    profile: &FarmProfile,
    assumptions: &Assumptions,
    estimate: &Estimate,
) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling()
        .set_header(vec!["Your estimated savings", "", ""]);
    let rows = [
        (
            "Recommended system size",
            estimate.system_size.to_string(),
            format!("Based on your daily usage of {}", profile.daily_usage),
        ),
        (
            "Annual savings",
            estimate.annual_savings.to_string(),
            format!("Approximately {} reduction in energy costs", assumptions.savings_share),
        ),
        (
            "Estimated system cost",
            estimate.estimated_cost.to_string(),
            format!("At {}", assumptions.cost_per_kilowatt),
        ),
        (
            "Estimated ROI period",
            estimate.roi.to_string(),
            "Payback period for your investment".to_owned(),
        ),
    ];
    for (caption, value, note) in rows {
        table.add_row(vec![
            Cell::new(caption),
            Cell::new(value)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Bold)
                .fg(ACCENT),
            Cell::new(note).add_attribute(Attribute::Dim),
        ]);
    }
    table
}

pub fn build_sweep_table(rows: &[SweepRow]) -> Table {
    let mean_roi: f64 = {
        let estimate: Mean = rows.iter().map(|row| row.estimate.roi.as_f64()).collect();
        if estimate.is_empty() { 0.0 } else { estimate.mean() }
    };

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling()
        .set_header(vec!["Usage", "System", "Savings", "Cost", "ROI"]);
    for row in rows {
        table.add_row(vec![
            Cell::new(row.profile.daily_usage)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(row.estimate.system_size).set_alignment(CellAlignment::Right),
            Cell::new(row.estimate.annual_savings).set_alignment(CellAlignment::Right),
            Cell::new(row.estimate.estimated_cost)
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(row.estimate.roi)
                .set_alignment(CellAlignment::Right)
                .fg(roi_color(row.estimate.roi, mean_roi)),
        ]);
    }
    table
}

fn roi_color(roi: Years, mean_roi: f64) -> Color {
    if roi.as_f64() <= mean_roi { Color::Green } else { Color::Red }
}

#[cfg(test)]
mod tests {
    use agrisolar::quantity::energy::KilowattHours;

    use super::*;

    #[test]
    fn test_estimate_table() {
        let profile = FarmProfile::default();
        let assumptions = Assumptions::default();
        let estimate = profile.estimate(&assumptions).unwrap();
        let rendered = build_estimate_table(&profile, &assumptions, &estimate).to_string();
        assert!(rendered.contains("25 kW"));
        assert!(rendered.contains("₹63,000"));
        assert!(rendered.contains("₹2,500,000"));
        assert!(rendered.contains("40 years"));
        assert!(rendered.contains("Approximately 35% reduction in energy costs"));
        assert!(rendered.contains("Based on your daily usage of 100 kWh"));
    }

    #[test]
    fn test_sweep_table() {
        let assumptions = Assumptions::default();
        let rows: Vec<_> = [100, 300]
            .into_iter()
            .map(|daily_usage| {
                let profile = FarmProfile::default().with_daily_usage(KilowattHours(daily_usage));
                let estimate = profile.estimate(&assumptions).unwrap();
                SweepRow { profile, estimate }
            })
            .collect();
        let rendered = build_sweep_table(&rows).to_string();
        assert!(rendered.contains("300 kWh"));
        assert!(rendered.contains("75 kW"));
    }

    #[test]
    fn test_empty_sweep_table() {
        assert!(build_sweep_table(&[]).to_string().contains("ROI"));
    }

    #[test]
    fn test_roi_color() {
        assert_eq!(roi_color(Years(10), 20.0), Color::Green);
        assert_eq!(roi_color(Years(30), 20.0), Color::Red);
    }
}
