//! Text and JSON rendering of calculation results.

use std::fmt::Write as _;

use anyhow::Result;
use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::warn;

use elec_core::calculations::emergency_lighting::EmergencyLightingResult;
use elec_core::calculations::touch_step::TouchStepResult;
use elec_core::profiles::{CableSize, FixtureType, OccupancyType, SoilType};
use elec_core::{CalcError, CalculationItem, CalculationOutput, DesignSettings};

/// Outcome of one calculation item
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    pub label: String,
    pub calc_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<CalculationOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CalcError>,
}

impl ReportEntry {
    /// Run an item, capturing either its output or its error.
    pub fn run(item: &CalculationItem, settings: &DesignSettings) -> Self {
        let (output, error) = match item.run(settings) {
            Ok(output) => (Some(output), None),
            Err(e) => {
                warn!(label = item.label(), code = e.error_code(), "calculation failed: {}", e);
                (None, Some(e))
            }
        };
        ReportEntry {
            label: item.label().to_string(),
            calc_type: item.calc_type(),
            output,
            error,
        }
    }

    fn title(&self) -> String {
        if self.label.is_empty() {
            self.calc_type.to_string()
        } else {
            format!("{} ({})", self.label, self.calc_type)
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub generated_at: DateTime<Local>,
    pub entries: Vec<ReportEntry>,
}

impl Report {
    pub fn new(entries: Vec<ReportEntry>) -> Self {
        Report {
            generated_at: Local::now(),
            entries,
        }
    }

    /// 1 if any entry errored, 2 if any verdict failed, otherwise 0
    pub fn exit_code(&self) -> u8 {
        if self.entries.iter().any(|e| e.error.is_some()) {
            1
        } else if self.entries.iter().any(|e| e.output.as_ref().is_some_and(|o| !o.passes())) {
            2
        } else {
            0
        }
    }

    pub fn render_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Sparkcalc report, {}", self.generated_at.format("%Y-%m-%d %H:%M"));

        for entry in &self.entries {
            let _ = writeln!(out);
            let _ = writeln!(out, "═══════════════════════════════════════");
            let _ = writeln!(out, "  {}", entry.title());
            let _ = writeln!(out, "═══════════════════════════════════════");
            match (&entry.output, &entry.error) {
                (Some(CalculationOutput::TouchStep(r)), _) => write_touch_step(&mut out, r),
                (Some(CalculationOutput::EmergencyLighting(r)), _) => write_lighting(&mut out, r),
                (None, Some(e)) => {
                    let _ = writeln!(out, "  ERROR [{}]: {}", e.error_code(), e);
                }
                (None, None) => {}
            }
        }
        out
    }
}

fn write_touch_step(out: &mut String, r: &TouchStepResult) {
    let _ = writeln!(out, "  Electrode resistance  {:>10.3} Ω", r.electrode_resistance);
    let _ = writeln!(out, "  Earth potential rise  {:>10.2} V", r.earth_potential_rise);
    let _ = writeln!(
        out,
        "  Touch voltage         {:>10.2} V  (limit {:.0} V, {:.0}%)",
        r.touch_voltage,
        r.permissible_touch_voltage,
        r.touch_utilisation() * 100.0
    );
    let _ = writeln!(
        out,
        "  Step voltage          {:>10.2} V  (limit {:.0} V, {:.0}%)",
        r.step_voltage,
        r.permissible_step_voltage,
        r.step_utilisation() * 100.0
    );
    let _ = writeln!(out, "  Body current          {:>10.2} mA", r.body_current);
    let _ = writeln!(out, "  {}", r.physiological_zone);
    let verdict = if r.passes() { "PASS" } else { "FAIL" };
    let _ = writeln!(out, "  Result: {} (governed by {})", verdict, r.governing_check());
}

fn write_lighting(out: &mut String, r: &EmergencyLightingResult) {
    let _ = writeln!(out, "  Luminaires            {:>6}", r.total_luminaires());
    let _ = writeln!(out, "    escape route        {:>6}", r.escape_route_luminaires);
    let _ = writeln!(out, "    open area           {:>6}", r.open_area_luminaires);
    let _ = writeln!(out, "    anti-panic          {:>6}", r.anti_panic_luminaires);
    let _ = writeln!(out, "    high-risk task      {:>6}", r.high_risk_luminaires);
    let _ = writeln!(out, "  Total power           {:>9.1} W", r.total_power);
    let _ = writeln!(out, "  Battery capacity      {:>9.0} Ah", r.battery_capacity);
    let _ = writeln!(out, "  Circuit current       {:>9.2} A  ({})", r.circuit_current, r.cable_size);
    let _ = writeln!(out, "  Illuminance           {:>9.2} lux", r.illuminance_achieved);
    let _ = writeln!(out, "  Uniformity ratio      {:>9.2}", r.uniformity_ratio);
    let _ = writeln!(out, "  Spacing ratio         {:>9.2}", r.spacing_ratio);
    let _ = writeln!(out, "  Estimated cost        £{:>8.2}", r.estimated_cost);
    let _ = writeln!(out, "  Status: {}", r.compliance_status.key().to_uppercase());

    write_list(out, "Issues", &r.compliance_issues);
    write_list(out, "Recommendations", &r.recommendations);
    write_list(out, "Regulatory notes", &r.regulatory_notes);
    write_list(out, "Maintenance", &r.maintenance_schedule);
    write_list(out, "Testing", &r.testing_requirements);
    write_list(out, "Installation", &r.installation_notes);
}

fn write_list(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "  {}:", heading);
    for item in items {
        let _ = writeln!(out, "    - {}", item);
    }
}

/// Preset tables for the `presets` command
pub fn render_presets() -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Soil presets (Ω·m)");
    for soil in SoilType::ALL {
        let _ = writeln!(out, "  {:<10} {:>6}", soil.key(), soil.resistivity_ohm_m());
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Occupancy profiles");
    let _ = writeln!(out, "  {:<12} {:>5} {:>8} {:>11} {:>7}", "key", "lux", "spacing", "anti-panic", "risk");
    for occupancy in OccupancyType::ALL {
        let p = occupancy.profile();
        let _ = writeln!(
            out,
            "  {:<12} {:>5} {:>8} {:>11} {:>7}",
            occupancy.key(),
            p.lux,
            p.spacing,
            if p.anti_panic_required { "yes" } else { "no" },
            p.risk_level.display_name()
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Fixture profiles");
    let _ = writeln!(out, "  {:<14} {:>4} {:>6} {:>6} {:>6} {:>8}", "key", "W", "lm", "£", "eff", "life h");
    for fixture in FixtureType::ALL {
        let p = fixture.profile();
        let _ = writeln!(
            out,
            "  {:<14} {:>4} {:>6} {:>6} {:>6.2} {:>8}",
            fixture.key(),
            p.watts,
            p.lumens,
            p.cost_per_unit,
            p.efficiency,
            p.lifespan
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Cable sizes (12 V circuit current)");
    let mut lower = 0.0;
    for (limit, size) in CableSize::THRESHOLDS {
        let _ = writeln!(out, "  {:>5.1} < I ≤ {:>4.1} A  {}", lower, limit, size);
        lower = limit;
    }
    let _ = writeln!(out, "        I > {:>4.1} A  {}", lower, CableSize::Mm6_0OrSplit);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use elec_core::calculations::parse_items;

    const BATCH: &str = r#"[
        {
            "type": "TouchStep",
            "label": "Rod A",
            "earthFaultCurrent": 10,
            "soilResistivity": "loam",
            "electrodeType": "rod",
            "faultDuration": 0.3,
            "contactScenario": "touch"
        },
        {
            "type": "TouchStep",
            "label": "Rod B",
            "earthFaultCurrent": 10,
            "soilResistivity": "loam",
            "electrodeType": "rod",
            "faultDuration": 5,
            "contactScenario": "touch"
        },
        {
            "type": "EmergencyLighting",
            "label": "Office",
            "floorArea": 400,
            "ceilingHeight": 3,
            "occupancyType": "office",
            "emergencyDuration": 3,
            "fixtureType": "led-standard",
            "exitRoutes": 2
        }
    ]"#;

    fn report(json: &str) -> Report {
        let settings = DesignSettings::default();
        let items = parse_items(json).unwrap();
        Report::new(items.iter().map(|i| ReportEntry::run(i, &settings)).collect())
    }

    #[test]
    fn test_exit_code_for_failed_verdict() {
        let r = report(BATCH);
        assert_eq!(r.entries.len(), 3);
        assert_eq!(r.exit_code(), 2);
    }

    #[test]
    fn test_exit_code_for_error() {
        let json = BATCH.replace("\"faultDuration\": 5", "\"faultDuration\": 0");
        let r = report(&json);
        assert!(r.entries[1].error.is_some());
        assert_eq!(r.exit_code(), 1);
    }

    #[test]
    fn test_text_report() {
        let text = report(BATCH).render_text();
        assert!(text.starts_with("Sparkcalc report, "));
        assert!(text.contains("Rod A (TouchStep)"));
        assert!(text.contains("Result: PASS"));
        assert!(text.contains("Result: FAIL (governed by Touch)"));
        assert!(text.contains("Status: COMPLIANT"));
        assert!(text.contains("Regulatory notes:"));
    }

    #[test]
    fn test_json_report() {
        let json = report(BATCH).render_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["generatedAt"].is_string());
        assert_eq!(value["entries"][0]["calcType"], "TouchStep");
        assert_eq!(value["entries"][0]["output"]["passOrFail"], "pass");
        assert_eq!(value["entries"][2]["output"]["complianceStatus"], "compliant");
        assert!(value["entries"][0].get("error").is_none());
    }

    #[test]
    fn test_presets_table() {
        let text = render_presets();
        assert!(text.contains("loam"));
        assert!(text.contains("hospital"));
        assert!(text.contains("led-premium"));
        assert!(text.contains("6.0mm² or distribute across multiple circuits"));
    }
}
