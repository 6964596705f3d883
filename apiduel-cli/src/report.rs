// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Rafael Mendes

//! Report rendering: console analysis, summary table, CSV, and charts.
//!
//! Pure formatting over already-computed comparison results - no
//! statistics happen here.

use std::error::Error;
use std::path::{Path, PathBuf};

use charming::{
    component::{Axis, Legend, Title},
    element::{AxisType, Tooltip, Trigger},
    series::Bar,
    Chart, HtmlRenderer,
};
use comfy_table::{presets::UTF8_FULL, Table};

use apiduel_core::{MetricComparison, ScenarioComparison};

/// Per-scenario console analysis, in the layout of the summary report.
pub fn print_scenario_analysis(comparison: &ScenarioComparison) {
    let heading = comparison.scenario.as_str().replace('_', " ").to_uppercase();

    println!();
    println!("{}", "=".repeat(70));
    println!("ANALYSIS: {}", heading);
    println!("{}", "=".repeat(70));

    println!();
    println!("--- RESPONSE TIME (ms) ---");
    print_metric(&comparison.time, "ms", "faster");

    println!();
    println!("--- RESPONSE SIZE (bytes) ---");
    print_metric(&comparison.size, "bytes", "smaller");
}

fn print_metric(metric: &MetricComparison, unit: &str, adjective: &str) {
    println!(
        "REST:     mean {:.2} {unit}, median {:.2}, std {:.2}, min/max {:.2}/{:.2}",
        metric.rest.mean, metric.rest.median, metric.rest.std_dev, metric.rest.min, metric.rest.max
    );
    println!(
        "GraphQL:  mean {:.2} {unit}, median {:.2}, std {:.2}, min/max {:.2}/{:.2}",
        metric.graphql.mean,
        metric.graphql.median,
        metric.graphql.std_dev,
        metric.graphql.min,
        metric.graphql.max
    );
    println!("GraphQL difference: {:+.2}%", metric.improvement_percent);
    println!(
        "Paired t-test: t = {:.4}, p = {:.6}",
        metric.test.t_statistic, metric.test.p_value
    );
    println!(
        "  significant at α=0.05: {} | α=0.01: {}",
        yes_no(metric.test.significant_05),
        yes_no(metric.test.significant_01)
    );
    if metric.test.significant_05 {
        println!("  ✓ GraphQL is significantly {} than REST", adjective);
    } else {
        println!("  ✗ No significant evidence that GraphQL is {}", adjective);
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

/// Cross-scenario summary table.
pub fn summary_table(comparisons: &[ScenarioComparison]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "Scenario",
        "REST time (ms)",
        "GraphQL time (ms)",
        "Time Δ%",
        "p (time)",
        "REST size (B)",
        "GraphQL size (B)",
        "Size Δ%",
        "p (size)",
    ]);

    for c in comparisons {
        table.add_row(vec![
            c.scenario.as_str().to_string(),
            format!("{:.2} ± {:.2}", c.time.rest.mean, c.time.rest.std_dev),
            format!("{:.2} ± {:.2}", c.time.graphql.mean, c.time.graphql.std_dev),
            format!("{:+.2}", c.time.improvement_percent),
            format!("{:.6}", c.time.test.p_value),
            format!("{:.0}", c.size.rest.mean),
            format!("{:.0}", c.size.graphql.mean),
            format!("{:+.2}", c.size.improvement_percent),
            format!("{:.6}", c.size.test.p_value),
        ]);
    }

    table
}

/// Write the summary as CSV next to the other artifacts.
pub fn write_summary_csv(
    path: &Path,
    comparisons: &[ScenarioComparison],
) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([
        "scenario",
        "rest_time_mean_ms",
        "rest_time_std_ms",
        "graphql_time_mean_ms",
        "graphql_time_std_ms",
        "time_improvement_pct",
        "time_p_value",
        "rest_size_mean_bytes",
        "graphql_size_mean_bytes",
        "size_reduction_pct",
        "size_p_value",
    ])?;

    for c in comparisons {
        writer.write_record([
            c.scenario.as_str().to_string(),
            format!("{:.4}", c.time.rest.mean),
            format!("{:.4}", c.time.rest.std_dev),
            format!("{:.4}", c.time.graphql.mean),
            format!("{:.4}", c.time.graphql.std_dev),
            format!("{:.4}", c.time.improvement_percent),
            format!("{:.6}", c.time.test.p_value),
            format!("{:.1}", c.size.rest.mean),
            format!("{:.1}", c.size.graphql.mean),
            format!("{:.4}", c.size.improvement_percent),
            format!("{:.6}", c.size.test.p_value),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Render grouped bar charts (one per metric) as standalone HTML files.
///
/// Returns the paths of the written charts.
pub fn render_charts(
    output_dir: &Path,
    comparisons: &[ScenarioComparison],
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let scenarios: Vec<String> = comparisons
        .iter()
        .map(|c| c.scenario.as_str().replace('_', " "))
        .collect();

    let time_chart = grouped_bar_chart(
        "Mean response time by scenario",
        "milliseconds",
        scenarios.clone(),
        comparisons.iter().map(|c| c.time.rest.mean).collect(),
        comparisons.iter().map(|c| c.time.graphql.mean).collect(),
    );
    let size_chart = grouped_bar_chart(
        "Mean payload size by scenario",
        "bytes",
        scenarios,
        comparisons.iter().map(|c| c.size.rest.mean).collect(),
        comparisons.iter().map(|c| c.size.graphql.mean).collect(),
    );

    let time_path = output_dir.join("response_time.html");
    let size_path = output_dir.join("payload_size.html");

    let mut renderer = HtmlRenderer::new("apiduel", 1000, 600);
    renderer.save(&time_chart, &time_path)?;
    renderer.save(&size_chart, &size_path)?;

    Ok(vec![time_path, size_path])
}

fn grouped_bar_chart(
    title: &str,
    unit: &str,
    scenarios: Vec<String>,
    rest: Vec<f64>,
    graphql: Vec<f64>,
) -> Chart {
    Chart::new()
        .title(Title::new().text(title).left("center"))
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .legend(Legend::new().top("bottom"))
        .x_axis(Axis::new().type_(AxisType::Category).data(scenarios))
        .y_axis(Axis::new().type_(AxisType::Value).name(unit))
        .series(Bar::new().name("REST").data(rest))
        .series(Bar::new().name("GraphQL").data(graphql))
}

#[cfg(test)]
mod tests {
    use super::*;
    use apiduel_core::{compare_scenario, ScenarioName, ScenarioSamples, Trial};
    use tempfile::TempDir;

    fn sample_comparison() -> ScenarioComparison {
        let mut samples = ScenarioSamples::new(ScenarioName::new("simple_user").unwrap());
        for (rest_ms, graphql_ms) in [(100.0, 40.0), (102.0, 45.0), (98.0, 35.0), (101.0, 42.0)] {
            samples.rest.push(Trial {
                elapsed_ms: rest_ms,
                size_bytes: 500,
            });
            samples.graphql.push(Trial {
                elapsed_ms: graphql_ms,
                size_bytes: 120,
            });
        }
        compare_scenario(&samples).unwrap()
    }

    #[test]
    fn test_summary_table_lists_scenarios() {
        let table = summary_table(&[sample_comparison()]);
        let rendered = table.to_string();
        assert!(rendered.contains("simple_user"));
        assert!(rendered.contains("Scenario"));
    }

    #[test]
    fn test_csv_written_with_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("summary_results.csv");
        write_summary_csv(&path, &[sample_comparison()]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert!(lines.next().unwrap().starts_with("scenario,"));
        assert!(lines.next().unwrap().starts_with("simple_user,"));
    }

    #[test]
    fn test_charts_rendered_to_disk() {
        let dir = TempDir::new().unwrap();
        let paths = render_charts(dir.path(), &[sample_comparison()]).unwrap();
        assert_eq!(paths.len(), 2);
        for path in paths {
            assert!(path.exists());
        }
    }
}
