//! Built-in mock datasets for the executive dashboard.

use std::collections::HashMap;

use chrono::{Datelike, Local, NaiveDate};

use crate::error::DashboardError;
use crate::models::{
    CellValue, ChartKind, ChartTile, Dataset, MetricCard, MetricsDataset, SeriesDataset,
    TableDataset, Tone, TrendDirection,
};
use crate::navigation::{
    COMPLIANCE, CULTURE, DASHBOARD, INCIDENTS, MFA_ADOPTION, PHISHING, TOOL_INVENTORY,
    VULNERABILITIES,
};

use super::provider::{missing, DatasetProvider};


// Palette
const BLUE: &str = "#1f77b4";
const ORANGE: &str = "#ff7f0e";
const GREEN: &str = "#2ca02c";
const RED: &str = "#d62728";
const PURPLE: &str = "#9467bd";
const BROWN: &str = "#8c564b";

const MONTHS: [&str; 6] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun"];
const VULN_TREND: [f64; 6] = [45.0, 39.0, 31.0, 22.0, 15.0, 11.0];
const PHISHING_TREND: [f64; 6] = [820.0, 640.0, 975.0, 1120.0, 900.0, 760.0];
const MFA_TREND: [f64; 6] = [70.0, 75.0, 80.0, 85.0, 88.0, 92.0];


/// Datasets compiled into the binary.
#[derive(Debug, Clone)]
pub struct BuiltinDatasets {
    datasets: HashMap<String, Dataset>,
}


impl BuiltinDatasets {
    /// Datasets as of the local date.
    pub fn new() -> Self {
        Self::as_of(Local::now().date_naive())
    }

    /// Datasets with month labels anchored to `today`.
    pub fn as_of(today: NaiveDate) -> Self {
        let datasets = [
            (DASHBOARD, dashboard()),
            (VULNERABILITIES, vulnerabilities(today)),
            (PHISHING, phishing()),
            (MFA_ADOPTION, mfa_adoption()),
            (INCIDENTS, incidents()),
            (TOOL_INVENTORY, tool_inventory()),
            (CULTURE, culture()),
            (COMPLIANCE, compliance()),
        ]
        .into_iter()
        .map(|(name, dataset)| (name.to_string(), dataset))
        .collect();

        Self { datasets }
    }
}


impl Default for BuiltinDatasets {
    fn default() -> Self {
        Self::new()
    }
}


impl DatasetProvider for BuiltinDatasets {
    fn get_dataset(&self, view_name: &str) -> Result<Dataset, DashboardError> {
        self.datasets
            .get(view_name)
            .cloned()
            .ok_or_else(|| missing(view_name))
    }

    fn has_dataset(&self, view_name: &str) -> bool {
        self.datasets.contains_key(view_name)
    }

    fn describe(&self) -> String {
        "built-in datasets".to_string()
    }
}


/// Labels for the six most recent month ends on or before `today`.
pub fn vulnerability_months(today: NaiveDate) -> Vec<String> {
    let is_month_end = today
        .succ_opt()
        .map_or(true, |next| next.month() != today.month());

    // Months counted from year 0 so stepping back crosses years cleanly.
    let mut month_index = today.year() * 12 + today.month0() as i32;
    if !is_month_end {
        month_index -= 1;
    }

    (0..6)
        .rev()
        .map(|back| {
            let idx = month_index - back;
            let (year, month) = (idx.div_euclid(12), idx.rem_euclid(12) as u32 + 1);
            NaiveDate::from_ymd_opt(year, month, 1)
                .map(|d| d.format("%b %Y").to_string())
                .unwrap_or_else(|| format!("{year}-{month:02}"))
        })
        .collect()
}


fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}


fn tile(
    title: &str,
    chart: ChartKind,
    tile_labels: &[&str],
    values: &[f64],
    color: &str,
    target: &str,
) -> ChartTile {
    ChartTile {
        title: title.to_string(),
        chart,
        labels: labels(tile_labels),
        values: values.to_vec(),
        color: color.to_string(),
        target: target.to_string(),
    }
}


fn dashboard() -> Dataset {
    let points = ["1", "2", "3", "4", "5", "6"];

    Dataset::Metrics(MetricsDataset {
        cards: vec![
            MetricCard::new("Critical Vulns (30d)", "11").trending(TrendDirection::Down, Tone::Bad),
            MetricCard::new("Phishing Emails Blocked", "760")
                .trending(TrendDirection::Down, Tone::Bad),
            MetricCard::new("Endpoint Coverage", "87%").trending(TrendDirection::Up, Tone::Good),
            MetricCard::new("MFA Adoption", "92%").trending(TrendDirection::Up, Tone::Good),
            MetricCard::new("Incidents This Month", "3").trending(TrendDirection::Up, Tone::Bad),
        ],
        tiles: vec![
            tile("Vuln Trend", ChartKind::Line, &points, &VULN_TREND, BLUE, VULNERABILITIES),
            tile("Phishing Trend", ChartKind::Bar, &MONTHS, &PHISHING_TREND, ORANGE, PHISHING),
            tile("MFA Trend", ChartKind::Line, &points, &MFA_TREND, GREEN, MFA_ADOPTION),
            tile("Incidents", ChartKind::Bar, &["Apr", "May"], &[2.0, 3.0], RED, INCIDENTS),
            tile(
                "Tool Coverage",
                ChartKind::Bar,
                &["CrowdStrike", "Defender", "Tenable"],
                &[100.0, 60.0, 100.0],
                PURPLE,
                TOOL_INVENTORY,
            ),
            tile(
                "Compliance",
                ChartKind::Bar,
                &["NIST CSF", "PCI DSS"],
                &[72.0, 64.0],
                BROWN,
                COMPLIANCE,
            ),
        ],
    })
}


fn vulnerabilities(today: NaiveDate) -> Dataset {
    Dataset::Series(SeriesDataset {
        labels: vulnerability_months(today),
        values: VULN_TREND.to_vec(),
        x_label: Some("Month".to_string()),
        y_label: "Open Critical Vulns".to_string(),
        color: BLUE.to_string(),
    })
}


fn phishing() -> Dataset {
    Dataset::Series(SeriesDataset {
        labels: labels(&MONTHS),
        values: PHISHING_TREND.to_vec(),
        x_label: None,
        y_label: "Blocked Emails".to_string(),
        color: ORANGE.to_string(),
    })
}


fn mfa_adoption() -> Dataset {
    Dataset::Series(SeriesDataset {
        labels: labels(&MONTHS),
        values: MFA_TREND.to_vec(),
        x_label: None,
        y_label: "MFA Adoption (%)".to_string(),
        color: GREEN.to_string(),
    })
}


fn text_table(columns: &[&str], rows: &[&[&str]]) -> Dataset {
    Dataset::Table(TableDataset {
        columns: labels(columns),
        rows: rows
            .iter()
            .map(|row| row.iter().map(|&cell| CellValue::from(cell)).collect())
            .collect(),
    })
}


fn incidents() -> Dataset {
    text_table(
        &["Date", "Type", "Impact", "Status"],
        &[
            &["2025-05-01", "Phishing", "None", "Resolved"],
            &["2025-05-10", "Credential Theft", "Single user", "Resolved"],
            &["2025-05-19", "Ransomware Attempt", "Blocked by EDR", "Mitigated"],
        ],
    )
}


fn tool_inventory() -> Dataset {
    text_table(
        &["Tool", "Category", "Owner", "Status"],
        &[
            &["CrowdStrike", "EDR", "SecOps", "Active"],
            &["Defender", "EDR", "IT", "Partial"],
            &["Tenable", "Vuln Mgmt", "SecOps", "Active"],
            &["Chronicle", "SIEM", "SecOps", "Active"],
            &["Abnormal", "Email Security", "SecOps", "Active"],
        ],
    )
}


fn culture() -> Dataset {
    let survey = [
        ("Know who to call in a cyber emergency?", 82.0, 18.0),
        ("Would report a suspicious email?", 94.0, 6.0),
        ("Does security interfere with your job?", 29.0, 71.0),
    ];

    Dataset::Table(TableDataset {
        columns: labels(&["Question", "Yes %", "No %"]),
        rows: survey
            .iter()
            .map(|&(question, yes, no)| vec![CellValue::from(question), yes.into(), no.into()])
            .collect(),
    })
}


fn compliance() -> Dataset {
    Dataset::Table(TableDataset {
        columns: labels(&["Framework", "Compliance Score", "Gaps Noted"]),
        rows: vec![
            vec![
                CellValue::from("NIST CSF"),
                CellValue::from(72.0),
                CellValue::from("Recovery & Response underdeveloped"),
            ],
            vec![
                CellValue::from("PCI DSS 4.0"),
                CellValue::from(64.0),
                CellValue::from("Admin MFA and segmentation gaps"),
            ],
        ],
    })
}
