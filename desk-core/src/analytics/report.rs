//! CSV 报表渲染

use chrono::NaiveDate;
use shared::models::{AnalyticsSummary, RequestStatus};

const REPORT_TITLE: &str = "Campus Service Desk Analytics Report";

/// Long-form report date ("October 17, 2026")
pub fn report_date_label(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Render the downloadable CSV report.
///
/// Sections are separated by a blank line: header, overview metrics, status
/// breakdown, top categories with their share of all tickets.
pub fn render_csv(summary: &AnalyticsSummary, generated_on: NaiveDate) -> String {
    let mut rows: Vec<String> = Vec::new();

    rows.push(REPORT_TITLE.to_string());
    rows.push(row(&["Generated On", &report_date_label(generated_on)]));
    rows.push(row(&["Report Period", "All Time"]));
    rows.push(String::new());

    rows.push(row(&["Metric", "Value"]));
    rows.push(row(&["Total Requests", &summary.total.to_string()]));
    rows.push(row(&[
        "Resolution Rate (%)",
        &format!("{:.1}", summary.resolution_rate_percent()),
    ]));
    rows.push(String::new());

    rows.push(row(&["Status", "Requests"]));
    for status in RequestStatus::ALL {
        rows.push(row(&[status.label(), &summary.count_for(status).to_string()]));
    }
    rows.push(String::new());

    rows.push(row(&["Rank", "Category", "Requests", "Share (%)"]));
    for (idx, category) in summary.top_categories.iter().enumerate() {
        rows.push(row(&[
            &(idx + 1).to_string(),
            category.service_type.label(),
            &category.count.to_string(),
            &format!("{:.1}", summary.share_percent(category.count)),
        ]));
    }

    let mut out = rows.join("\n");
    out.push('\n');
    out
}

fn row(fields: &[&str]) -> String {
    fields.iter().map(|f| escape(f)).collect::<Vec<_>>().join(",")
}

/// Quote a field when it holds a delimiter, quote or line break
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
