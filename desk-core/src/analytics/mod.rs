//! Analytics - ticket aggregation and report rendering
//!
//! [`aggregate`] folds any slice of tickets into an
//! [`AnalyticsSummary`]; [`render_csv`] turns that summary into the
//! downloadable report.

mod report;

pub use report::{render_csv, report_date_label};

use shared::models::{AnalyticsSummary, CategoryCount, RequestStatus, ServiceRequest};

/// Count tickets by status and service type.
///
/// `by_service_type` lists every type present in first-encountered order.
/// `top_categories` holds at most `top_n` of those, highest count first, with
/// ties left in first-encountered order.
pub fn aggregate(requests: &[ServiceRequest], top_n: usize) -> AnalyticsSummary {
    let mut submitted = 0;
    let mut in_progress = 0;
    let mut resolved = 0;
    let mut by_service_type: Vec<CategoryCount> = Vec::new();

    for req in requests {
        match req.status {
            RequestStatus::Submitted => submitted += 1,
            RequestStatus::InProgress => in_progress += 1,
            RequestStatus::Resolved => resolved += 1,
        }
        match by_service_type
            .iter_mut()
            .find(|c| c.service_type == req.service_type)
        {
            Some(entry) => entry.count += 1,
            None => by_service_type.push(CategoryCount {
                service_type: req.service_type,
                count: 1,
            }),
        }
    }

    let total = requests.len();
    let resolution_rate = if total == 0 {
        0.0
    } else {
        resolved as f64 / total as f64
    };

    // sort_by is stable
    let mut top_categories = by_service_type.clone();
    top_categories.sort_by(|a, b| b.count.cmp(&a.count));
    top_categories.truncate(top_n);

    tracing::debug!(total, resolved, categories = by_service_type.len(), "Analytics aggregated");

    AnalyticsSummary {
        total,
        submitted,
        in_progress,
        resolved,
        resolution_rate,
        by_service_type,
        top_categories,
    }
}
