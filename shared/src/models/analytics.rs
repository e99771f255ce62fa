//! Analytics Summary Model

use super::service_request::{RequestStatus, ServiceType};
use serde::{Deserialize, Serialize};

/// Ticket count for one service type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub service_type: ServiceType,
    pub count: usize,
}

/// Aggregate view over a set of tickets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total: usize,
    pub submitted: usize,
    pub in_progress: usize,
    pub resolved: usize,
    /// resolved / total, in `0.0..=1.0`; 0 for an empty set
    pub resolution_rate: f64,
    /// Every service type seen, in first-encountered order
    pub by_service_type: Vec<CategoryCount>,
    /// Highest counts first; ties keep first-encountered order
    pub top_categories: Vec<CategoryCount>,
}

impl AnalyticsSummary {
    pub fn count_for(&self, status: RequestStatus) -> usize {
        match status {
            RequestStatus::Submitted => self.submitted,
            RequestStatus::InProgress => self.in_progress,
            RequestStatus::Resolved => self.resolved,
        }
    }

    /// Resolution rate as a percentage rounded to one decimal (33.3)
    pub fn resolution_rate_percent(&self) -> f64 {
        round1(self.resolution_rate * 100.0)
    }

    /// Share of all tickets held by `count`, as a one-decimal percentage
    pub fn share_percent(&self, count: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        round1(count as f64 * 100.0 / self.total as f64)
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
