/// Sales history across simulated days and its summary statistics

use serde::{Deserialize, Serialize};

use crate::stats::SessionStatistics;

/// Days needed before a trend summary is meaningful
pub const MIN_DAYS_FOR_SUMMARY: usize = 2;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SalesHistory {
    days: Vec<SessionStatistics>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HistorySummary {
    pub num_days: usize,
    pub revenue_per_day: Vec<f64>,
    pub rejections_per_day: Vec<u32>,
    pub mean_revenue: f64,
    pub std_dev_revenue: f64,
    pub min_revenue: f64,
    pub max_revenue: f64,
    pub total_rejected: u32,
}

impl SalesHistory {
    #[allow(dead_code)]
    pub fn new() -> Self {
        SalesHistory::default()
    }

    pub fn push(&mut self, day: SessionStatistics) {
        self.days.push(day);
    }

    pub fn days(&self) -> &[SessionStatistics] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Revenue and rejection trend; `None` until at least two days are recorded
    pub fn summary(&self) -> Option<HistorySummary> {
        if self.days.len() < MIN_DAYS_FOR_SUMMARY {
            return None;
        }

        let revenue_per_day: Vec<f64> = self.days.iter().map(|d| d.revenue).collect();
        let rejections_per_day: Vec<u32> = self.days.iter().map(|d| d.rejected).collect();

        let n = revenue_per_day.len() as f64;
        let mean_revenue = revenue_per_day.iter().sum::<f64>() / n;
        let variance = revenue_per_day
            .iter()
            .map(|r| (r - mean_revenue).powi(2))
            .sum::<f64>()
            / n;

        let min_revenue = revenue_per_day.iter().copied().fold(f64::INFINITY, f64::min);
        let max_revenue = revenue_per_day.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Some(HistorySummary {
            num_days: self.days.len(),
            total_rejected: rejections_per_day.iter().sum(),
            revenue_per_day,
            rejections_per_day,
            mean_revenue,
            std_dev_revenue: variance.sqrt(),
            min_revenue,
            max_revenue,
        })
    }
}
