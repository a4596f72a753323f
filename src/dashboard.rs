use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::Catalog;
use crate::chat;
use crate::interview;
use crate::metrics;

/// Headline numbers for the dashboard, derived from the catalog on demand.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuickStats {
    pub enrolled_courses: usize,
    pub available_courses: usize,
    pub average_progress: u32,
    pub applied_jobs: usize,
    pub open_jobs: usize,
    pub scheduled_interviews: usize,
    pub average_interview_score: f64,
    pub unread_messages: u32,
    pub upcoming_events: usize,
}

impl QuickStats {
    pub fn compute(catalog: &Catalog, now: DateTime<Utc>) -> Self {
        let enrolled: Vec<_> = catalog.courses.iter().filter(|c| c.enrolled).collect();
        let applied = catalog.jobs.iter().filter(|j| j.applied).count();
        let average_progress = metrics::average(&enrolled, |c| c.progress.unwrap_or(0) as f64);

        Self {
            enrolled_courses: metrics::count(&enrolled),
            available_courses: catalog.courses.len() - enrolled.len(),
            average_progress: average_progress.round() as u32,
            applied_jobs: applied,
            open_jobs: catalog.jobs.len() - applied,
            scheduled_interviews: interview::scheduled(&catalog.sessions).len(),
            average_interview_score: interview::average_score(&catalog.sessions),
            unread_messages: metrics::sum(&catalog.chats, |c| c.unread_count as f64) as u32,
            upcoming_events: chat::upcoming(&catalog.events, now).len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BundledCatalog, CatalogSource};
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn stats_from_bundled_catalog() {
        let catalog = BundledCatalog.load().unwrap();
        let now = Utc.with_ymd_and_hms(2026, 10, 18, 0, 0, 0).unwrap();
        let stats = QuickStats::compute(&catalog, now);
        assert_eq!(
            stats,
            QuickStats {
                enrolled_courses: 2,
                available_courses: 4,
                average_progress: 60,
                applied_jobs: 2,
                open_jobs: 2,
                scheduled_interviews: 1,
                average_interview_score: 78.5,
                unread_messages: 7,
                upcoming_events: 4,
            }
        );
    }

    #[test]
    fn empty_catalog_is_all_zero() {
        let stats = QuickStats::compute(&Catalog::default(), Utc::now());
        assert_eq!(stats.average_progress, 0);
        assert_eq!(stats.average_interview_score, 0.0);
        assert_eq!(stats.unread_messages, 0);
    }
}
