use std::collections::{BTreeMap, HashMap, HashSet};

use crate::features::reports::models::{Report, ReportType};

#[derive(Debug, Clone, PartialEq)]
pub struct TypeCount {
    pub report_type: ReportType,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DriverCount {
    pub driver_id: String,
    pub count: usize,
}

/// Aggregates over one snapshot of the report collection
#[derive(Debug, Clone, PartialEq)]
pub struct ReportStats {
    pub total_reports: usize,
    pub total_drivers: usize,
    pub total_photos: usize,
    /// 0 when there are no reports
    pub average_photos_per_report: f64,
    /// Types present in the collection, in `ReportType` order
    pub reports_by_type: Vec<TypeCount>,
    /// Most active drivers first; ties by driver id
    pub reports_by_driver: Vec<DriverCount>,
}

impl ReportStats {
    pub fn compute(reports: &[Report]) -> Self {
        let total_reports = reports.len();
        let total_photos: usize = reports.iter().map(Report::photo_count).sum();
        let total_drivers = reports
            .iter()
            .map(|r| r.driver_id.as_str())
            .collect::<HashSet<_>>()
            .len();

        let average_photos_per_report = if total_reports > 0 {
            total_photos as f64 / total_reports as f64
        } else {
            0.0
        };

        let mut by_type: BTreeMap<ReportType, usize> = BTreeMap::new();
        let mut by_driver: HashMap<&str, usize> = HashMap::new();
        for report in reports {
            *by_type.entry(report.report_type).or_default() += 1;
            *by_driver.entry(report.driver_id.as_str()).or_default() += 1;
        }

        let reports_by_type = by_type
            .into_iter()
            .map(|(report_type, count)| TypeCount { report_type, count })
            .collect();

        let mut reports_by_driver: Vec<DriverCount> = by_driver
            .into_iter()
            .map(|(driver_id, count)| DriverCount {
                driver_id: driver_id.to_string(),
                count,
            })
            .collect();
        reports_by_driver.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.driver_id.cmp(&b.driver_id))
        });

        Self {
            total_reports,
            total_drivers,
            total_photos,
            average_photos_per_report,
            reports_by_type,
            reports_by_driver,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{sample_report, stats_fixture};
    use fake::faker::internet::en::Username;
    use fake::Fake;

    #[test]
    fn test_aggregates() {
        let stats = ReportStats::compute(&stats_fixture());

        assert_eq!(stats.total_reports, 4);
        assert_eq!(stats.total_drivers, 2);
        assert_eq!(
            stats.reports_by_type,
            vec![
                TypeCount {
                    report_type: ReportType::Vehicle,
                    count: 3
                },
                TypeCount {
                    report_type: ReportType::Damage,
                    count: 1
                },
            ]
        );
        assert_eq!(
            stats.reports_by_driver,
            vec![
                DriverCount {
                    driver_id: "d1".to_string(),
                    count: 3
                },
                DriverCount {
                    driver_id: "d2".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_photo_totals() {
        let reports = vec![
            sample_report(2, ReportType::Trailer, "d1", 3),
            sample_report(1, ReportType::Trailer, "d1", 2),
        ];
        let stats = ReportStats::compute(&reports);

        assert_eq!(stats.total_photos, 5);
        assert!((stats.average_photos_per_report - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_store() {
        let stats = ReportStats::compute(&[]);

        assert_eq!(stats.total_reports, 0);
        assert_eq!(stats.average_photos_per_report, 0.0);
        assert!(stats.reports_by_type.is_empty());
        assert!(stats.reports_by_driver.is_empty());
    }

    #[test]
    fn test_driver_ties_ordered_by_id() {
        let reports = vec![
            sample_report(4, ReportType::Vehicle, "zenon", 1),
            sample_report(3, ReportType::Vehicle, "adam", 1),
            sample_report(2, ReportType::Vehicle, "marek", 1),
            sample_report(1, ReportType::Vehicle, "marek", 1),
        ];
        let order: Vec<String> = ReportStats::compute(&reports)
            .reports_by_driver
            .into_iter()
            .map(|d| d.driver_id)
            .collect();

        assert_eq!(order, vec!["marek", "adam", "zenon"]);
    }

    #[test]
    fn test_breakdowns_cover_every_report() {
        let drivers: Vec<String> = (0..3).map(|_| Username().fake()).collect();
        let reports: Vec<Report> = (0..40)
            .map(|i| {
                let report_type = ReportType::ALL[(0..4usize).fake::<usize>()];
                let driver = &drivers[(0..drivers.len()).fake::<usize>()];
                sample_report(i, report_type, driver, (0..5usize).fake())
            })
            .collect();

        let stats = ReportStats::compute(&reports);

        let by_type: usize = stats.reports_by_type.iter().map(|t| t.count).sum();
        let by_driver: usize = stats.reports_by_driver.iter().map(|d| d.count).sum();
        assert_eq!(by_type, reports.len());
        assert_eq!(by_driver, reports.len());
        assert!(stats
            .reports_by_driver
            .windows(2)
            .all(|w| w[0].count >= w[1].count));
    }
}
