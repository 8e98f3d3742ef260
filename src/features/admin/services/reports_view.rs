use crate::core::error::{AppError, Result};
use crate::features::reports::models::Report;

/// All reports plus at most one selected for detail display
#[derive(Debug, Clone, Default)]
pub struct AdminReportsView {
    reports: Vec<Report>,
    selected: Option<i64>,
}

impl AdminReportsView {
    pub fn new(reports: Vec<Report>) -> Self {
        Self {
            reports,
            selected: None,
        }
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    pub fn into_reports(self) -> Vec<Report> {
        self.reports
    }

    pub fn find(&self, id: i64) -> Option<&Report> {
        self.reports.iter().find(|r| r.id == id)
    }

    /// Select `id`, replacing any previous selection.
    /// An unknown id leaves the current selection untouched.
    pub fn select(&mut self, id: i64) -> Result<&Report> {
        if self.find(id).is_none() {
            return Err(AppError::NotFound(format!("Report {} not found", id)));
        }
        self.selected = Some(id);
        self.selected()
            .ok_or_else(|| AppError::Internal("Selected report vanished".to_string()))
    }

    pub fn selected(&self) -> Option<&Report> {
        self.selected.and_then(|id| self.find(id))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::stats_fixture;

    #[test]
    fn test_starts_without_selection() {
        let view = AdminReportsView::new(stats_fixture());
        assert_eq!(view.reports().len(), 4);
        assert!(view.selected().is_none());
    }

    #[test]
    fn test_select_replaces_previous() {
        let mut view = AdminReportsView::new(stats_fixture());

        assert_eq!(view.select(4).unwrap().id, 4);
        assert_eq!(view.select(2).unwrap().id, 2);
        assert_eq!(view.selected().map(|r| r.id), Some(2));
    }

    #[test]
    fn test_unknown_id_keeps_selection() {
        let mut view = AdminReportsView::new(stats_fixture());
        view.select(3).unwrap();

        assert!(matches!(view.select(99), Err(AppError::NotFound(_))));
        assert_eq!(view.selected().map(|r| r.id), Some(3));

        view.clear_selection();
        assert!(view.selected().is_none());
    }
}
