use std::sync::Arc;

use log::info;

use crate::errors::{Error, Result};
use crate::goals::GoalRepositoryTrait;
use crate::metrics::MetricRepositoryTrait;
use crate::transfer::model::{ExportDocument, ImportSummary};

/// Trait for import/export operations
pub trait TransferServiceTrait: Send + Sync {
    fn export(&self) -> Result<ExportDocument>;
    fn export_json(&self) -> Result<String>;
    /// Replaces both collections wholesale with the document's contents.
    fn import(&self, document: ExportDocument) -> Result<ImportSummary>;
    fn import_json(&self, json: &str) -> Result<ImportSummary>;
}

pub struct TransferService {
    metric_repo: Arc<dyn MetricRepositoryTrait>,
    goal_repo: Arc<dyn GoalRepositoryTrait>,
}

impl TransferService {
    pub fn new(
        metric_repo: Arc<dyn MetricRepositoryTrait>,
        goal_repo: Arc<dyn GoalRepositoryTrait>,
    ) -> Self {
        TransferService {
            metric_repo,
            goal_repo,
        }
    }
}

impl TransferServiceTrait for TransferService {
    fn export(&self) -> Result<ExportDocument> {
        Ok(ExportDocument {
            metrics: self.metric_repo.load_metrics()?,
            goals: self.goal_repo.load_goals()?,
        })
    }

    fn export_json(&self) -> Result<String> {
        let document = self.export()?;
        serde_json::to_string_pretty(&document).map_err(|e| Error::Transfer(e.to_string()))
    }

    fn import(&self, document: ExportDocument) -> Result<ImportSummary> {
        let metrics_imported = self.metric_repo.replace_all(document.metrics)?;
        let goals_imported = self.goal_repo.replace_all(document.goals)?;
        info!("Imported {metrics_imported} measurements and {goals_imported} goals");
        Ok(ImportSummary {
            metrics_imported,
            goals_imported,
        })
    }

    fn import_json(&self, json: &str) -> Result<ImportSummary> {
        let document: ExportDocument =
            serde_json::from_str(json).map_err(|e| Error::Transfer(e.to_string()))?;
        self.import(document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goals::Goal;
    use crate::metrics::{HealthMetric, MetricType};
    use chrono::NaiveDate;
    use std::collections::BTreeMap;
    use std::sync::RwLock;

    #[derive(Default)]
    struct MockMetricRepository {
        metrics: RwLock<Vec<HealthMetric>>,
    }

    impl MetricRepositoryTrait for MockMetricRepository {
        fn load_metrics(&self) -> Result<Vec<HealthMetric>> {
            Ok(self.metrics.read().unwrap().clone())
        }
        fn insert_metric(&self, metric: HealthMetric) -> Result<HealthMetric> {
            self.metrics.write().unwrap().push(metric.clone());
            Ok(metric)
        }
        fn replace_all(&self, metrics: Vec<HealthMetric>) -> Result<usize> {
            let count = metrics.len();
            *self.metrics.write().unwrap() = metrics;
            Ok(count)
        }
        fn delete_older_than(&self, _: NaiveDate) -> Result<usize> {
            unimplemented!()
        }
        fn clear(&self) -> Result<usize> {
            unimplemented!()
        }
    }

    #[derive(Default)]
    struct MockGoalRepository {
        goals: RwLock<BTreeMap<MetricType, Goal>>,
    }

    impl GoalRepositoryTrait for MockGoalRepository {
        fn load_goals(&self) -> Result<Vec<Goal>> {
            Ok(self.goals.read().unwrap().values().cloned().collect())
        }
        fn get_goal(&self, metric_type: MetricType) -> Result<Option<Goal>> {
            Ok(self.goals.read().unwrap().get(&metric_type).cloned())
        }
        fn upsert_goal(&self, goal: Goal) -> Result<Goal> {
            self.goals
                .write()
                .unwrap()
                .insert(goal.metric_type, goal.clone());
            Ok(goal)
        }
        fn delete_goal(&self, _: MetricType) -> Result<usize> {
            unimplemented!()
        }
        fn replace_all(&self, goals: Vec<Goal>) -> Result<usize> {
            let count = goals.len();
            *self.goals.write().unwrap() =
                goals.into_iter().map(|g| (g.metric_type, g)).collect();
            Ok(count)
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_document() -> ExportDocument {
        ExportDocument {
            metrics: vec![HealthMetric {
                id: "m-1".into(),
                date: date(2025, 6, 1),
                weight: Some(84.2),
                muscle_mass: Some(38.5),
                fat_mass: None,
                bmi: None,
                fat_percentage: None,
            }],
            goals: vec![Goal {
                id: "g-1".into(),
                metric_type: MetricType::Weight,
                target_value: 80.0,
                target_date: date(2025, 12, 1),
                current_value: Some(84.2),
                weekly_goals: vec![],
                monthly_goals: vec![],
            }],
        }
    }

    fn service() -> (TransferService, Arc<MockMetricRepository>, Arc<MockGoalRepository>) {
        let metric_repo = Arc::new(MockMetricRepository::default());
        let goal_repo = Arc::new(MockGoalRepository::default());
        (
            TransferService::new(metric_repo.clone(), goal_repo.clone()),
            metric_repo,
            goal_repo,
        )
    }

    #[test]
    fn import_replaces_both_collections() {
        let (svc, metric_repo, _) = service();
        metric_repo
            .insert_metric(HealthMetric {
                id: "stale".into(),
                date: date(2024, 1, 1),
                weight: Some(95.0),
                muscle_mass: None,
                fat_mass: None,
                bmi: None,
                fat_percentage: None,
            })
            .unwrap();

        let summary = svc.import(sample_document()).unwrap();
        assert_eq!(summary.metrics_imported, 1);
        assert_eq!(summary.goals_imported, 1);
        let metrics = metric_repo.load_metrics().unwrap();
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics[0].id, "m-1");
    }

    #[test]
    fn export_import_round_trips_losslessly() {
        let (svc, _, _) = service();
        svc.import(sample_document()).unwrap();

        let json = svc.export_json().unwrap();
        let (svc2, _, _) = service();
        svc2.import_json(&json).unwrap();
        assert_eq!(svc2.export().unwrap(), sample_document());
    }

    #[test]
    fn import_rehydrates_iso_dates_and_camel_case_fields() {
        let (svc, metric_repo, goal_repo) = service();
        let json = r#"{
            "metrics": [
                {"id": "m-9", "date": "2025-03-15", "fatPercentage": 24.5}
            ],
            "goals": [
                {
                    "id": "g-9",
                    "type": "fatPercentage",
                    "targetValue": 20.0,
                    "targetDate": "2025-10-01",
                    "weeklyGoals": [
                        {"weekStart": "2025-03-15", "weekEnd": "2025-03-21",
                         "targetValue": 24.2, "achieved": false}
                    ],
                    "monthlyGoals": [
                        {"month": 4, "year": 2025, "targetValue": 23.9,
                         "achieved": true, "actualValue": 23.7}
                    ]
                }
            ]
        }"#;
        svc.import_json(json).unwrap();

        let metric = &metric_repo.load_metrics().unwrap()[0];
        assert_eq!(metric.date, date(2025, 3, 15));
        assert_eq!(metric.fat_percentage, Some(24.5));
        assert_eq!(metric.weight, None);

        let goal = goal_repo
            .get_goal(MetricType::FatPercentage)
            .unwrap()
            .unwrap();
        assert_eq!(goal.target_date, date(2025, 10, 1));
        assert_eq!(goal.weekly_goals[0].week_end, date(2025, 3, 21));
        assert_eq!(goal.monthly_goals[0].actual_value, Some(23.7));
    }

    #[test]
    fn malformed_json_is_a_transfer_error() {
        let (svc, _, _) = service();
        assert!(matches!(
            svc.import_json("{not json"),
            Err(Error::Transfer(_))
        ));
        // Unknown metric types are rejected rather than guessed at.
        assert!(matches!(
            svc.import_json(r#"{"metrics": [], "goals": [{"id": "x", "type": "boneDensity",
                "targetValue": 1.0, "targetDate": "2025-10-01"}]}"#),
            Err(Error::Transfer(_))
        ));
    }
}
