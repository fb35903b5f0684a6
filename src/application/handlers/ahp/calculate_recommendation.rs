//! CalculateRecommendationHandler - Command handler that runs the AHP engine
//! over a user's stored data and records the result.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::ahp::{
    AhpError, AhpReport, DecisionData, HierarchyAggregator, NewRecommendationRun,
    RecommendationRun, ScoringStrategy,
};
use crate::domain::foundation::UserId;
use crate::ports::{
    AlternativeJudgmentStore, AlternativeStore, CriteriaJudgmentStore, CriteriaStore,
    DirectRatingStore, RunRecorder,
};

/// Command to calculate a recommendation for one user.
#[derive(Debug, Clone)]
pub struct CalculateRecommendationCommand {
    pub user_id: UserId,
    /// Pin a scoring strategy instead of detecting it from stored data.
    pub strategy: Option<ScoringStrategy>,
}

impl CalculateRecommendationCommand {
    /// Calculate with the strategy detected from stored data.
    pub fn detect(user_id: UserId) -> Self {
        Self {
            user_id,
            strategy: None,
        }
    }

    /// Calculate with a fixed strategy.
    pub fn with_strategy(user_id: UserId, strategy: ScoringStrategy) -> Self {
        Self {
            user_id,
            strategy: Some(strategy),
        }
    }
}

/// Result of a successful calculation.
#[derive(Debug, Clone)]
pub struct CalculateRecommendationResult {
    /// Rounded engine output, identical to what was persisted.
    pub report: AhpReport,
    pub run: RecommendationRun,
}

/// Handler for calculating recommendations.
pub struct CalculateRecommendationHandler {
    criteria: Arc<dyn CriteriaStore>,
    alternatives: Arc<dyn AlternativeStore>,
    criteria_judgments: Arc<dyn CriteriaJudgmentStore>,
    alternative_judgments: Arc<dyn AlternativeJudgmentStore>,
    ratings: Arc<dyn DirectRatingStore>,
    recorder: Arc<dyn RunRecorder>,
    aggregator: HierarchyAggregator,
}

impl CalculateRecommendationHandler {
    pub fn new(
        criteria: Arc<dyn CriteriaStore>,
        alternatives: Arc<dyn AlternativeStore>,
        criteria_judgments: Arc<dyn CriteriaJudgmentStore>,
        alternative_judgments: Arc<dyn AlternativeJudgmentStore>,
        ratings: Arc<dyn DirectRatingStore>,
        recorder: Arc<dyn RunRecorder>,
        aggregator: HierarchyAggregator,
    ) -> Self {
        Self {
            criteria,
            alternatives,
            criteria_judgments,
            alternative_judgments,
            ratings,
            recorder,
            aggregator,
        }
    }

    pub async fn handle(
        &self,
        cmd: CalculateRecommendationCommand,
    ) -> Result<CalculateRecommendationResult, AhpError> {
        // 1. Load everything the engine needs
        let data = self.load(&cmd.user_id).await?;

        // 2. Run the engine
        let outcome = self.aggregator.aggregate(&data, cmd.strategy)?;
        debug!(
            user_id = %cmd.user_id,
            strategy = %outcome.strategy,
            criteria_cr = outcome.consistency.cr,
            "criteria weights derived"
        );

        // 3. Inconsistency is reported, never blocking
        for warning in outcome.inconsistencies() {
            match warning.criterion_id {
                Some(criterion_id) => warn!(
                    user_id = %cmd.user_id,
                    criterion_id = %criterion_id,
                    cr = warning.cr,
                    "alternative judgments are inconsistent"
                ),
                None => warn!(
                    user_id = %cmd.user_id,
                    cr = warning.cr,
                    "criteria judgments are inconsistent"
                ),
            }
        }

        // 4. Persist the rounded report
        let report = outcome.report();
        let run = self
            .recorder
            .create(NewRecommendationRun::from_report(cmd.user_id.clone(), &report))
            .await?;

        info!(
            user_id = %cmd.user_id,
            run_id = %run.id(),
            strategy = %report.strategy,
            recommended = report.recommendation.name().unwrap_or("none"),
            "recommendation run recorded"
        );

        Ok(CalculateRecommendationResult { report, run })
    }

    async fn load(&self, user_id: &UserId) -> Result<DecisionData, AhpError> {
        let (criteria, alternatives, criteria_judgments, alternative_judgments, ratings) = tokio::try_join!(
            self.criteria.list_all(),
            self.alternatives.list_all(),
            self.criteria_judgments.find_by_user(user_id),
            self.alternative_judgments.find_by_user(user_id),
            self.ratings.find_by_user(user_id),
        )?;

        Ok(DecisionData {
            criteria,
            alternatives,
            criteria_judgments,
            alternative_judgments,
            ratings,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::{InMemoryCatalog, InMemoryJudgmentStore};
    use crate::domain::ahp::{
        Alternative, AlternativeJudgment, CriteriaJudgment, Criterion, DirectRating,
        Recommendation, ValidationFailure,
    };
    use crate::domain::foundation::{
        AlternativeId, CriterionId, DomainError, ErrorCode, RunId, Timestamp,
    };
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockRunRecorder {
        created: Mutex<Vec<NewRecommendationRun>>,
        fail_create: bool,
    }

    impl MockRunRecorder {
        fn new() -> Self {
            Self {
                created: Mutex::new(Vec::new()),
                fail_create: false,
            }
        }

        fn failing() -> Self {
            Self {
                created: Mutex::new(Vec::new()),
                fail_create: true,
            }
        }

        fn created(&self) -> Vec<NewRecommendationRun> {
            self.created.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RunRecorder for MockRunRecorder {
        async fn create(
            &self,
            run: NewRecommendationRun,
        ) -> Result<RecommendationRun, DomainError> {
            if self.fail_create {
                return Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    "Simulated insert failure",
                ));
            }
            self.created.lock().unwrap().push(run.clone());
            Ok(RecommendationRun::record(run, RunId::new(), Timestamp::now()))
        }

        async fn find_by_user(
            &self,
            _user_id: &UserId,
        ) -> Result<Vec<RecommendationRun>, DomainError> {
            Ok(vec![])
        }
    }

    struct FailingCriteriaStore;

    #[async_trait]
    impl CriteriaStore for FailingCriteriaStore {
        async fn list_all(&self) -> Result<Vec<Criterion>, DomainError> {
            Err(DomainError::database("connection reset"))
        }
    }

    fn test_user_id() -> UserId {
        UserId::new("test-user-123").unwrap()
    }

    fn c(id: i64) -> CriterionId {
        CriterionId::new(id)
    }

    fn a(id: i64) -> AlternativeId {
        AlternativeId::new(id)
    }

    fn catalog() -> Arc<InMemoryCatalog> {
        Arc::new(InMemoryCatalog::with_entries(
            vec![Criterion::new(1, "Price"), Criterion::new(2, "Quality")],
            vec![Alternative::new(1, "X"), Alternative::new(2, "Y")],
        ))
    }

    async fn store_with_criteria_judgment() -> Arc<InMemoryJudgmentStore> {
        let store = Arc::new(InMemoryJudgmentStore::new());
        CriteriaJudgmentStore::replace_for_user(
            store.as_ref(),
            &test_user_id(),
            &[CriteriaJudgment::new(c(1), c(2), 3.0)],
        )
        .await
        .unwrap();
        store
    }

    fn handler(
        criteria: Arc<dyn CriteriaStore>,
        catalog: Arc<InMemoryCatalog>,
        store: Arc<InMemoryJudgmentStore>,
        recorder: Arc<dyn RunRecorder>,
    ) -> CalculateRecommendationHandler {
        CalculateRecommendationHandler::new(
            criteria,
            catalog,
            store.clone(),
            store.clone(),
            store,
            recorder,
            HierarchyAggregator::default(),
        )
    }

    #[tokio::test]
    async fn calculates_and_records_pairwise_run() {
        let catalog = catalog();
        let store = store_with_criteria_judgment().await;
        AlternativeJudgmentStore::replace_for_criterion(
            store.as_ref(),
            &test_user_id(),
            c(1),
            &[AlternativeJudgment::new(c(1), a(1), a(2), 4.0)],
        )
        .await
        .unwrap();
        AlternativeJudgmentStore::replace_for_criterion(
            store.as_ref(),
            &test_user_id(),
            c(2),
            &[AlternativeJudgment::new(c(2), a(1), a(2), 2.0)],
        )
        .await
        .unwrap();
        let recorder = Arc::new(MockRunRecorder::new());

        let handler = handler(catalog.clone(), catalog, store, recorder.clone());
        let result = handler
            .handle(CalculateRecommendationCommand::detect(test_user_id()))
            .await
            .unwrap();

        assert_eq!(result.report.strategy, ScoringStrategy::FullPairwise);
        assert_eq!(result.report.criteria[0].weight, 0.75);
        assert_eq!(result.report.ranking[0].name, "X");
        // 0.75 * 0.8 + 0.25 * 2/3
        assert_eq!(result.report.ranking[0].score, 0.7667);
        assert!(matches!(
            result.report.recommendation,
            Recommendation::Recommended { .. }
        ));

        let created = recorder.created();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].final_ranking, result.report.ranking);
        assert_eq!(result.run.user_id(), &test_user_id());
    }

    #[tokio::test]
    async fn calculates_direct_rating_run() {
        let catalog = catalog();
        let store = store_with_criteria_judgment().await;
        DirectRatingStore::replace_for_user(
            store.as_ref(),
            &test_user_id(),
            &[
                DirectRating::new(a(1), c(1), 2.0),
                DirectRating::new(a(2), c(1), 4.0),
                DirectRating::new(a(2), c(2), 4.0),
            ],
        )
        .await
        .unwrap();
        let recorder = Arc::new(MockRunRecorder::new());

        let handler = handler(catalog.clone(), catalog, store, recorder.clone());
        let result = handler
            .handle(CalculateRecommendationCommand::detect(test_user_id()))
            .await
            .unwrap();

        assert_eq!(result.report.strategy, ScoringStrategy::DirectRating);
        assert!(result.report.alternative_weights.is_none());
        assert_eq!(result.report.ranking[0].name, "Y");
        assert_eq!(result.report.ranking[0].score, 4.0);
        assert_eq!(result.report.ranking[1].score, 1.5);
    }

    #[tokio::test]
    async fn pinned_strategy_without_data_fails_and_records_nothing() {
        let catalog = catalog();
        let store = store_with_criteria_judgment().await;
        let recorder = Arc::new(MockRunRecorder::new());

        let handler = handler(catalog.clone(), catalog, store, recorder.clone());
        let result = handler
            .handle(CalculateRecommendationCommand::with_strategy(
                test_user_id(),
                ScoringStrategy::DirectRating,
            ))
            .await;

        assert!(matches!(
            result,
            Err(AhpError::Validation(ValidationFailure::NoDirectRatings))
        ));
        assert!(recorder.created().is_empty());
    }

    #[tokio::test]
    async fn inconsistent_judgments_still_record_run() {
        let catalog = Arc::new(InMemoryCatalog::with_entries(
            vec![
                Criterion::new(1, "A"),
                Criterion::new(2, "B"),
                Criterion::new(3, "C"),
            ],
            vec![Alternative::new(1, "X")],
        ));
        let store = Arc::new(InMemoryJudgmentStore::new());
        CriteriaJudgmentStore::replace_for_user(
            store.as_ref(),
            &test_user_id(),
            &[
                CriteriaJudgment::new(c(1), c(2), 9.0),
                CriteriaJudgment::new(c(2), c(3), 9.0),
                CriteriaJudgment::new(c(3), c(1), 9.0),
            ],
        )
        .await
        .unwrap();
        DirectRatingStore::replace_for_user(
            store.as_ref(),
            &test_user_id(),
            &[DirectRating::new(a(1), c(1), 5.0)],
        )
        .await
        .unwrap();
        let recorder = Arc::new(MockRunRecorder::new());

        let handler = handler(catalog.clone(), catalog, store, recorder.clone());
        let result = handler
            .handle(CalculateRecommendationCommand::detect(test_user_id()))
            .await
            .unwrap();

        assert!(!result.report.consistency.is_consistent);
        assert_eq!(recorder.created().len(), 1);
    }

    #[tokio::test]
    async fn recorder_failure_propagates_as_storage_error() {
        let catalog = catalog();
        let store = store_with_criteria_judgment().await;
        DirectRatingStore::replace_for_user(
            store.as_ref(),
            &test_user_id(),
            &[DirectRating::new(a(1), c(1), 5.0)],
        )
        .await
        .unwrap();
        let recorder = Arc::new(MockRunRecorder::failing());

        let handler = handler(catalog.clone(), catalog, store, recorder);
        let result = handler
            .handle(CalculateRecommendationCommand::detect(test_user_id()))
            .await;

        match result {
            Err(err @ AhpError::Storage(_)) => {
                assert_eq!(err.code(), ErrorCode::DatabaseError);
                assert!(!err.is_client_error());
            }
            other => panic!("expected storage error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn read_failure_propagates_before_engine_runs() {
        let catalog = catalog();
        let store = store_with_criteria_judgment().await;
        let recorder = Arc::new(MockRunRecorder::new());

        let handler = handler(Arc::new(FailingCriteriaStore), catalog, store, recorder.clone());
        let result = handler
            .handle(CalculateRecommendationCommand::detect(test_user_id()))
            .await;

        assert!(matches!(result, Err(AhpError::Storage(_))));
        assert!(recorder.created().is_empty());
    }
}
