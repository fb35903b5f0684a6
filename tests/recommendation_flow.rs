//! End-to-end recommendation flow over the in-memory adapters.
//!
//! Drives the submit, calculate and history handlers the way a caller
//! would, with no database required.

use std::sync::Arc;

use ahp_recommender::adapters::memory::{InMemoryCatalog, InMemoryJudgmentStore, InMemoryRunRecorder};
use ahp_recommender::application::{
    CalculateRecommendationCommand, CalculateRecommendationHandler, GetRunHistoryHandler,
    GetRunHistoryQuery, GetUserJudgmentsHandler, GetUserJudgmentsQuery,
    SubmitAlternativeJudgmentsCommand, SubmitAlternativeJudgmentsHandler,
    SubmitCriteriaJudgmentsCommand, SubmitCriteriaJudgmentsHandler, SubmitDirectRatingsCommand,
    SubmitDirectRatingsHandler,
};
use ahp_recommender::domain::ahp::{
    AhpError, Alternative, AlternativeJudgment, CriteriaJudgment, Criterion, DirectRating, HierarchyAggregator,
    PairwiseJudgment, Recommendation, ScoringStrategy, ValidationFailure,
};
use ahp_recommender::domain::foundation::{AlternativeId, CriterionId, ErrorCode, UserId};

struct App {
    submit_criteria: SubmitCriteriaJudgmentsHandler,
    submit_alternatives: SubmitAlternativeJudgmentsHandler,
    submit_ratings: SubmitDirectRatingsHandler,
    calculate: CalculateRecommendationHandler,
    history: GetRunHistoryHandler,
    stored: GetUserJudgmentsHandler,
    recorder: Arc<InMemoryRunRecorder>,
}

impl App {
    fn new(catalog: InMemoryCatalog) -> Self {
        let catalog = Arc::new(catalog);
        let store = Arc::new(InMemoryJudgmentStore::new());
        let recorder = Arc::new(InMemoryRunRecorder::new());

        Self {
            submit_criteria: SubmitCriteriaJudgmentsHandler::new(store.clone()),
            submit_alternatives: SubmitAlternativeJudgmentsHandler::new(
                catalog.clone(),
                store.clone(),
            ),
            submit_ratings: SubmitDirectRatingsHandler::new(store.clone()),
            stored: GetUserJudgmentsHandler::new(store.clone(), store.clone(), store.clone()),
            calculate: CalculateRecommendationHandler::new(
                catalog.clone(),
                catalog,
                store.clone(),
                store.clone(),
                store,
                recorder.clone(),
                HierarchyAggregator::default(),
            ),
            history: GetRunHistoryHandler::new(recorder.clone()),
            recorder,
        }
    }
}

fn user() -> UserId {
    UserId::new("user-42").unwrap()
}

fn c(id: i64) -> CriterionId {
    CriterionId::new(id)
}

fn a(id: i64) -> AlternativeId {
    AlternativeId::new(id)
}

fn textbook_catalog() -> InMemoryCatalog {
    InMemoryCatalog::with_entries(
        vec![
            Criterion::new(1, "A"),
            Criterion::new(2, "B"),
            Criterion::new(3, "C"),
        ],
        vec![
            Alternative::new(1, "X"),
            Alternative::new(2, "Y"),
            Alternative::new(3, "Z"),
        ],
    )
}

async fn submit_textbook_criteria(app: &App) {
    app.submit_criteria
        .handle(SubmitCriteriaJudgmentsCommand {
            user_id: user(),
            judgments: vec![
                CriteriaJudgment::new(c(1), c(2), 3.0),
                CriteriaJudgment::new(c(1), c(3), 5.0),
                CriteriaJudgment::new(c(2), c(3), 2.0),
            ],
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn textbook_criteria_weights_and_single_rating() {
    let app = App::new(textbook_catalog());
    submit_textbook_criteria(&app).await;
    app.submit_ratings
        .handle(SubmitDirectRatingsCommand {
            user_id: user(),
            ratings: vec![DirectRating::new(a(1), c(1), 4.0)],
        })
        .await
        .unwrap();

    let result = app
        .calculate
        .handle(CalculateRecommendationCommand::detect(user()))
        .await
        .unwrap();
    let report = result.report;

    assert_eq!(report.strategy, ScoringStrategy::DirectRating);
    let weights: Vec<f64> = report.criteria.iter().map(|c| c.weight).collect();
    assert_eq!(weights, vec![0.6479, 0.2299, 0.1222]);
    assert!((weights[0] - 0.648).abs() < 0.01);
    assert!((weights[1] - 0.230).abs() < 0.01);
    assert!((weights[2] - 0.122).abs() < 0.01);

    assert!(report.consistency.is_consistent);
    assert!(report.consistency.cr < 0.10);
    assert!((report.consistency.cr - 0.0032).abs() < 1e-3);

    assert_eq!(report.ranking.len(), 1);
    assert_eq!(report.ranking[0].name, "X");
    assert!((report.ranking[0].score - 2.59).abs() < 0.01);
    assert_eq!(
        report.recommendation,
        Recommendation::Recommended {
            alternative_id: a(1),
            name: "X".to_string(),
            message: "Based on your preferences, the recommended alternative is: X".to_string(),
        }
    );
}

#[tokio::test]
async fn full_pairwise_ranks_every_alternative() {
    let app = App::new(textbook_catalog());
    submit_textbook_criteria(&app).await;

    for (criterion, value) in [(1, 4.0), (2, 0.5), (3, 1.0)] {
        app.submit_alternatives
            .handle(SubmitAlternativeJudgmentsCommand {
                user_id: user(),
                criterion_id: c(criterion),
                judgments: vec![
                    PairwiseJudgment::new(a(1), a(2), value),
                    PairwiseJudgment::new(a(1), a(3), value),
                ],
            })
            .await
            .unwrap();
    }

    let report = app
        .calculate
        .handle(CalculateRecommendationCommand::detect(user()))
        .await
        .unwrap()
        .report;

    assert_eq!(report.strategy, ScoringStrategy::FullPairwise);
    assert_eq!(report.ranking.len(), 3);
    assert_eq!(report.ranking[0].name, "X");
    assert_eq!(report.alternative_weights.as_ref().map(Vec::len), Some(3));
    for pair in report.ranking.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    // Y and Z were judged identically everywhere, so the lower id wins the tie.
    assert_eq!(report.ranking[1].alternative_id, a(2));
    assert_eq!(report.ranking[2].alternative_id, a(3));
}

#[tokio::test]
async fn single_criterion_is_rejected() {
    let app = App::new(InMemoryCatalog::with_entries(
        vec![Criterion::new(1, "A")],
        vec![Alternative::new(1, "X")],
    ));
    app.submit_ratings
        .handle(SubmitDirectRatingsCommand {
            user_id: user(),
            ratings: vec![DirectRating::new(a(1), c(1), 4.0)],
        })
        .await
        .unwrap();

    let err = app
        .calculate
        .handle(CalculateRecommendationCommand::detect(user()))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AhpError::Validation(ValidationFailure::InsufficientCriteria { found: 1 })
    ));
    assert_eq!(err.code(), ErrorCode::InsufficientCriteria);
    assert!(err.to_string().contains("At least 2 criteria"));
    assert_eq!(app.recorder.run_count().await, 0);
}

#[tokio::test]
async fn recalculating_creates_distinct_identical_runs() {
    let app = App::new(textbook_catalog());
    submit_textbook_criteria(&app).await;
    app.submit_ratings
        .handle(SubmitDirectRatingsCommand {
            user_id: user(),
            ratings: vec![
                DirectRating::new(a(1), c(1), 4.0),
                DirectRating::new(a(2), c(2), 5.0),
            ],
        })
        .await
        .unwrap();

    let first = app
        .calculate
        .handle(CalculateRecommendationCommand::detect(user()))
        .await
        .unwrap();
    let second = app
        .calculate
        .handle(CalculateRecommendationCommand::detect(user()))
        .await
        .unwrap();

    assert_ne!(first.run.id(), second.run.id());
    assert_eq!(first.report, second.report);
    assert_eq!(app.recorder.run_count().await, 2);
}

#[tokio::test]
async fn history_lists_runs_newest_first() {
    let app = App::new(textbook_catalog());
    submit_textbook_criteria(&app).await;
    app.submit_ratings
        .handle(SubmitDirectRatingsCommand {
            user_id: user(),
            ratings: vec![DirectRating::new(a(1), c(1), 4.0)],
        })
        .await
        .unwrap();

    let rated = app
        .calculate
        .handle(CalculateRecommendationCommand::detect(user()))
        .await
        .unwrap();

    app.submit_alternatives
        .handle(SubmitAlternativeJudgmentsCommand {
            user_id: user(),
            criterion_id: c(1),
            judgments: vec![PairwiseJudgment::new(a(2), a(1), 3.0)],
        })
        .await
        .unwrap();
    let pairwise = app
        .calculate
        .handle(CalculateRecommendationCommand::detect(user()))
        .await
        .unwrap();

    let runs = app
        .history
        .handle(GetRunHistoryQuery {
            user_id: user(),
            limit: None,
        })
        .await
        .unwrap();

    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0].id(), pairwise.run.id());
    assert_eq!(runs[0].strategy(), ScoringStrategy::FullPairwise);
    assert_eq!(runs[1].id(), rated.run.id());
    assert_eq!(runs[1].final_ranking(), rated.report.ranking.as_slice());
}

#[tokio::test]
async fn resubmitting_criteria_judgments_replaces_them() {
    let app = App::new(textbook_catalog());
    submit_textbook_criteria(&app).await;
    app.submit_criteria
        .handle(SubmitCriteriaJudgmentsCommand {
            user_id: user(),
            judgments: vec![CriteriaJudgment::new(c(3), c(1), 5.0)],
        })
        .await
        .unwrap();
    app.submit_ratings
        .handle(SubmitDirectRatingsCommand {
            user_id: user(),
            ratings: vec![DirectRating::new(a(3), c(3), 1.0)],
        })
        .await
        .unwrap();

    let report = app
        .calculate
        .handle(CalculateRecommendationCommand::detect(user()))
        .await
        .unwrap()
        .report;

    let top = report
        .criteria
        .iter()
        .max_by(|x, y| x.weight.total_cmp(&y.weight))
        .unwrap();
    assert_eq!(top.criterion_id, c(3));
}

#[tokio::test]
async fn submitted_inputs_can_be_read_back() {
    let app = App::new(textbook_catalog());
    submit_textbook_criteria(&app).await;
    app.submit_alternatives
        .handle(SubmitAlternativeJudgmentsCommand {
            user_id: user(),
            criterion_id: c(2),
            judgments: vec![PairwiseJudgment::new(a(1), a(3), 7.0)],
        })
        .await
        .unwrap();
    app.submit_ratings
        .handle(SubmitDirectRatingsCommand {
            user_id: user(),
            ratings: vec![DirectRating::new(a(2), c(1), 3.0)],
        })
        .await
        .unwrap();

    let stored = app
        .stored
        .handle(GetUserJudgmentsQuery {
            user_id: user(),
            criterion_id: None,
        })
        .await
        .unwrap();

    assert_eq!(stored.criteria.len(), 3);
    assert_eq!(stored.criteria[2], CriteriaJudgment::new(c(2), c(3), 2.0));
    assert_eq!(
        stored.alternatives,
        vec![AlternativeJudgment::new(c(2), a(1), a(3), 7.0)]
    );
    assert_eq!(stored.ratings, vec![DirectRating::new(a(2), c(1), 3.0)]);
}

#[tokio::test]
async fn alternative_rated_only_zero_gets_no_ranking_entry() {
    let app = App::new(textbook_catalog());
    submit_textbook_criteria(&app).await;
    app.submit_ratings
        .handle(SubmitDirectRatingsCommand {
            user_id: user(),
            ratings: vec![
                DirectRating::new(a(1), c(1), 4.0),
                DirectRating::new(a(2), c(1), 0.0),
            ],
        })
        .await
        .unwrap();

    let report = app
        .calculate
        .handle(CalculateRecommendationCommand::detect(user()))
        .await
        .unwrap()
        .report;

    assert_eq!(report.ranking.len(), 1);
    assert_eq!(report.ranking[0].alternative_id, a(1));
}
