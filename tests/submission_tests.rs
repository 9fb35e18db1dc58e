mod common;

use common::{Engine, ROSTER_GROUP, SEMINARIST, STUDENT, compat_engine, engine};
use rstest::rstest;
use rust_rubric_engine::config::GradingConfig;
use rust_rubric_engine::models::marks::requests::RecordMarkRequest;
use rust_rubric_engine::models::works::{
    entities::{GraderRole, WorkStatus},
    requests::SubmitWorkRequest,
};

#[rstest]
#[tokio::test]
async fn resubmission_keeps_a_single_work(#[future(awt)] engine: Engine) {
    let first = engine.submit(STUDENT, engine.task.id, "draft").await;
    let second = engine.submit(STUDENT, engine.task.id, "final").await;

    assert_eq!(first.id, second.id);
    assert_eq!(second.status, WorkStatus::Submitted);
    assert_eq!(second.content_ref.as_deref(), Some("final"));
    assert_eq!(second.seminarist_id, SEMINARIST);

    let found = engine
        .works()
        .find_work(STUDENT, engine.task.id)
        .await
        .unwrap()
        .expect("work exists");
    assert_eq!(found.id, first.id);
    assert_eq!(found.content_ref.as_deref(), Some("final"));
}

#[rstest]
#[tokio::test]
async fn submission_requires_task_and_seminarist(#[future(awt)] engine: Engine) {
    let works = engine.works();

    let err = works
        .submit(SubmitWorkRequest {
            student_id: STUDENT,
            task_id: 9999,
            content_ref: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E001");

    let orphan = engine
        .raw
        .insert_task(common::DISCIPLINE, ROSTER_GROUP + 1, "Unrouted")
        .await
        .unwrap();
    let err = works
        .submit(SubmitWorkRequest {
            student_id: STUDENT,
            task_id: orphan.id,
            content_ref: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E004");
    assert_eq!(
        works.status_for(STUDENT, orphan.id).await.unwrap(),
        WorkStatus::Pending
    );
}

#[rstest]
#[tokio::test]
async fn grading_follows_the_state_machine(#[future(awt)] engine: Engine) {
    let works = engine.works();
    let work = engine.submit(STUDENT, engine.task.id, "v1").await;

    let graded = works
        .mark_graded(work.id, GraderRole::Assistant)
        .await
        .unwrap();
    assert_eq!(graded.status, WorkStatus::GradedByAssistant);
    assert_eq!(
        works.current_status(work.id).await.unwrap(),
        WorkStatus::GradedByAssistant
    );

    let err = works
        .mark_graded(work.id, GraderRole::Seminarist)
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E003");

    let err = works
        .mark_graded(9999, GraderRole::Assistant)
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E001");

    // 重新提交回到 submitted，可再次评分
    let resubmitted = engine.submit(STUDENT, engine.task.id, "v2").await;
    assert_eq!(resubmitted.status, WorkStatus::Submitted);
    let graded = works
        .mark_graded(work.id, GraderRole::Seminarist)
        .await
        .unwrap();
    assert_eq!(graded.status, WorkStatus::GradedBySeminarist);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_graders_cannot_both_claim_a_work() {
    let engine = Engine::connect_file(GradingConfig::default()).await;
    let work_id = engine.submit(STUDENT, engine.task.id, "v1").await.id;

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let works = engine.works();
            let role = if i % 2 == 0 {
                GraderRole::Assistant
            } else {
                GraderRole::Seminarist
            };
            tokio::spawn(async move { works.mark_graded(work_id, role).await })
        })
        .collect();

    let mut claimed = Vec::new();
    for handle in handles {
        match handle.await.expect("task should not panic") {
            Ok(graded) => claimed.push(graded.status),
            Err(err) => assert_eq!(err.code(), "E003"),
        }
    }
    assert_eq!(claimed.len(), 1);

    let status = engine.works().current_status(work_id).await.unwrap();
    assert_eq!(status, claimed[0]);
}

#[rstest]
#[tokio::test]
async fn compatibility_mode_allows_regrading(#[future(awt)] compat_engine: Engine) {
    let works = compat_engine.works();
    let work = compat_engine
        .submit(STUDENT, compat_engine.task.id, "v1")
        .await;

    works
        .mark_graded(work.id, GraderRole::Assistant)
        .await
        .unwrap();
    let regraded = works
        .mark_graded(work.id, GraderRole::Seminarist)
        .await
        .unwrap();
    assert_eq!(regraded.status, WorkStatus::GradedBySeminarist);
}

#[rstest]
#[tokio::test]
async fn missing_work_reports_pending(#[future(awt)] engine: Engine) {
    let works = engine.works();
    assert_eq!(
        works.current_status(12345).await.unwrap(),
        WorkStatus::Pending
    );
    assert_eq!(
        works.status_for(STUDENT, engine.task.id).await.unwrap(),
        WorkStatus::Pending
    );
    assert!(
        works
            .find_work(STUDENT, engine.task.id)
            .await
            .unwrap()
            .is_none()
    );
}

#[rstest]
#[tokio::test]
async fn marks_are_upserted_and_survive_resubmission(#[future(awt)] engine: Engine) {
    let ids = engine.main_criteria(engine.task.id, &[1]).await;
    let work = engine.submit(STUDENT, engine.task.id, "v1").await;
    let marks = engine.marks();

    for mark in [0.25, 0.75] {
        marks
            .record_mark(
                work.id,
                RecordMarkRequest {
                    criterion_id: ids[0],
                    mark,
                    comment: Some(format!("mark {mark}")),
                },
            )
            .await
            .unwrap();
    }

    engine.submit(STUDENT, engine.task.id, "v2").await;

    let stored = marks.get_marks(work.id).await.unwrap();
    assert_eq!(stored.marks.len(), 1);
    let mark = stored.get(ids[0]).expect("mark exists");
    assert_eq!(mark.mark, 0.75);
    assert_eq!(mark.comment.as_deref(), Some("mark 0.75"));

    // 记录得分不改变提交状态
    assert_eq!(
        engine.works().current_status(work.id).await.unwrap(),
        WorkStatus::Submitted
    );
}

#[rstest]
#[tokio::test]
async fn mark_ranges_are_enforced(#[future(awt)] engine: Engine) {
    let main_ids = engine.main_criteria(engine.task.id, &[1]).await;
    let blocking_id = engine
        .blocking_criterion(engine.task.id, "Plagiarism", 0.0)
        .await;
    let work = engine.submit(STUDENT, engine.task.id, "v1").await;
    let marks = engine.marks();

    let record = |criterion_id: i64, mark: f64| {
        marks.record_mark(
            work.id,
            RecordMarkRequest {
                criterion_id,
                mark,
                comment: None,
            },
        )
    };

    assert_eq!(record(main_ids[0], 1.5).await.unwrap_err().code(), "E002");
    assert_eq!(record(main_ids[0], -0.1).await.unwrap_err().code(), "E002");
    assert_eq!(record(blocking_id, 11.0).await.unwrap_err().code(), "E002");
    assert_eq!(
        record(blocking_id, f64::NAN).await.unwrap_err().code(),
        "E002"
    );
    assert!(record(blocking_id, 3.0).await.is_ok());
    assert!(record(main_ids[0], 1.0).await.is_ok());

    assert_eq!(record(9999, 0.5).await.unwrap_err().code(), "E001");
    let err = marks
        .record_mark(
            9999,
            RecordMarkRequest {
                criterion_id: main_ids[0],
                mark: 0.5,
                comment: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E001");
}

#[rstest]
#[tokio::test]
async fn compatibility_mode_skips_range_checks(#[future(awt)] compat_engine: Engine) {
    let ids = compat_engine
        .main_criteria(compat_engine.task.id, &[1])
        .await;
    let work = compat_engine
        .submit(STUDENT, compat_engine.task.id, "v1")
        .await;
    let marks = compat_engine.marks();

    assert!(
        marks
            .record_mark(
                work.id,
                RecordMarkRequest {
                    criterion_id: ids[0],
                    mark: 1.5,
                    comment: None,
                },
            )
            .await
            .is_ok()
    );
    let err = marks
        .record_mark(
            work.id,
            RecordMarkRequest {
                criterion_id: ids[0],
                mark: f64::INFINITY,
                comment: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E002");
}

#[rstest]
#[tokio::test]
async fn marks_must_target_the_works_task(#[future(awt)] engine: Engine) {
    let other_task = engine.add_task("Lab 2").await;
    let foreign_ids = engine.main_criteria(other_task.id, &[1]).await;
    let work = engine.submit(STUDENT, engine.task.id, "v1").await;

    let err = engine
        .marks()
        .record_mark(
            work.id,
            RecordMarkRequest {
                criterion_id: foreign_ids[0],
                mark: 0.5,
                comment: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E002");
}

#[rstest]
#[tokio::test]
async fn triggering_records_the_final_mark(#[future(awt)] engine: Engine) {
    let blocking_id = engine
        .blocking_criterion(engine.task.id, "Plagiarism", 2.0)
        .await;
    let main_ids = engine.main_criteria(engine.task.id, &[1]).await;
    let work = engine.submit(STUDENT, engine.task.id, "v1").await;
    let marks = engine.marks();

    let mark = marks
        .trigger_blocking_criterion(work.id, blocking_id, None)
        .await
        .unwrap();
    assert_eq!(mark.mark, 2.0);
    assert_eq!(mark.comment.as_deref(), Some("Plagiarism detected"));

    let mark = marks
        .trigger_blocking_criterion(work.id, blocking_id, Some("copied from lab 3".to_string()))
        .await
        .unwrap();
    assert_eq!(mark.comment.as_deref(), Some("copied from lab 3"));

    let err = marks
        .trigger_blocking_criterion(work.id, main_ids[0], None)
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E003");
}
