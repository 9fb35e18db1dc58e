mod common;

use common::{Engine, STUDENT, engine};
use rstest::rstest;
use rust_rubric_engine::config::GradingConfig;
use rust_rubric_engine::models::criteria::{
    entities::{BLOCKING_GROUP_NAME, Criterion, Score},
    requests::{CreateBlockingCriterionRequest, SetScoreCommentRequest, UpdateCriterionRequest},
};
use rust_rubric_engine::models::marks::requests::RecordMarkRequest;

fn blocking_request(name: &str, final_mark: f64) -> CreateBlockingCriterionRequest {
    CreateBlockingCriterionRequest {
        name: name.to_string(),
        description: Some("see guidelines".to_string()),
        comment: None,
        final_mark,
    }
}

#[rstest]
#[tokio::test]
async fn blocking_group_is_created_once_per_task(#[future(awt)] engine: Engine) {
    let criteria = engine.criteria();
    let task_id = engine.task.id;

    let first = criteria
        .create_blocking_criterion(task_id, blocking_request("Plagiarism", 0.0))
        .await
        .unwrap();
    let second = criteria
        .create_blocking_criterion(task_id, blocking_request("Late", 2.0))
        .await
        .unwrap();
    assert_eq!(first.group_id, second.group_id);

    let loaded = criteria.load_blocking_criteria(task_id).await.unwrap();
    let group = loaded.group.expect("blocking group exists");
    assert_eq!(group.id, first.group_id);
    assert_eq!(group.name, BLOCKING_GROUP_NAME);
    assert!(group.is_blocking);
    assert_eq!(loaded.criteria.len(), 2);
    assert_eq!(loaded.criteria[1].final_mark, 2.0);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_blocking_creation_shares_one_group() {
    let engine = Engine::connect_file(GradingConfig::default()).await;
    let task_id = engine.task.id;

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let criteria = engine.criteria();
            tokio::spawn(async move {
                criteria
                    .create_blocking_criterion(task_id, blocking_request(&format!("Rule {i}"), 1.0))
                    .await
            })
        })
        .collect();

    let mut group_ids = Vec::new();
    for handle in handles {
        let created = handle
            .await
            .expect("task should not panic")
            .expect("every creation should succeed");
        group_ids.push(created.group_id);
    }
    group_ids.sort_unstable();
    group_ids.dedup();
    assert_eq!(group_ids.len(), 1);

    let loaded = engine
        .criteria()
        .load_blocking_criteria(task_id)
        .await
        .unwrap();
    assert_eq!(loaded.group.map(|g| g.id), Some(group_ids[0]));
    assert_eq!(loaded.criteria.len(), 8);
}

#[rstest]
#[tokio::test]
async fn blocking_creation_validates_input(#[future(awt)] engine: Engine) {
    let criteria = engine.criteria();

    let err = criteria
        .create_blocking_criterion(9999, blocking_request("Plagiarism", 0.0))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E001");

    let err = criteria
        .create_blocking_criterion(engine.task.id, blocking_request("Plagiarism", 10.5))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E002");

    let err = criteria
        .create_blocking_criterion(engine.task.id, blocking_request("   ", 1.0))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E002");

    // 校验失败不会留下分组
    let loaded = criteria.load_blocking_criteria(engine.task.id).await.unwrap();
    assert!(loaded.group.is_none());
}

#[rstest]
#[tokio::test]
async fn main_criteria_are_listed_per_group(#[future(awt)] engine: Engine) {
    let criteria = engine.criteria();
    let task_id = engine.task.id;

    let style = criteria.create_main_group(task_id, "Style").await.unwrap();
    let tests = criteria.create_main_group(task_id, "Tests").await.unwrap();
    // 重名分组允许存在
    criteria.create_main_group(task_id, "Tests").await.unwrap();

    let naming = criteria.create_main_criterion(style.id, "Naming").await.unwrap();
    assert_eq!(naming.weight, 1);
    assert_eq!(naming.score_comments.get(Score::Full), None);
    criteria.create_main_criterion(tests.id, "Coverage").await.unwrap();
    criteria.create_main_criterion(tests.id, "Edge cases").await.unwrap();

    let groups = criteria.load_main_criteria(task_id).await.unwrap();
    assert_eq!(groups.len(), 3);
    assert_eq!(groups[0].group.name, "Style");
    assert_eq!(groups[0].criteria.len(), 1);
    assert_eq!(groups[1].criteria.len(), 2);
    assert!(groups[2].criteria.is_empty());
}

#[rstest]
#[tokio::test]
async fn blocking_group_rejects_main_operations(#[future(awt)] engine: Engine) {
    let criteria = engine.criteria();
    let created = criteria
        .create_blocking_criterion(engine.task.id, blocking_request("Plagiarism", 0.0))
        .await
        .unwrap();

    let err = criteria
        .create_main_criterion(created.group_id, "Sneaky")
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E003");

    let err = criteria
        .rename_group(created.group_id, "renamed")
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E003");

    let err = criteria.delete_group(created.group_id).await.unwrap_err();
    assert_eq!(err.code(), "E003");

    let err = criteria
        .set_criterion_weight(created.criterion.id, 2)
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E003");

    let err = criteria
        .set_criterion_score_comment(
            created.criterion.id,
            SetScoreCommentRequest {
                score: 0.5,
                comment: Some("half".to_string()),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E003");
}

#[rstest]
#[tokio::test]
async fn weight_and_score_comments_are_validated(#[future(awt)] engine: Engine) {
    let criteria = engine.criteria();
    let ids = engine.main_criteria(engine.task.id, &[1]).await;

    let err = criteria.set_criterion_weight(ids[0], -1).await.unwrap_err();
    assert_eq!(err.code(), "E002");

    let updated = criteria.set_criterion_weight(ids[0], 3).await.unwrap();
    assert_eq!(updated.weight, 3);

    let err = criteria
        .set_criterion_score_comment(
            ids[0],
            SetScoreCommentRequest {
                score: 0.3,
                comment: Some("nope".to_string()),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E002");

    let updated = criteria
        .set_criterion_score_comment(
            ids[0],
            SetScoreCommentRequest {
                score: 0.75,
                comment: Some("almost there".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(
        updated.score_comments.get(Score::ThreeQuarters),
        Some("almost there")
    );
    assert_eq!(updated.score_comments.get(Score::Half), None);

    let err = criteria.set_criterion_weight(9999, 1).await.unwrap_err();
    assert_eq!(err.code(), "E001");
}

#[rstest]
#[tokio::test]
async fn criteria_can_be_updated_by_kind(#[future(awt)] engine: Engine) {
    let criteria = engine.criteria();
    let created = criteria
        .create_blocking_criterion(engine.task.id, blocking_request("Plagiarism", 0.0))
        .await
        .unwrap();
    let main_ids = engine.main_criteria(engine.task.id, &[1]).await;

    let updated = criteria
        .update_criterion(
            created.criterion.id,
            UpdateCriterionRequest {
                name: Some(" Copied code ".to_string()),
                final_mark: Some(1.5),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let Criterion::Blocking(updated) = updated else {
        panic!("expected a blocking criterion");
    };
    assert_eq!(updated.name, "Copied code");
    assert_eq!(updated.final_mark, 1.5);
    assert_eq!(updated.description.as_deref(), Some("see guidelines"));

    let cleared = criteria
        .update_criterion(
            created.criterion.id,
            UpdateCriterionRequest {
                description: Some(None),
                comment: Some(Some("copied from a peer".to_string())),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let Criterion::Blocking(cleared) = cleared else {
        panic!("expected a blocking criterion");
    };
    assert_eq!(cleared.description, None);
    assert_eq!(cleared.comment.as_deref(), Some("copied from a peer"));
    assert_eq!(cleared.name, "Copied code");
    assert_eq!(cleared.final_mark, 1.5);

    let err = criteria
        .update_criterion(
            main_ids[0],
            UpdateCriterionRequest {
                final_mark: Some(1.0),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E002");

    let renamed = criteria
        .update_criterion(
            main_ids[0],
            UpdateCriterionRequest {
                name: Some("Readability".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let Criterion::Main(renamed) = renamed else {
        panic!("expected a main criterion");
    };
    assert_eq!(renamed.name, "Readability");
}

#[rstest]
#[tokio::test]
async fn deleting_a_group_cascades_to_marks(#[future(awt)] engine: Engine) {
    let ids = engine.main_criteria(engine.task.id, &[1, 1]).await;
    let work = engine.submit(STUDENT, engine.task.id, "v1").await;
    for &criterion_id in &ids {
        engine
            .marks()
            .record_mark(
                work.id,
                RecordMarkRequest {
                    criterion_id,
                    mark: 1.0,
                    comment: None,
                },
            )
            .await
            .unwrap();
    }

    let group_id = engine.criteria().load_main_criteria(engine.task.id).await.unwrap()[0]
        .group
        .id;
    engine.criteria().delete_group(group_id).await.unwrap();

    assert!(engine.marks().get_marks(work.id).await.unwrap().marks.is_empty());
    assert!(
        engine
            .criteria()
            .load_main_criteria(engine.task.id)
            .await
            .unwrap()
            .is_empty()
    );

    let err = engine.criteria().delete_group(group_id).await.unwrap_err();
    assert_eq!(err.code(), "E001");
}

#[rstest]
#[tokio::test]
async fn deleting_a_criterion_removes_its_marks(#[future(awt)] engine: Engine) {
    let ids = engine.main_criteria(engine.task.id, &[1, 1]).await;
    let work = engine.submit(STUDENT, engine.task.id, "v1").await;
    for &criterion_id in &ids {
        engine
            .marks()
            .record_mark(
                work.id,
                RecordMarkRequest {
                    criterion_id,
                    mark: 0.5,
                    comment: None,
                },
            )
            .await
            .unwrap();
    }

    engine.criteria().delete_criterion(ids[0]).await.unwrap();

    let marks = engine.marks().get_marks(work.id).await.unwrap();
    assert!(marks.get(ids[0]).is_none());
    assert!(marks.get(ids[1]).is_some());
}

#[rstest]
#[tokio::test]
async fn delete_all_blocking_criteria_is_idempotent(#[future(awt)] engine: Engine) {
    let criteria = engine.criteria();
    let task_id = engine.task.id;
    let criterion_id = engine.blocking_criterion(task_id, "Plagiarism", 0.5).await;
    let work = engine.submit(STUDENT, task_id, "v1").await;
    engine
        .marks()
        .trigger_blocking_criterion(work.id, criterion_id, None)
        .await
        .unwrap();

    assert!(criteria.delete_all_blocking_criteria(task_id).await.unwrap());
    assert!(!criteria.delete_all_blocking_criteria(task_id).await.unwrap());

    let loaded = criteria.load_blocking_criteria(task_id).await.unwrap();
    assert!(loaded.group.is_none());
    assert!(loaded.criteria.is_empty());
    assert!(engine.marks().get_marks(work.id).await.unwrap().marks.is_empty());

    // 删除后可以重新创建阻断分组
    engine.blocking_criterion(task_id, "Plagiarism", 0.5).await;
    assert!(
        criteria
            .load_blocking_criteria(task_id)
            .await
            .unwrap()
            .group
            .is_some()
    );
}
