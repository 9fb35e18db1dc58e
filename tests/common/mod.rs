//! Shared fixtures: a SQLite engine seeded with one discipline, one roster
//! group with a seminarist, and one task.

#![allow(dead_code)]

use std::sync::Arc;

use rstest::fixture;
use tempfile::TempDir;
use rust_rubric_engine::config::{DatabaseConfig, GradingConfig};
use rust_rubric_engine::models::criteria::requests::CreateBlockingCriterionRequest;
use rust_rubric_engine::models::tasks::entities::Task;
use rust_rubric_engine::models::works::{entities::Work, requests::SubmitWorkRequest};
use rust_rubric_engine::services::{CriteriaService, GradeService, MarkService, WorkService};
use rust_rubric_engine::storage::{Storage, sea_orm_storage::SeaOrmStorage};

pub const DISCIPLINE: i64 = 1;
pub const ROSTER_GROUP: i64 = 7;
pub const SEMINARIST: i64 = 42;
pub const STUDENT: i64 = 1001;

pub struct Engine {
    pub raw: SeaOrmStorage,
    pub storage: Arc<dyn Storage>,
    pub grading: GradingConfig,
    pub task: Task,
    dir: Option<TempDir>,
}

impl Engine {
    /// Single-connection in-memory database.
    pub async fn connect(grading: GradingConfig) -> Self {
        Self::open("sqlite::memory:".to_string(), 1, grading, None).await
    }

    /// File-backed database with a real connection pool, for tests that need
    /// calls to run in parallel.
    pub async fn connect_file(grading: GradingConfig) -> Self {
        let dir = TempDir::new().expect("temp dir");
        let url = dir.path().join("rubric.db").to_string_lossy().into_owned();
        Self::open(url, 8, grading, Some(dir)).await
    }

    async fn open(url: String, pool_size: u32, grading: GradingConfig, dir: Option<TempDir>) -> Self {
        let raw = SeaOrmStorage::connect(&DatabaseConfig {
            url,
            pool_size,
            timeout: 5,
        })
        .await
        .expect("storage should start");

        raw.assign_group_seminarist(ROSTER_GROUP, SEMINARIST)
            .await
            .expect("seed seminarist");
        let task = raw
            .insert_task(DISCIPLINE, ROSTER_GROUP, "Lab 1")
            .await
            .expect("seed task");

        Self {
            storage: Arc::new(raw.clone()),
            raw,
            grading,
            task,
            dir,
        }
    }

    pub fn criteria(&self) -> CriteriaService {
        CriteriaService::new(self.storage.clone())
    }

    pub fn marks(&self) -> MarkService {
        MarkService::new(self.storage.clone(), self.grading)
    }

    pub fn works(&self) -> WorkService {
        WorkService::new(self.storage.clone(), self.grading)
    }

    pub fn grades(&self) -> GradeService {
        GradeService::new(self.storage.clone(), self.grading)
    }

    pub async fn add_task(&self, name: &str) -> Task {
        self.raw
            .insert_task(DISCIPLINE, ROSTER_GROUP, name)
            .await
            .expect("seed task")
    }

    pub async fn submit(&self, student_id: i64, task_id: i64, content_ref: &str) -> Work {
        self.works()
            .submit(SubmitWorkRequest {
                student_id,
                task_id,
                content_ref: Some(content_ref.to_string()),
            })
            .await
            .expect("submission should succeed")
    }

    pub async fn blocking_criterion(&self, task_id: i64, name: &str, final_mark: f64) -> i64 {
        self.criteria()
            .create_blocking_criterion(
                task_id,
                CreateBlockingCriterionRequest {
                    name: name.to_string(),
                    description: None,
                    comment: Some(format!("{name} detected")),
                    final_mark,
                },
            )
            .await
            .expect("blocking criterion should be created")
            .criterion
            .id
    }

    /// Creates a main group with one criterion per weight and returns the criterion ids.
    pub async fn main_criteria(&self, task_id: i64, weights: &[i64]) -> Vec<i64> {
        let criteria = self.criteria();
        let group = criteria
            .create_main_group(task_id, "Quality")
            .await
            .expect("main group should be created");

        let mut ids = Vec::with_capacity(weights.len());
        for (i, &weight) in weights.iter().enumerate() {
            let criterion = criteria
                .create_main_criterion(group.id, &format!("criterion {i}"))
                .await
                .expect("main criterion should be created");
            criteria
                .set_criterion_weight(criterion.id, weight)
                .await
                .expect("weight should be set");
            ids.push(criterion.id);
        }
        ids
    }
}

#[fixture]
pub async fn engine() -> Engine {
    Engine::connect(GradingConfig::default()).await
}

#[fixture]
pub async fn compat_engine() -> Engine {
    Engine::connect(GradingConfig::compatibility()).await
}
