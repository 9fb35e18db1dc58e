//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod criteria;
mod directory;
mod marks;
mod works;

use crate::config::DatabaseConfig;
use crate::errors::{Result, RubricError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例并运行迁移
    pub async fn connect(database: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite:") {
            Self::connect_sqlite(&db_url, database).await?
        } else {
            Self::connect_generic(&db_url, database).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| RubricError::storage("数据库迁移失败", e))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, database: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let in_memory = Self::is_in_memory(url);

        let mut opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| RubricError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .foreign_keys(true)
            .busy_timeout(Duration::from_secs(5))
            .pragma("temp_store", "memory");

        if !in_memory {
            opt = opt
                .journal_mode(SqliteJournalMode::Wal)
                .synchronous(SqliteSynchronous::Normal)
                .pragma("cache_size", "-64000")
                .pragma("wal_autocheckpoint", "1000");
        }

        // 内存数据库只能有一个连接，否则各连接看到的是不同的库
        let (max_connections, idle_timeout) = if in_memory {
            (1, None)
        } else {
            (database.pool_size.max(1), Some(Duration::from_secs(300)))
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(database.timeout))
            .idle_timeout(idle_timeout)
            .max_lifetime(None)
            .connect_with(opt)
            .await
            .map_err(|e| RubricError::unavailable(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, database: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(database.timeout))
            .acquire_timeout(Duration::from_secs(database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| RubricError::unavailable(format!("无法连接到数据库: {e}")))
    }

    fn is_in_memory(url: &str) -> bool {
        url.contains(":memory:") || url.contains("mode=memory")
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite:") {
            Ok(url.to_string())
        } else if url == ":memory:" {
            Ok("sqlite::memory:".to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(RubricError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }

    pub(crate) fn now() -> i64 {
        chrono::Utc::now().timestamp()
    }
}

// Storage trait 实现
use crate::models::{
    criteria::{
        entities::{
            BlockingCriteria, BlockingCriterion, CriteriaGroup, Criterion, MainCriteriaGroup,
            MainCriterion, Score,
        },
        requests::{CreateBlockingCriterionRequest, UpdateCriterionRequest},
    },
    marks::entities::CriterionMark,
    tasks::entities::Task,
    works::entities::{Work, WorkStatus},
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 任务目录
    async fn get_task(&self, task_id: i64) -> Result<Option<Task>> {
        self.get_task_impl(task_id).await
    }

    async fn get_group_seminarist(&self, group_id: i64) -> Result<Option<i64>> {
        self.get_group_seminarist_impl(group_id).await
    }

    // 评分标准模块
    async fn get_group(&self, group_id: i64) -> Result<Option<CriteriaGroup>> {
        self.get_group_impl(group_id).await
    }

    async fn create_blocking_criterion(
        &self,
        task_id: i64,
        req: CreateBlockingCriterionRequest,
    ) -> Result<(CriteriaGroup, BlockingCriterion)> {
        self.create_blocking_criterion_impl(task_id, req).await
    }

    async fn create_main_group(&self, task_id: i64, name: &str) -> Result<CriteriaGroup> {
        self.create_main_group_impl(task_id, name).await
    }

    async fn create_main_criterion(&self, group_id: i64, name: &str) -> Result<MainCriterion> {
        self.create_main_criterion_impl(group_id, name).await
    }

    async fn rename_group(&self, group_id: i64, name: &str) -> Result<Option<CriteriaGroup>> {
        self.rename_group_impl(group_id, name).await
    }

    async fn get_criterion(&self, criterion_id: i64) -> Result<Option<Criterion>> {
        self.get_criterion_impl(criterion_id).await
    }

    async fn update_blocking_criterion(
        &self,
        criterion_id: i64,
        update: UpdateCriterionRequest,
    ) -> Result<Option<BlockingCriterion>> {
        self.update_blocking_criterion_impl(criterion_id, update)
            .await
    }

    async fn rename_main_criterion(
        &self,
        criterion_id: i64,
        name: &str,
    ) -> Result<Option<MainCriterion>> {
        self.rename_main_criterion_impl(criterion_id, name).await
    }

    async fn set_criterion_weight(&self, criterion_id: i64, weight: i32) -> Result<bool> {
        self.set_criterion_weight_impl(criterion_id, weight).await
    }

    async fn set_criterion_score_comment(
        &self,
        criterion_id: i64,
        score: Score,
        comment: Option<String>,
    ) -> Result<bool> {
        self.set_criterion_score_comment_impl(criterion_id, score, comment)
            .await
    }

    async fn delete_criterion(&self, criterion_id: i64) -> Result<bool> {
        self.delete_criterion_impl(criterion_id).await
    }

    async fn delete_group(&self, group_id: i64) -> Result<bool> {
        self.delete_group_impl(group_id).await
    }

    async fn delete_all_blocking_criteria(&self, task_id: i64) -> Result<bool> {
        self.delete_all_blocking_criteria_impl(task_id).await
    }

    async fn load_blocking_criteria(&self, task_id: i64) -> Result<BlockingCriteria> {
        self.load_blocking_criteria_impl(task_id).await
    }

    async fn load_main_criteria(&self, task_id: i64) -> Result<Vec<MainCriteriaGroup>> {
        self.load_main_criteria_impl(task_id).await
    }

    // 评分记录模块
    async fn upsert_mark(
        &self,
        work_id: i64,
        criterion_id: i64,
        mark: f64,
        comment: Option<String>,
    ) -> Result<CriterionMark> {
        self.upsert_mark_impl(work_id, criterion_id, mark, comment)
            .await
    }

    async fn list_marks(&self, work_id: i64) -> Result<Vec<CriterionMark>> {
        self.list_marks_impl(work_id).await
    }

    // 提交模块
    async fn get_work(&self, work_id: i64) -> Result<Option<Work>> {
        self.get_work_impl(work_id).await
    }

    async fn find_work(&self, student_id: i64, task_id: i64) -> Result<Option<Work>> {
        self.find_work_impl(student_id, task_id).await
    }

    async fn upsert_submission(
        &self,
        student_id: i64,
        task_id: i64,
        content_ref: Option<String>,
        seminarist_id: i64,
    ) -> Result<Work> {
        self.upsert_submission_impl(student_id, task_id, content_ref, seminarist_id)
            .await
    }

    async fn transition_work_status(
        &self,
        work_id: i64,
        expected: Option<WorkStatus>,
        next: WorkStatus,
    ) -> Result<bool> {
        self.transition_work_status_impl(work_id, expected, next)
            .await
    }

    async fn list_student_works_in_discipline(
        &self,
        student_id: i64,
        discipline_id: i64,
    ) -> Result<Vec<Work>> {
        self.list_student_works_in_discipline_impl(student_id, discipline_id)
            .await
    }
}
