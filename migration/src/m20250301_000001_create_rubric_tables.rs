use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 任务表（由作业管理模块维护，此处只读）
        manager
            .create_table(
                Table::create()
                    .table(Tasks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tasks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tasks::DisciplineId).big_integer().not_null())
                    .col(ColumnDef::new(Tasks::GroupId).big_integer().not_null())
                    .col(ColumnDef::new(Tasks::Name).string().not_null())
                    .col(ColumnDef::new(Tasks::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 学习小组与负责的研讨课教师
        manager
            .create_table(
                Table::create()
                    .table(GroupSeminarists::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GroupSeminarists::GroupId)
                            .big_integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(GroupSeminarists::SeminaristId)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 评分标准分组表
        manager
            .create_table(
                Table::create()
                    .table(CriteriaGroups::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CriteriaGroups::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CriteriaGroups::TaskId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CriteriaGroups::Name).string().not_null())
                    .col(
                        ColumnDef::new(CriteriaGroups::IsBlocking)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    // 仅阻断分组填写，唯一索引保证每个任务至多一个阻断分组
                    .col(
                        ColumnDef::new(CriteriaGroups::BlockingTaskId)
                            .big_integer()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(CriteriaGroups::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CriteriaGroups::Table, CriteriaGroups::TaskId)
                            .to(Tasks::Table, Tasks::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 评分标准表
        manager
            .create_table(
                Table::create()
                    .table(Criteria::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Criteria::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Criteria::GroupId).big_integer().not_null())
                    .col(ColumnDef::new(Criteria::Name).string().not_null())
                    .col(ColumnDef::new(Criteria::Description).text().null())
                    .col(ColumnDef::new(Criteria::Comment).text().null())
                    .col(ColumnDef::new(Criteria::FinalMark).double().null())
                    .col(
                        ColumnDef::new(Criteria::Weight)
                            .integer()
                            .not_null()
                            .default(1),
                    )
                    .col(ColumnDef::new(Criteria::CommentScore000).text().null())
                    .col(ColumnDef::new(Criteria::CommentScore025).text().null())
                    .col(ColumnDef::new(Criteria::CommentScore050).text().null())
                    .col(ColumnDef::new(Criteria::CommentScore075).text().null())
                    .col(ColumnDef::new(Criteria::CommentScore100).text().null())
                    .col(ColumnDef::new(Criteria::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Criteria::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Criteria::Table, Criteria::GroupId)
                            .to(CriteriaGroups::Table, CriteriaGroups::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 学生提交表
        manager
            .create_table(
                Table::create()
                    .table(Works::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Works::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Works::StudentId).big_integer().not_null())
                    .col(ColumnDef::new(Works::TaskId).big_integer().not_null())
                    .col(ColumnDef::new(Works::Status).string().not_null())
                    .col(ColumnDef::new(Works::ContentRef).text().null())
                    .col(ColumnDef::new(Works::SeminaristId).big_integer().not_null())
                    .col(ColumnDef::new(Works::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Works::UpdatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Works::Table, Works::TaskId)
                            .to(Tasks::Table, Tasks::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 评分记录表
        manager
            .create_table(
                Table::create()
                    .table(CriterionMarks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CriterionMarks::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(CriterionMarks::WorkId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CriterionMarks::CriterionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(CriterionMarks::Mark).double().not_null())
                    .col(ColumnDef::new(CriterionMarks::Comment).text().null())
                    .col(
                        ColumnDef::new(CriterionMarks::UpdatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CriterionMarks::Table, CriterionMarks::WorkId)
                            .to(Works::Table, Works::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CriterionMarks::Table, CriterionMarks::CriterionId)
                            .to(Criteria::Table, Criteria::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 唯一约束
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_criteria_groups_blocking_task_id")
                    .table(CriteriaGroups::Table)
                    .col(CriteriaGroups::BlockingTaskId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_works_student_task")
                    .table(Works::Table)
                    .col(Works::StudentId)
                    .col(Works::TaskId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("uq_criterion_marks_work_criterion")
                    .table(CriterionMarks::Table)
                    .col(CriterionMarks::WorkId)
                    .col(CriterionMarks::CriterionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // 查询索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_criteria_groups_task_id")
                    .table(CriteriaGroups::Table)
                    .col(CriteriaGroups::TaskId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_criteria_group_id")
                    .table(Criteria::Table)
                    .col(Criteria::GroupId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_criterion_marks_criterion_id")
                    .table(CriterionMarks::Table)
                    .col(CriterionMarks::CriterionId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_tasks_discipline_id")
                    .table(Tasks::Table)
                    .col(Tasks::DisciplineId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(CriterionMarks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Works::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Criteria::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CriteriaGroups::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(GroupSeminarists::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Tasks::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Tasks {
    #[sea_orm(iden = "tasks")]
    Table,
    Id,
    DisciplineId,
    GroupId,
    Name,
    CreatedAt,
}

#[derive(DeriveIden)]
enum GroupSeminarists {
    #[sea_orm(iden = "group_seminarists")]
    Table,
    GroupId,
    SeminaristId,
}

#[derive(DeriveIden)]
enum CriteriaGroups {
    #[sea_orm(iden = "criteria_groups")]
    Table,
    Id,
    TaskId,
    Name,
    IsBlocking,
    BlockingTaskId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Criteria {
    #[sea_orm(iden = "criteria")]
    Table,
    Id,
    GroupId,
    Name,
    Description,
    Comment,
    FinalMark,
    Weight,
    #[sea_orm(iden = "comment_score_000")]
    CommentScore000,
    #[sea_orm(iden = "comment_score_025")]
    CommentScore025,
    #[sea_orm(iden = "comment_score_050")]
    CommentScore050,
    #[sea_orm(iden = "comment_score_075")]
    CommentScore075,
    #[sea_orm(iden = "comment_score_100")]
    CommentScore100,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Works {
    #[sea_orm(iden = "works")]
    Table,
    Id,
    StudentId,
    TaskId,
    Status,
    ContentRef,
    SeminaristId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CriterionMarks {
    #[sea_orm(iden = "criterion_marks")]
    Table,
    Id,
    WorkId,
    CriterionId,
    Mark,
    Comment,
    UpdatedAt,
}
