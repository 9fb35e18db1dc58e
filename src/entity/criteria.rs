//! 评分标准实体
//!
//! 阻断与主要评分标准共用一张表，类型由所属分组的 `is_blocking` 决定。

use sea_orm::entity::prelude::*;

use crate::models::criteria::entities::{
    BlockingCriterion, Criterion, MainCriterion, Score, ScoreComments,
};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "criteria")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub group_id: i64,
    pub name: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
    pub final_mark: Option<f64>,
    pub weight: i32,
    #[sea_orm(column_name = "comment_score_000", column_type = "Text", nullable)]
    pub comment_score_000: Option<String>,
    #[sea_orm(column_name = "comment_score_025", column_type = "Text", nullable)]
    pub comment_score_025: Option<String>,
    #[sea_orm(column_name = "comment_score_050", column_type = "Text", nullable)]
    pub comment_score_050: Option<String>,
    #[sea_orm(column_name = "comment_score_075", column_type = "Text", nullable)]
    pub comment_score_075: Option<String>,
    #[sea_orm(column_name = "comment_score_100", column_type = "Text", nullable)]
    pub comment_score_100: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::criteria_groups::Entity",
        from = "Column::GroupId",
        to = "super::criteria_groups::Column::Id"
    )]
    Group,
    #[sea_orm(has_many = "super::criterion_marks::Entity")]
    Marks,
}

impl Related<super::criteria_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl Related<super::criterion_marks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Marks.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// 档位对应的评语列
pub fn score_comment_column(score: Score) -> Column {
    match score {
        Score::Zero => Column::CommentScore000,
        Score::Quarter => Column::CommentScore025,
        Score::Half => Column::CommentScore050,
        Score::ThreeQuarters => Column::CommentScore075,
        Score::Full => Column::CommentScore100,
    }
}

impl Model {
    pub fn into_blocking(self) -> BlockingCriterion {
        BlockingCriterion {
            id: self.id,
            group_id: self.group_id,
            name: self.name,
            description: self.description,
            comment: self.comment,
            final_mark: self.final_mark.unwrap_or_default(),
        }
    }

    pub fn into_main(self) -> MainCriterion {
        MainCriterion {
            id: self.id,
            group_id: self.group_id,
            name: self.name,
            weight: self.weight,
            score_comments: ScoreComments {
                zero: self.comment_score_000,
                quarter: self.comment_score_025,
                half: self.comment_score_050,
                three_quarters: self.comment_score_075,
                full: self.comment_score_100,
            },
        }
    }

    /// 根据所属分组类型转换为业务模型
    pub fn into_criterion(self, is_blocking: bool) -> Criterion {
        if is_blocking {
            Criterion::Blocking(self.into_blocking())
        } else {
            Criterion::Main(self.into_main())
        }
    }
}
