use serde::Deserialize;
use ts_rs::TS;

// 创建阻断评分标准请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "criteria.ts")]
pub struct CreateBlockingCriterionRequest {
    pub name: String,
    pub description: Option<String>,
    pub comment: Option<String>,
    pub final_mark: f64,
}

// 创建主要评分标准分组请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "criteria.ts")]
pub struct CreateMainGroupRequest {
    pub name: String,
}

// 创建主要评分标准请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "criteria.ts")]
pub struct CreateMainCriterionRequest {
    pub name: String,
}

// 重命名分组请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "criteria.ts")]
pub struct RenameGroupRequest {
    pub name: String,
}

/// 更新评分标准请求
///
/// 主要评分标准只接受 `name`，其余字段仅适用于阻断评分标准。
/// `description` 与 `comment` 省略时保持不变，显式传 `null` 时清空。
#[derive(Debug, Clone, Default, Deserialize, TS)]
#[ts(export, export_to = "criteria.ts")]
pub struct UpdateCriterionRequest {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub comment: Option<Option<String>>,
    pub final_mark: Option<f64>,
}

// 字段出现即为 Some，值为 null 时得到 Some(None)
fn deserialize_nullable<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl UpdateCriterionRequest {
    pub fn has_blocking_fields(&self) -> bool {
        self.description.is_some() || self.comment.is_some() || self.final_mark.is_some()
    }
}

// 设置权重请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "criteria.ts")]
pub struct SetWeightRequest {
    pub weight: i64,
}

// 设置档位评语请求
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "criteria.ts")]
pub struct SetScoreCommentRequest {
    pub score: f64,
    pub comment: Option<String>,
}
