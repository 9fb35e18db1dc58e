use crate::errors::{Result, RubricError};
use crate::models::criteria::entities::Score;
use crate::models::grades::entities::GRADE_SCALE;

/// 名称校验：去除首尾空白后不能为空
pub fn validate_name(field: &str, name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(RubricError::invalid_argument(format!("{field}不能为空")));
    }
    Ok(trimmed.to_string())
}

/// 阻断评分标准的最终分：有限值且在 [0, 10] 内
pub fn validate_final_mark(final_mark: f64) -> Result<()> {
    if !final_mark.is_finite() || !(0.0..=GRADE_SCALE).contains(&final_mark) {
        return Err(RubricError::invalid_argument(format!(
            "最终分必须在 0 到 {GRADE_SCALE} 之间，当前值: {final_mark}"
        )));
    }
    Ok(())
}

/// 权重校验：非负且不超过 i32 范围
pub fn validate_weight(weight: i64) -> Result<i32> {
    if weight < 0 {
        return Err(RubricError::invalid_argument(format!(
            "权重不能为负数，当前值: {weight}"
        )));
    }
    i32::try_from(weight)
        .map_err(|_| RubricError::invalid_argument(format!("权重超出范围: {weight}")))
}

/// 档位校验：必须是 0.00/0.25/0.50/0.75/1.00 之一
pub fn validate_score(score: f64) -> Result<Score> {
    Score::from_value(score).ok_or_else(|| {
        RubricError::invalid_argument(format!(
            "分值必须为 0.00/0.25/0.50/0.75/1.00 之一，当前值: {score}"
        ))
    })
}

/// 得分校验
///
/// 非有限值始终拒绝；`strict` 时主要评分标准限定 [0, 1]，阻断评分标准限定 [0, 10]。
pub fn validate_mark(mark: f64, is_blocking: bool, strict: bool) -> Result<()> {
    if !mark.is_finite() {
        return Err(RubricError::invalid_argument(format!(
            "得分必须是有限数值，当前值: {mark}"
        )));
    }
    if !strict {
        return Ok(());
    }

    let upper = if is_blocking { GRADE_SCALE } else { 1.0 };
    if !(0.0..=upper).contains(&mark) {
        return Err(RubricError::invalid_argument(format!(
            "得分必须在 0 到 {upper} 之间，当前值: {mark}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_trims() {
        assert_eq!(validate_name("名称", "  Style  ").unwrap(), "Style");
        assert_eq!(validate_name("名称", "   ").unwrap_err().code(), "E002");
        assert!(validate_name("名称", "").is_err());
    }

    #[test]
    fn test_validate_final_mark() {
        assert!(validate_final_mark(0.0).is_ok());
        assert!(validate_final_mark(2.5).is_ok());
        assert!(validate_final_mark(10.0).is_ok());
        assert!(validate_final_mark(-0.5).is_err());
        assert!(validate_final_mark(10.5).is_err());
        assert!(validate_final_mark(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_weight() {
        assert_eq!(validate_weight(0).unwrap(), 0);
        assert_eq!(validate_weight(3).unwrap(), 3);
        assert!(validate_weight(-1).is_err());
        assert!(validate_weight(i64::MAX).is_err());
    }

    #[test]
    fn test_validate_score() {
        assert_eq!(validate_score(0.25).unwrap(), Score::Quarter);
        assert_eq!(validate_score(0.75 + 1e-12).unwrap(), Score::ThreeQuarters);
        let err = validate_score(0.3).unwrap_err();
        assert_eq!(err.code(), "E002");
    }

    #[test]
    fn test_validate_mark_strict() {
        assert!(validate_mark(0.5, false, true).is_ok());
        assert!(validate_mark(1.5, false, true).is_err());
        assert!(validate_mark(7.0, true, true).is_ok());
        assert!(validate_mark(11.0, true, true).is_err());
        assert!(validate_mark(-0.1, true, true).is_err());
    }

    #[test]
    fn test_validate_mark_compat_still_rejects_non_finite() {
        assert!(validate_mark(1.5, false, false).is_ok());
        assert!(validate_mark(f64::INFINITY, false, false).is_err());
        assert!(validate_mark(f64::NAN, true, false).is_err());
    }
}
