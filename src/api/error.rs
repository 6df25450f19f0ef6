// ==========================================
// 班级学生管理系统 - API 层错误类型
// ==========================================
// 职责: 定义 API 层错误类型,转换底层错误为用户友好的错误消息
// 说明: 带行级违规的成功导入不是错误;只有结构性失败走这里
// ==========================================

use crate::importer::error::ImportError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API 层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== 业务规则错误 =====
    #[error("班级不存在: class_id={0}")]
    ClassNotFound(String),

    #[error("导入内容为空: 没有可解析的数据行")]
    EmptyBatch,

    #[error("无效输入: {0}")]
    InvalidInput(String),

    // ===== 数据访问错误 =====
    #[error("批量添加学生失败: {0}")]
    ImportFailed(String),

    #[error("数据库错误: {0}")]
    DatabaseError(String),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),
}

// 仓储层错误 → API 错误
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            // 并发导入竞态触发兜底约束: 作为导入失败上报,事务已整体回滚
            RepositoryError::UniqueConstraintViolation(msg) => {
                ApiError::ImportFailed(format!("学号唯一约束违反: {}", msg))
            }
            RepositoryError::NotFound { entity, id } => {
                ApiError::InvalidInput(format!("记录未找到: {} id={}", entity, id))
            }
            other => ApiError::DatabaseError(other.to_string()),
        }
    }
}

// 导入层错误 → API 错误
impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::EmptyBatch => ApiError::EmptyBatch,
            ImportError::Repository(repo_err) => repo_err.into(),
            other => ApiError::InternalError(other.to_string()),
        }
    }
}
