// ==========================================
// 班级学生管理系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 说明: 此处只定义"结构性失败"——整个批次无法产出报告的情况;
//       行级校验违规走 ImportViolation 明细,不在错误类型之列
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 批次级结构性失败 =====
    #[error("导入内容为空: 没有可解析的数据行")]
    EmptyBatch,

    // ===== 存储层失败（原样向上传递,不重试、不部分提交）=====
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
