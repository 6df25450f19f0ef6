// ==========================================
// 班级学生批量导入 API
// ==========================================
// 职责: 封装批量导入业务流程
//       班级校验 → 已知学号查询 → 管道求值 → 批量落库 → 报告
// 红线: 已知学号查询与落库之间必须串行化(同库并发导入加锁),
//       防止两次导入同时通过重复检查;student 表唯一约束兜底
// ==========================================

use crate::api::error::ApiError;
use crate::domain::{BatchResult, StudentCandidate};
use crate::importer::BatchImporter;
use crate::repository::{RosterRepository, RosterRepositoryImpl};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

/// 行级错误(报告面: 行号 + 消息)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowError {
    /// 原始输入中的物理行号(1 起始)
    pub line: usize,
    /// 人类可读的错误说明
    pub message: String,
}

/// 批量导入响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchImportResponse {
    /// 新添加的学生数量
    pub added: usize,
    /// 重复(批内或库内)被跳过的数量
    pub duplicates: usize,
    /// 行级错误明细(保序)
    pub errors: Vec<RowError>,
    /// 结果说明
    pub message: String,
    /// 导入耗时(毫秒)
    pub elapsed_ms: i64,
}

/// 导入 API
pub struct ImportApi {
    repo: Arc<dyn RosterRepository>,
    importer: BatchImporter,
    // 同库导入串行化锁,覆盖"查已知学号 → 落库"全程
    import_lock: Mutex<()>,
}

impl ImportApi {
    /// 创建新的 ImportApi 实例
    pub fn new(repo: Arc<dyn RosterRepository>) -> Self {
        Self {
            repo,
            importer: BatchImporter::new(),
            import_lock: Mutex::new(()),
        }
    }

    /// 从数据库路径创建(自动建表)
    pub fn open(db_path: &str) -> Result<Self, ApiError> {
        let repo = RosterRepositoryImpl::new(db_path)?;
        Ok(Self::new(Arc::new(repo)))
    }

    /// 文本导入: 粘贴/上传得到的分隔文本 → 导入报告
    ///
    /// # 参数
    /// - class_id: 目标班级
    /// - raw_text: 分隔文本(行格式: 学号,姓名[,邮箱[,电话]])
    ///
    /// # 返回
    /// - Ok(BatchImportResponse): 部分成功也是成功,错误明细随报告返回
    /// - Err(ApiError): 班级不存在/输入为空/存储失败
    pub async fn import_text(
        &self,
        class_id: &str,
        raw_text: &str,
    ) -> Result<BatchImportResponse, ApiError> {
        let start = std::time::Instant::now();

        if !self.repo.class_exists(class_id).await? {
            return Err(ApiError::ClassNotFound(class_id.to_string()));
        }

        let _guard = self.import_lock.lock().await;

        let existing_ids = self.repo.list_known_identifiers(class_id).await?;
        let result = self.importer.evaluate(raw_text, &existing_ids)?;

        self.persist_accepted(class_id, &result).await?;

        let elapsed_ms = start.elapsed().as_millis() as i64;
        tracing::info!(
            class_id = %class_id,
            added = result.accepted.len(),
            duplicates = result.duplicate_count,
            errors = result.violations.len(),
            elapsed_ms,
            "批量导入完成"
        );

        Ok(Self::to_response(result, elapsed_ms))
    }

    /// 结构化导入: 调用方已解析出候选记录(跳过行切分)
    ///
    /// 对应前端先在客户端解析、再以结构化形式提交的路径。
    pub async fn import_candidates(
        &self,
        class_id: &str,
        candidates: Vec<StudentCandidate>,
    ) -> Result<BatchImportResponse, ApiError> {
        let start = std::time::Instant::now();

        if !self.repo.class_exists(class_id).await? {
            return Err(ApiError::ClassNotFound(class_id.to_string()));
        }

        let _guard = self.import_lock.lock().await;

        let existing_ids = self.repo.list_known_identifiers(class_id).await?;
        let result = self.importer.evaluate_candidates(candidates, &existing_ids)?;

        self.persist_accepted(class_id, &result).await?;

        let elapsed_ms = start.elapsed().as_millis() as i64;
        tracing::info!(
            class_id = %class_id,
            added = result.accepted.len(),
            duplicates = result.duplicate_count,
            elapsed_ms,
            "结构化批量导入完成"
        );

        Ok(Self::to_response(result, elapsed_ms))
    }

    /// 落库接受的候选记录(报告先算后存,存储失败则整体失败)
    async fn persist_accepted(
        &self,
        class_id: &str,
        result: &BatchResult,
    ) -> Result<(), ApiError> {
        if result.accepted.is_empty() {
            return Ok(());
        }
        self.repo
            .bulk_insert_students(class_id, &result.accepted)
            .await?;
        Ok(())
    }

    fn to_response(result: BatchResult, elapsed_ms: i64) -> BatchImportResponse {
        let added = result.accepted.len();
        let duplicates = result.duplicate_count;

        let message = if added == 0 && duplicates > 0 && result.violations.is_empty() {
            "所有学生已存在于班级中".to_string()
        } else {
            let mut message = format!("成功添加 {} 名学生", added);
            if duplicates > 0 {
                message.push_str(&format!("，{} 名学生已存在", duplicates));
            }
            if !result.violations.is_empty() {
                message.push_str(&format!("，{} 行存在错误", result.violations.len()));
            }
            message
        };

        BatchImportResponse {
            added,
            duplicates,
            errors: result
                .violations
                .into_iter()
                .map(|v| RowError {
                    line: v.line_number,
                    message: v.message,
                })
                .collect(),
            message,
            elapsed_ms,
        }
    }
}
