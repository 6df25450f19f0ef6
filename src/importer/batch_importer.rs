// ==========================================
// 班级学生管理系统 - 批量导入编排器
// ==========================================
// 依据: Roster_Import_Spec_v0.1.md - 编排流程
// ==========================================
// 职责: 行切分 → 逐行校验 → 重复判定 → 汇总报告
// 红线: 管道内零副作用;要么产出完整报告,要么在产出任何报告前致命失败;
//       落库与已知学号查询由调用方(API 层)负责
// ==========================================

use crate::domain::{BatchResult, StudentCandidate};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::row_validator::RowValidator;
use crate::importer::{duplicate_resolver, line_tokenizer};
use std::collections::HashSet;

/// 批量导入编排器
pub struct BatchImporter {
    validator: RowValidator,
}

impl BatchImporter {
    pub fn new() -> Self {
        Self {
            validator: RowValidator::new(),
        }
    }

    /// 文本入口: 原始文本 + 已知学号 → 批量报告
    ///
    /// # 流程
    /// 1. 行切分;结果为空 → ImportError::EmptyBatch(致命,不产出空报告)
    /// 2. 逐行独立校验,候选与违规各自保序累积
    /// 3. 对校验通过的候选做重复判定
    ///
    /// # 返回
    /// - Ok(BatchResult): 即使违规非空也是成功(部分成功报告)
    pub fn evaluate(
        &self,
        raw_text: &str,
        existing_ids: &HashSet<String>,
    ) -> ImportResult<BatchResult> {
        let rows = line_tokenizer::tokenize(raw_text);
        if rows.is_empty() {
            return Err(ImportError::EmptyBatch);
        }

        let mut candidates = Vec::new();
        let mut violations = Vec::new();
        for row in &rows {
            match self.validator.validate(row) {
                Ok(candidate) => candidates.push(candidate),
                Err(mut row_violations) => violations.append(&mut row_violations),
            }
        }

        let (accepted, duplicate_count) =
            duplicate_resolver::resolve(candidates, existing_ids);

        Ok(BatchResult {
            accepted,
            violations,
            duplicate_count,
        })
    }

    /// 结构化入口: 调用方已解析出候选记录(跳过行切分),只做重复判定
    ///
    /// 对应前端已在客户端切分字段、以结构化形式提交的场景。
    pub fn evaluate_candidates(
        &self,
        candidates: Vec<StudentCandidate>,
        existing_ids: &HashSet<String>,
    ) -> ImportResult<BatchResult> {
        if candidates.is_empty() {
            return Err(ImportError::EmptyBatch);
        }

        let (accepted, duplicate_count) =
            duplicate_resolver::resolve(candidates, existing_ids);

        Ok(BatchResult {
            accepted,
            violations: Vec::new(),
            duplicate_count,
        })
    }
}

impl Default for BatchImporter {
    fn default() -> Self {
        Self::new()
    }
}
