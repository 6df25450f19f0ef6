// ==========================================
// 班级学生管理系统 - 导入层
// ==========================================
// 依据: Roster_Import_Spec_v0.1.md - 批量导入管道
// ==========================================
// 职责: 原始文本 → 数据行 → 候选记录/违规明细 → 接受/重复 → 报告
// 红线: 单行问题永不中断批次;诊断信息永不丢弃;管道内不做任何 I/O
// ==========================================

// 模块声明
pub mod batch_importer;
pub mod duplicate_resolver;
pub mod error;
pub mod line_tokenizer;
pub mod row_validator;

// 重导出核心类型
pub use batch_importer::BatchImporter;
pub use duplicate_resolver::resolve;
pub use error::{ImportError, ImportResult};
pub use line_tokenizer::tokenize;
pub use row_validator::RowValidator;
