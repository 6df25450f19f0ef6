// ==========================================
// 班级学生管理系统 - 领域模型层
// ==========================================
// 依据: Roster_Import_Spec_v0.1.md - 数据模型
// ==========================================
// 职责: 定义领域实体与导入管道数据模型
// 红线: 不含数据访问逻辑,不含校验规则实现
// ==========================================

pub mod class;
pub mod student;

// 重导出核心类型
pub use class::Class;
pub use student::{BatchResult, ImportViolation, RawRow, Student, StudentCandidate};
