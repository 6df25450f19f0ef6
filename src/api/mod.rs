// ==========================================
// 班级学生管理系统 - API 层
// ==========================================
// 职责: 封装导入业务接口,供传输层(HTTP/CLI)调用
// 红线: API 层不含管道算法,只做编排与错误转换
// ==========================================

pub mod error;
pub mod import_api;

// 重导出核心类型
pub use error::ApiError;
pub use import_api::{BatchImportResponse, ImportApi, RowError};
