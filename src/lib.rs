// ==========================================
// 班级学生管理系统 - 核心库
// ==========================================
// 依据: Roster_Import_Spec_v0.1.md - 批量导入管道
// 技术栈: Rust + SQLite
// 系统定位: 班级名册批量导入核心（传输层/界面层另行实现）
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 数据仓储层 - 数据访问
pub mod repository;

// 导入层 - 批量导入管道
pub mod importer;

// API 层 - 业务接口
pub mod api;

// 数据库基础设施（连接初始化/PRAGMA 统一）
pub mod db;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{BatchResult, Class, ImportViolation, RawRow, Student, StudentCandidate};

// 导入管道
pub use importer::{BatchImporter, ImportError};

// 仓储
pub use repository::{RosterRepository, RosterRepositoryImpl};

// API
pub use api::ImportApi;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "班级学生管理系统";
