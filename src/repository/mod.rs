// ==========================================
// 班级学生管理系统 - 数据仓储层
// ==========================================
// 职责: 名册数据访问(班级/学生)
// 红线: Repository 不含业务规则,只做数据 CRUD
// ==========================================

pub mod error;
pub mod roster_repo;
pub mod roster_repo_impl;

// 重导出核心类型
pub use error::{RepositoryError, RepositoryResult};
pub use roster_repo::RosterRepository;
pub use roster_repo_impl::RosterRepositoryImpl;
