// ==========================================
// 班级学生管理系统 - 名册 Repository Trait
// ==========================================
// 职责: 定义导入边界所需的数据访问接口(不包含业务逻辑)
// 红线: Repository 不含业务规则,只做数据 CRUD;
//       名册的完整 CRUD 面在别处,这里只保留导入协作面
// ==========================================

use crate::domain::{Class, Student, StudentCandidate};
use crate::repository::error::RepositoryResult;
use async_trait::async_trait;
use std::collections::HashSet;

// ==========================================
// RosterRepository Trait
// ==========================================
// 用途: 批量导入的存储协作方
// 实现者: RosterRepositoryImpl(使用 rusqlite)
#[async_trait]
pub trait RosterRepository: Send + Sync {
    // ===== 班级 =====

    /// 插入班级
    async fn insert_class(&self, class: Class) -> RepositoryResult<()>;

    /// 班级是否存在
    async fn class_exists(&self, class_id: &str) -> RepositoryResult<bool>;

    // ===== 导入协作面 =====

    /// 查询班级已持久化的全部学号(每次导入只查一次)
    async fn list_known_identifiers(
        &self,
        class_id: &str,
    ) -> RepositoryResult<HashSet<String>>;

    /// 批量插入学生(事务化)
    ///
    /// # 返回
    /// - Ok(usize): 成功插入的记录数
    /// - Err: 数据库错误(整个事务回滚);唯一约束违反时不部分提交,
    ///   作为并发导入竞态的兜底防线
    async fn bulk_insert_students(
        &self,
        class_id: &str,
        candidates: &[StudentCandidate],
    ) -> RepositoryResult<usize>;

    // ===== 查询与校验 =====

    /// 查询班级全部学生(按学号排序)
    async fn list_students(&self, class_id: &str) -> RepositoryResult<Vec<Student>>;

    /// 统计班级学生数
    async fn count_students(&self, class_id: &str) -> RepositoryResult<usize>;
}
