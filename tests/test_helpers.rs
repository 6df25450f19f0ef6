// ==========================================
// 班级学生管理系统 - 测试辅助
// ==========================================
// 用途: 集成测试共用的临时数据库与班级初始化
// ==========================================

use class_roster::domain::Class;
use class_roster::repository::{RosterRepository, RosterRepositoryImpl};
use std::sync::Arc;
use tempfile::NamedTempFile;

/// 创建临时数据库文件(表结构由 Repository 构造时初始化)
pub fn create_test_db() -> (NamedTempFile, String) {
    let temp_file = NamedTempFile::new().expect("创建临时文件失败");
    let db_path = temp_file.path().to_string_lossy().to_string();
    (temp_file, db_path)
}

/// 创建测试 Repository
pub fn create_test_repo() -> (NamedTempFile, Arc<RosterRepositoryImpl>) {
    let (temp_file, db_path) = create_test_db();
    let repo = RosterRepositoryImpl::new(&db_path).expect("创建 Repository 失败");
    (temp_file, Arc::new(repo))
}

/// 插入测试班级
pub async fn setup_class(repo: &RosterRepositoryImpl, class_id: &str) {
    repo.insert_class(Class::new(class_id, "测试班级"))
        .await
        .expect("创建班级失败");
}
