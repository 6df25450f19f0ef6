// ==========================================
// 班级学生管理系统 - SQLite 连接初始化
// ==========================================
// 目标:
// - 统一所有 Connection::open 的 PRAGMA 行为，避免部分模块外键开启/部分不开启
// - 统一 busy_timeout，减少并发写入时的偶发 busy 错误
// - 集中建表语句，保证测试库与生产库结构一致
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// 默认 busy_timeout（毫秒）
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// 配置 SQLite 连接的统一 PRAGMA
///
/// 说明：
/// - foreign_keys 需要每个连接单独开启
/// - busy_timeout 需要每个连接单独配置
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// 打开 SQLite 连接并应用统一配置
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// 初始化名册库表结构
///
/// # 表
/// - class: 班级
/// - student: 学生（UNIQUE(class_id, student_id) 作为导入去重的兜底约束）
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS class (
            class_id    TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            description TEXT,
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS student (
            id          TEXT PRIMARY KEY,
            class_id    TEXT NOT NULL REFERENCES class(class_id),
            student_id  TEXT NOT NULL,
            name        TEXT NOT NULL,
            email       TEXT,
            phone       TEXT,
            created_at  TEXT NOT NULL,
            updated_at  TEXT NOT NULL,
            UNIQUE(class_id, student_id)
        );

        CREATE INDEX IF NOT EXISTS idx_student_class ON student(class_id);
        "#,
    )?;
    Ok(())
}

/// 默认数据库路径
///
/// 优先级：
/// 1. 环境变量 CLASS_ROSTER_DB_PATH（便于调试/测试/CI）
/// 2. 用户数据目录下的 class-roster/class_roster.db
/// 3. 当前目录回退值
pub fn get_default_db_path() -> String {
    use std::path::PathBuf;

    if let Ok(path) = std::env::var("CLASS_ROSTER_DB_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    let mut path = PathBuf::from("./class_roster.db");

    if let Some(data_dir) = dirs::data_dir() {
        path = data_dir.join("class-roster");
        let _ = std::fs::create_dir_all(&path);
        path = path.join("class_roster.db");
    }

    path.to_string_lossy().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_schema_idempotent() {
        let conn = Connection::open_in_memory().expect("打开内存库失败");
        configure_sqlite_connection(&conn).expect("PRAGMA 配置失败");
        init_schema(&conn).expect("建表失败");
        // IF NOT EXISTS: 重复执行不报错
        init_schema(&conn).expect("重复建表失败");
    }

    #[test]
    fn test_get_default_db_path() {
        let path = get_default_db_path();
        assert!(!path.is_empty());
        assert!(path.ends_with(".db"));
    }
}
