// ==========================================
// 班级学生管理系统 - 名册 Repository 实现
// ==========================================
// 技术: rusqlite + Arc<Mutex<Connection>>
// 红线: 批量写入必须事务化,唯一约束违反时整体回滚
// ==========================================

use crate::db::{init_schema, open_sqlite_connection};
use crate::domain::{Class, Student, StudentCandidate};
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::roster_repo::RosterRepository;
use async_trait::async_trait;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

// ==========================================
// RosterRepositoryImpl
// ==========================================
pub struct RosterRepositoryImpl {
    conn: Arc<Mutex<Connection>>,
}

impl RosterRepositoryImpl {
    /// 创建新的 Repository 实例(自动建表)
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        init_schema(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock_conn(&self) -> RepositoryResult<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    fn row_to_student(row: &rusqlite::Row<'_>) -> rusqlite::Result<Student> {
        Ok(Student {
            id: row.get(0)?,
            class_id: row.get(1)?,
            student_id: row.get(2)?,
            name: row.get(3)?,
            email: row.get(4)?,
            phone: row.get(5)?,
            created_at: row.get(6)?,
            updated_at: row.get(7)?,
        })
    }
}

#[async_trait]
impl RosterRepository for RosterRepositoryImpl {
    async fn insert_class(&self, class: Class) -> RepositoryResult<()> {
        let conn = self.lock_conn()?;
        conn.execute(
            r#"
            INSERT INTO class (class_id, name, description, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                class.class_id,
                class.name,
                class.description,
                class.created_at,
                class.updated_at,
            ],
        )?;
        Ok(())
    }

    async fn class_exists(&self, class_id: &str) -> RepositoryResult<bool> {
        let conn = self.lock_conn()?;
        let found: Option<i64> = conn
            .query_row(
                "SELECT 1 FROM class WHERE class_id = ?1 LIMIT 1",
                params![class_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(found.is_some())
    }

    async fn list_known_identifiers(
        &self,
        class_id: &str,
    ) -> RepositoryResult<HashSet<String>> {
        let conn = self.lock_conn()?;
        let mut stmt =
            conn.prepare("SELECT student_id FROM student WHERE class_id = ?1")?;
        let ids = stmt
            .query_map(params![class_id], |row| row.get::<_, String>(0))?
            .collect::<Result<HashSet<String>, _>>()?;
        Ok(ids)
    }

    async fn bulk_insert_students(
        &self,
        class_id: &str,
        candidates: &[StudentCandidate],
    ) -> RepositoryResult<usize> {
        let mut conn = self.lock_conn()?;
        let tx = conn
            .transaction()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;

        let mut count = 0;
        {
            let mut stmt = tx.prepare(
                r#"
                INSERT INTO student (
                    id, class_id, student_id, name, email, phone,
                    created_at, updated_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                "#,
            )?;

            for candidate in candidates {
                let student = candidate.clone().into_student(class_id);
                stmt.execute(params![
                    student.id,
                    student.class_id,
                    student.student_id,
                    student.name,
                    student.email,
                    student.phone,
                    student.created_at,
                    student.updated_at,
                ])?;
                count += 1;
            }
        }

        tx.commit()
            .map_err(|e| RepositoryError::DatabaseTransactionError(e.to_string()))?;
        Ok(count)
    }

    async fn list_students(&self, class_id: &str) -> RepositoryResult<Vec<Student>> {
        let conn = self.lock_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, class_id, student_id, name, email, phone,
                   created_at, updated_at
            FROM student
            WHERE class_id = ?1
            ORDER BY student_id
            "#,
        )?;
        let students = stmt
            .query_map(params![class_id], Self::row_to_student)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(students)
    }

    async fn count_students(&self, class_id: &str) -> RepositoryResult<usize> {
        let conn = self.lock_conn()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM student WHERE class_id = ?1",
            params![class_id],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }
}
