// ==========================================
// 班级学生管理系统 - 学生领域模型
// ==========================================
// 依据: Roster_Import_Spec_v0.1.md - 数据模型
// ==========================================
// 红线: 导入管道四类对象（RawRow/StudentCandidate/ImportViolation/BatchResult）
//       均为单次导入调用内的临时对象,落库实体只有 Student
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Student - 学生实体
// ==========================================
// 用途: 仓储层写入,对齐 db::init_schema 的 student 表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    // ===== 主键 =====
    pub id: String, // 记录唯一标识（UUID）

    // ===== 关联 =====
    pub class_id: String, // 所属班级（FK）

    // ===== 名册字段 =====
    pub student_id: String,    // 学号（班级内唯一）
    pub name: String,          // 姓名
    pub email: Option<String>, // 邮箱（可选）
    pub phone: Option<String>, // 电话（可选）

    // ===== 审计字段 =====
    pub created_at: DateTime<Utc>, // 记录创建时间
    pub updated_at: DateTime<Utc>, // 记录更新时间
}

// ==========================================
// RawRow - 原始数据行
// ==========================================
// 用途: 行切分器输出,行校验器输入
// 红线: line_number 是原始输入中的物理行号（1 起始）,
//       跳过的空行仍占用行号,后续行不得重新编号
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub line_number: usize, // 物理行号（1 起始）
    pub text: String,       // 该行原始文本
}

// ==========================================
// StudentCandidate - 候选学生记录
// ==========================================
// 用途: 通过行校验、尚未判定是否重复的一行
// 说明: email/phone 空字符串视为缺省,统一归一化为 None
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentCandidate {
    pub student_id: String,    // 学号（非空）
    pub name: String,          // 姓名（非空）
    pub email: Option<String>, // 邮箱（可选,格式须合法）
    pub phone: Option<String>, // 电话（可选,不校验格式）
}

// ==========================================
// ImportViolation - 行级校验违规
// ==========================================
// 用途: 一行可产生多条违规记录,全部保留,不中断批次
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportViolation {
    pub line_number: usize, // 违规行的物理行号
    pub field: String,      // 违规字段
    pub message: String,    // 人类可读的违规说明
}

// ==========================================
// BatchResult - 批量导入报告
// ==========================================
// 不变量:
// - accepted 内 student_id 两两不同,且与目标班级已有学号不相交
// - accepted / 重复计数 / 违规行 恰好划分全部非空行
// - accepted 保持原始行序; duplicate_count 不保留重复行的身份
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchResult {
    pub accepted: Vec<StudentCandidate>,   // 接受的候选记录（保序）
    pub violations: Vec<ImportViolation>,  // 行级违规明细（保序）
    pub duplicate_count: usize,            // 重复行计数（批内 + 库内）
}

impl StudentCandidate {
    /// 转换为落库实体（生成 UUID 主键与审计时间）
    pub fn into_student(self, class_id: &str) -> Student {
        let now = Utc::now();
        Student {
            id: uuid::Uuid::new_v4().to_string(),
            class_id: class_id.to_string(),
            student_id: self.student_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            created_at: now,
            updated_at: now,
        }
    }
}
