// ==========================================
// 班级学生管理系统 - 班级领域模型
// ==========================================
// 用途: 导入目标班级,导入前必须已存在
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Class - 班级实体
///
/// 对齐: db::init_schema 的 class 表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Class {
    // ===== 主键 =====
    pub class_id: String, // 班级唯一标识

    // ===== 基础信息 =====
    pub name: String,                // 班级名称
    pub description: Option<String>, // 班级描述

    // ===== 审计字段 =====
    pub created_at: DateTime<Utc>, // 记录创建时间
    pub updated_at: DateTime<Utc>, // 记录更新时间
}

impl Class {
    /// 创建新班级（审计字段取当前时间）
    pub fn new(class_id: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            class_id: class_id.into(),
            name: name.into(),
            description: None,
            created_at: now,
            updated_at: now,
        }
    }
}
