// ==========================================
// 班级学生管理系统 - 行校验器
// ==========================================
// 依据: Roster_Import_Spec_v0.1.md - 行格式与字段规则
// ==========================================
// 职责: RawRow → StudentCandidate 或 一条以上 ImportViolation
// 红线: 规则按固定顺序全部检查(不短路),一行可产出多条违规
// ==========================================

use crate::domain::{ImportViolation, RawRow, StudentCandidate};
use regex::Regex;

/// 行校验器
///
/// # 行格式
/// `学号 <sep> 姓名 [<sep> 邮箱 [<sep> 电话]]`,
/// 其中 `<sep>` 为一个或多个连续的逗号/制表符;第 4 个字段之后的内容忽略。
///
/// # 校验顺序
/// 1. 字段数 >= 2(否则单条违规,直接返回)
/// 2. 学号非空
/// 3. 姓名非空
/// 4. 邮箱若存在则格式合法(local@domain,域名含点)
pub struct RowValidator {
    separator_re: Regex,
    email_re: Regex,
}

impl RowValidator {
    pub fn new() -> Self {
        Self {
            // 连续分隔符视为一个;行首分隔符保留空首字段(",张三" → ["", "张三"])
            separator_re: Regex::new(r"[,\t]+").expect("分隔符正则非法"),
            email_re: Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("邮箱正则非法"),
        }
    }

    /// 校验一行,返回候选记录或全部违规明细
    pub fn validate(&self, row: &RawRow) -> Result<StudentCandidate, Vec<ImportViolation>> {
        let fields: Vec<&str> = self.separator_re.split(&row.text).collect();

        if fields.len() < 2 {
            return Err(vec![ImportViolation {
                line_number: row.line_number,
                field: "row".to_string(),
                message: "格式错误，至少需要学号和姓名".to_string(),
            }]);
        }

        let student_id = fields[0].trim().to_string();
        let name = fields[1].trim().to_string();
        let email = Self::optional_field(fields.get(2));
        let phone = Self::optional_field(fields.get(3));

        let mut violations = Vec::new();

        if student_id.is_empty() {
            violations.push(ImportViolation {
                line_number: row.line_number,
                field: "student_id".to_string(),
                message: "学号不能为空".to_string(),
            });
        }

        if name.is_empty() {
            violations.push(ImportViolation {
                line_number: row.line_number,
                field: "name".to_string(),
                message: "姓名不能为空".to_string(),
            });
        }

        if let Some(email) = &email {
            if !self.email_re.is_match(email) {
                violations.push(ImportViolation {
                    line_number: row.line_number,
                    field: "email".to_string(),
                    message: "邮箱格式不正确".to_string(),
                });
            }
        }

        if violations.is_empty() {
            Ok(StudentCandidate {
                student_id,
                name,
                email,
                phone,
            })
        } else {
            Err(violations)
        }
    }

    /// 可选字段: 缺失或 trim 后为空均归一化为 None
    fn optional_field(raw: Option<&&str>) -> Option<String> {
        raw.map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }
}

impl Default for RowValidator {
    fn default() -> Self {
        Self::new()
    }
}
