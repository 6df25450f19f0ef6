// ==========================================
// 班级学生管理系统 - 行切分器
// ==========================================
// 职责: 原始文本块 → 有序 RawRow 序列
// 红线: 行号按物理位置计算(1 起始),跳过空行后不得重新编号
// ==========================================

use crate::domain::RawRow;

/// 将原始文本切分为数据行
///
/// # 规则
/// - 按 `\n` 或 `\r\n` 切分
/// - trim 后为空的行静默跳过(不产生 RawRow,也不产生违规),
///   但其行号仍被占用,后续行号不变
/// - 空输入返回空序列;是否视为致命由编排器决定,切分器本身无错误分支
pub fn tokenize(text: &str) -> Vec<RawRow> {
    text.split('\n')
        .enumerate()
        .filter_map(|(idx, line)| {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.trim().is_empty() {
                return None;
            }
            Some(RawRow {
                line_number: idx + 1,
                text: line.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let rows = tokenize("1001,张三\n1002,李四");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line_number, 1);
        assert_eq!(rows[0].text, "1001,张三");
        assert_eq!(rows[1].line_number, 2);
    }

    #[test]
    fn test_tokenize_crlf() {
        let rows = tokenize("1001,张三\r\n1002,李四\r\n");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].text, "1002,李四");
    }

    #[test]
    fn test_tokenize_blank_lines_keep_numbering() {
        // 第 2 行为空行: 被跳过,但第 3 行的行号仍是 3
        let rows = tokenize("1001,张三\n\n1003,王五");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].line_number, 1);
        assert_eq!(rows[1].line_number, 3);
    }

    #[test]
    fn test_tokenize_whitespace_only_line_skipped() {
        let rows = tokenize("1001,张三\n   \t \n1003,王五");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].line_number, 3);
    }

    #[test]
    fn test_tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("\n\n  \n").is_empty());
    }
}
