// ==========================================
// 班级学生管理系统 - 重复判定器
// ==========================================
// 职责: 候选记录按序划分为 接受 / 重复
// 红线: 纯函数,不做 I/O;已知学号由调用方一次性查出后传入
// ==========================================

use crate::domain::StudentCandidate;
use std::collections::HashSet;

/// 按序判定重复
///
/// # 规则
/// - "已见"集合以 known_ids(班级已持久化学号)为初值
/// - 首次出现的学号进入 accepted 并记入已见集合;再次出现只累计 duplicate_count
/// - 批内重复与库内重复走同一个增长集合,首次出现者胜出
///
/// # 返回
/// - (accepted, duplicate_count): accepted 保持输入顺序
pub fn resolve(
    candidates: Vec<StudentCandidate>,
    known_ids: &HashSet<String>,
) -> (Vec<StudentCandidate>, usize) {
    let mut seen: HashSet<String> = known_ids.clone();
    let mut accepted = Vec::new();
    let mut duplicate_count = 0;

    for candidate in candidates {
        if seen.insert(candidate.student_id.clone()) {
            accepted.push(candidate);
        } else {
            duplicate_count += 1;
        }
    }

    (accepted, duplicate_count)
}
