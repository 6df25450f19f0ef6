// ==========================================
// 班级学生管理系统 - 批量导入 API 集成测试
// ==========================================
// 场景: 粘贴文本导入 / 结构化导入 / 部分成功报告 / 致命失败
// ==========================================

mod test_helpers;

use class_roster::api::ApiError;
use class_roster::domain::StudentCandidate;
use class_roster::repository::RosterRepository;
use class_roster::ImportApi;

fn candidate(student_id: &str, name: &str) -> StudentCandidate {
    StudentCandidate {
        student_id: student_id.to_string(),
        name: name.to_string(),
        email: None,
        phone: None,
    }
}

#[tokio::test]
async fn test_import_text_clean_batch() {
    let (_temp, repo) = test_helpers::create_test_repo();
    test_helpers::setup_class(&repo, "C1").await;
    let api = ImportApi::new(repo.clone());

    let response = api
        .import_text("C1", "1001,张三\n1002,李四")
        .await
        .expect("导入应成功");

    assert_eq!(response.added, 2);
    assert_eq!(response.duplicates, 0);
    assert!(response.errors.is_empty());
    assert_eq!(response.message, "成功添加 2 名学生");

    let students = repo.list_students("C1").await.expect("查询失败");
    assert_eq!(students.len(), 2);
    assert_eq!(students[0].student_id, "1001");
    assert_eq!(students[0].name, "张三");
}

#[tokio::test]
async fn test_import_text_full_fields_persisted() {
    let (_temp, repo) = test_helpers::create_test_repo();
    test_helpers::setup_class(&repo, "C1").await;
    let api = ImportApi::new(repo.clone());

    api.import_text("C1", "2023001,张三,zhangsan@example.com,13800000001")
        .await
        .expect("导入应成功");

    let students = repo.list_students("C1").await.expect("查询失败");
    assert_eq!(students[0].email.as_deref(), Some("zhangsan@example.com"));
    assert_eq!(students[0].phone.as_deref(), Some("13800000001"));
}

#[tokio::test]
async fn test_import_text_in_batch_duplicate_first_wins() {
    let (_temp, repo) = test_helpers::create_test_repo();
    test_helpers::setup_class(&repo, "C1").await;
    let api = ImportApi::new(repo.clone());

    let response = api
        .import_text("C1", "1001,张三\n1001,张三三")
        .await
        .expect("导入应成功");

    assert_eq!(response.added, 1);
    assert_eq!(response.duplicates, 1);

    let students = repo.list_students("C1").await.expect("查询失败");
    assert_eq!(students.len(), 1);
    assert_eq!(students[0].name, "张三");
}

#[tokio::test]
async fn test_import_text_partial_success_with_errors() {
    let (_temp, repo) = test_helpers::create_test_repo();
    test_helpers::setup_class(&repo, "C1").await;
    let api = ImportApi::new(repo.clone());

    let response = api
        .import_text("C1", "1001,张三\n,无学号\n1003,王五,bad-email")
        .await
        .expect("带行级错误的导入仍是成功");

    assert_eq!(response.added, 1);
    assert_eq!(response.errors.len(), 2);
    assert_eq!(response.errors[0].line, 2);
    assert_eq!(response.errors[0].message, "学号不能为空");
    assert_eq!(response.errors[1].line, 3);
    assert_eq!(response.errors[1].message, "邮箱格式不正确");

    // 违规行不落库
    assert_eq!(repo.count_students("C1").await.expect("统计失败"), 1);
}

#[tokio::test]
async fn test_import_text_empty_input_is_fatal() {
    let (_temp, repo) = test_helpers::create_test_repo();
    test_helpers::setup_class(&repo, "C1").await;
    let api = ImportApi::new(repo.clone());

    let err = api.import_text("C1", "\n  \n").await.expect_err("应致命失败");
    assert!(matches!(err, ApiError::EmptyBatch));

    // 致命失败不产生任何落库
    assert_eq!(repo.count_students("C1").await.expect("统计失败"), 0);
}

#[tokio::test]
async fn test_import_text_class_not_found() {
    let (_temp, repo) = test_helpers::create_test_repo();
    let api = ImportApi::new(repo);

    let err = api
        .import_text("missing", "1001,张三")
        .await
        .expect_err("班级不存在应失败");
    assert!(matches!(err, ApiError::ClassNotFound(_)));
}

#[tokio::test]
async fn test_import_text_existing_student_skipped() {
    let (_temp, repo) = test_helpers::create_test_repo();
    test_helpers::setup_class(&repo, "C1").await;
    let api = ImportApi::new(repo.clone());

    api.import_text("C1", "1002,李四").await.expect("首次导入应成功");

    let response = api
        .import_text("C1", "1002,李四\n1003,王五")
        .await
        .expect("导入应成功");

    assert_eq!(response.added, 1);
    assert_eq!(response.duplicates, 1);

    let students = repo.list_students("C1").await.expect("查询失败");
    let ids: Vec<&str> = students.iter().map(|s| s.student_id.as_str()).collect();
    assert_eq!(ids, vec!["1002", "1003"]);
}

#[tokio::test]
async fn test_import_text_all_duplicates_message() {
    let (_temp, repo) = test_helpers::create_test_repo();
    test_helpers::setup_class(&repo, "C1").await;
    let api = ImportApi::new(repo.clone());

    api.import_text("C1", "1001,张三").await.expect("首次导入应成功");

    let response = api
        .import_text("C1", "1001,张三")
        .await
        .expect("全重复导入仍是成功");

    assert_eq!(response.added, 0);
    assert_eq!(response.duplicates, 1);
    assert_eq!(response.message, "所有学生已存在于班级中");
}

#[tokio::test]
async fn test_import_text_line_numbers_track_physical_lines() {
    let (_temp, repo) = test_helpers::create_test_repo();
    test_helpers::setup_class(&repo, "C1").await;
    let api = ImportApi::new(repo);

    // 第 1 行空行、第 3 行空行: 第 4 行的错误必须报行号 4
    let response = api
        .import_text("C1", "\n1001,张三\n\nbad\n1005,王五")
        .await
        .expect("导入应成功");

    assert_eq!(response.added, 2);
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].line, 4);
}

#[tokio::test]
async fn test_import_candidates_structured_entry() {
    let (_temp, repo) = test_helpers::create_test_repo();
    test_helpers::setup_class(&repo, "C1").await;
    let api = ImportApi::new(repo.clone());

    let response = api
        .import_candidates(
            "C1",
            vec![
                candidate("1001", "张三"),
                candidate("1001", "张三三"),
                candidate("1002", "李四"),
            ],
        )
        .await
        .expect("结构化导入应成功");

    assert_eq!(response.added, 2);
    assert_eq!(response.duplicates, 1);
    assert!(response.errors.is_empty());
    assert_eq!(repo.count_students("C1").await.expect("统计失败"), 2);
}

#[tokio::test]
async fn test_import_candidates_empty_is_fatal() {
    let (_temp, repo) = test_helpers::create_test_repo();
    test_helpers::setup_class(&repo, "C1").await;
    let api = ImportApi::new(repo);

    let err = api
        .import_candidates("C1", vec![])
        .await
        .expect_err("空候选列表应致命失败");
    assert!(matches!(err, ApiError::EmptyBatch));
}

#[tokio::test]
async fn test_reimport_same_text_adds_nothing() {
    let (_temp, repo) = test_helpers::create_test_repo();
    test_helpers::setup_class(&repo, "C1").await;
    let api = ImportApi::new(repo.clone());

    let text = "1001,张三\n1002,李四";
    api.import_text("C1", text).await.expect("首次导入应成功");
    let second = api.import_text("C1", text).await.expect("重复导入仍是成功");

    assert_eq!(second.added, 0);
    assert_eq!(second.duplicates, 2);
    assert_eq!(repo.count_students("C1").await.expect("统计失败"), 2);
}
