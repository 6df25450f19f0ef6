// ==========================================
// 班级学生管理系统 - CLI 主入口
// ==========================================
// 用途: 从分隔文本文件批量导入学生到指定班级
// 说明: 文件读取只负责把内容变成文本块,管道本身不接触文件系统
// ==========================================

use class_roster::db::get_default_db_path;
use class_roster::domain::Class;
use class_roster::repository::{RosterRepository, RosterRepositoryImpl};
use class_roster::ImportApi;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // 初始化日志系统
    class_roster::logging::init();

    tracing::info!("==================================================");
    tracing::info!("{}", class_roster::APP_NAME);
    tracing::info!("系统版本: {}", class_roster::VERSION);
    tracing::info!("==================================================");

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("用法: class-roster <班级ID> <数据文件>");
        eprintln!("  数据文件行格式: 学号,姓名[,邮箱[,电话]]（逗号或制表符分隔）");
        std::process::exit(2);
    }

    if let Err(err) = run(&args[1], &args[2]).await {
        tracing::error!("导入失败: {}", err);
        std::process::exit(1);
    }
}

async fn run(class_id: &str, file_path: &str) -> anyhow::Result<()> {
    let db_path = get_default_db_path();
    tracing::info!("使用数据库: {}", db_path);

    let raw_text = std::fs::read_to_string(file_path)?;

    let repo = Arc::new(RosterRepositoryImpl::new(&db_path)?);

    // CLI 便利: 目标班级不存在时自动创建(HTTP 层语义是 404,此处不同)
    if !repo.class_exists(class_id).await? {
        repo.insert_class(Class::new(class_id, class_id)).await?;
        tracing::info!("班级不存在,已自动创建: {}", class_id);
    }

    let api = ImportApi::new(repo);
    let response = api.import_text(class_id, &raw_text).await?;

    println!("{}", response.message);
    for row_error in &response.errors {
        println!("第 {} 行: {}", row_error.line, row_error.message);
    }

    tracing::debug!(report = %serde_json::to_string(&response)?, "导入报告");

    Ok(())
}
