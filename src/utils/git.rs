//! Git 仓库初始化

use colored::*;
use std::path::Path;

use super::process::ToolRunner;

/// 初始化提交信息
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial commit";

/// `init_repository` 的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GitSetup {
    /// init / add / commit 全部成功
    Initialized,
    /// git 不在 PATH 中，已跳过
    Unavailable,
    /// 某一步失败（已提示警告）
    Incomplete,
}

/// 在 `dir` 中执行 `git init`、`git add .`、`git commit`
///
/// 这是便利步骤：找不到 git 或某一步失败只会给出警告，从不返回错误。
pub fn init_repository(runner: &dyn ToolRunner, git_bin: &str, dir: &Path) -> GitSetup {
    if runner.locate(git_bin).is_none() {
        println!("{}", "⚠️  Git not found. Skipping git init.".yellow());
        return GitSetup::Unavailable;
    }

    let steps: [&[&str]; 3] = [
        &["init"],
        &["add", "."],
        &["commit", "-m", INITIAL_COMMIT_MESSAGE],
    ];

    for args in steps {
        if let Err(e) = runner.run(git_bin, args, dir) {
            println!(
                "{}",
                format!("⚠️  git {} failed: {}", args.join(" "), e).yellow()
            );
            return GitSetup::Incomplete;
        }
    }

    println!("{}", "✔️  Git repository initialized.".green());
    GitSetup::Initialized
}
