use anyhow::Result;
use clap::Parser;
use colored::*;
use std::env;

use goscaffold::project::{init_project, register_submodule, ProjectOptions};
use goscaffold::utils::dir_name;
use goscaffold::{exit_code_for, Settings, SystemRunner};

/// goc - Go 项目 / 子模块初始化
///
/// 不带名称时在当前目录创建项目；带名称时登记子模块
#[derive(Parser)]
#[command(name = "goc")]
#[command(author, version = env!("APP_VERSION"), about)]
#[command(
    long_about = "Create a new Go project or Go submodule quickly.\n\
                  Without NAME the current folder becomes the project; with NAME a nested \
                  submodule is created, listed in README.md and imported in main.go."
)]
struct Cli {
    /// 项目或子模块名称（留空则以当前目录名创建项目）
    name: Option<String>,

    /// 不初始化 git 仓库（仅项目模式）
    #[arg(long)]
    no_git: bool,

    /// 写入 README 的描述
    #[arg(long)]
    desc: Option<String>,
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load()?;
    let cwd = env::current_dir()?;
    let runner = SystemRunner;

    match cli.name {
        None => {
            let options = ProjectOptions::new(dir_name(&cwd)?)
                .with_description(cli.desc.as_deref())
                .with_git(!cli.no_git);
            init_project(&cwd, &options, &settings, &runner)?;
        }
        Some(name) => {
            if cli.no_git {
                println!("{}", "ℹ️  --no-git only applies to project mode.".yellow());
            }
            register_submodule(&cwd, &name, cli.desc.as_deref(), &settings, &runner)?;
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("❌ {:#}", e).red());
        std::process::exit(exit_code_for(&e));
    }
}
