use anyhow::Result;
use clap::Parser;
use colored::*;
use std::io;

use goscaffold::project::{
    ensure_project, list_projects, open_in_editor, prompt_selection, Selection,
};
use goscaffold::{exit_code_for, ScaffoldError, Settings, SystemRunner};

/// gop - 选择或创建 Go 项目并用编辑器打开
#[derive(Parser)]
#[command(name = "gop")]
#[command(author, version = env!("APP_VERSION"), about)]
#[command(
    long_about = "Pick a project under the configured projects root (GOSCAFFOLD_ROOT) and open it.\n\
                  A missing project is created and initialized with goc first."
)]
struct Cli {
    /// 项目名称（留空则显示编号菜单）
    name: Option<String>,

    /// 强制显示项目菜单
    #[arg(short, long)]
    list: bool,

    /// 新建项目时传给 goc 的描述
    #[arg(long)]
    desc: Option<String>,
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load()?;
    let runner = SystemRunner;
    let root = &settings.projects_root;

    let name = if cli.list || cli.name.is_none() {
        let projects = list_projects(root)?;
        let stdin = io::stdin();
        match prompt_selection(&projects, stdin.lock(), io::stdout())? {
            Selection::Exit => {
                println!("Exit.");
                return Ok(());
            }
            Selection::Project(name) => Some(name),
        }
    } else {
        cli.name
    };

    let name = name
        .filter(|n| !n.trim().is_empty())
        .ok_or(ScaffoldError::NoProjectSpecified)?;

    let (path, _) = ensure_project(root, &name, cli.desc.as_deref(), &settings, &runner)?;
    open_in_editor(&path, &settings, &runner);

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("❌ {:#}", e).red());
        std::process::exit(exit_code_for(&e));
    }
}
