use desk_core::{DeskState, analytics, setup_environment};

fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 日志, 配置)
    let config = setup_environment();

    tracing::info!(environment = %config.environment, "Campus desk starting...");

    // 2. 初始化状态 (种子数据)
    let state = DeskState::initialize(&config)?;

    // 3. 汇总并输出报表
    let summary = state.summary();
    tracing::info!(
        total = summary.total,
        submitted = summary.submitted,
        in_progress = summary.in_progress,
        resolved = summary.resolved,
        resolution_rate = summary.resolution_rate_percent(),
        "Analytics summary"
    );

    print!("{}", analytics::render_csv(&summary, shared::util::today()));
    Ok(())
}
