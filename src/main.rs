use anyhow::Result;
use exam_convert::config::Config;
use exam_convert::orchestrator::App;
use exam_convert::utils::logging;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logging::init();

    // 加载配置
    let config = Config::from_env();

    // 初始化并运行应用
    App::initialize(config).await?.run().await?;

    Ok(())
}
