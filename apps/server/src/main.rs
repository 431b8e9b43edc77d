use anyhow::Context;
use whub::domain::config::ApiConfig;
use whub::kernel::config::load_config;
use whub_logger::Logger;
use whub_server::Server;

#[whub_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let _log = Logger::builder().name(env!("CARGO_PKG_NAME")).init()?;

    let cfg: ApiConfig =
        load_config(None::<&str>).context("Critical: Configuration is malformed")?;

    Server::builder().config(cfg).build()?.run().await
}
