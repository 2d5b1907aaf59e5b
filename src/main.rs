use env_logger::{Builder, Env};
use log::LevelFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    // Info by default, quieter HTTP internals; RUST_LOG still wins
    Builder::new()
        .filter_level(LevelFilter::Info)
        .filter_module("hyper", LevelFilter::Warn)
        .filter_module("reqwest", LevelFilter::Warn)
        .parse_env(Env::default())
        .init();

    gh_repos_api::run_server().await
}
