//! userbook - 问候语 + 用户记录 HTTP 服务
//!
//! 启动流程：加载配置 → 初始化日志 → 创建连接池 → 启动 HTTP 服务器

use std::sync::Arc;

use userbook::config::{load_config, print_config, AppConfig};
use userbook::infrastructure::http::{AppState, HttpServer, ServerConfig};
use userbook::infrastructure::persistence::sqlite::{
    create_pool, init_schema, DatabaseConfig, SqliteUserRepository,
};

fn init_tracing(config: &AppConfig) {
    let log_filter = format!(
        "{},userbook={},tower_http=debug",
        config.log.level, config.log.level
    );
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if config.log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 优先级：PORT/INSTANCE_ID > USERBOOK_* > 配置文件 > 默认值
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config);
    print_config(&config);

    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    if config.database.init_schema {
        init_schema(&pool).await?;
    }

    let user_repo = Arc::new(SqliteUserRepository::new(pool.clone()));
    let state = AppState::new(user_repo, config.server.instance_id());

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}
