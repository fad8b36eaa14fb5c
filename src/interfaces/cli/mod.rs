/// CLI Interface Module
///
/// Command-line entry point of the catalog admin service.
///
/// ## Responsibilities
/// - Parse command-line arguments and environment variables
/// - Initialize logging
/// - Connect storage and apply migrations
/// - Serve the HTTP API until Ctrl-C

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use std::future::Future;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tracing::{info, warn};

use crate::application::CatalogService;
use crate::domain::category::CategoryGateway;
use crate::infrastructure::api;
use crate::infrastructure::config::{
    DatabaseConfig, DATABASE_PASSWORD_ENV, DATABASE_URL_ENV, DATABASE_USER_ENV,
    DEFAULT_DATABASE_PASSWORD, DEFAULT_DATABASE_URL, DEFAULT_DATABASE_USER,
    DEFAULT_MAX_CONNECTIONS,
};
use crate::infrastructure::observability::{HealthChecker, HealthStatus};
use crate::infrastructure::persistence::{
    connect_pool, run_migrations, InMemoryCategoryGateway, PostgresCategoryGateway,
};

/// 分类存储后端
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageKind {
    Postgres,
    /// 进程内存储，退出即丢失
    Memory,
}

impl StorageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKind::Postgres => "postgres",
            StorageKind::Memory => "memory",
        }
    }
}

/// 目录管理服务命令行配置
#[derive(Parser, Debug, Clone)]
#[command(name = "application")]
#[command(version)]
#[command(about = "Video catalog administration service", long_about = None)]
pub struct CliConfig {
    /// 服务器监听地址
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// 服务器监听端口
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    /// 存储后端
    #[arg(short, long, value_enum, default_value_t = StorageKind::Postgres)]
    pub storage: StorageKind,

    /// 数据库地址（接受 `jdbc:` 前缀）
    #[arg(long, env = DATABASE_URL_ENV, default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,

    /// 数据库用户
    #[arg(long, env = DATABASE_USER_ENV, default_value = DEFAULT_DATABASE_USER)]
    pub database_user: String,

    /// 数据库密码
    #[arg(long, env = DATABASE_PASSWORD_ENV, default_value = DEFAULT_DATABASE_PASSWORD, hide_env_values = true, hide_default_value = true)]
    pub database_password: String,

    /// 连接池最大连接数
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// 日志级别（RUST_LOG 优先）
    #[arg(short = 'l', long, default_value = "info", value_parser = ["trace", "debug", "info", "warn", "error"])]
    pub log_level: String,

    /// 仅执行数据库迁移后退出
    #[arg(long, default_value_t = false)]
    pub migrate_only: bool,

    /// 仅显示配置不启动服务器（用于调试）
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
}

impl CliConfig {
    pub fn database(&self) -> DatabaseConfig {
        DatabaseConfig::new(
            self.database_url.clone(),
            self.database_user.clone(),
            self.database_password.clone(),
            self.max_connections,
        )
    }

    pub fn listen_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Runs the CLI application
pub async fn run() -> anyhow::Result<()> {
    // 解析命令行参数
    let config = CliConfig::parse();

    // 初始化日志系统
    init_logging(&config.log_level);

    info!("catalog admin starting");
    info!("configuration: {:?}", config.database());

    // 如果是dry-run模式，仅显示配置
    if config.dry_run {
        print_banner(&config);
        println!("\nDry-run mode - server not started");
        return Ok(());
    }

    serve(config).await
}

/// Connects storage and serves the API until a shutdown signal arrives
pub async fn serve(config: CliConfig) -> anyhow::Result<()> {
    let gateway: Arc<dyn CategoryGateway> = match config.storage {
        StorageKind::Memory => {
            if config.migrate_only {
                bail!("--migrate-only requires --storage postgres");
            }
            warn!("using in-memory storage, data is lost on exit");
            Arc::new(InMemoryCategoryGateway::new())
        }
        StorageKind::Postgres => {
            let pool = connect_pool(&config.database())
                .await
                .context("failed to open database pool")?;
            run_migrations(&pool)
                .await
                .context("failed to apply database migrations")?;

            if config.migrate_only {
                info!("migrations applied, exiting");
                pool.close().await;
                return Ok(());
            }
            Arc::new(PostgresCategoryGateway::new(pool))
        }
    };

    // 初始化应用服务与健康检查
    let service = Arc::new(CatalogService::new(gateway));
    let health = Arc::new(HealthChecker::new(
        env!("CARGO_PKG_VERSION"),
        config.storage.as_str(),
    ));
    let app = api::router(service, health.clone());

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("HTTP server listening on http://{}", addr);
    info!("API docs: http://{}/api-docs", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(health, tokio::signal::ctrl_c()))
        .await
        .context("HTTP server error")?;

    info!("catalog admin stopped");
    Ok(())
}

/// Waits for `signal`, then fails readiness while in-flight requests drain
async fn shutdown_signal<F>(health: Arc<HealthChecker>, signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => warn!(error = %e, "failed to listen for shutdown signal"),
    }

    // 负载均衡器看到 503 后不再转发新请求
    health.set_status(HealthStatus::Unhealthy);
}

fn print_banner(config: &CliConfig) {
    println!("========================================");
    println!("  Catalog Admin v{}", env!("CARGO_PKG_VERSION"));
    println!("========================================");
    println!("Listen address:  {}", config.listen_addr());
    println!("Storage:         {}", config.storage.as_str());
    println!("Database URL:    {}", config.database_url);
    println!("Database user:   {}", config.database_user);
    println!("Max connections: {}", config.max_connections);
    println!("Log level:       {}", config.log_level);
    println!("========================================");
}

fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
