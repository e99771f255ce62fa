use std::path::PathBuf;

/// Default number of categories shown in the "top categories" breakdown
pub const DEFAULT_TOP_CATEGORY_LIMIT: usize = 5;

/// Desk 配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (none) | 日志目录, 未设置时输出到 stdout |
/// | SEED_FILE | (none) | JSON 种子数据, 未设置时使用内置数据 |
/// | TOP_CATEGORY_LIMIT | 5 | 统计报表中的分类数量 |
///
/// # 示例
///
/// ```ignore
/// SEED_FILE=fixtures/campus.json LOG_LEVEL=debug cargo run --bin campus-desk
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_dir: Option<String>,
    /// JSON fixtures replacing the builtin seed data
    pub seed_file: Option<PathBuf>,
    pub top_category_limit: usize,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|v| !v.is_empty()),
            seed_file: std::env::var("SEED_FILE")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            top_category_limit: std::env::var("TOP_CATEGORY_LIMIT")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(DEFAULT_TOP_CATEGORY_LIMIT),
        }
    }

    /// Builtin seed data, defaults everywhere else. Does not read the environment.
    pub fn builtin() -> Self {
        Self {
            environment: "development".into(),
            log_level: "info".into(),
            log_dir: None,
            seed_file: None,
            top_category_limit: DEFAULT_TOP_CATEGORY_LIMIT,
        }
    }

    /// 使用自定义种子文件
    ///
    /// 常用于测试场景
    pub fn with_seed_file(path: impl Into<PathBuf>) -> Self {
        let mut config = Self::builtin();
        config.seed_file = Some(path.into());
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
