//! Campus Desk - 校园服务工单核心
//!
//! # 架构概述
//!
//! Students raise service tickets (drinking water, ID cards, ERP, ...), staff
//! move them through `Submitted → In Progress → Resolved`, admins read the
//! aggregate analytics. Everything lives in memory behind a [`DeskState`].
//!
//! - **目录** (`directory`): user profiles, registration, authentication
//! - **工单** (`requests`): ticket store with role-scoped listing
//! - **统计** (`analytics`): aggregation and CSV report
//! - **权限** (`auth`): role checks applied before store calls
//!
//! # 模块结构
//!
//! ```text
//! desk-core/src/
//! ├── core/          # 配置、共享状态
//! ├── auth/          # 角色权限
//! ├── directory/     # 用户档案、密码
//! ├── requests/      # 工单存储、查询
//! ├── analytics/     # 统计、报表
//! ├── seed/          # 种子数据
//! └── utils/         # 日志、校验
//! ```

pub mod analytics;
pub mod auth;
pub mod core;
pub mod directory;
pub mod requests;
pub mod seed;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, DeskState};
pub use directory::UserDirectory;
pub use requests::{RequestFilter, RequestStore, Viewer};
pub use seed::SeedData;
pub use utils::{AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv + 日志)
///
/// A missing `.env` file is not an error. Returns the loaded configuration.
pub fn setup_environment() -> Config {
    if let Err(e) = dotenv::dotenv()
        && !e.not_found()
    {
        eprintln!("Ignoring unreadable .env file: {e}");
    }

    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}
