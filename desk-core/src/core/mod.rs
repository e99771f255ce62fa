//! 核心模块 - 配置与共享状态
//!
//! - [`Config`] - 环境配置
//! - [`DeskState`] - 目录与工单存储的共享句柄

pub mod config;
pub mod state;

pub use config::Config;
pub use state::DeskState;
