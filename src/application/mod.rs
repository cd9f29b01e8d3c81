//! Application Layer
//!
//! - ports: 出站端口（语音管线、音频写入）
//! - commands: 生成命令与处理器
//! - error: 应用层统一错误

pub mod commands;
pub mod error;
pub mod ports;

pub use error::ApplicationError;
