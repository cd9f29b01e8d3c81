//! Audio Writer Port - 音频文件写入抽象

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

/// 写入错误
#[derive(Debug, Error)]
pub enum WriteError {
    /// 输出路径扩展名不被支持
    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Audio Writer Port
///
/// 把一个采样缓冲按给定采样率持久化为音频文件，
/// 容器格式由输出路径的扩展名决定。
#[async_trait]
pub trait AudioWriterPort: Send + Sync {
    /// 写入采样数据，返回写入的字节数
    async fn write(
        &self,
        path: &Path,
        samples: &[f32],
        sample_rate: u32,
    ) -> Result<u64, WriteError>;
}
