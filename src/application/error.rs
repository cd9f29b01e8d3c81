//! 应用层错误定义

use thiserror::Error;

use crate::application::ports::{PipelineError, WriteError};

/// 应用层错误
///
/// 所有失败都是致命的：无重试、无本地恢复，直接向上传播到 main。
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 外部推理服务错误
    #[error("Pipeline error: {0}")]
    PipelineError(#[from] PipelineError),

    /// 音频写入错误
    #[error("Write error: {0}")]
    WriteError(#[from] WriteError),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalError(message.into())
    }
}
