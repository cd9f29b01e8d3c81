//! Speech Pipeline Port - 语音合成管线抽象
//!
//! 管线在构造时绑定语言，调用时以 (text, voice, speed) 产出
//! 惰性的音频片段序列。惰性是契约的一部分：未被消费的片段
//! 不应触发任何推理。

use futures_util::stream::BoxStream;
use thiserror::Error;

use crate::domain::{AudioSegment, SynthesisRequest};

/// 管线错误
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 惰性音频片段序列
///
/// 消费方取第一个片段后即可丢弃整个流，剩余片段不会被生成。
pub type SegmentStream = BoxStream<'static, Result<AudioSegment, PipelineError>>;

/// Speech Pipeline Port
///
/// 外部 TTS 推理引擎的抽象接口
pub trait SpeechPipelinePort: Send + Sync {
    /// 对请求文本合成语音，返回惰性片段流
    ///
    /// 文本可能被切成多个片段，流按片段顺序产出；
    /// 空文本对应空流。
    fn synthesize(&self, request: SynthesisRequest) -> SegmentStream;
}
