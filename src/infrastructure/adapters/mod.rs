//! Adapters - 外部依赖适配器
//!
//! - tts: 语音管线实现（HTTP 推理服务 / 测试桩）
//! - audio: WAV 编解码与文件写入

pub mod audio;
pub mod tts;

pub use audio::WavFileWriter;
pub use tts::{HttpPipelineConfig, HttpSpeechPipeline, StubSpeechPipeline};
