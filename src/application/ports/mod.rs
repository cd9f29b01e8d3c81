//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod audio_writer;
mod speech_pipeline;

pub use audio_writer::{AudioWriterPort, WriteError};
pub use speech_pipeline::{PipelineError, SegmentStream, SpeechPipelinePort};
