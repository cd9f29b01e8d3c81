//! TTS Adapters - SpeechPipelinePort 实现

mod http_pipeline;
mod stub_pipeline;

pub use http_pipeline::{HttpPipelineConfig, HttpSpeechPipeline};
pub use stub_pipeline::StubSpeechPipeline;
