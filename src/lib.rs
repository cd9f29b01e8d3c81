//! Vogen - Kokoro TTS 语音生成命令行工具
//!
//! 对一段文本调用外部 Kokoro 推理服务，把第一个生成的音频片段
//! 写成 24 kHz WAV 文件。流程是直线型的：
//! 解析参数 → 构造管线 → 合成 → 取第一个片段 → 写文件 → 退出。
//!
//! 领域层 (domain/):
//! - 合成请求、音频片段、音色、文本分段
//!
//! 应用层 (application/):
//! - Ports: SpeechPipelinePort, AudioWriterPort
//! - Commands: GenerateCommand 编排器
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: HTTP 推理客户端、测试桩、WAV 编解码与写入

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
