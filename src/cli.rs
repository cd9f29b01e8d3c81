//! 命令行参数定义
//!
//! 五个必选参数对应一次生成；--engine-url / --timeout-secs 是
//! 推理服务的连接参数（本工具没有配置文件）。

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vogen", version, about = "Kokoro TTS 语音生成命令行工具")]
pub struct Cli {
    /// Language code ('a' for American English, 'b' for British English, 'h' for Hindi)
    #[arg(long)]
    pub lang: String,

    /// Text to generate speech
    #[arg(long)]
    pub text: String,

    /// Voice code (e.g., 'af_heart')
    #[arg(long)]
    pub voice: String,

    /// Speed multiplier (0.5-2.0)
    #[arg(long)]
    pub speed: f32,

    /// Output .wav file path
    #[arg(long)]
    pub output: PathBuf,

    /// TTS 推理服务基础 URL
    #[arg(long, default_value = "http://localhost:8880")]
    pub engine_url: String,

    /// 推理请求超时时间（秒）
    #[arg(long, default_value_t = 120)]
    pub timeout_secs: u64,
}
