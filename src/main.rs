//! Vogen - Kokoro TTS 语音生成命令行工具

use clap::Parser;
use std::sync::Arc;

use vogen::application::commands::{GenerateCommand, GenerateCommandHandler};
use vogen::cli::Cli;
use vogen::domain::{LangCode, Speed, VoiceId};
use vogen::infrastructure::adapters::{HttpPipelineConfig, HttpSpeechPipeline, WavFileWriter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化日志（RUST_LOG 优先，默认 info）
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let lang = LangCode::new(cli.lang.as_str());
    let voice = VoiceId::new(cli.voice.as_str());
    let speed = Speed::new(cli.speed);

    tracing::info!(
        lang = %lang,
        language = lang.describe().unwrap_or("unknown"),
        voice = %voice,
        speed = %speed,
        output = %cli.output.display(),
        "Starting speech generation"
    );

    // 未知参数只提示，不拦截：是否支持由推理服务决定
    if !voice.is_known() {
        tracing::warn!(voice = %voice, "Voice is not in the built-in voice table");
    }
    if !speed.is_nominal() {
        tracing::warn!(speed = %speed, "Speed is outside the nominal 0.5-2.0 range");
    }

    let pipeline_config =
        HttpPipelineConfig::new(cli.engine_url).with_timeout(cli.timeout_secs);
    let pipeline = HttpSpeechPipeline::new(pipeline_config, lang)?;
    let writer = WavFileWriter::new();

    let handler = GenerateCommandHandler::new(Arc::new(pipeline), Arc::new(writer));
    let outcome = handler
        .handle(GenerateCommand {
            text: cli.text,
            voice,
            speed,
            output: cli.output,
        })
        .await?;

    match outcome {
        Some(outcome) => {
            tracing::info!(
                output = %outcome.output.display(),
                bytes_written = outcome.bytes_written,
                duration_ms = outcome.duration_ms,
                "Speech generation complete"
            );
        }
        // 零片段：不写文件、正常退出（保留上游管线的行为）
        None => {
            tracing::warn!("No audio was generated");
        }
    }

    Ok(())
}
