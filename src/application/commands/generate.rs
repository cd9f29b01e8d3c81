//! Generate Command - 语音生成编排
//!
//! 整个流程是直线型的：请求管线 → 取第一个片段 → 写文件。
//! 管线产出的后续片段被放弃（丢弃流即可，不做 drain）。

use futures_util::StreamExt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::{AudioWriterPort, SpeechPipelinePort};
use crate::domain::{Speed, SynthesisRequest, VoiceId};

/// 输出文件的固定采样率 (Hz)
///
/// Kokoro 模型固定以 24 kHz 产出音频
pub const OUTPUT_SAMPLE_RATE: u32 = 24_000;

/// 生成命令
#[derive(Debug, Clone)]
pub struct GenerateCommand {
    pub text: String,
    pub voice: VoiceId,
    pub speed: Speed,
    pub output: PathBuf,
}

/// 生成结果
#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    /// 实际写入的路径
    pub output: PathBuf,
    /// 写入的字节数
    pub bytes_written: u64,
    /// 写入音频的时长（毫秒）
    pub duration_ms: u64,
}

/// 生成命令处理器
pub struct GenerateCommandHandler {
    pipeline: Arc<dyn SpeechPipelinePort>,
    writer: Arc<dyn AudioWriterPort>,
}

impl GenerateCommandHandler {
    pub fn new(pipeline: Arc<dyn SpeechPipelinePort>, writer: Arc<dyn AudioWriterPort>) -> Self {
        Self { pipeline, writer }
    }

    /// 执行生成
    ///
    /// 只消费片段流的第一个元素。空流是合法结果：不写文件、
    /// 不报错，返回 `Ok(None)`（与上游管线零片段时的行为一致，
    /// 刻意保留）。
    pub async fn handle(
        &self,
        command: GenerateCommand,
    ) -> Result<Option<GenerateOutcome>, ApplicationError> {
        let request = SynthesisRequest::new(command.text, command.voice, command.speed);

        tracing::debug!(
            voice = %request.voice,
            speed = %request.speed,
            text_len = request.text.len(),
            "Requesting synthesis"
        );

        let mut stream = self.pipeline.synthesize(request);

        // 取第一个片段后整个流被丢弃
        let first = match stream.next().await {
            Some(segment) => segment?,
            None => {
                tracing::warn!("Pipeline yielded no segments, nothing to write");
                return Ok(None);
            }
        };
        drop(stream);

        let duration_ms = first.duration_ms(OUTPUT_SAMPLE_RATE);
        tracing::debug!(
            graphemes = %first.graphemes,
            samples = first.samples.len(),
            duration_ms,
            "First segment received"
        );

        let bytes_written = self
            .writer
            .write(&command.output, &first.samples, OUTPUT_SAMPLE_RATE)
            .await?;

        tracing::info!(
            output = %command.output.display(),
            bytes_written,
            duration_ms,
            "Audio segment written"
        );

        Ok(Some(GenerateOutcome {
            output: command.output,
            bytes_written,
            duration_ms,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    use crate::domain::AudioSegment;
    use crate::infrastructure::adapters::audio::{encode_wav_pcm16, WavFileWriter};
    use crate::infrastructure::adapters::tts::StubSpeechPipeline;

    fn command(output: PathBuf) -> GenerateCommand {
        GenerateCommand {
            text: "hello".to_string(),
            voice: VoiceId::new("af_heart"),
            speed: Speed::new(1.0),
            output,
        }
    }

    fn handler(pipeline: StubSpeechPipeline) -> GenerateCommandHandler {
        GenerateCommandHandler::new(Arc::new(pipeline), Arc::new(WavFileWriter::new()))
    }

    #[tokio::test]
    async fn test_single_segment_written_as_wav() {
        let temp_dir = tempdir().unwrap();
        let output = temp_dir.path().join("out.wav");

        // 1 秒 24kHz 静音
        let segment = AudioSegment::new("hello", "", vec![0.0; 24000]);
        let pipeline = StubSpeechPipeline::new(vec![segment]);

        let outcome = handler(pipeline)
            .handle(command(output.clone()))
            .await
            .unwrap()
            .expect("expected an outcome");

        assert_eq!(outcome.duration_ms, 1000);
        let data = std::fs::read(&output).unwrap();
        assert_eq!(data.len() as u64, outcome.bytes_written);
        // 44 字节头 + 24000 个 16 位采样
        assert_eq!(data.len(), 44 + 24000 * 2);
        assert_eq!(&data[0..4], b"RIFF");
    }

    #[tokio::test]
    async fn test_only_first_segment_consumed() {
        let temp_dir = tempdir().unwrap();
        let output = temp_dir.path().join("out.wav");

        let first = AudioSegment::new("one", "", vec![0.25; 2400]);
        let second = AudioSegment::new("two", "", vec![-0.5; 4800]);
        let pipeline = StubSpeechPipeline::new(vec![first.clone(), second]);
        let produced = pipeline.produced_counter();

        handler(pipeline)
            .handle(command(output.clone()))
            .await
            .unwrap()
            .expect("expected an outcome");

        // 第二个片段从未被生成
        assert_eq!(produced.load(std::sync::atomic::Ordering::SeqCst), 1);

        // 输出只包含第一个片段
        let data = std::fs::read(&output).unwrap();
        let expected = encode_wav_pcm16(&first.samples, OUTPUT_SAMPLE_RATE, 1);
        assert_eq!(data, expected);
    }

    #[tokio::test]
    async fn test_empty_stream_is_silent_noop() {
        let temp_dir = tempdir().unwrap();
        let output = temp_dir.path().join("out.wav");

        let pipeline = StubSpeechPipeline::new(vec![]);
        let outcome = handler(pipeline).handle(command(output.clone())).await.unwrap();

        assert!(outcome.is_none());
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_pipeline_error_propagates() {
        let temp_dir = tempdir().unwrap();
        let output = temp_dir.path().join("out.wav");

        let pipeline = StubSpeechPipeline::failing("engine exploded");
        let result = handler(pipeline).handle(command(output.clone())).await;

        assert!(matches!(result, Err(ApplicationError::PipelineError(_))));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_deterministic_output() {
        let temp_dir = tempdir().unwrap();
        let segment = AudioSegment::new("hello", "", vec![0.1; 1200]);

        let mut outputs = Vec::new();
        for name in ["a.wav", "b.wav"] {
            let output = temp_dir.path().join(name);
            let pipeline = StubSpeechPipeline::new(vec![segment.clone()]);
            handler(pipeline)
                .handle(command(output.clone()))
                .await
                .unwrap();
            outputs.push(std::fs::read(&output).unwrap());
        }

        assert_eq!(outputs[0], outputs[1]);
    }
}
