//! HTTP Speech Pipeline - 调用外部 Kokoro 推理服务
//!
//! 外部 TTS API:
//! POST {base}/api/tts/infer
//! Request: {"lang": "a", "text": "...", "voice": "af_heart", "speed": 1.0}  (JSON)
//! Response: audio/wav binary, 音素标注在 X-TTS-Phonemes header
//!
//! 文本先在本地分段，流被消费到哪个片段才对哪个片段发请求，
//! 保证 SegmentStream 的惰性契约。

use futures_util::{stream, StreamExt};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;

use crate::application::ports::{PipelineError, SegmentStream, SpeechPipelinePort};
use crate::domain::{segment_text, AudioSegment, LangCode, SegmentConfig, SynthesisRequest};
use crate::infrastructure::adapters::audio::decode_wav;

/// 推理请求体 (JSON)
#[derive(Debug, Serialize)]
struct InferHttpRequest {
    lang: String,
    text: String,
    voice: String,
    speed: f32,
}

/// HTTP 管线配置
#[derive(Debug, Clone)]
pub struct HttpPipelineConfig {
    /// 推理服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpPipelineConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8880".to_string(),
            timeout_secs: 120,
        }
    }
}

impl HttpPipelineConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP Speech Pipeline
///
/// 构造时绑定语言；synthesize 时按片段逐个调用推理服务
pub struct HttpSpeechPipeline {
    client: Client,
    config: HttpPipelineConfig,
    lang: LangCode,
}

impl HttpSpeechPipeline {
    /// 创建绑定到指定语言的管线
    pub fn new(config: HttpPipelineConfig, lang: LangCode) -> Result<Self, PipelineError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PipelineError::NetworkError(e.to_string()))?;

        tracing::debug!(
            base_url = %config.base_url,
            lang = %lang,
            "HttpSpeechPipeline initialized"
        );

        Ok(Self {
            client,
            config,
            lang,
        })
    }

    fn infer_url(&self) -> String {
        format!("{}/api/tts/infer", self.config.base_url)
    }

    /// 对单个文本片段执行一次推理
    async fn infer_segment(
        client: Client,
        url: String,
        body: InferHttpRequest,
        index: usize,
    ) -> Result<AudioSegment, PipelineError> {
        let request_id = Uuid::new_v4();

        tracing::debug!(
            %request_id,
            segment = index,
            text_len = body.text.len(),
            "Sending infer request"
        );

        let response = client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PipelineError::Timeout
                } else if e.is_connect() {
                    PipelineError::NetworkError(format!("Cannot connect to TTS service: {}", e))
                } else {
                    PipelineError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(PipelineError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let phonemes = response
            .headers()
            .get("X-TTS-Phonemes")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let audio_data = response
            .bytes()
            .await
            .map_err(|e| PipelineError::InvalidResponse(format!("Failed to read audio: {}", e)))?;

        let decoded = decode_wav(&audio_data)
            .map_err(|e| PipelineError::InvalidResponse(e.to_string()))?;

        tracing::debug!(
            %request_id,
            segment = index,
            samples = decoded.samples.len(),
            sample_rate = decoded.sample_rate,
            "Infer request completed"
        );

        Ok(AudioSegment::new(body.text, phonemes, decoded.samples))
    }
}

impl SpeechPipelinePort for HttpSpeechPipeline {
    fn synthesize(&self, request: SynthesisRequest) -> SegmentStream {
        let pieces = segment_text(&request.text, &SegmentConfig::default());

        tracing::debug!(
            lang = %self.lang,
            voice = %request.voice,
            segments = pieces.len(),
            "Text segmented for synthesis"
        );

        let client = self.client.clone();
        let url = self.infer_url();
        let lang = self.lang.clone();
        let voice = request.voice;
        let speed = request.speed;

        stream::iter(pieces.into_iter().enumerate())
            .then(move |(index, text)| {
                let client = client.clone();
                let url = url.clone();
                let body = InferHttpRequest {
                    lang: lang.as_str().to_string(),
                    text,
                    voice: voice.as_str().to_string(),
                    speed: speed.value(),
                };
                Self::infer_segment(client, url, body, index)
            })
            .boxed()
    }
}
