//! Stub Speech Pipeline - 测试用管线
//!
//! 产出预先配置好的片段，不调用任何外部服务。
//! 带一个惰性计数器：只有被流消费的片段才会计数，
//! 用于断言"只取第一个片段"的契约。

use futures_util::{stream, StreamExt};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::application::ports::{PipelineError, SegmentStream, SpeechPipelinePort};
use crate::domain::{AudioSegment, SynthesisRequest};

/// Stub Speech Pipeline
pub struct StubSpeechPipeline {
    segments: Vec<Result<AudioSegment, String>>,
    produced: Arc<AtomicUsize>,
}

impl StubSpeechPipeline {
    /// 产出固定片段序列的桩
    pub fn new(segments: Vec<AudioSegment>) -> Self {
        Self {
            segments: segments.into_iter().map(Ok).collect(),
            produced: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// 第一个片段即失败的桩
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            segments: vec![Err(message.into())],
            produced: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// 惰性生成计数器：记录实际被消费的片段数
    pub fn produced_counter(&self) -> Arc<AtomicUsize> {
        self.produced.clone()
    }
}

impl SpeechPipelinePort for StubSpeechPipeline {
    fn synthesize(&self, request: SynthesisRequest) -> SegmentStream {
        tracing::debug!(
            voice = %request.voice,
            text_len = request.text.len(),
            segments = self.segments.len(),
            "StubSpeechPipeline: yielding fixed segments"
        );

        let produced = self.produced.clone();
        stream::iter(self.segments.clone())
            .map(move |entry| {
                // map 在消费时才执行，未取走的片段不会计数
                produced.fetch_add(1, Ordering::SeqCst);
                entry.map_err(PipelineError::ServiceError)
            })
            .boxed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Speed, VoiceId};

    fn request() -> SynthesisRequest {
        SynthesisRequest::new("hello", VoiceId::new("af_heart"), Speed::new(1.0))
    }

    #[tokio::test]
    async fn test_yields_configured_segments_in_order() {
        let pipeline = StubSpeechPipeline::new(vec![
            AudioSegment::new("one", "", vec![0.1; 10]),
            AudioSegment::new("two", "", vec![0.2; 20]),
        ]);

        let mut stream = pipeline.synthesize(request());
        assert_eq!(stream.next().await.unwrap().unwrap().graphemes, "one");
        assert_eq!(stream.next().await.unwrap().unwrap().graphemes, "two");
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_counter_only_counts_consumed_segments() {
        let pipeline = StubSpeechPipeline::new(vec![
            AudioSegment::new("one", "", vec![0.1; 10]),
            AudioSegment::new("two", "", vec![0.2; 20]),
            AudioSegment::new("three", "", vec![0.3; 30]),
        ]);
        let produced = pipeline.produced_counter();

        let mut stream = pipeline.synthesize(request());
        let _ = stream.next().await;
        drop(stream);

        assert_eq!(produced.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failing_stub_yields_error() {
        let pipeline = StubSpeechPipeline::failing("boom");
        let mut stream = pipeline.synthesize(request());

        let first = stream.next().await.unwrap();
        assert!(matches!(first, Err(PipelineError::ServiceError(_))));
    }
}
