//! Domain Layer - 语音合成领域模型
//!
//! - synthesis: 合成请求与音频片段值对象
//! - voice: 音色标识与已知音色表
//! - segmenter: 文本分段（管线按片段产出音频）

pub mod segmenter;
pub mod synthesis;
pub mod voice;

pub use segmenter::{segment_text, SegmentConfig};
pub use synthesis::{AudioSegment, LangCode, Speed, SynthesisRequest};
pub use voice::VoiceId;
