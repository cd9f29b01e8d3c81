//! 合成请求与音频片段值对象

use crate::domain::voice::VoiceId;

/// 语言代码
///
/// Kokoro 管线使用单字符语言代码。未知代码不在本地校验，
/// 由外部推理服务决定是否支持。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LangCode(String);

impl LangCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 已知语言代码的描述（仅用于日志）
    pub fn describe(&self) -> Option<&'static str> {
        match self.0.as_str() {
            "a" => Some("American English"),
            "b" => Some("British English"),
            "e" => Some("Spanish"),
            "f" => Some("French"),
            "h" => Some("Hindi"),
            "i" => Some("Italian"),
            "j" => Some("Japanese"),
            "p" => Some("Brazilian Portuguese"),
            "z" => Some("Mandarin Chinese"),
            _ => None,
        }
    }
}

impl std::fmt::Display for LangCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 语速倍率
///
/// 名义范围 0.5 - 2.0，但不做强制校验，超出范围只打日志警告。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Speed(f32);

impl Speed {
    pub const NOMINAL_MIN: f32 = 0.5;
    pub const NOMINAL_MAX: f32 = 2.0;

    pub fn new(value: f32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f32 {
        self.0
    }

    pub fn is_nominal(&self) -> bool {
        (Self::NOMINAL_MIN..=Self::NOMINAL_MAX).contains(&self.0)
    }
}

impl std::fmt::Display for Speed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 合成请求
///
/// 管线以 (text, voice, speed) 为输入产出音频片段序列
#[derive(Debug, Clone)]
pub struct SynthesisRequest {
    /// 要合成的文本
    pub text: String,
    /// 音色标识（如 af_heart）
    pub voice: VoiceId,
    /// 语速倍率
    pub speed: Speed,
}

impl SynthesisRequest {
    pub fn new(text: impl Into<String>, voice: VoiceId, speed: Speed) -> Self {
        Self {
            text: text.into(),
            voice,
            speed,
        }
    }
}

/// 音频片段
///
/// 管线为每个文本片段产出一个 (graphemes, phonemes, samples) 三元组。
/// graphemes/phonemes 是标注信息，编排器不使用，只透传到日志。
#[derive(Debug, Clone, PartialEq)]
pub struct AudioSegment {
    /// 片段对应的原始文本
    pub graphemes: String,
    /// 片段的音素序列（服务端可能不提供）
    pub phonemes: String,
    /// f32 PCM 采样，单声道
    pub samples: Vec<f32>,
}

impl AudioSegment {
    pub fn new(graphemes: impl Into<String>, phonemes: impl Into<String>, samples: Vec<f32>) -> Self {
        Self {
            graphemes: graphemes.into(),
            phonemes: phonemes.into(),
            samples,
        }
    }

    /// 按给定采样率计算片段时长（毫秒）
    pub fn duration_ms(&self, sample_rate: u32) -> u64 {
        if sample_rate == 0 {
            return 0;
        }
        (self.samples.len() as u64 * 1000) / sample_rate as u64
    }
}
