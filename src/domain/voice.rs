//! 音色标识
//!
//! Kokoro 音色代码格式为 `{语言}{性别}_{名称}`，
//! 如 af_heart = American English / female / heart。

/// 内置模型自带的音色表
///
/// 仅用于未知音色的日志提示，不做强制校验（服务端可能加载了更多音色）。
pub const KNOWN_VOICES: &[&str] = &[
    "af_heart",
    "af_bella",
    "af_nicole",
    "af_sarah",
    "af_sky",
    "am_adam",
    "am_michael",
    "bf_emma",
    "bf_isabella",
    "bm_george",
    "bm_lewis",
    "hf_alpha",
    "hf_beta",
    "hm_omega",
    "hm_psi",
];

/// 音色唯一标识
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VoiceId(String);

impl VoiceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 是否在内置音色表中
    pub fn is_known(&self) -> bool {
        KNOWN_VOICES.contains(&self.0.as_str())
    }

    /// 拆解音色代码为 (语言前缀, 性别, 名称)
    ///
    /// 格式不符时返回 None
    pub fn parts(&self) -> Option<(char, char, &str)> {
        let (prefix, name) = self.0.split_once('_')?;
        let mut chars = prefix.chars();
        let lang = chars.next()?;
        let gender = chars.next()?;
        if chars.next().is_some() || name.is_empty() {
            return None;
        }
        Some((lang, gender, name))
    }
}

impl std::fmt::Display for VoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
