//! 文本分段
//!
//! Kokoro 管线按片段产出音频：合成前先把输入文本切成句子级片段，
//! 每个片段对应一次推理、一个音频缓冲。
//! 切分规则：句末标点总是切分；逗号等弱标点只在片段
//! 达到最小字符数后才切分，避免产生过碎的短片段。

/// 弱标点生效所需的最小字符数
pub const DEFAULT_MIN_CHARS: usize = 24;

/// 分段配置
#[derive(Debug, Clone)]
pub struct SegmentConfig {
    /// 最小字符数（弱标点切分阈值）
    pub min_chars: usize,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            min_chars: DEFAULT_MIN_CHARS,
        }
    }
}

/// 句末标点，总是切分
#[inline]
fn ends_sentence(ch: char) -> bool {
    matches!(ch, '.' | '?' | '!' | '。' | '？' | '！')
}

/// 弱标点，达到 min_chars 后切分
#[inline]
fn is_soft_break(ch: char) -> bool {
    matches!(ch, ',' | ';' | ':' | '，' | '；' | '：')
}

/// 把一行文本切成片段
///
/// 单遍扫描：遇到句末标点立即收尾；遇到弱标点且当前片段
/// 已达 min_chars 时收尾；行尾残留并入最后一个片段。
fn split_line(line: &str, config: &SegmentConfig) -> Vec<String> {
    let mut segments: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut count = 0usize;

    for ch in line.chars() {
        current.push(ch);
        count += 1;

        let cut = ends_sentence(ch) || (is_soft_break(ch) && count >= config.min_chars);
        if cut {
            let piece = current.trim();
            if !piece.is_empty() {
                segments.push(piece.to_string());
            }
            current.clear();
            count = 0;
        }
    }

    let rest = current.trim();
    if !rest.is_empty() {
        // 行尾没有标点的残留：若过短则并入前一个片段
        if rest.chars().count() < config.min_chars {
            if let Some(last) = segments.last_mut() {
                last.push(' ');
                last.push_str(rest);
            } else {
                segments.push(rest.to_string());
            }
        } else {
            segments.push(rest.to_string());
        }
    }

    segments
}

/// 对整段文本分段
///
/// 先按行切分（空行丢弃），行内再按标点切分；不跨行合并。
/// 空白文本返回空列表，对应管线零片段的情形。
pub fn segment_text(text: &str, config: &SegmentConfig) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .flat_map(|line| split_line(line, config))
        .collect()
}
