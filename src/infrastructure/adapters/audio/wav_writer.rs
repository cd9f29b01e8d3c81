//! WAV File Writer - 实现 AudioWriterPort
//!
//! 容器格式由输出路径扩展名决定，目前只支持 .wav。

use async_trait::async_trait;
use std::path::Path;
use tokio::fs;

use crate::application::ports::{AudioWriterPort, WriteError};
use crate::infrastructure::adapters::audio::codec::encode_wav_pcm16;

/// 文件系统 WAV 写入器
///
/// 单声道 16 位 PCM 输出；已存在的文件会被覆盖。
pub struct WavFileWriter;

impl WavFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WavFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioWriterPort for WavFileWriter {
    async fn write(
        &self,
        path: &Path,
        samples: &[f32],
        sample_rate: u32,
    ) -> Result<u64, WriteError> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("wav") => {}
            other => {
                return Err(WriteError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ));
            }
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| WriteError::IoError(e.to_string()))?;
            }
        }

        let data = encode_wav_pcm16(samples, sample_rate, 1);
        fs::write(path, &data)
            .await
            .map_err(|e| WriteError::IoError(e.to_string()))?;

        tracing::debug!(
            path = %path.display(),
            bytes = data.len(),
            sample_rate,
            "Wrote WAV file"
        );

        Ok(data.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_write_wav() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("out.wav");

        let writer = WavFileWriter::new();
        let bytes = writer.write(&path, &[0.0; 2400], 24000).await.unwrap();

        assert_eq!(bytes, 44 + 2400 * 2);
        assert_eq!(std::fs::metadata(&path).unwrap().len(), bytes);
    }

    #[tokio::test]
    async fn test_write_overwrites_existing_file() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("out.wav");
        std::fs::write(&path, b"old contents").unwrap();

        let writer = WavFileWriter::new();
        writer.write(&path, &[0.0; 100], 24000).await.unwrap();

        let data = std::fs::read(&path).unwrap();
        assert_eq!(&data[0..4], b"RIFF");
    }

    #[tokio::test]
    async fn test_unsupported_extension_rejected() {
        let temp_dir = tempdir().unwrap();
        let writer = WavFileWriter::new();

        let result = writer
            .write(&temp_dir.path().join("out.mp3"), &[0.0; 100], 24000)
            .await;
        assert!(matches!(result, Err(WriteError::UnsupportedFormat(_))));

        let result = writer
            .write(&temp_dir.path().join("noext"), &[0.0; 100], 24000)
            .await;
        assert!(matches!(result, Err(WriteError::UnsupportedFormat(_))));
    }

    #[tokio::test]
    async fn test_creates_parent_directories() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("nested/dir/out.wav");

        let writer = WavFileWriter::new();
        writer.write(&path, &[0.0; 100], 24000).await.unwrap();
        assert!(path.exists());
    }
}
