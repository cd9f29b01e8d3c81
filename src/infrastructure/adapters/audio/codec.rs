//! WAV 编解码
//!
//! - encode: f32 PCM → 16 位 WAV（手写 RIFF 头）
//! - decode: WAV 字节 → f32 PCM（基于 symphonia，容忍非标准头）

use std::io::Cursor;
use symphonia::core::audio::SampleBuffer;
use symphonia::core::codecs::DecoderOptions;
use symphonia::core::formats::FormatOptions;
use symphonia::core::io::MediaSourceStream;
use symphonia::core::meta::MetadataOptions;
use symphonia::core::probe::Hint;
use thiserror::Error;

/// 编解码错误
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Decoding error: {0}")]
    DecodingError(String),
}

/// 解码后的 PCM 音频
#[derive(Debug, Clone)]
pub struct DecodedAudio {
    /// 交织的 f32 采样
    pub samples: Vec<f32>,
    pub sample_rate: u32,
    pub channels: u8,
}

/// 将 f32 采样编码为 16 位 PCM WAV
///
/// 采样先 clamp 到 [-1.0, 1.0] 再量化
pub fn encode_wav_pcm16(samples: &[f32], sample_rate: u32, channels: u16) -> Vec<u8> {
    let bits_per_sample: u16 = 16;
    let byte_rate = sample_rate * channels as u32 * (bits_per_sample / 8) as u32;
    let block_align = channels * (bits_per_sample / 8);
    let data_size = samples.len() * 2;
    let file_size = 36 + data_size;

    let mut wav = Vec::with_capacity(44 + data_size);

    // RIFF header
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(file_size as u32).to_le_bytes());
    wav.extend_from_slice(b"WAVE");

    // fmt chunk
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes()); // PCM
    wav.extend_from_slice(&channels.to_le_bytes());
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&bits_per_sample.to_le_bytes());

    // data chunk
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&(data_size as u32).to_le_bytes());
    for &sample in samples {
        let quantized = (sample.clamp(-1.0, 1.0) * 32767.0) as i16;
        wav.extend_from_slice(&quantized.to_le_bytes());
    }

    wav
}

/// 解码 WAV 字节为 f32 PCM
pub fn decode_wav(data: &[u8]) -> Result<DecodedAudio, CodecError> {
    let cursor = Cursor::new(data.to_vec());
    let mss = MediaSourceStream::new(Box::new(cursor), Default::default());

    let mut hint = Hint::new();
    hint.with_extension("wav");

    let probed = symphonia::default::get_probe()
        .format(
            &hint,
            mss,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )
        .map_err(|e| CodecError::DecodingError(format!("Probe failed: {}", e)))?;

    let mut format = probed.format;

    let track = format
        .default_track()
        .ok_or_else(|| CodecError::DecodingError("No audio track found".to_string()))?;
    let track_id = track.id;

    let sample_rate = track
        .codec_params
        .sample_rate
        .ok_or_else(|| CodecError::DecodingError("Unknown sample rate".to_string()))?;
    let channels = track
        .codec_params
        .channels
        .map(|c| c.count() as u8)
        .ok_or_else(|| CodecError::DecodingError("Unknown channel count".to_string()))?;

    let mut decoder = symphonia::default::get_codecs()
        .make(&track.codec_params, &DecoderOptions::default())
        .map_err(|e| CodecError::DecodingError(format!("Decoder creation failed: {}", e)))?;

    let mut samples: Vec<f32> = Vec::new();

    loop {
        let packet = match format.next_packet() {
            Ok(p) => p,
            Err(symphonia::core::errors::Error::IoError(e))
                if e.kind() == std::io::ErrorKind::UnexpectedEof =>
            {
                break;
            }
            Err(e) => {
                return Err(CodecError::DecodingError(format!(
                    "Packet read error: {}",
                    e
                )));
            }
        };

        if packet.track_id() != track_id {
            continue;
        }

        let decoded = match decoder.decode(&packet) {
            Ok(d) => d,
            Err(e) => {
                tracing::warn!("Decode error (skipping packet): {}", e);
                continue;
            }
        };

        let spec = *decoded.spec();
        let num_frames = decoded.frames();
        let mut sample_buf = SampleBuffer::<f32>::new(num_frames as u64, spec);
        sample_buf.copy_interleaved_ref(decoded);
        // SampleBuffer 容量可能大于实际帧数，只取有效部分
        let actual = num_frames * spec.channels.count();
        samples.extend(&sample_buf.samples()[..actual]);
    }

    Ok(DecodedAudio {
        samples,
        sample_rate,
        channels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_one_second_of_silence() {
        let wav = encode_wav_pcm16(&vec![0.0; 24000], 24000, 1);

        // 44 字节头 + 24000 个 16 位采样
        assert_eq!(wav.len(), 44 + 24000 * 2);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        // 采样率字段
        assert_eq!(u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]), 24000);
        // 位深字段
        assert_eq!(u16::from_le_bytes([wav[34], wav[35]]), 16);
    }

    #[test]
    fn test_encode_clamps_out_of_range_samples() {
        let wav = encode_wav_pcm16(&[2.0, -2.0], 24000, 1);
        let first = i16::from_le_bytes([wav[44], wav[45]]);
        let second = i16::from_le_bytes([wav[46], wav[47]]);
        assert_eq!(first, 32767);
        assert_eq!(second, -32767);
    }

    #[test]
    fn test_decode_recovers_format() {
        let samples: Vec<f32> = (0..2400).map(|i| (i as f32 / 2400.0) - 0.5).collect();
        let wav = encode_wav_pcm16(&samples, 24000, 1);

        let decoded = decode_wav(&wav).unwrap();
        assert_eq!(decoded.sample_rate, 24000);
        assert_eq!(decoded.channels, 1);
        assert_eq!(decoded.samples.len(), 2400);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_wav(b"definitely not a wav file").is_err());
    }
}
