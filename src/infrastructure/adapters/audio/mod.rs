//! Audio Adapters

mod codec;
mod wav_writer;

pub use codec::{decode_wav, encode_wav_pcm16, CodecError, DecodedAudio};
pub use wav_writer::WavFileWriter;
