use anyhow::{anyhow, Result};
use macroquad::audio::{load_sound_from_bytes, play_sound, PlaySoundParams, Sound};

/// The two game sound effects.
///
/// Both tones are synthesized at startup, so the binary ships without
/// audio assets. The decoded sounds are released when the bank drops.
pub struct SoundBank {
    eat: Sound,
    wall: Sound,
    volume: f32,
}

impl SoundBank {
    /// Synthesize and decode both effects. Failures are fatal at startup.
    pub async fn load(volume: f32) -> Result<Self> {
        // Short high beep for food, longer low buzz for a collision
        let eat_bytes = sine_wave_wav(880.0, 0.08, 0.6);
        let wall_bytes = sine_wave_wav(110.0, 0.25, 0.7);

        let eat = load_sound_from_bytes(&eat_bytes)
            .await
            .map_err(|err| anyhow!("failed to load eat sound: {:?}", err))?;
        let wall = load_sound_from_bytes(&wall_bytes)
            .await
            .map_err(|err| anyhow!("failed to load wall sound: {:?}", err))?;

        Ok(Self {
            eat,
            wall,
            volume: volume.clamp(0.0, 1.0),
        })
    }

    pub fn play_eat(&self) {
        self.play(&self.eat);
    }

    pub fn play_wall(&self) {
        self.play(&self.wall);
    }

    fn play(&self, sound: &Sound) {
        play_sound(
            sound,
            PlaySoundParams {
                looped: false,
                volume: self.volume,
            },
        );
    }
}

/// Build a PCM16 mono WAV buffer holding one sine tone.
fn sine_wave_wav(frequency_hz: f32, duration_seconds: f32, amplitude: f32) -> Vec<u8> {
    let sample_rate: u32 = 44_100;
    let num_samples = (duration_seconds * sample_rate as f32) as u32;
    let block_align: u16 = 2; // mono 16-bit
    let byte_rate = sample_rate * block_align as u32;
    let data_size = num_samples * 2;

    let mut data = Vec::with_capacity(44 + data_size as usize);

    // RIFF header
    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&(36 + data_size).to_le_bytes());
    data.extend_from_slice(b"WAVE");
    // fmt chunk
    data.extend_from_slice(b"fmt ");
    data.extend_from_slice(&16u32.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes()); // PCM
    data.extend_from_slice(&1u16.to_le_bytes()); // channels
    data.extend_from_slice(&sample_rate.to_le_bytes());
    data.extend_from_slice(&byte_rate.to_le_bytes());
    data.extend_from_slice(&block_align.to_le_bytes());
    data.extend_from_slice(&16u16.to_le_bytes()); // bits per sample
    // data chunk
    data.extend_from_slice(b"data");
    data.extend_from_slice(&data_size.to_le_bytes());

    let peak = amplitude.clamp(0.0, 1.0) * i16::MAX as f32;
    for n in 0..num_samples {
        let t = n as f32 / sample_rate as f32;
        let sample = (peak * (std::f32::consts::TAU * frequency_hz * t).sin()) as i16;
        data.extend_from_slice(&sample.to_le_bytes());
    }

    data
}
