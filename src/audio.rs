use macroquad::audio::{PlaySoundParams, Sound, load_sound, load_sound_from_bytes, play_sound};

pub const MUSIC_PATH: &str = "assets/music.ogg";

const SAMPLE_RATE: u32 = 44_100;

/// Background music plus the eat and die cues. Anything that failed to load
/// is simply skipped at play time.
pub struct Audio {
    music: Option<Sound>,
    eat: Option<Sound>,
    die: Option<Sound>,
    volume: f32,
}

impl Audio {
    pub async fn load(music_path: &str, volume: f32) -> Self {
        let music = match load_sound(music_path).await {
            Ok(sound) => Some(sound),
            Err(err) => {
                log::warn!("no background music at {music_path}: {err:?}");
                None
            }
        };
        let eat = tone(880.0, 0.08, 0.6).await;
        let die = tone(110.0, 0.25, 0.7).await;
        Self { music, eat, die, volume: volume.clamp(0.0, 1.0) }
    }

    /// Start the looped background track, if there is one.
    pub fn start_music(&self) {
        if let Some(music) = &self.music {
            play_sound(music, PlaySoundParams { looped: true, volume: 0.5 * self.volume });
        }
    }

    pub fn play_eat(&self) {
        self.cue(self.eat.as_ref(), 0.35);
    }

    pub fn play_die(&self) {
        self.cue(self.die.as_ref(), 0.6);
    }

    fn cue(&self, sound: Option<&Sound>, gain: f32) {
        if let Some(sound) = sound {
            play_sound(sound, PlaySoundParams { looped: false, volume: gain * self.volume });
        }
    }
}

async fn tone(frequency_hz: f32, duration_seconds: f32, volume: f32) -> Option<Sound> {
    let bytes = sine_wav(frequency_hz, duration_seconds, volume);
    match load_sound_from_bytes(&bytes).await {
        Ok(sound) => Some(sound),
        Err(err) => {
            log::warn!("failed to build {frequency_hz}Hz cue: {err:?}");
            None
        }
    }
}

/// Mono PCM16 WAV holding a sine tone.
pub fn sine_wav(frequency_hz: f32, duration_seconds: f32, volume: f32) -> Vec<u8> {
    let num_samples = (duration_seconds.max(0.0) * SAMPLE_RATE as f32) as u32;
    let block_align: u16 = 2;
    let byte_rate = SAMPLE_RATE * block_align as u32;
    let data_size = num_samples * 2;

    let mut data = Vec::with_capacity(data_size as usize + 44);
    data.extend_from_slice(b"RIFF");
    data.extend_from_slice(&(36 + data_size).to_le_bytes());
    data.extend_from_slice(b"WAVE");
    data.extend_from_slice(b"fmt ");
    data.extend_from_slice(&16u32.to_le_bytes());
    data.extend_from_slice(&1u16.to_le_bytes()); // PCM
    data.extend_from_slice(&1u16.to_le_bytes()); // mono
    data.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    data.extend_from_slice(&byte_rate.to_le_bytes());
    data.extend_from_slice(&block_align.to_le_bytes());
    data.extend_from_slice(&16u16.to_le_bytes());
    data.extend_from_slice(b"data");
    data.extend_from_slice(&data_size.to_le_bytes());

    let amplitude = volume.clamp(0.0, 1.0) * 0.7;
    for n in 0..num_samples {
        let t = n as f32 / SAMPLE_RATE as f32;
        let sample = (amplitude * (std::f32::consts::TAU * frequency_hz * t).sin() * i16::MAX as f32) as i16;
        data.extend_from_slice(&sample.to_le_bytes());
    }
    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wav_header_and_length() {
        let wav = sine_wav(440.0, 0.01, 0.5);
        let samples = (0.01 * SAMPLE_RATE as f32) as usize;
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[36..40], b"data");
        assert_eq!(wav.len(), 44 + samples * 2);
        let declared = u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]);
        assert_eq!(declared as usize, samples * 2);
    }

    #[test]
    fn silent_at_zero_volume() {
        let wav = sine_wav(440.0, 0.005, 0.0);
        assert!(wav[44..].iter().all(|b| *b == 0));
    }
}
