//! Sine voice through a modulated delay line, with MIDI parameter control.
//!
//! CC 21: LFO rate, CC 22: depth, CC 23: feedback, CC 24: dry/wet, CC 25: volume.

use audio_midi_shell::{AudioGenerator, AudioMidiShell};
use simple_logger::SimpleLogger;

use delayline_dsp::{DelayLine, DelayLineOps, Phasor, SampleRate};

const SAMPLE_RATE: u32 = 48000;
const BLOCK_SIZE: usize = 32;
const MAX_DELAY: usize = 4096;

fn main() -> ! {
    SimpleLogger::new()
        .with_level(log::LevelFilter::Debug)
        .init()
        .unwrap();

    let sample_rate = SampleRate::new(SAMPLE_RATE as f32).unwrap();

    AudioMidiShell::run_forever(SAMPLE_RATE, BLOCK_SIZE, App::new(sample_rate));
}

#[derive(Debug)]
struct App {
    sample_rate: SampleRate,
    osc: Phasor,
    lfo: Phasor,
    line: Box<DelayLine<f32, MAX_DELAY>>,
    level: f32,
    base_delay: f32,
    depth: f32,
    feedback: f32,
    mix: f32,
    volume: f32,
}

impl App {
    pub fn new(sample_rate: SampleRate) -> Self {
        Self {
            sample_rate,
            osc: Phasor::new(sample_rate),
            lfo: Phasor::new(sample_rate),
            line: Box::new(DelayLine::new()),
            level: 0.0,
            base_delay: sample_rate.ms_to_samples(12.0),
            depth: 0.5,
            feedback: 0.0,
            mix: 0.5,
            volume: 0.5,
        }
    }
}

impl AudioGenerator for App {
    fn init(&mut self, _block_size: usize) {
        self.osc.init(220.0, 0.0);
        self.lfo.init(0.5, 0.0);
        self.line.init();
    }

    fn process(&mut self, samples_left: &mut [f32], samples_right: &mut [f32]) {
        let max_depth = self.sample_rate.ms_to_samples(8.0);

        for (left, right) in samples_left.iter_mut().zip(samples_right.iter_mut()) {
            let dry = self.level * (2.0 * std::f32::consts::PI * self.osc.next()).sin();

            let triangle = 1.0 - (2.0 * self.lfo.next() - 1.0).abs();
            let delay = self.base_delay + self.depth * max_depth * triangle;
            let wet = self.line.read_hermite(delay);
            self.line.write(dry + wet * self.feedback);

            let mix = (dry + (wet - dry) * self.mix) * self.volume;
            *left = mix;
            *right = (dry + (wet - dry) * (1.0 - self.mix)) * self.volume;
        }
    }

    fn process_midi(&mut self, message: Vec<u8>) {
        match message[0] & 0xF0 {
            0x80 => {
                // Note off
                self.level = 0.0;
                log::info!("Note off: {}", message[1]);
            }
            0x90 if message[2] != 0 => {
                // Note on
                let frequency = 440.0 * 2.0_f32.powf((message[1] as f32 - 69.0) / 12.0);
                self.osc.set_frequency(frequency);
                self.level = message[2] as f32 / 127.0;
                log::info!("Note on: {}", message[1]);
            }
            0xB0 => {
                // Control change
                let value = message[2] as f32 / 127.0;
                match message[1] {
                    21 => {
                        self.lfo.set_frequency(0.05 + value * 5.0);
                        log::info!("Rate: {} Hz", self.lfo.frequency());
                    }
                    22 => {
                        self.depth = value;
                        log::info!("Depth: {}", self.depth);
                    }
                    23 => {
                        self.feedback = value * 0.9;
                        log::info!("Feedback: {}", self.feedback);
                    }
                    24 => {
                        self.mix = value;
                        log::info!("Dry/Wet: {}", self.mix);
                    }
                    25 => {
                        self.volume = value;
                        log::info!("Volume: {}", self.volume);
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }
}
