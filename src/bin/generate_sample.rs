//! Generates synthetic calibration logs so the viewer can be exercised
//! without the hardware test harness.

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Measured response of one voice: a slight per-voice gain error and DC
/// offset on top of the requested value, plus measurement noise that grows
/// as the sampling timespan shrinks.
fn measure(requested: f64, voice: u8, noise: f64, rng: &mut SimpleRng) -> f64 {
    let gain_error = 1.0 + (voice as f64 - 3.5) * 0.0015;
    let offset = (voice as f64 - 3.5) * 0.01;
    requested * gain_error + offset + rng.gauss(0.0, noise)
}

fn write_log(
    path: &str,
    samples_per_voice: usize,
    timespan_ms: u64,
    rng: &mut SimpleRng,
) -> Result<(), Box<dyn std::error::Error>> {
    let types = ["pitch.osc1", "pitch.osc2", "cutoff.filter"];
    // Shorter measurement windows read noisier.
    let noise = 0.02 * (1000.0 / timespan_ms as f64).sqrt();

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["type", "voice", "test_semis", "actual_semis", "elapsed_ms"])?;

    let mut elapsed_ms: u64 = 0;
    let mut rows = 0usize;
    for kind in types {
        for voice in 0u8..8 {
            for i in 0..samples_per_voice {
                // Sweep the requested offset over four octaves.
                let test_semis = 48.0 * i as f64 / (samples_per_voice - 1).max(1) as f64;
                let actual_semis = measure(test_semis, voice, noise, rng);
                elapsed_ms += timespan_ms;

                writer.write_record([
                    kind.to_string(),
                    voice.to_string(),
                    format!("{test_semis:.3}"),
                    format!("{actual_semis:.4}"),
                    elapsed_ms.to_string(),
                ])?;
                rows += 1;
            }
        }
    }
    writer.flush()?;

    println!("Wrote {rows} records to {path}");
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = SimpleRng::new(42);

    write_log("50_tuning_samples_100ms_timespan.csv", 50, 100, &mut rng)?;
    write_log("10_tuning_samples_1000ms_timespan.csv", 10, 1000, &mut rng)?;

    Ok(())
}
