use anyhow::{Context, Result};

/// Seeded splitmix64 stream with normal draws (Marsaglia polar method).
struct Sampler {
    state: u64,
    spare: Option<f64>,
}

impl Sampler {
    fn seeded(seed: u64) -> Self {
        Sampler { state: seed, spare: None }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[-1, 1)`.
    fn signed_unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 52) as f64 - 1.0
    }

    fn normal(&mut self, mean: f64, std_dev: f64) -> f64 {
        if let Some(z) = self.spare.take() {
            return mean + std_dev * z;
        }
        loop {
            let (u, v) = (self.signed_unit(), self.signed_unit());
            let s = u * u + v * v;
            if s > 0.0 && s < 1.0 {
                let scale = (-2.0 * s.ln() / s).sqrt();
                self.spare = Some(v * scale);
                return mean + std_dev * u * scale;
            }
        }
    }
}

/// Cluster centre and spread for each measurement column.
struct Species {
    name: &'static str,
    means: [f64; 4],
    spread: [f64; 4],
}

const SPECIES: [Species; 3] = [
    Species {
        name: "setosa",
        means: [5.0, 3.4, 1.5, 0.25],
        spread: [0.35, 0.38, 0.17, 0.1],
    },
    Species {
        name: "versicolor",
        means: [5.9, 2.8, 4.3, 1.3],
        spread: [0.5, 0.3, 0.47, 0.2],
    },
    Species {
        name: "virginica",
        means: [6.6, 3.0, 5.5, 2.0],
        spread: [0.63, 0.32, 0.55, 0.27],
    },
];

const ROWS_PER_SPECIES: usize = 50;

fn main() -> Result<()> {
    let mut sampler = Sampler::seeded(42);

    let output_path = "sample_data.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;

    writer.write_record([
        "sepal_length",
        "sepal_width",
        "petal_length",
        "petal_width",
        "species",
    ])?;

    let mut rows = 0;
    for species in &SPECIES {
        for _ in 0..ROWS_PER_SPECIES {
            let mut record: Vec<String> = species
                .means
                .iter()
                .zip(species.spread.iter())
                .map(|(&mean, &sd)| format!("{:.1}", sampler.normal(mean, sd).max(0.1)))
                .collect();
            record.push(species.name.to_string());
            writer.write_record(&record)?;
            rows += 1;
        }
    }
    writer.flush().context("flushing CSV writer")?;

    println!("Wrote {rows} rows to {output_path}");
    Ok(())
}
