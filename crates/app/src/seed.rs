//! Run-seed selection: an optional `--seed N` flag, otherwise a mixed
//! time/pid/counter value so consecutive launches differ.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Cli(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn value(self) -> u64 {
        match self {
            Self::Cli(seed) | Self::Generated(seed) => seed,
        }
    }
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(std::process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);
    mix_seed((now_nanos as u64) ^ ((now_nanos >> 64) as u64) ^ pid.rotate_left(17) ^ counter.rotate_left(7))
}

pub fn resolve_seed_from_args(args: &[String], generated_seed: u64) -> Result<SeedChoice, String> {
    let mut selected = None;
    let mut index = 1usize;

    while index < args.len() {
        let argument = args[index].as_str();
        let value = if argument == "--seed" {
            index += 1;
            let Some(raw) = args.get(index) else {
                return Err("missing value for --seed".to_string());
            };
            Some(raw.as_str())
        } else {
            argument.strip_prefix("--seed=")
        };

        if let Some(raw) = value {
            if selected.is_some() {
                return Err("seed provided more than once".to_string());
            }
            let parsed = raw
                .parse::<u64>()
                .map_err(|_| format!("seed value '{raw}' must be a number"))?;
            selected = Some(parsed);
        }
        index += 1;
    }

    Ok(match selected {
        Some(seed) => SeedChoice::Cli(seed),
        None => SeedChoice::Generated(generated_seed),
    })
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}
