//! rlwe-trial: repeated keygen / encrypt / decrypt round trips
//!
//! Each trial encrypts a random message and checks that decryption returns
//! it unchanged. Exits non-zero if any trial fails.

use std::time::Instant;

use clap::Parser;
use eyre::{Result, WrapErr};
use rand::rngs::{OsRng, StdRng};
use rand::SeedableRng;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use rlwe_pke::params::{N, Q};
use rlwe_pke::{decrypt, encrypt, keygen, EntropySource, Message};

#[derive(Parser)]
#[command(name = "rlwe-trial")]
#[command(about = "Run Ring-LWE encryption round trips and count decryption failures")]
#[command(version)]
struct Args {
    /// Number of round trips
    #[arg(long, default_value = "100")]
    trials: usize,

    /// Random seed for a deterministic run (default: OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Generate one key pair and reuse it for every trial
    #[arg(long)]
    reuse_key: bool,

    /// Log every trial
    #[arg(long, short)]
    verbose: bool,
}

fn run<E: EntropySource>(entropy: &mut E, args: &Args) -> Result<usize> {
    let shared = if args.reuse_key {
        Some(keygen(entropy).wrap_err("key generation failed")?)
    } else {
        None
    };

    let mut fails = 0;
    for trial in 0..args.trials {
        let fresh;
        let (pk, sk) = match &shared {
            Some((pk, sk)) => (pk, sk),
            None => {
                fresh = keygen(entropy).wrap_err("key generation failed")?;
                (&fresh.0, &fresh.1)
            }
        };

        let message = Message::random(entropy).wrap_err("message sampling failed")?;
        let ct = encrypt(entropy, pk, &message).wrap_err("encryption failed")?;
        let recovered = decrypt(sk, &ct);

        let wrong = recovered.hamming_distance(&message);
        if wrong != 0 {
            fails += 1;
            warn!("trial {}: {} of {} bits wrong", trial, wrong, N);
        } else {
            debug!("trial {}: ok", trial);
        }
    }
    Ok(fails)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Ring-LWE round trips: N = {}, q = {}", N, Q);
    info!("Trials: {}", args.trials);
    info!("Key pair: {}", if args.reuse_key { "shared" } else { "fresh per trial" });

    let start = Instant::now();
    let fails = match args.seed {
        Some(seed) => {
            info!("Seed: {}", seed);
            run(&mut StdRng::seed_from_u64(seed), &args)?
        }
        None => run(&mut OsRng, &args)?,
    };
    info!("Elapsed: {:.2?}", start.elapsed());

    if fails == 0 {
        info!("All {} trials passed", args.trials);
        Ok(())
    } else {
        Err(eyre::eyre!("{} of {} trials failed", fails, args.trials))
    }
}
