// Split an integer secret into shares, after

// Shamir A.,
// How to Share a Secret,
// Communications of the ACM, 22, 1979, pp. 612--613.

// Usage: shamir-split <secret> <threshold> <shares> [--prime P] [--seed N]
//
// Prints each share as (x|y), then combines all of them again as a
// sanity check. Any `threshold` of the printed lines can later be fed
// to shamir-combine.

use std::io::{self, Write};
use std::process;

use clap::{value_t, App, AppSettings, Arg, ArgMatches};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use prime_ssss::{combine_shares, split_secret, PrimeField, Share, DEFAULT_PRIME};

fn field_from(matches: &ArgMatches) -> prime_ssss::Result<PrimeField> {
    if matches.is_present("prime") {
        let p = value_t!(matches, "prime", u64).unwrap_or_else(|e| e.exit());
        PrimeField::new(p)
    } else {
        Ok(PrimeField::default())
    }
}

fn run(matches: &ArgMatches) -> prime_ssss::Result<(Vec<Share>, u64)> {
    let secret = value_t!(matches, "secret", i64).unwrap_or_else(|e| e.exit());
    let threshold = value_t!(matches, "threshold", usize).unwrap_or_else(|e| e.exit());
    let count = value_t!(matches, "shares", usize).unwrap_or_else(|e| e.exit());
    let field = field_from(matches)?;

    // OS entropy unless asked to be reproducible
    let mut rng = if matches.is_present("seed") {
        let seed = value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit());
        info!("using fixed seed {}", seed);
        StdRng::seed_from_u64(seed)
    } else {
        StdRng::from_entropy()
    };

    let shares = split_secret(&field, secret, threshold, count, &mut rng)?;

    // reconstruction with all shares
    // (it also works with any subset >= threshold)
    let recovered = combine_shares(&field, &shares)?;
    Ok((shares, recovered))
}

fn report(shares: &[Share], recovered: u64) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for (i, share) in shares.iter().enumerate() {
        writeln!(out, "Share {}: {}", i + 1, share)?;
    }
    writeln!(out, "Secret reconstructed by all players: {}", recovered)?;
    out.flush()
}

fn main() {
    env_logger::init();

    let prime_help = format!("prime modulus of the field (default {})", DEFAULT_PRIME);
    let matches = App::new("shamir-split")
        .version("1.0")
        .author("Declan Malone <idablack@users.sourceforge.net>")
        .about("Shamir's Secret Sharing Scheme")
        .setting(AppSettings::AllowNegativeNumbers)
        .arg(Arg::with_name("secret")
             .help("integer secret, reduced mod P")
             .required(true)
             .index(1))
        .arg(Arg::with_name("threshold")
             .help("number of shares needed to reconstruct")
             .required(true)
             .index(2))
        .arg(Arg::with_name("shares")
             .help("number of shares to create")
             .required(true)
             .index(3))
        .arg(Arg::with_name("prime")
             .short("p")
             .long("prime")
             .takes_value(true)
             .help(&prime_help))
        .arg(Arg::with_name("seed")
             .short("s")
             .long("seed")
             .takes_value(true)
             .help("seed the random number generator (testing only)"))
        .get_matches();

    let (shares, recovered) = run(&matches).unwrap_or_else(|e| {
        eprintln!("Fatal: {}", e);
        process::exit(1)
    });

    // a reader that hangs up early (e.g. `| head -3`) is not an error
    match report(&shares, recovered) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
        Err(e) => {
            eprintln!("Fatal: writing stdout: {}", e);
            process::exit(1);
        }
    }
}
