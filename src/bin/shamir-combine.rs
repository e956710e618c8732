// Reconstruct a secret from shares, after

// Shamir A.,
// How to Share a Secret,
// Communications of the ACM, 22, 1979, pp. 612--613.

// Usage: cat share1 share2 ... | shamir-combine [--prime P] [--at X]
//
// Shares are read one per line in the (x|y) form that shamir-split
// prints; a leading "Share N: " label is skipped, so shamir-split's
// output can be piped in after dropping the last line. With --at, a
// new share at x = X is printed instead of the secret.

use std::io::{self, BufRead, Write};
use std::process;

use clap::{value_t, App, Arg, ArgMatches};
use log::debug;

use prime_ssss::{combine_shares, recover_share, PrimeField, Share, DEFAULT_PRIME};

fn field_from(matches: &ArgMatches) -> prime_ssss::Result<PrimeField> {
    if matches.is_present("prime") {
        let p = value_t!(matches, "prime", u64).unwrap_or_else(|e| e.exit());
        PrimeField::new(p)
    } else {
        Ok(PrimeField::default())
    }
}

fn fatal(message: String) -> ! {
    eprintln!("Fatal: {}", message);
    process::exit(1)
}

// "(x|y)", optionally preceded by a "Share N:" label
fn parse_share(line: &str) -> Option<Share> {
    let text = match line.rfind(':') {
        Some(i) => &line[i + 1..],
        None => line,
    };
    let inner = text.trim().strip_prefix('(')?.strip_suffix(')')?;
    let mut fields = inner.split('|');
    let x = fields.next()?.trim().parse().ok()?;
    let y = fields.next()?.trim().parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    Some(Share::new(x, y))
}

fn parse_shares() -> Vec<Share> {
    let stdin = io::stdin();
    let mut shares = Vec::new();

    for (count, line) in stdin.lock().lines().enumerate() {
        let line = line.unwrap_or_else(|e| fatal(format!("reading stdin: {}", e)));
        if line.trim().is_empty() {
            continue;
        }
        match parse_share(&line) {
            Some(share) => shares.push(share),
            None => fatal(format!("Line {}: expected (x|y), got {:?}", count + 1, line)),
        }
    }
    debug!("read {} shares", shares.len());
    shares
}

fn main() {
    env_logger::init();

    let prime_help = format!("prime modulus of the field (default {})", DEFAULT_PRIME);
    let matches = App::new("shamir-combine")
        .version("1.0")
        .author("Declan Malone <idablack@users.sourceforge.net>")
        .about("Shamir's Secret Sharing Scheme")
        .usage("cat share1 share2 ... | shamir-combine [--prime P] [--at X]")
        .arg(Arg::with_name("prime")
             .short("p")
             .long("prime")
             .takes_value(true)
             .help(&prime_help))
        .arg(Arg::with_name("at")
             .long("at")
             .takes_value(true)
             .help("print a new share at this x instead of the secret"))
        .get_matches();

    let field = field_from(&matches).unwrap_or_else(|e| fatal(e.to_string()));
    let shares = parse_shares();

    let result = if matches.is_present("at") {
        let x = value_t!(matches, "at", u64).unwrap_or_else(|e| e.exit());
        recover_share(&field, &shares, x).map(|share| share.to_string())
    } else {
        combine_shares(&field, &shares).map(|secret| format!("Secret: {}", secret))
    };

    let line = result.unwrap_or_else(|e| fatal(e.to_string()));
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match writeln!(out, "{}", line).and_then(|_| out.flush()) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
        Err(e) => fatal(format!("writing stdout: {}", e)),
    }
}
