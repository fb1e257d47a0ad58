use std::fs;
use std::io::{self, BufRead, Read};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use zeroize::Zeroizing;

use recombine::cli::{Cli, Commands};
use recombine::codec::decode;
use recombine::commands::{Reconstruction, combine_shares, solve_test_cases};

/// Read a test-case document from a file, or from stdin for `-`
fn read_document(path: &Path) -> Result<Zeroizing<String>> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read test cases from stdin")?;
        return Ok(Zeroizing::new(text));
    }

    fs::read_to_string(path)
        .map(Zeroizing::new)
        .with_context(|| format!("Failed to read {}", path.display()))
}

/// Read shares securely from stdin (hidden input when TTY available)
/// User should input shares one per line, followed by an empty line to finish
fn read_shares() -> Result<Zeroizing<Vec<String>>> {
    let mut shares = Zeroizing::new(Vec::new());

    if atty::is(atty::Stream::Stdin) {
        // Interactive mode - use rpassword for hidden input
        eprintln!("Enter shares as 'index base value' (one per line, empty line to finish):");

        loop {
            let share = Zeroizing::new(
                rpassword::read_password().context("Failed to read share from stdin")?,
            );

            // Empty line signals we're done
            if share.trim().is_empty() {
                break;
            }

            shares.push(share.trim().to_string());
        }
    } else {
        // Non-interactive mode - read from stdin
        let stdin = io::stdin();
        let handle = stdin.lock();

        for line in handle.lines() {
            let line = Zeroizing::new(line.context("Failed to read line from stdin")?);
            let trimmed = line.trim();

            // Empty line signals we're done
            if trimmed.is_empty() {
                break;
            }

            shares.push(trimmed.to_string());
        }
    }

    if shares.is_empty() {
        anyhow::bail!("No shares provided");
    }

    Ok(shares)
}

/// Print the points behind a reconstruction to stderr
fn report_points(reconstruction: &Reconstruction) {
    eprintln!(
        "Using {} point(s), mode={}",
        *reconstruction.threshold, reconstruction.mode
    );
    for decoded in &reconstruction.used {
        let share = &decoded.share;
        eprintln!(
            "Point {}: x={}, y={} (decoded from \"{}\" in base {})",
            share.index(),
            decoded.point.x(),
            decoded.point.y(),
            share.digits(),
            share.base()
        );
    }
    for decoded in &reconstruction.unused {
        eprintln!("Share {} not needed for threshold", decoded.share.index());
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve { files } => {
            let sources = if files.is_empty() {
                vec![std::path::PathBuf::from("-")]
            } else {
                files
            };

            for path in &sources {
                let document = read_document(path)?;
                let solved = solve_test_cases(&document, cli.mode)
                    .with_context(|| format!("Failed to solve {}", path.display()))?;

                for case in &solved {
                    if cli.verbose {
                        eprintln!("\nSolving {}", case.label);
                        report_points(&case.reconstruction);
                    }
                    let secret = Zeroizing::new(case.reconstruction.secret.to_string());
                    println!("Secret for {}: {}", case.label, &*secret);
                }
            }
        }
        Commands::Combine { threshold } => {
            // Read shares securely from stdin
            let lines = read_shares()?;

            let reconstruction = combine_shares(&lines, threshold, cli.mode)?;
            if cli.verbose {
                report_points(&reconstruction);
            }
            let secret = Zeroizing::new(reconstruction.secret.to_string());
            println!("{}", &*secret);
        }
        Commands::Decode { value, base } => {
            let value = Zeroizing::new(value);
            let decoded = decode(&value, base).context("Failed to decode value")?;
            println!("{decoded}");
        }
    }

    Ok(())
}
