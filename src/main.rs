//! Domain Vet - validate domain names and audit the compiled TLD table
//!
//! `domain-vet [--allow-local] <domain>...` validates candidates and exits
//! non-zero if any fails; `domain-vet audit [file]` diffs the compiled TLD
//! tables against the IANA list (downloading it when no file is given).

use std::env;
use std::process;

use anyhow::Context;
use domain_vet::{audit, DomainValidator};

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        process::exit(if args.is_empty() { 2 } else { 0 });
    }

    let outcome = if args[0] == "audit" {
        run_audit(args.get(1).map(String::as_str)).await
    } else {
        run_validate(&args)
    };

    match outcome {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("❌ Error: {e:#}");
            process::exit(2);
        }
    }
}

/// Validate each candidate from the command line. Returns `Ok(true)` only
/// when every candidate validates.
fn run_validate(args: &[String]) -> anyhow::Result<bool> {
    let mut allow_local = false;
    let mut candidates = Vec::new();
    for arg in args {
        match arg.as_str() {
            "--allow-local" => allow_local = true,
            flag if flag.starts_with('-') => {
                anyhow::bail!("unknown option '{flag}' (see --help)");
            }
            domain => candidates.push(domain),
        }
    }
    if candidates.is_empty() {
        anyhow::bail!("no domain given (see --help)");
    }

    let validator = DomainValidator::instance(allow_local);
    let mut all_valid = true;
    for candidate in candidates {
        if validator.is_valid(candidate) {
            println!("✅ {candidate}");
        } else {
            println!("❌ {candidate}");
            all_valid = false;
        }
    }
    Ok(all_valid)
}

/// Diff the compiled TLD tables against the IANA list. Returns `Ok(true)`
/// when the tables are up to date.
async fn run_audit(path: Option<&str>) -> anyhow::Result<bool> {
    let list = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read TLD list from '{path}'"))?,
        None => {
            println!("Downloading {}", audit::IANA_TLD_LIST_URL);
            audit::fetch_list(audit::IANA_TLD_LIST_URL).await?
        }
    };

    let report = audit::diff_report(&list)?;
    println!("Audited against {}", report.version);
    if report.is_up_to_date() {
        println!("✅ TLD table is up to date");
        return Ok(true);
    }

    println!("Entries missing from the compiled TLD table:");
    for entry in &report.missing {
        println!("    \"{entry}\",");
    }
    Ok(false)
}

fn print_help() {
    println!("Domain Vet - domain-name validation and TLD table audit");
    println!();
    println!("USAGE:");
    println!("    domain-vet [--allow-local] <domain>...");
    println!("    domain-vet audit [file]");
    println!();
    println!("OPTIONS:");
    println!("    --allow-local    accept bare hostnames and local pseudo-TLDs");
    println!("    -h, --help       show this help");
    println!();
    println!("The audit subcommand reads an IANA tlds-alpha-by-domain.txt file,");
    println!("downloading the current one when no file is given, and lists every");
    println!("entry the compiled TLD table does not recognize.");
}
