#![deny(
    clippy::all,
    missing_debug_implementations,
    missing_copy_implementations
)]
#![warn(clippy::pedantic)]

mod config;
mod logging;

use std::process::ExitCode;

use chrono::{DateTime, Utc};
use clap::Parser;
use deterrent_lib::{Amount, Client, Report, Sweep};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no access token: set {}", config::TOKEN_VAR)]
    MissingCredential,

    #[error(transparent)]
    Run(#[from] deterrent_lib::Error),
}

#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Args {
    /// The spending category to sweep into savings
    #[clap(long, default_value = "EATING_OUT")]
    category: String,

    /// Only sweep transactions changed since this instant (RFC 3339)
    #[clap(long, default_value = "2019-05-01T00:00:00Z")]
    changes_since: DateTime<Utc>,

    /// Resolve and report, but don't move any money
    #[clap(long)]
    dry_run: bool,

    /// Verbosity of the output (-v, -vv, -vvv)
    #[clap(short, long, parse(from_occurrences))]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::set_up(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Error> {
    let client = Client::new(config::access_token()?)?;

    let dry_run = args.dry_run;
    let sweep = Sweep {
        category: args.category,
        changes_since: args.changes_since,
        dry_run,
    };

    tracing::debug!(?sweep, "starting sweep");
    let report = sweep.run(&client).await?;
    println!("{}", summary(&report, dry_run));

    Ok(())
}

fn summary(report: &Report, dry_run: bool) -> String {
    let prefix = if dry_run { "[dry run] " } else { "" };

    if report.transfers == 0 {
        return format!("{}nothing to sweep in {} ...", prefix, report.category);
    }

    format!(
        "{}swept {} from {} {} transaction(s) into '{}'",
        prefix,
        format_amount(&report.total),
        report.transfers,
        report.category,
        report.goal_name,
    )
}

fn format_amount(amount: &Amount) -> String {
    match rusty_money::iso::find(&amount.currency) {
        Some(currency) => rusty_money::Money::from_minor(amount.minor_units, currency).to_string(),
        None => {
            // sign printed explicitly: -50 / 100 truncates to 0 and would
            // otherwise lose it
            let sign = if amount.minor_units < 0 { "-" } else { "" };
            format!(
                "{} {}{}.{:02}",
                amount.currency,
                sign,
                (amount.minor_units / 100).abs(),
                (amount.minor_units % 100).abs()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use deterrent_lib::{Amount, Report};

    use super::{format_amount, summary};

    fn gbp(minor_units: i64) -> Amount {
        Amount {
            currency: "GBP".to_string(),
            minor_units,
        }
    }

    #[test]
    fn totals_are_reported_in_major_units() {
        assert_eq!(format_amount(&gbp(500)), "£5.00");
        assert_eq!(format_amount(&gbp(750)), "£7.50");
    }

    #[test]
    fn unknown_currencies_fall_back_to_a_plain_decimal() {
        let amount = Amount {
            currency: "ZZZ".to_string(),
            minor_units: 1234,
        };
        assert_eq!(format_amount(&amount), "ZZZ 12.34");
    }

    #[test]
    fn negative_fallback_amounts_keep_their_sign() {
        let amount = |minor_units| Amount {
            currency: "ZZZ".to_string(),
            minor_units,
        };

        assert_eq!(format_amount(&amount(-50)), "ZZZ -0.50");
        assert_eq!(format_amount(&amount(-1234)), "ZZZ -12.34");
    }

    #[test]
    fn an_empty_batch_reports_nothing_to_sweep() {
        let report = Report {
            category: "EATING_OUT".to_string(),
            goal_name: "Trip".to_string(),
            transfers: 0,
            total: gbp(0),
        };

        assert_eq!(
            summary(&report, false),
            "nothing to sweep in EATING_OUT ..."
        );
    }

    #[test]
    fn a_dry_run_is_labelled() {
        let report = Report {
            category: "EATING_OUT".to_string(),
            goal_name: "Trip".to_string(),
            transfers: 1,
            total: gbp(500),
        };

        assert_eq!(
            summary(&report, true),
            "[dry run] swept £5.00 from 1 EATING_OUT transaction(s) into 'Trip'"
        );
    }
}
