use clap::Parser;

use crate::error::{IdentityError, Result};
use crate::types::IdentityRequest;

pub const SEED_ENV: &str = "FAKE_IDENTITY_SEED";

/// Upper bound on `--count`.
pub const MAX_COUNT: usize = 1_000_000;

#[derive(Parser, Debug)]
#[command(name = "fake_identity", version, about = "Generate clearly fictitious identities")]
pub struct Args {
    /// Number of identities
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Country for addresses and phones (US, CA, AU or their aliases)
    #[arg(short, long, default_value = "US")]
    pub country: String,

    /// Generate format-valid addresses (may coincidentally exist)
    #[arg(long)]
    pub format_valid: bool,

    /// Seed for reproducible output. Falls back to FAKE_IDENTITY_SEED.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Email domain to use instead of the reserved example domains
    #[arg(long)]
    pub email_domain: Option<String>,

    /// Regenerate identities whose email was already produced
    #[arg(long)]
    pub unique_emails: bool,

    /// Print a pretty JSON array instead of one JSON object per line
    #[arg(long)]
    pub pretty: bool,
}

/// Validated run configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub request: IdentityRequest,
    pub count: usize,
    pub seed: Option<u64>,
    pub unique_emails: bool,
    pub pretty: bool,
}

impl GeneratorConfig {
    pub fn from_args(args: Args) -> Result<Self> {
        let env_seed = std::env::var(SEED_ENV).ok();
        Self::from_parts(args, env_seed.as_deref())
    }

    /// Same as [`from_args`](Self::from_args) with the seed env value passed in.
    pub fn from_parts(args: Args, env_seed: Option<&str>) -> Result<Self> {
        if args.count == 0 {
            return Err(IdentityError::InvalidParameter(
                "count must be at least 1".to_string(),
            ));
        }
        if args.count > MAX_COUNT {
            return Err(IdentityError::InvalidParameter(format!(
                "count must be at most {}, got {}",
                MAX_COUNT, args.count
            )));
        }

        let seed = match (args.seed, env_seed) {
            (Some(seed), _) => Some(seed),
            (None, Some(raw)) if !raw.trim().is_empty() => {
                Some(raw.trim().parse::<u64>().map_err(|e| {
                    IdentityError::InvalidParameter(format!(
                        "{} must be an unsigned integer, got '{}': {}",
                        SEED_ENV, raw, e
                    ))
                })?)
            }
            _ => None,
        };

        Ok(Self {
            request: IdentityRequest {
                country: args.country,
                guarantee_nonexistent: !args.format_valid,
                email_domain: args.email_domain,
            },
            count: args.count,
            seed,
            unique_emails: args.unique_emails,
            pretty: args.pretty,
        })
    }
}
