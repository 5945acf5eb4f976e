//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, MAX_TRANSPORT_REDIRECT_HOPS, RETRY_FACTOR,
    RETRY_INITIAL_DELAY_MS, RETRY_MAX_DELAY_SECS, RETRY_MAX_RETRIES,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Exponential backoff settings for `RetryPolicy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Base delay in milliseconds; the n-th retry waits `initial_delay_ms * factor^n`
    pub initial_delay_ms: u64,
    /// Multiplier applied to the delay on each retry
    pub factor: u64,
    /// Upper bound for a single delay
    pub max_delay: Duration,
    /// Number of retries after the initial attempt (0 = single attempt)
    pub max_retries: usize,
}

impl RetryConfig {
    /// A configuration that performs exactly one attempt.
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            initial_delay_ms: RETRY_INITIAL_DELAY_MS,
            factor: RETRY_FACTOR,
            max_delay: Duration::from_secs(RETRY_MAX_DELAY_SECS),
            max_retries: RETRY_MAX_RETRIES,
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by the library. It can be
/// constructed programmatically without any CLI dependencies.
///
/// # Examples
///
/// ```no_run
/// use redirect_resolver::Config;
///
/// let config = Config {
///     timeout_seconds: 5,
///     insecure_skip_verify: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Accept any server certificate and hostname.
    ///
    /// Some target sites run self-signed or misconfigured certificates. This is
    /// off unless explicitly requested.
    pub insecure_skip_verify: bool,

    /// Let the transport follow 3xx responses itself before the resolver
    /// inspects the final response
    pub follow_transport_redirects: bool,

    /// Hop limit for transport-level redirects
    pub max_transport_redirects: usize,

    /// Retry policy settings
    pub retry: RetryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            insecure_skip_verify: false,
            follow_transport_redirects: true,
            max_transport_redirects: MAX_TRANSPORT_REDIRECT_HOPS,
            retry: RetryConfig::default(),
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Resolve where a link ends up
/// redirect_resolver https://example.com/login?continue=https://example.org/
///
/// # Accept self-signed certificates, no retries
/// redirect_resolver https://self-signed.local/ --insecure --max-retries 0
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "redirect_resolver",
    about = "Follows header and query-string redirects to find where URLs end up."
)]
pub struct Opt {
    /// URLs to resolve
    #[arg(required = true)]
    pub urls: Vec<String>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Accept invalid TLS certificates and hostnames
    #[arg(long)]
    pub insecure: bool,

    /// Retries per request for transient failures
    #[arg(long, default_value_t = RETRY_MAX_RETRIES)]
    pub max_retries: usize,

    /// Do not let the HTTP client follow 3xx responses on its own
    #[arg(long)]
    pub no_transport_redirects: bool,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            log_level: opt.log_level,
            log_format: opt.log_format,
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent,
            insecure_skip_verify: opt.insecure,
            follow_transport_redirects: !opt.no_transport_redirects,
            max_transport_redirects: MAX_TRANSPORT_REDIRECT_HOPS,
            retry: RetryConfig {
                max_retries: opt.max_retries,
                ..RetryConfig::default()
            },
        }
    }
}
