use alphago_core::domain::{
    common::{AlphagoConfig, LLMConfig, ScanConfig},
    scan::value_objects::OutputLanguage,
};
use clap::{ArgAction, Parser};

#[derive(Debug, Clone, Parser)]
#[command(name = "alphago-api", version, about = "Allergen scanning API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,
    #[command(flatten)]
    pub llm: LlmArgs,
    #[command(flatten)]
    pub scan: ScanArgs,
    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,
    /// Prefix mounted in front of every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,
    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:8081"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(
        long = "gemini-api-key",
        env = "GEMINI_API_KEY",
        default_value = "",
        hide_env_values = true
    )]
    pub gemini_api_key: String,
    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,
    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL")]
    pub gemini_base_url: Option<String>,
    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 30)]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ScanArgs {
    #[arg(long = "scan-max-attempts", env = "SCAN_MAX_ATTEMPTS", default_value_t = 2)]
    pub max_attempts: u32,
    #[arg(long = "scan-retry-delay-ms", env = "SCAN_RETRY_DELAY_MS", default_value_t = 1000)]
    pub retry_delay_ms: u64,
    #[arg(
        long = "scan-cross-check",
        env = "SCAN_CROSS_CHECK",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub cross_check: bool,
    #[arg(
        long = "scan-fallback",
        env = "SCAN_FALLBACK",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub fallback: bool,
    /// Default answer language: en, es, hi, ar, pt, bn or ru.
    #[arg(long = "scan-language", env = "SCAN_LANGUAGE", default_value = "en")]
    pub language: String,
    /// Model reports kept for repeated scans; 0 disables the cache.
    #[arg(long = "scan-cache-size", env = "SCAN_CACHE_SIZE", default_value_t = 50)]
    pub cache_size: usize,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,
    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false, action = ArgAction::Set)]
    pub json: bool,
}

impl From<Args> for AlphagoConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                request_timeout_secs: args.llm.request_timeout_secs,
                base_url: args.llm.gemini_base_url,
            },
            scan: ScanConfig {
                max_attempts: args.scan.max_attempts,
                retry_delay_ms: args.scan.retry_delay_ms,
                cross_check_enabled: args.scan.cross_check,
                fallback_enabled: args.scan.fallback,
                default_language: OutputLanguage::from(args.scan.language.as_str()),
                cache_capacity: args.scan.cache_size,
            },
        }
    }
}
