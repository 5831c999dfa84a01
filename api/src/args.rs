use clap::Parser;
use yshy_core::domain::{
    common::{GeoConfig, LLMConfig, SessionConfig, YshyConfig},
    trends::value_objects::TrendThresholds,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "yshy-api", version, about = "YSHY women's health analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,
    #[command(flatten)]
    pub llm: LlmArgs,
    #[command(flatten)]
    pub geo: GeoArgs,
    #[command(flatten)]
    pub session: SessionArgs,
    #[command(flatten)]
    pub trend: TrendArgs,
    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServerArgs {
    #[arg(
        long = "server-host",
        env = "SERVER_HOST",
        default_value = "0.0.0.0",
        name = "SERVER_HOST"
    )]
    pub host: String,

    #[arg(
        long = "server-port",
        env = "SERVER_PORT",
        default_value_t = 3333,
        name = "SERVER_PORT"
    )]
    pub port: u16,

    #[arg(
        long = "server-root-path",
        env = "SERVER_ROOT_PATH",
        default_value = "",
        name = "SERVER_ROOT_PATH",
        long_help = "Prefix for every route, e.g. /api"
    )]
    pub root_path: String,

    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173",
        name = "ALLOWED_ORIGINS"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LlmArgs {
    #[arg(
        long = "gemini-api-key",
        env = "GOOGLE_API_KEY",
        default_value = "",
        hide_env_values = true,
        name = "GOOGLE_API_KEY"
    )]
    pub api_key: String,

    #[arg(
        long = "gemini-model",
        env = "GEMINI_MODEL",
        default_value = "gemini-2.0-flash",
        name = "GEMINI_MODEL"
    )]
    pub model: String,

    #[arg(
        long = "gemini-base-url",
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com",
        name = "GEMINI_BASE_URL"
    )]
    pub base_url: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct GeoArgs {
    #[arg(
        long = "nominatim-url",
        env = "NOMINATIM_URL",
        default_value = "https://nominatim.openstreetmap.org",
        name = "NOMINATIM_URL"
    )]
    pub nominatim_url: String,

    #[arg(
        long = "overpass-url",
        env = "OVERPASS_URL",
        default_value = "https://overpass-api.de/api/interpreter",
        name = "OVERPASS_URL"
    )]
    pub overpass_url: String,

    #[arg(
        long = "geo-user-agent",
        env = "GEO_USER_AGENT",
        default_value = "yshy_healthcare_finder",
        name = "GEO_USER_AGENT"
    )]
    pub user_agent: String,

    #[arg(
        long = "overpass-timeout-secs",
        env = "OVERPASS_TIMEOUT_SECS",
        default_value_t = 25,
        name = "OVERPASS_TIMEOUT_SECS"
    )]
    pub overpass_timeout_secs: u64,
}

#[derive(clap::Args, Debug, Clone)]
pub struct SessionArgs {
    #[arg(
        long = "session-ttl-minutes",
        env = "SESSION_TTL_MINUTES",
        default_value_t = 60,
        name = "SESSION_TTL_MINUTES"
    )]
    pub ttl_minutes: u64,

    #[arg(
        long = "session-sweep-interval-secs",
        env = "SESSION_SWEEP_INTERVAL_SECS",
        default_value_t = 60,
        name = "SESSION_SWEEP_INTERVAL_SECS"
    )]
    pub sweep_interval_secs: u64,
}

#[derive(clap::Args, Debug, Clone)]
pub struct TrendArgs {
    #[arg(
        long = "trend-stable-band",
        env = "TREND_STABLE_BAND",
        default_value_t = 0.1,
        name = "TREND_STABLE_BAND",
        long_help = "Absolute slope below which a severity trend is reported as stable"
    )]
    pub stable_band: f64,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    #[arg(
        long = "log-filter",
        env = "LOG_FILTER",
        default_value = "info",
        name = "LOG_FILTER"
    )]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false, name = "LOG_JSON")]
    pub json: bool,
}

impl From<Args> for YshyConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                gemini_api_key: args.llm.api_key,
                gemini_model: args.llm.model,
                base_url: args.llm.base_url,
            },
            geo: GeoConfig {
                nominatim_url: args.geo.nominatim_url,
                overpass_url: args.geo.overpass_url,
                user_agent: args.geo.user_agent,
                overpass_timeout_secs: args.geo.overpass_timeout_secs,
            },
            session: SessionConfig {
                ttl_minutes: args.session.ttl_minutes,
            },
            trend: TrendThresholds {
                stable_band: args.trend.stable_band,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "yshy-api",
            "--server-port",
            "8080",
            "--server-allowed-origins",
            "http://a.test,http://b.test",
            "--trend-stable-band",
            "0.25",
        ])
        .unwrap();

        assert_eq!(args.server.port, 8080);
        assert_eq!(args.server.allowed_origins.len(), 2);

        let config = YshyConfig::from(args);
        assert_eq!(config.trend.stable_band, 0.25);
    }
}
