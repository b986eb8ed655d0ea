use clap::Parser;

use presensi_types::models::{DEFAULT_PORTAL_ORIGIN, DEFAULT_SSO_ORIGIN};

#[derive(Parser, Debug)]
#[command(
    name = "presensi-server",
    about = "Presensi Gateway - SSO login and attendance scraper behind POST /presensi",
    version = env!("CARGO_PKG_VERSION"),
    author
)]
pub struct Cli {
    #[arg(short, long, env = "PORT", default_value = "8080")]
    pub port: u16,

    #[arg(long, env = "PRESENSI_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    #[arg(
        long,
        env = "PRESENSI_USERNAME_B64",
        hide_env_values = true,
        help = "SSO username, base64-encoded"
    )]
    pub username_b64: String,

    #[arg(
        long,
        env = "PRESENSI_PASSWORD_B64",
        hide_env_values = true,
        help = "SSO password, base64-encoded"
    )]
    pub password_b64: String,

    #[arg(long, env = "PRESENSI_PORTAL_ORIGIN", default_value = DEFAULT_PORTAL_ORIGIN)]
    pub portal_origin: String,

    #[arg(long, env = "PRESENSI_SSO_ORIGIN", default_value = DEFAULT_SSO_ORIGIN)]
    pub sso_origin: String,

    #[arg(
        long,
        env = "PRESENSI_UPSTREAM_TIMEOUT",
        default_value = "30",
        help = "Per-request upstream deadline in seconds (min 5)"
    )]
    pub upstream_timeout: u64,

    #[arg(
        long,
        env = "PRESENSI_DETAIL_CONCURRENCY",
        default_value = "4",
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub detail_concurrency: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from([
            "presensi-server",
            "--username-b64",
            "dXNlcg==",
            "--password-b64",
            "cGFzcw==",
        ])
        .expect("arguments parse");

        assert_eq!(cli.host, "0.0.0.0");
        assert_eq!(cli.portal_origin, "https://ocw.uns.ac.id");
        assert_eq!(cli.sso_origin, "https://sso.uns.ac.id");
        assert_eq!(cli.detail_concurrency, 4);
    }

    #[test]
    fn test_zero_concurrency_is_rejected() {
        let result = Cli::try_parse_from([
            "presensi-server",
            "--username-b64",
            "dXNlcg==",
            "--password-b64",
            "cGFzcw==",
            "--detail-concurrency",
            "0",
        ]);
        assert!(result.is_err());
    }
}
