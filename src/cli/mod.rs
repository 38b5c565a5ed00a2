//! CLI argument parsing and validation.

mod args;

pub use args::{Args, Command, resolve_credentials};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::{DEFAULT_JOKE_URL, DEFAULT_QUOTE_URL, Endpoint};
    use crate::speech::Credentials;
    use clap::Parser;
    use clap::error::ErrorKind;
    use std::path::PathBuf;
    use std::time::Duration;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    // ===========================================
    // Subcommand dispatch
    // ===========================================

    #[test]
    fn test_parse_joke() {
        let args = parse(&["quipcli", "joke"]);
        assert_eq!(args.command, Command::Joke);
        assert_eq!(args.command.endpoint(), Endpoint::Joke);
        assert!(!args.speak);
    }

    #[test]
    fn test_parse_quote() {
        let args = parse(&["quipcli", "quote"]);
        assert_eq!(args.command.endpoint(), Endpoint::Quote);
    }

    #[test]
    fn test_no_subcommand_shows_help() {
        let err = Args::try_parse_from(["quipcli"]).unwrap_err();
        assert_eq!(
            err.kind(),
            ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
        assert!(err.to_string().contains("joke"));
        assert!(err.to_string().contains("quote"));
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        let err = Args::try_parse_from(["quipcli", "riddle"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubcommand);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn test_help_flag() {
        let err = Args::try_parse_from(["quipcli", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    // ===========================================
    // Options
    // ===========================================

    #[test]
    fn test_defaults() {
        let args = parse(&["quipcli", "joke"]);

        assert_eq!(args.output, PathBuf::from("output.mp3"));
        assert_eq!(args.timeout, 10);
        assert_eq!(args.language, "en-US");
        assert!(!args.no_color);
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let args = parse(&["quipcli", "quote", "--speak", "-o", "qod.mp3", "-t", "3"]);

        assert!(args.speak);
        assert_eq!(args.output, PathBuf::from("qod.mp3"));
        assert_eq!(args.timeout, 3);
    }

    #[test]
    fn test_fetch_config_from_args() {
        let args = parse(&["quipcli", "joke", "--timeout", "5"]);
        let config = args.fetch_config();

        assert_eq!(config.joke_url, DEFAULT_JOKE_URL);
        assert_eq!(config.quote_url, DEFAULT_QUOTE_URL);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_endpoint_overrides() {
        let args = parse(&[
            "quipcli",
            "joke",
            "--joke-url",
            "http://localhost:8080/joke",
        ]);
        assert_eq!(
            args.fetch_config().url_for(Endpoint::Joke),
            "http://localhost:8080/joke"
        );
    }

    #[test]
    fn test_speech_config_prefers_api_key() {
        let args = parse(&[
            "quipcli",
            "joke",
            "--api-key",
            "key-123",
            "--access-token",
            "token-456",
        ]);

        let config = args.speech_config();
        assert_eq!(
            config.credentials,
            Some(Credentials::ApiKey("key-123".to_string()))
        );
        assert_eq!(config.output, PathBuf::from("output.mp3"));
    }

    #[test]
    fn test_credentials_fall_back_to_token() {
        assert_eq!(
            resolve_credentials(None, Some("token-456")),
            Some(Credentials::BearerToken("token-456".to_string()))
        );
    }

    #[test]
    fn test_credentials_empty_key_is_ignored() {
        assert_eq!(
            resolve_credentials(Some(""), Some("token-456")),
            Some(Credentials::BearerToken("token-456".to_string()))
        );
        assert_eq!(resolve_credentials(Some(""), Some("")), None);
        assert_eq!(resolve_credentials(None, None), None);
    }

    #[test]
    fn test_credentials_key_wins_over_token() {
        assert_eq!(
            resolve_credentials(Some("key-123"), Some("token-456")),
            Some(Credentials::ApiKey("key-123".to_string()))
        );
    }
}
