use std::path::PathBuf;

use clap::Parser;

/// Terminal console for a crawl-and-search service.
#[derive(Debug, Parser)]
#[command(name = "search-console", version, about = "Terminal console for a crawl-and-search service")]
pub struct Cli {
    /// Base URL of the search service.
    #[arg(
        short = 's',
        long = "server-url",
        env = "API_BASE_URL",
        default_value = console_client::DEFAULT_BASE_URL
    )]
    pub server_url: String,

    /// File the log is written to.
    #[arg(short = 'l', long = "log-file", default_value = "console.log")]
    pub log_file: PathBuf,

    /// Seconds between automatic stats refreshes. 0 disables the poll; stats
    /// are then fetched once at startup and after each crawl or clear.
    #[arg(short = 'p', long = "poll-secs", default_value_t = 30)]
    pub poll_secs: u64,
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn defaults_apply_without_args() {
        // server_url is not asserted here: its default yields to an ambient
        // API_BASE_URL.
        let cli = Cli::try_parse_from(["search-console"]).expect("parse");
        assert_eq!(cli.log_file.to_str(), Some("console.log"));
        assert_eq!(cli.poll_secs, 30);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "search-console",
            "--server-url",
            "http://search.internal:9000",
            "--log-file",
            "/tmp/console.log",
            "--poll-secs",
            "0",
        ])
        .expect("parse");
        assert_eq!(cli.server_url, "http://search.internal:9000");
        assert_eq!(cli.log_file.to_str(), Some("/tmp/console.log"));
        assert_eq!(cli.poll_secs, 0);
    }
}
