// src/cli/mod.rs — CLI definition (clap derive)

pub mod account;
pub mod status;
pub mod weather;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "weatherdeck", about = "Terminal weather dashboard", version)]
pub struct Cli {
    /// Config file path
    #[arg(long)]
    pub config: Option<String>,

    /// Gateway API root (overrides `[backend] base_url`)
    #[arg(long, env = "WEATHERDECK_API_URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive dashboard (default)
    Dashboard,
    /// Sign in and store the session token
    Login {
        /// Account email (prompted if omitted)
        #[arg(long)]
        email: Option<String>,
    },
    /// Create an account on the gateway
    Register {
        #[arg(long)]
        email: Option<String>,
        /// Display name (prompted if omitted)
        #[arg(long)]
        name: Option<String>,
    },
    /// Forget the stored session token
    Logout,
    /// Verify the stored session and show who is signed in
    Whoami,
    /// Fetch the weather for a city once and print it
    Weather {
        /// City name
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,
        /// Print the raw report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show configuration, session and gateway health
    Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_means_dashboard() {
        let cli = Cli::try_parse_from(["weatherdeck"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_weather_joins_words() {
        let cli = Cli::try_parse_from(["weatherdeck", "weather", "New", "York", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Weather { city, json }) => {
                assert_eq!(city.join(" "), "New York");
                assert!(json);
            }
            _ => panic!("expected weather command"),
        }
    }

    #[test]
    fn test_weather_requires_city() {
        assert!(Cli::try_parse_from(["weatherdeck", "weather"]).is_err());
    }

    #[test]
    fn test_login_email_flag() {
        let cli = Cli::try_parse_from(["weatherdeck", "login", "--email", "a@b.c"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Login { email: Some(ref e) }) if e == "a@b.c"
        ));
    }

    #[test]
    fn test_global_api_url() {
        let cli = Cli::try_parse_from([
            "weatherdeck",
            "--api-url",
            "http://gw.local/api",
            "status",
        ])
        .unwrap();
        assert_eq!(cli.api_url.as_deref(), Some("http://gw.local/api"));
    }
}
