use clap::Parser;

/// Command-line arguments for the bundle host
#[derive(Parser, Debug)]
#[command(name = "smriti-host")]
#[command(about = "Serves the ParamparaSmriti web client")]
#[command(version)]
pub struct HostArgs {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1", env = "SMRITI_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "8080", env = "SMRITI_PORT")]
    pub port: u16,

    /// Do not open a browser tab on startup
    #[arg(long, env = "SMRITI_NO_BROWSER")]
    pub no_browser: bool,
}

impl HostArgs {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn open_browser(&self) -> bool {
        !self.no_browser
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_localhost_8080() {
        let args = HostArgs::try_parse_from(["smriti-host"]).unwrap();
        assert_eq!(args.url(), "http://127.0.0.1:8080");
        assert!(args.open_browser());
    }

    #[test]
    fn flags_override_defaults() {
        let args =
            HostArgs::try_parse_from(["smriti-host", "--host", "0.0.0.0", "-p", "9000", "--no-browser"])
                .unwrap();
        assert_eq!(args.url(), "http://0.0.0.0:9000");
        assert!(!args.open_browser());
    }
}
