use clap::Parser;

#[derive(Parser)]
#[command(name = "ytserve", about = "YouTube transcript HTTP service", version)]
pub struct Cli {
    /// Listening port (overrides PORT and the config file)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Bind address
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Default caption language when a request does not specify one
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}
