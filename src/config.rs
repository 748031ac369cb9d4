//! Configuration Module
//! Command-line and environment configuration for the dashboard process.

use clap::Parser;
use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8050;
pub const DEFAULT_DATA_PATH: &str = "data/spacex_launch_dash.csv";

#[derive(Debug, Parser)]
#[command(name = "launchboard", about = "Launch records dashboard", version)]
pub struct Cli {
    /// Path to the launch records CSV
    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Listening port
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl Cli {
    /// Socket address to bind. The interface is fixed at 0.0.0.0.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
