use anyhow::Context;
use clap::Parser;
use release_info::os_release::{self, DEFAULT_OS_RELEASE_PATH, ReleaseInfo};
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about = "Prints the key-value pairs of /etc/os-release")]
struct Args {}

fn load(path: &Path) -> anyhow::Result<ReleaseInfo> {
    os_release::parse_os_release(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let _args = Args::parse();

    // stdout carries only the mapping; errors are reported by the returned anyhow chain
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::WARN)
        .init();

    let info = load(Path::new(DEFAULT_OS_RELEASE_PATH))?;

    println!("{info}");
    Ok(())
}
