use anyhow::Result;
use clap::Parser;
use cmake_bump::{
    arguments::Arguments,
    bumper::{bump_version, current_version},
};
use log::LevelFilter;

fn main() -> Result<()> {
    let args = Arguments::parse();
    pretty_env_logger::env_logger::builder()
        .filter_level(if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn })
        .format_timestamp(None)
        .init();

    // stdout carries only the version line; logging goes to stderr
    if args.current {
        let current = current_version(&args.path)?;
        println!("{}", current.version);
        return Ok(());
    }

    let new_version = bump_version(&args.path)?;
    println!("{}", new_version);

    Ok(())
}
