//! Development tasks for termgate.

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_mangen::Man;

#[derive(Parser)]
#[command(about = "termgate development tasks")]
struct Xtask {
    #[command(subcommand)]
    task: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Generate the man page into target/man
    Man,
}

fn main() -> Result<()> {
    match Xtask::parse().task {
        Task::Man => generate_man(),
    }
}

fn generate_man() -> Result<()> {
    let cmd = termgate::cli::Cli::command();
    let man = Man::new(cmd);

    let mut buf = Vec::new();
    man.render(&mut buf)?;

    let dir = PathBuf::from("target/man");
    fs::create_dir_all(&dir)?;
    let path = dir.join("termgate.1");
    fs::write(&path, buf)?;

    println!("wrote {}", path.display());
    Ok(())
}
