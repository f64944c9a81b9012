#![forbid(unsafe_code)]
//! Writes shell completions and the man page for `dirtree`.

use anyhow::Context;
use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use dirtree::cli::Args;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "generate-assets", about = "Generate dirtree completions and man page")]
struct AssetArgs {
    /// Output directory
    #[arg(long = "out-dir", default_value = "dist")]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let assets = AssetArgs::parse();
    let completions_dir = assets.out_dir.join("completions");
    let man_dir = assets.out_dir.join("man");

    for dir in [&completions_dir, &man_dir] {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    for &shell in Shell::value_variants() {
        let mut cmd = Args::command();
        let path = generate_to(shell, &mut cmd, "dirtree", &completions_dir)
            .with_context(|| format!("writing {shell} completions"))?;
        eprintln!("wrote {}", path.display());
    }

    let page = man_dir.join("dirtree.1");
    let mut buffer = Vec::new();
    Man::new(Args::command()).render(&mut buffer)?;
    fs::write(&page, buffer).with_context(|| format!("writing {}", page.display()))?;
    eprintln!("wrote {}", page.display());
    Ok(())
}
