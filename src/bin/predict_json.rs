use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};

use matchup_form::predict;

fn main() -> Result<()> {
    let path = std::env::args().nth(1).filter(|arg| arg != "-").map(PathBuf::from);

    let raw = match &path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("unable to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("unable to read matchup from stdin")?;
            buf
        }
    };

    let prediction = predict::predict_from_json(&raw)?;
    println!("{}", serde_json::to_string_pretty(&prediction)?);
    Ok(())
}
