use anyhow::{Context as _, Result};
use clap::CommandFactory;
use clap_complete::{generate, generate_to, Shell};
use std::io;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: Shell,
    /// Write the script into this directory instead of stdout
    #[arg(long)]
    pub out_dir: Option<PathBuf>,
}

pub fn emit(args: CompletionsArgs) -> Result<()> {
    let mut cmd = crate::Cli::command();
    let name = cmd.get_name().to_string();
    match args.out_dir {
        Some(dir) => {
            let path = generate_to(args.shell, &mut cmd, name, &dir)
                .with_context(|| format!("write completions to {}", dir.display()))?;
            println!("Completions written to {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            generate(args.shell, &mut cmd, name, &mut stdout);
        }
    }
    Ok(())
}
