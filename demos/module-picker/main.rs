//! Picks dotfile modules to sync.
//!
//! With `--modules` the given names are used as-is; otherwise every known
//! module is offered in a multi-select picker. Chosen names are printed one
//! per line.
//!
//! Set `RUST_LOG=debug` to see picker transitions on stderr (redirect it, the
//! picker owns the screen).

use clap::Parser;
use dofu_choose::choose::{self, ChoiceItem, Options};
use std::process::ExitCode;
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(name = "module-picker", about = "Choose modules to sync")]
struct Cli {
    /// Modules to sync, skipping the prompt (comma separated or repeated)
    #[arg(short, long, value_delimiter = ',')]
    modules: Vec<String>,
}

struct ModuleMeta {
    name: &'static str,
    description: &'static str,
}

const MODULES: &[ModuleMeta] = &[
    ModuleMeta { name: "zsh", description: "Z shell with oh-my-zsh and plugins" },
    ModuleMeta { name: "tmux", description: "Terminal multiplexer and its config" },
    ModuleMeta { name: "vim", description: "Vim with a minimal vimrc" },
    ModuleMeta { name: "neovim", description: "Neovim built by bob, plus config" },
    ModuleMeta { name: "emacs", description: "Emacs and init files" },
    ModuleMeta { name: "fzf", description: "Fuzzy finder and shell key bindings" },
    ModuleMeta { name: "starship", description: "Cross-shell prompt" },
    ModuleMeta { name: "rust", description: "Rust toolchain via rustup" },
    ModuleMeta { name: "cargo_crates", description: "Command line tools installed with cargo" },
    ModuleMeta { name: "golang", description: "Go toolchain" },
    ModuleMeta { name: "go_mods", description: "Command line tools installed with go install" },
];

fn init_logging() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    let modules = if cli.modules.is_empty() {
        let items = MODULES
            .iter()
            .map(|m| ChoiceItem::new(m.name, m.description))
            .collect();
        let opt = Options::default()
            .with_title("Choose modules to sync with")
            .with_description(true)
            .with_height(2)
            .with_space(0);
        match choose::many(items, opt).await {
            Ok(Some(chosen)) => chosen,
            Ok(None) => {
                info!("cancelled");
                return ExitCode::from(130);
            }
            Err(e) => {
                error!(error = %e, "picker failed");
                eprintln!("failed to select modules: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        cli.modules
    };

    for module in &modules {
        println!("{}", module);
    }
    ExitCode::SUCCESS
}
