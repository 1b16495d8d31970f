use anyhow::Result;
use clap::{Parser, Subcommand};

use assembly_publish::cli::{run_history, run_publish, PublishOptions};
use assembly_publish::git::Git2Repository;
use assembly_publish::metadata::MetadataStore;
use assembly_publish::version::Direction;
use assembly_publish::{config, ui};

#[derive(Parser)]
#[command(
    name = "assembly-publish",
    about = "Bump assembly metadata versions, then commit, tag, and push the release"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Bump a version slot, rewrite the metadata file, commit, tag, and push
    Bump {
        /// Slot to bump: major, minor, build, revision, or a configured alias
        mode: String,

        #[arg(short, long, help = "Custom label for the tag annotation")]
        label: Option<String>,

        #[arg(long, help = "Decrease the slot instead of increasing it")]
        down: bool,

        #[arg(short, long, help = "Skip confirmation prompts")]
        force: bool,

        #[arg(long, help = "Preview what would happen without making changes")]
        dry_run: bool,
    },
    /// List historical version tags
    Tags {
        #[arg(short = 'n', long, help = "Number of tags to show")]
        count: Option<usize>,

        #[arg(short, long, help = "Only show tags whose name contains this text")]
        search: Option<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let repo = match Git2Repository::open(".") {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    match args.command {
        Command::Bump {
            mode,
            label,
            down,
            force,
            dry_run,
        } => {
            let store = MetadataStore::new(&config.metadata_file);
            let opts = PublishOptions {
                mode,
                label,
                direction: if down {
                    Direction::Decrease
                } else {
                    Direction::Increase
                },
                force,
                dry_run,
            };

            match run_publish(&repo, &store, &config, &opts) {
                Ok(Some(outcome)) => {
                    if outcome.pushed {
                        println!(
                            "\n\x1b[32m✓\x1b[0m Successfully published {} as {}\n",
                            outcome.new_version, outcome.tag
                        );
                    } else if !dry_run {
                        println!(
                            "\n\x1b[32m✓\x1b[0m Version {} committed and tagged locally as {}\n",
                            outcome.new_version, outcome.tag
                        );
                    }
                }
                Ok(None) => {
                    println!("Operation cancelled by user.");
                }
                Err(e) => {
                    ui::display_error(&e.to_string());
                    std::process::exit(1);
                }
            }
        }
        Command::Tags { count, search } => {
            if let Err(e) = run_history(&repo, &config, count, search.as_deref()) {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
