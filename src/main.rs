use anyhow::Result;
use bitdiff::areas::config::ClassifierConfig;
use bitdiff::areas::session::Session;
use bitdiff::artifacts::core::Output;
use bitdiff::artifacts::diff::patch::PatchDirection;
use bitdiff::artifacts::diff::tree_diff::DiffFilter;
use bitdiff::commands::porcelain::diff::DiffOptions;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "bitdiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Unified diff hunks between two files or directories",
    long_about = "Compares two snapshots (files or directory trees) line by line \
    and prints git-style unified diff hunks. Single hunks can be exported as \
    patches ready to be staged or unstaged with git apply.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(long, global = true, help = "Disable colored output")]
    no_color: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Snapshots {
    #[arg(index = 1, help = "The old file or directory")]
    old: PathBuf,
    #[arg(index = 2, help = "The new file or directory")]
    new: PathBuf,
    #[arg(long, help = "Path to a TOML classifier config file")]
    config: Option<PathBuf>,
    #[arg(long, help = "Files larger than this many bytes are not diffed as text")]
    max_size: Option<u64>,
}

impl Snapshots {
    fn classifier_config(&self) -> Result<ClassifierConfig> {
        let mut config = ClassifierConfig::load(self.config.as_deref())?;
        if let Some(max_size) = self.max_size {
            config.max_file_size = max_size;
        }
        Ok(config)
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "diff",
        about = "Show changes between two files or directories",
        long_about = "This command prints the unified diff of every path that differs \
        between the old and the new snapshot."
    )]
    Diff {
        #[command(flatten)]
        snapshots: Snapshots,
        #[arg(long, help = "Show old and new line numbers next to each line")]
        line_numbers: bool,
        #[arg(long, help = "Only show paths that were (A)dded, (D)eleted or (M)odified")]
        diff_filter: Option<String>,
    },
    #[command(
        name = "hunk",
        about = "Print one hunk as an applicable patch",
        long_about = "This command prints hunk INDEX (0-based) of a modified path as a \
        patch fragment for git apply. With --reverse the patch undoes the hunk."
    )]
    Hunk {
        #[command(flatten)]
        snapshots: Snapshots,
        #[arg(short, long, help = "The changed path, required if several paths changed")]
        path: Option<PathBuf>,
        #[arg(short, long, help = "The 0-based index of the hunk")]
        index: usize,
        #[arg(short, long, help = "Produce the patch that unstages the hunk")]
        reverse: bool,
    },
    #[command(
        name = "classify",
        about = "Show how both sides of each changed path are classified"
    )]
    Classify {
        #[command(flatten)]
        snapshots: Snapshots,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if cli.no_color {
        colored::control::set_override(false);
    }

    let output = Output::detect();

    match &cli.command {
        Commands::Diff {
            snapshots,
            line_numbers,
            diff_filter,
        } => {
            let filter = match diff_filter {
                Some(raw) => DiffFilter::try_parse(raw)?,
                None => DiffFilter::all(),
            };
            let session = Session::new(
                &snapshots.old,
                &snapshots.new,
                snapshots.classifier_config()?,
                output.writer(),
            )?;

            session
                .diff(DiffOptions::new(filter, *line_numbers))
                .await?
        }
        Commands::Hunk {
            snapshots,
            path,
            index,
            reverse,
        } => {
            let session = Session::new(
                &snapshots.old,
                &snapshots.new,
                snapshots.classifier_config()?,
                Box::new(std::io::stdout()),
            )?;
            let direction = if *reverse {
                PatchDirection::Unstage
            } else {
                PatchDirection::Stage
            };

            session.hunk(path.as_deref(), *index, direction)?
        }
        Commands::Classify { snapshots } => {
            let session = Session::new(
                &snapshots.old,
                &snapshots.new,
                snapshots.classifier_config()?,
                output.writer(),
            )?;

            session.classify()?
        }
    }

    output.finish()
}
