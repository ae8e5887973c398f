use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folding::pattern::{Pattern, Square};
use folding::plan::FoldPlan;
use folding::{Face, StageChain};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "folding")]
#[command(about = "Fold a flat sheet along pleats and print the stacked faces")]
struct Cmd {
    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Load a fold plan and print the faces of its last stage
    Run {
        #[arg(long)]
        plan: PathBuf,

        /// Print every stage instead of only the last one
        #[arg(long)]
        all_stages: bool,
    },
    /// Fold the unit square once with the default pleat
    Demo,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();

    let chain = match cmd.action {
        Action::Run { ref plan, .. } => FoldPlan::from_file(plan)
            .and_then(|plan| plan.build_chain())
            .with_context(|| format!("running plan {}", plan.display()))?,
        Action::Demo => {
            let mut chain = StageChain::new(Square::default().faces());
            chain.enable_shortcut(0);
            chain.refresh()?;
            chain
        }
    };

    let all_stages = match cmd.action {
        Action::Run { all_stages, .. } => all_stages,
        Action::Demo => false,
    };
    let output: Vec<&[Face]> = if all_stages {
        chain.stages().iter().map(|stage| stage.faces()).collect()
    } else {
        vec![chain.last().faces()]
    };

    let json = if cmd.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{}", json);

    Ok(())
}
