use std::process;

use clap::Parser;
use colored::Colorize;

use issue_recommender::cli::Args;
use issue_recommender::{app, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init();
    let args = Args::parse();

    match app::run(args).await {
        Ok(outcome) if outcome.step_failed() => {
            println!(
                "{} No recommendation for #{}, posted the fallback notice.",
                "x".red(),
                outcome.issue_number
            );
            process::exit(1);
        }
        Ok(_) => {}
        Err(err) => {
            eprintln!("{} {}", "x".red(), err);
            process::exit(1);
        }
    }
}
