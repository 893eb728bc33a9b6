use crate::commands::{
    run_catalog_summary, run_recommend, run_required_exams, CatalogArgs, RecommendArgs,
    RequiredExamsArgs,
};
use crate::server;
use admission_advisor::error::AppError;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "Admission Advisor",
    about = "Rank university programs against national exam results",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Print ranked program recommendations for a set of exam scores
    Recommend(RecommendArgs),
    /// List the exams required by the programs matching the filters
    RequiredExams(RequiredExamsArgs),
    /// Summarize a program catalog file
    Catalog(CatalogArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Override the configured program catalog CSV
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Recommend(args) => run_recommend(args),
        Command::RequiredExams(args) => run_required_exams(args),
        Command::Catalog(args) => run_catalog_summary(args),
    }
}
