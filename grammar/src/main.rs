//! Grammar quiz entry point

use clap::Parser;
use shared::{AppId, ServerArgs, logging};
use std::path::PathBuf;
use std::sync::Arc;

use grammar::core::{Corpus, NlpruleTagger};
use grammar::{
    AppState, DEFAULT_MAX_QUESTIONS, GrammarResult, SqliteScoreStore, build_router, load_templates,
};

#[derive(Parser, Debug)]
#[command(name = "grammar")]
#[command(about = "Parts-of-speech quiz over a text corpus")]
struct Args {
    #[command(flatten)]
    server: ServerArgs,

    /// SQLite database holding the results table
    #[arg(long, env = "GRAMMAR_DATABASE_URL", default_value = "sqlite://quiz.db")]
    database_url: String,

    /// Plain-text corpus to sample sentences from (defaults to the bundled Gutenberg texts)
    #[arg(long, env = "GRAMMAR_CORPUS")]
    corpus: Option<PathBuf>,

    /// Seed for reproducible sentence sampling
    #[arg(long, env = "GRAMMAR_SEED")]
    seed: Option<u64>,

    /// Upper bound on questions per quiz
    #[arg(long, env = "GRAMMAR_MAX_QUESTIONS", default_value_t = DEFAULT_MAX_QUESTIONS)]
    max_questions: u32,
}

#[tokio::main]
async fn main() -> GrammarResult<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    AppId::init(AppId::Grammar);
    logging::init_tracing(Some(&args.server.log_level));
    logging::log_startup(AppId::current(), "grammar quiz");

    let addr = args.server.socket_addr(8080)?;

    let corpus = match &args.corpus {
        Some(path) => Corpus::load(path).await?,
        None => Corpus::builtin(),
    };
    shared::app_info!("📚 Corpus has {} sentences", corpus.len());

    let tagger = NlpruleTagger::english()?;

    let pool = shared::db::connect(&args.database_url, 5).await?;
    let store = SqliteScoreStore::new(pool);
    store.init_schema().await?;

    let state = AppState::new(
        load_templates()?,
        Arc::new(store),
        Arc::new(tagger),
        corpus,
        args.max_questions.max(1),
        args.seed,
    )
    .with_session_idle(args.server.session_idle());

    shared::server::serve(build_router(state), addr).await?;
    Ok(())
}
