//! Arithmetic quiz entry point

use clap::Parser;
use shared::{AppId, ServerArgs, logging};
use std::sync::Arc;

use arithmetic::{
    ArithmeticResult, AppState, DEFAULT_MAX_QUESTIONS, SqliteResultStore, build_router,
    load_templates,
};

#[derive(Parser, Debug)]
#[command(name = "arithmetic")]
#[command(about = "Arithmetic quiz with score history and CSV export")]
struct Args {
    #[command(flatten)]
    server: ServerArgs,

    /// SQLite database holding users and quiz results
    #[arg(long, env = "ARITHMETIC_DATABASE_URL", default_value = "sqlite://aria_arithmetic.db")]
    database_url: String,

    /// Upper bound on questions per quiz
    #[arg(long, env = "ARITHMETIC_MAX_QUESTIONS", default_value_t = DEFAULT_MAX_QUESTIONS)]
    max_questions: u32,
}

#[tokio::main]
async fn main() -> ArithmeticResult<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    AppId::init(AppId::Arithmetic);
    logging::init_tracing(Some(&args.server.log_level));
    logging::log_startup(AppId::current(), "arithmetic quiz");

    let addr = args.server.socket_addr(5000)?;

    let pool = shared::db::connect(&args.database_url, 5).await?;
    let store = SqliteResultStore::new(pool);
    store.init_schema().await?;

    let templates = load_templates()?;
    let state = AppState::new(templates, Arc::new(store), args.max_questions.max(1))
        .with_session_idle(args.server.session_idle());

    shared::server::serve(build_router(state), addr).await?;
    Ok(())
}
