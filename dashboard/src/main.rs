//! Dashboard entry point

use clap::Parser;
use shared::{AppId, ServerArgs, logging};

use dashboard::{AppState, DEFAULT_MAX_UPLOAD_BYTES, DashboardResult, build_router, load_templates};

#[derive(Parser, Debug)]
#[command(name = "dashboard")]
#[command(about = "Upload a CSV file and chart its columns")]
struct Args {
    #[command(flatten)]
    server: ServerArgs,

    /// Largest accepted upload request, in bytes
    #[arg(long, env = "DASHBOARD_MAX_UPLOAD_BYTES", default_value_t = DEFAULT_MAX_UPLOAD_BYTES)]
    max_upload_bytes: usize,
}

#[tokio::main]
async fn main() -> DashboardResult<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    AppId::init(AppId::Dashboard);
    logging::init_tracing(Some(&args.server.log_level));
    logging::log_startup(AppId::current(), "csv dashboard");

    let addr = args.server.socket_addr(8050)?;
    let state = AppState::new(load_templates()?, args.max_upload_bytes)
        .with_session_idle(args.server.session_idle());

    shared::server::serve(build_router(state), addr).await?;
    Ok(())
}
