use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::warn;
use yshy_core::domain::session::ports::SessionService;

use crate::application::http::server::app_state::AppState;

/// Periodically tears down sessions idle for longer than the configured TTL.
pub fn spawn_session_sweeper(state: AppState) -> JoinHandle<()> {
    let ttl = state.service.session_ttl();
    let every = Duration::from_secs(state.args.session.sweep_interval_secs.max(1));

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        interval.tick().await;

        loop {
            interval.tick().await;
            if let Err(e) = state.service.purge_idle_sessions(ttl).await {
                warn!(error = %e, "session sweep failed");
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use clap::Parser;

    use crate::{application::http::server::http_server::state, args::Args};

    #[test]
    fn sweeper_ttl_comes_from_session_args() {
        let args = Args::try_parse_from(["yshy-api", "--session-ttl-minutes", "5"]).unwrap();
        let app_state = state(Arc::new(args)).unwrap();

        assert_eq!(app_state.service.session_ttl(), chrono::Duration::minutes(5));
    }
}
