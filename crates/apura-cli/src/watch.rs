//! The recurring poll loop and its one-shot variant.

use std::io::{self, Write};
use std::time::Duration;

use apura_core::{AppConfig, Locale};
use apura_tse::{transform, turnout_summary, TseClient, TseError};
use tokio::time::MissedTickBehavior;

use crate::render;

/// ANSI clear-screen plus cursor home, written before each redraw.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// Runs the fixed-interval watch loop until a shutdown signal arrives.
///
/// Each tick runs one cycle to completion inside the loop task, so
/// cycles never overlap; a cycle that outlasts the interval delays the
/// next tick instead of stacking a second fetch. A failed cycle is
/// logged and skipped, and the next tick starts from scratch.
///
/// # Errors
///
/// Returns an error when the interval is zero or the HTTP client
/// cannot be built. Fetch failures never end the loop.
pub(crate) async fn run_watch(config: &AppConfig) -> anyhow::Result<()> {
    if config.interval_ms == 0 {
        anyhow::bail!("refresh interval must be greater than zero");
    }
    let client = TseClient::new(
        &config.endpoint_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?;

    tracing::info!(
        endpoint = %client.endpoint(),
        interval_ms = config.interval_ms,
        locale = %config.locale,
        "watch: starting poll loop"
    );

    tokio::select! {
        () = poll_loop(&client, config) => {},
        () = shutdown_signal() => {},
    }
    Ok(())
}

/// Fetches once and prints the frame without clearing the screen.
///
/// Unlike the watch loop, a fetch failure here propagates to the exit
/// code.
///
/// # Errors
///
/// Returns an error when the HTTP client cannot be built, the fetch
/// fails, or stdout cannot be written.
pub(crate) async fn run_once(config: &AppConfig) -> anyhow::Result<()> {
    let client = TseClient::new(
        &config.endpoint_url,
        config.request_timeout_secs,
        &config.user_agent,
    )?;
    let (frame, _) = build_frame(&client, config.locale).await?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(frame.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Drives cycles forever. The first tick fires immediately.
async fn poll_loop(client: &TseClient, config: &AppConfig) {
    let mut ticker = tokio::time::interval(Duration::from_millis(config.interval_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        if let Err(e) = run_cycle(client, config).await {
            tracing::error!(error = %e, "watch: poll cycle failed; retrying next tick");
        }
    }
}

/// One poll cycle: clear, fetch, transform, render, write.
async fn run_cycle(client: &TseClient, config: &AppConfig) -> anyhow::Result<()> {
    clear_screen()?;
    let (frame, rows) = build_frame(client, config.locale).await?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(frame.as_bytes())?;
    stdout.flush()?;

    tracing::debug!(rows, "watch: cycle rendered");
    Ok(())
}

/// Fetches one snapshot and composes the complete display frame: the
/// generation stamp and turnout summary when present, then the ranked
/// table. Returns the frame and its row count.
async fn build_frame(client: &TseClient, locale: Locale) -> Result<(String, usize), TseError> {
    let tally = client.fetch_simplified().await?;
    let table = transform(&tally, locale);

    let mut frame = String::new();
    if let Some(line) = render::generated_at_line(&tally) {
        frame.push_str(&line);
        frame.push('\n');
    }
    if let Some(line) = turnout_summary(&tally) {
        frame.push_str(&line);
        frame.push('\n');
    }
    if !frame.is_empty() {
        frame.push('\n');
    }
    frame.push_str(&render::format_table(&table));

    Ok((frame, table.len()))
}

fn clear_screen() -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(CLEAR_SCREEN.as_bytes())?;
    stdout.flush()
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("watch: received shutdown signal, exiting");
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_tally_server(body: &serde_json::Value) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tally.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;
        server
    }

    fn client_for(server: &MockServer) -> TseClient {
        let endpoint = format!("{}/tally.json", server.uri());
        TseClient::new(&endpoint, 5, "apura-test").expect("client should build")
    }

    #[tokio::test]
    async fn frame_carries_stamp_turnout_and_ranked_rows() {
        let body = serde_json::json!({
            "dg": "30/10/2022",
            "hg": "20:58:14",
            "pst": "99,89",
            "psi": "99,89",
            "cand": [
                { "nm": "ALPHA", "vap": "100", "pvap": "25,0" },
                { "nm": "BRAVO", "vap": "300", "pvap": "75,0" }
            ]
        });
        let server = mock_tally_server(&body).await;

        let (frame, rows) = build_frame(&client_for(&server), Locale::PtBr)
            .await
            .expect("frame should build");

        assert_eq!(rows, 2);
        assert!(frame.contains("tally generated at 30/10/2022 20:58:14"));
        assert!(frame.contains("sections tallied: 99,89%"));

        let bravo = frame.find("BRAVO").expect("leader row");
        let alpha = frame.find("ALPHA").expect("runner-up row");
        assert!(bravo < alpha, "rows must appear in rank order");
    }

    #[tokio::test]
    async fn frame_omits_optional_lines_when_absent() {
        let body = serde_json::json!({
            "cand": [
                { "nm": "ALPHA", "vap": "100", "pvap": "100,0" }
            ]
        });
        let server = mock_tally_server(&body).await;

        let (frame, rows) = build_frame(&client_for(&server), Locale::PtBr)
            .await
            .expect("frame should build");

        assert_eq!(rows, 1);
        assert!(frame.starts_with("CANDIDATE"));
        assert!(!frame.contains("sections tallied"));
        assert!(!frame.contains("tally generated at"));
    }

    #[tokio::test]
    async fn frame_propagates_fetch_failures() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tally.json"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = build_frame(&client_for(&server), Locale::PtBr)
            .await
            .unwrap_err();
        assert!(matches!(err, TseError::Http(_)));
    }

    #[tokio::test]
    async fn zero_interval_is_rejected() {
        let config = AppConfig {
            interval_ms: 0,
            ..AppConfig::default()
        };
        let err = run_watch(&config).await.unwrap_err();
        assert!(err.to_string().contains("greater than zero"));
    }
}
