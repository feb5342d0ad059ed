//! CLI command execution
//!
//! Owns the wiring from parsed arguments to the core: builds a REST source
//! against the configured base URL, runs the requested command, and renders
//! the resulting state.

use super::commands::{Cli, Commands, OutputFormat};
use crate::api::{CharacterQuery, CharacterSource, RestCharacterSource};
use crate::error::Result;
use crate::model::Character;
use crate::scroll::Viewport;
use crate::session::{BrowseSession, QueryState};
use crate::store::Snapshot;
use crate::types::StatusFilter;
use tracing::info;

/// Simulated row height used to synthesize bottom-of-page scroll events
const ROW_HEIGHT: f64 = 120.0;

/// Simulated visible-area height
const VIEWPORT_HEIGHT: f64 = 800.0;

/// Message shown when a query settles failed with nothing to show
const NO_RESULTS_MESSAGE: &str = "No characters found. Please try a different search.";

/// Executes CLI commands
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for parsed arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Check { name, status } => self.run_check(name, *status).await,
            Commands::Fetch { name, status, page } => self.run_fetch(name, *status, *page).await,
            Commands::Scroll {
                name,
                status,
                max_pages,
            } => self.run_scroll(name, *status, *max_pages).await,
        }
    }

    fn source(&self) -> RestCharacterSource {
        RestCharacterSource::with_base_url(&self.cli.base_url)
    }

    async fn run_check(&self, name: &str, status: StatusFilter) -> Result<()> {
        let query = CharacterQuery::new().with_name(name).with_status(status);
        let page = self.source().fetch(&query).await?;

        match self.cli.format {
            OutputFormat::Json => {
                println!(
                    "{}",
                    serde_json::to_string(&serde_json::json!({
                        "count": page.info.count,
                        "pages": page.info.pages,
                    }))?
                );
            }
            OutputFormat::Pretty => {
                println!(
                    "OK: {} characters across {} pages",
                    page.info.count, page.info.pages
                );
            }
        }
        Ok(())
    }

    async fn run_fetch(&self, name: &str, status: StatusFilter, page: u32) -> Result<()> {
        let query = CharacterQuery::new()
            .with_name(name)
            .with_status(status)
            .with_page(page);
        let response = self.source().fetch(&query).await?;

        if self.cli.format == OutputFormat::Pretty {
            println!(
                "Page {} of {} ({} characters total)",
                query.page, response.info.pages, response.info.count
            );
        }
        self.print_records(&response.results)?;
        Ok(())
    }

    async fn run_scroll(
        &self,
        name: &str,
        status: StatusFilter,
        max_pages: Option<u32>,
    ) -> Result<()> {
        let query = QueryState {
            name: name.to_string(),
            status,
            page: 1,
        };
        let share_url = query.to_query_string();
        let mut session = BrowseSession::with_query(self.source(), query);

        session.refresh().await;

        // Synthesize a user who keeps scrolling to the bottom; the trigger
        // policy decides when that turns into a fetch.
        let limit = max_pages.unwrap_or(u32::MAX);
        while session.query_state().page < limit {
            let document_height = VIEWPORT_HEIGHT + session.store().len() as f64 * ROW_HEIGHT;
            let viewport = Viewport::at_bottom(document_height, VIEWPORT_HEIGHT);
            if !session.scrolled(viewport).await {
                break;
            }
            if session.snapshot().lifecycle.is_failed() {
                // A failed pagination fetch shows no message of its own; stop
                // scrolling and render what accumulated.
                break;
            }
            info!(page = session.query_state().page, "scrolled to next page");
        }

        let snapshot = session.snapshot();
        self.print_snapshot(&snapshot, &share_url)?;
        Ok(())
    }

    fn print_snapshot(&self, snapshot: &Snapshot, share_url: &str) -> Result<()> {
        if snapshot.is_empty_failure() {
            println!("{NO_RESULTS_MESSAGE}");
            return Ok(());
        }

        if self.cli.format == OutputFormat::Pretty {
            if let Some(info) = &snapshot.info {
                println!(
                    "{} of {} characters across {} pages",
                    snapshot.records.len(),
                    info.count,
                    info.pages
                );
            }
            if !share_url.is_empty() {
                println!("query: ?{share_url}");
            }
        }
        self.print_records(&snapshot.records)?;
        Ok(())
    }

    fn print_records(&self, records: &[Character]) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => {
                for record in records {
                    println!("{}", serde_json::to_string(record)?);
                }
            }
            OutputFormat::Pretty => {
                for record in records {
                    println!(
                        "  #{:<4} {} ({}) - {} from {}",
                        record.id, record.name, record.status, record.species, record.origin.name
                    );
                }
            }
        }
        Ok(())
    }
}
