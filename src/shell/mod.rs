//! Shell layer - the terminal interface to the catalog.
//!
//! Reads one command per line, applies it to the session's catalog store and
//! prints the resulting view. Errors from a single line are shown to the user
//! and the session carries on; only terminal I/O failures end it early.

/// Line parsing into shell commands
pub mod parser;
/// Plain-text views
pub mod render;

use crate::{
    config::Config,
    core::{
        actions::{self, PlaceholderNotice},
        generator,
        store::CatalogStore,
    },
    entities::BagModel,
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use parser::{ShellCommand, parse_line};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

/// Prompt printed before each line is read.
pub const PROMPT: &str = "> ";

/// What the shell should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text and keep reading
    Text(String),
    /// End the session
    Quit,
}

/// One browsing session: the configuration plus the catalog store it drives.
#[derive(Debug)]
pub struct Session {
    /// Loaded application configuration
    pub config: Config,
    /// Catalog and query state for this session
    pub store: CatalogStore,
}

impl Session {
    /// Creates a session over an existing catalog.
    #[must_use]
    pub const fn new(config: Config, store: CatalogStore) -> Self {
        Self { config, store }
    }

    /// Generates a fresh catalog as configured and wraps it in a session.
    ///
    /// A configured seed makes the catalog reproducible; otherwise it is seeded
    /// from the operating system.
    #[must_use]
    pub fn from_config(config: Config, now: DateTime<Utc>) -> Self {
        let mut rng = config
            .catalog
            .seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        let bags = generator::generate_bags(
            config.catalog.size,
            &mut rng,
            now,
            &config.catalog.image_host,
        );
        info!(
            "Generated catalog of {} bags (seed: {:?})",
            bags.len(),
            config.catalog.seed
        );
        Self::new(config, CatalogStore::new(bags))
    }

    /// Renders whatever is currently on screen: the open bag, or the gallery page.
    ///
    /// # Errors
    /// Returns `Error::Format` if the gallery text cannot be written.
    pub fn render_current(&self) -> Result<String> {
        match self.store.selected_bag() {
            Some(bag) => Ok(render::render_detail(bag, &self.config.shop.currency)),
            None => render::render_page(
                &self.store.current_page(),
                self.store.query(),
                &self.config.shop,
            ),
        }
    }

    /// Executes one parsed command against the session.
    ///
    /// # Errors
    /// Returns `Error::RecordNotFound` for `details` with an unknown id and
    /// `Error::InvalidArgument` for `book`/`contact` with no bag open.
    pub fn execute(&mut self, command: ShellCommand) -> Result<Reply> {
        let text = match command {
            ShellCommand::List => self.render_current()?,
            ShellCommand::Catalog(command) => {
                self.store.dispatch(command)?;
                self.render_current()?
            }
            ShellCommand::PriceText(which, text) => {
                if self.store.set_price_bound_text(which, &text) {
                    self.render_current()?
                } else {
                    format!("⚠️ '{text}' is not a number; price range left unchanged.\n")
                }
            }
            ShellCommand::Book(period) => {
                let bag = self.open_bag("book")?;
                notice_text(&actions::request_booking(bag, period))
            }
            ShellCommand::Contact => {
                let bag = self.open_bag("contact")?;
                notice_text(&actions::request_contact(bag, &self.config.shop.whatsapp))
            }
            ShellCommand::Info => render::render_info(&self.config.shop)?,
            ShellCommand::Help => render::render_help(),
            ShellCommand::Quit => return Ok(Reply::Quit),
        };
        Ok(Reply::Text(text))
    }

    /// Parses and executes one input line. Blank lines produce an empty reply.
    ///
    /// # Errors
    /// Propagates parse and execution errors; see [`parse_line`] and [`Self::execute`].
    pub fn handle_line(&mut self, line: &str) -> Result<Reply> {
        match parse_line(line)? {
            Some(command) => self.execute(command),
            None => Ok(Reply::Text(String::new())),
        }
    }

    fn open_bag(&self, command: &'static str) -> Result<&BagModel> {
        self.store
            .selected_bag()
            .ok_or_else(|| Error::InvalidArgument {
                command,
                message: "open a bag with `details <id>` first".to_string(),
            })
    }
}

fn notice_text(notice: &PlaceholderNotice) -> String {
    format!("{}\n", notice.message)
}

/// Runs the read-eval-print loop until `quit` or end of input.
///
/// Input is split on `\n` and decoded lossily, so a line with invalid UTF-8 is
/// still handled as a command instead of ending the session.
///
/// # Errors
/// Returns `Error::Io` if reading input or writing output fails, or
/// `Error::Format` if the opening view cannot be rendered.
pub async fn run_shell<R, W>(session: &mut Session, mut input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("Session started");
    output
        .write_all(render::render_banner(&session.config).as_bytes())
        .await?;
    output
        .write_all(session.render_current()?.as_bytes())
        .await?;

    let mut buf = Vec::new();
    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);

        let text = match session.handle_line(&line) {
            Ok(Reply::Text(text)) => text,
            Ok(Reply::Quit) => break,
            Err(e @ Error::Io(_)) => return Err(e),
            Err(e) => {
                warn!("Command {:?} failed: {}", line.trim(), e);
                format!("❌ {e}\n")
            }
        };
        output.write_all(text.as_bytes()).await?;
    }

    output.write_all(b"Goodbye!\n").await?;
    output.flush().await?;
    info!("Session ended");
    Ok(())
}
