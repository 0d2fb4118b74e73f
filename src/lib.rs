pub mod api;
pub mod checker;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod normalize;
pub mod payload;
pub mod resolver;
pub mod scanner;
pub mod session;
pub mod types;
pub mod utils;

pub use api::{GloProvider, HttpProvider, ResultProvider};
pub use checker::{CheckOutcome, CheckReport, TicketChecker};
pub use config::Config;
pub use error::{ScanError, SourceError};
pub use fetcher::ResultsFetcher;
pub use normalize::normalize;
pub use payload::{extract_draw_date, extract_ticket_number};
pub use resolver::determine_prize;
pub use scanner::{LineScanner, QrScanner, ScanGuard};
pub use session::{DatePrompt, LinePrompt, Session};
pub use types::*;
pub use utils::{guess_recent_draw_iso, guess_recent_draw_on, is_plausible_draw_day};
