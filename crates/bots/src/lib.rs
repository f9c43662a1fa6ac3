//! `bots` crate — bot-account persistence for the auction-house peddler.
//!
//! The one domain-specific consumer of the generic `db` layer: it guarantees
//! the `ah_bot_accounts` table exists and knows how to list bot accounts.

pub mod error;
pub mod repository;
pub mod schema;

pub use error::BotsError;
pub use repository::BotAccountRepository;
