//! A library for sweeping a Starling account's spending in one category into
//! a savings goal.
//!
//! A [`Sweep`] describes a single run: fetch the account's transaction feed
//! since a cutoff, keep the items in one spending category, and move each
//! item's amount into the account's first savings goal via the [`Client`].

#![deny(
    clippy::all,
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs
)]
#![warn(clippy::pedantic)]

mod account;
pub use account::Account;
mod amount;
pub use amount::Amount;
mod client;
pub use client::Client;
mod feed;
pub use feed::FeedItem;
mod savings_goal;
pub use savings_goal::SavingsGoal;
mod sweep;
pub use sweep::{Report, Sweep};
mod transfer;
pub use transfer::TransferConfirmation;

pub use reqwest::StatusCode;

/// The errors which can occur during a sweep
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A request could not be sent, or its response could not be read
    #[error("API request failed")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("API returned {status}: {body}")]
    Api {
        /// The HTTP status of the response
        status: StatusCode,

        /// The response body, as returned by the API
        body: String,
    },

    /// The authenticated user has no accounts to select from
    #[error("no accounts are available for this user")]
    EmptyAccountList,

    /// The selected account has no savings goal to transfer into
    #[error("account {account_uid} has no savings goals")]
    NoSavingsGoal {
        /// The account that was searched
        account_uid: String,
    },
}
