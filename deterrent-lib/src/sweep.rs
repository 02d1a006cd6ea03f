use chrono::{DateTime, Utc};
use futures_util::future::try_join;
use tracing::instrument;

use crate::{feed, transfer, Account, Amount, Client, Error, SavingsGoal};

/// Configuration for a single sweep run
#[derive(Debug, Clone)]
pub struct Sweep {
    /// The spending category to sweep into savings
    pub category: String,

    /// Only feed items changed since this instant are considered
    pub changes_since: DateTime<Utc>,

    /// When set, resolve and report but skip the transfer calls
    pub dry_run: bool,
}

/// The outcome of a completed sweep run
#[derive(Debug, Clone)]
pub struct Report {
    /// The spending category that was swept
    pub category: String,

    /// The name of the savings goal the money was moved into
    pub goal_name: String,

    /// The number of transfers in the batch
    pub transfers: usize,

    /// The aggregate amount moved into the goal
    pub total: Amount,
}

impl Sweep {
    /// Run the sweep: resolve the account and savings goal, fetch and filter
    /// the feed, then transfer each retained amount into the goal.
    ///
    /// A feed with no items in the category is valid; the report then carries
    /// a zero total in the account currency.
    ///
    /// # Errors
    ///
    /// Any failing stage aborts the whole run: a failed or non-success API
    /// call, an empty account list, or an account with no savings goals.
    #[instrument(skip_all, fields(category = %self.category))]
    pub async fn run(&self, client: &Client) -> Result<Report, Error> {
        let account = resolve_account(client).await?;

        // the goal and the feed both depend only on the account
        let (goal, feed_items) = try_join(
            resolve_savings_goal(client, &account),
            client.feed_since(
                &account.account_uid,
                &account.default_category,
                self.changes_since,
            ),
        )
        .await?;

        let transactions = feed::in_category(feed_items, &self.category);
        tracing::info!(
            count = transactions.len(),
            goal = %goal.name,
            "transactions to sweep"
        );

        let total = if self.dry_run {
            Amount::total(
                transactions.iter().map(|transaction| &transaction.amount),
                &account.currency,
            )
        } else {
            transfer::execute(client, &account, &goal, &transactions).await?
        };

        Ok(Report {
            category: self.category.clone(),
            goal_name: goal.name,
            transfers: transactions.len(),
            total,
        })
    }
}

async fn resolve_account(client: &Client) -> Result<Account, Error> {
    let accounts = client.accounts().await?;
    tracing::debug!(count = accounts.len(), "accounts for this user");
    first_account(accounts)
}

async fn resolve_savings_goal(client: &Client, account: &Account) -> Result<SavingsGoal, Error> {
    let goals = client.savings_goals(&account.account_uid).await?;
    tracing::debug!(count = goals.len(), "savings goals for this account");
    first_goal(goals, &account.account_uid)
}

fn first_account(accounts: Vec<Account>) -> Result<Account, Error> {
    accounts.into_iter().next().ok_or(Error::EmptyAccountList)
}

fn first_goal(goals: Vec<SavingsGoal>, account_uid: &str) -> Result<SavingsGoal, Error> {
    goals.into_iter().next().ok_or_else(|| Error::NoSavingsGoal {
        account_uid: account_uid.to_string(),
    })
}
