use futures_util::future::try_join_all;
use serde::Deserialize;
use tracing::instrument;
use uuid::Uuid;

use crate::{Account, Amount, Client, Error, FeedItem, SavingsGoal};

/// The API's acknowledgement of a single savings-goal transfer
#[derive(Debug, Clone, Deserialize)]
pub struct TransferConfirmation {
    /// The amount that was moved into the goal
    pub amount: Amount,
}

/// Move each transaction's amount into the savings goal, one transfer per
/// transaction under a fresh transfer id.
///
/// The transfers are independent and are dispatched concurrently; the total
/// is not computed until every one has settled. If any transfer fails, the
/// whole batch fails and no total is reported.
#[instrument(skip_all, fields(transfers = transactions.len()))]
pub(crate) async fn execute(
    client: &Client,
    account: &Account,
    goal: &SavingsGoal,
    transactions: &[FeedItem],
) -> Result<Amount, Error> {
    let confirmations = try_join_all(transactions.iter().map(|transaction| {
        let transfer_uid = Uuid::new_v4();
        tracing::debug!(
            %transfer_uid,
            feed_item_uid = %transaction.feed_item_uid,
            minor_units = transaction.amount.minor_units,
            "sending transfer"
        );

        client.add_money(
            &account.account_uid,
            &goal.savings_goal_uid,
            transfer_uid,
            &transaction.amount,
        )
    }))
    .await?;

    Ok(Amount::total(
        confirmations.iter().map(|confirmation| &confirmation.amount),
        &account.currency,
    ))
}
