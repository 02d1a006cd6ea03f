use serde::Deserialize;

use crate::Amount;

/// A single item from an account's transaction feed
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    /// The unique ID of the feed item
    pub feed_item_uid: String,

    /// The transaction amount
    pub amount: Amount,

    /// The spending category assigned to the item
    pub spending_category: String,
}

/// Retain the feed items in a single spending category, preserving feed
/// order. An empty result is valid.
pub(crate) fn in_category(items: Vec<FeedItem>, category: &str) -> Vec<FeedItem> {
    items
        .into_iter()
        .filter(|item| item.spending_category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{in_category, FeedItem};

    fn sample_feed() -> Vec<FeedItem> {
        serde_json::from_str(
            r#"[
                {
                    "feedItemUid": "F1",
                    "amount": { "currency": "GBP", "minorUnits": 500 },
                    "spendingCategory": "EATING_OUT"
                },
                {
                    "feedItemUid": "F2",
                    "amount": { "currency": "GBP", "minorUnits": 300 },
                    "spendingCategory": "GROCERIES"
                },
                {
                    "feedItemUid": "F3",
                    "amount": { "currency": "GBP", "minorUnits": 250 },
                    "spendingCategory": "EATING_OUT"
                }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn only_the_target_category_is_retained() {
        let filtered = in_category(sample_feed(), "EATING_OUT");

        assert!(filtered
            .iter()
            .all(|item| item.spending_category == "EATING_OUT"));
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn feed_order_is_preserved() {
        let filtered = in_category(sample_feed(), "EATING_OUT");

        let uids: Vec<_> = filtered.iter().map(|item| item.feed_item_uid.as_str()).collect();
        assert_eq!(uids, vec!["F1", "F3"]);
    }

    #[test]
    fn no_matches_is_empty_not_an_error() {
        assert!(in_category(sample_feed(), "TRAVEL").is_empty());
    }
}
