use serde::Deserialize;

/// A savings goal attached to a Starling account
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    /// The unique ID of the savings goal
    pub savings_goal_uid: String,

    /// The display name of the savings goal
    pub name: String,
}
