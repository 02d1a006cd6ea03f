use std::time::Duration;

use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::{Account, Amount, Error, FeedItem, SavingsGoal, TransferConfirmation};

static DEFAULT_BASE_URL: &str = "https://api.starlingbank.com/api/v2";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// A client for the Starling Bank API
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    access_token: String,
    base_url: String,
}

impl Client {
    /// Construct a client for the public Starling API, authenticated with a
    /// personal access token.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed
    pub fn new(access_token: impl Into<String>) -> Result<Self, Error> {
        Self::with_base_url(access_token, DEFAULT_BASE_URL)
    }

    /// Construct a client against an alternative base URL (such as the
    /// sandbox environment).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed
    pub fn with_base_url(
        access_token: impl Into<String>,
        base_url: &str,
    ) -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            access_token: access_token.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// List the accounts held by the authenticated user
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API answers with a
    /// non-success status
    #[instrument(skip(self))]
    pub async fn accounts(&self) -> Result<Vec<Account>, Error> {
        let url = format!("{}/accounts", self.base_url);
        let response: Accounts = self.get(&url, &[]).await?;
        Ok(response.accounts)
    }

    /// List the savings goals attached to an account
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API answers with a
    /// non-success status
    #[instrument(skip(self))]
    pub async fn savings_goals(&self, account_uid: &str) -> Result<Vec<SavingsGoal>, Error> {
        let url = format!("{}/account/{}/savings-goals", self.base_url, account_uid);
        let response: SavingsGoals = self.get(&url, &[]).await?;
        Ok(response.savings_goal_list)
    }

    /// Fetch the transaction feed for an account and category, restricted to
    /// items changed since the given instant
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API answers with a
    /// non-success status
    #[instrument(skip(self))]
    pub async fn feed_since(
        &self,
        account_uid: &str,
        category_uid: &str,
        changes_since: DateTime<Utc>,
    ) -> Result<Vec<FeedItem>, Error> {
        let url = format!(
            "{}/feed/account/{}/category/{}",
            self.base_url, account_uid, category_uid
        );
        let changes_since = changes_since.to_rfc3339_opts(SecondsFormat::Millis, true);

        let response: Feed = self
            .get(&url, &[("changesSince", changes_since.as_str())])
            .await?;
        Ok(response.feed_items)
    }

    /// Move `amount` into a savings goal, under a caller-supplied transfer id
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API answers with a
    /// non-success status
    #[instrument(skip(self, amount))]
    pub async fn add_money(
        &self,
        account_uid: &str,
        savings_goal_uid: &str,
        transfer_uid: Uuid,
        amount: &Amount,
    ) -> Result<TransferConfirmation, Error> {
        let url = format!(
            "{}/account/{}/savings-goals/{}/add-money/{}",
            self.base_url, account_uid, savings_goal_uid, transfer_uid
        );

        let response = self
            .http
            .put(&url)
            .bearer_auth(&self.access_token)
            .json(&AddMoney { amount })
            .send()
            .await?;

        deserialise(response).await
    }

    async fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, Error> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.access_token)
            .query(query)
            .send()
            .await?;

        deserialise(response).await
    }
}

async fn deserialise<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, Error> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Api { status, body });
    }

    Ok(response.json().await?)
}

#[derive(Debug, Deserialize)]
struct Accounts {
    accounts: Vec<Account>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SavingsGoals {
    savings_goal_list: Vec<SavingsGoal>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Feed {
    feed_items: Vec<FeedItem>,
}

#[derive(Debug, Serialize)]
struct AddMoney<'a> {
    amount: &'a Amount,
}
