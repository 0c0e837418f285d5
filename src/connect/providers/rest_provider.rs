use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::accounts::Account;
use crate::connect::connect_model::Item;
use crate::connect::connect_traits::FinancialDataProvider;
use crate::connect::{ConnectError, Result};
use crate::transactions::{Transaction, TransactionCategory};

/// JSON/HTTP implementation of [`FinancialDataProvider`].
///
/// Expects a Plaid-shaped API:
/// `GET /items`, `GET /items/{id}/accounts`,
/// `GET /items/{id}/transactions?limit=N`.
pub struct RestProvider {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl RestProvider {
    pub fn new(base_url: impl Into<String>) -> Self {
        RestProvider {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Attaches a bearer token sent with every request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(&url).query(query);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ConnectError::Provider(format!(
                "{} returned {}: {}",
                path, status, body
            )));
        }

        Ok(response.json::<T>().await?)
    }
}

// Wire models mirror the upstream field names; domain models are produced
// through the From impls below.

#[derive(Debug, Deserialize)]
struct ItemsResponse {
    items: Vec<ItemDto>,
}

#[derive(Debug, Deserialize)]
struct ItemDto {
    item_id: String,
    institution_name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AccountsResponse {
    accounts: Vec<AccountDto>,
}

#[derive(Debug, Deserialize)]
struct AccountDto {
    account_id: String,
    name: String,
    #[serde(rename = "type")]
    account_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TransactionsResponse {
    transactions: Vec<TransactionDto>,
}

#[derive(Debug, Deserialize)]
struct TransactionDto {
    transaction_id: String,
    account_id: String,
    name: String,
    merchant_name: Option<String>,
    amount: Decimal,
    iso_currency_code: Option<String>,
    date: NaiveDate,
    personal_finance_category: Option<CategoryDto>,
    payment_channel: Option<String>,
    transaction_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CategoryDto {
    primary: String,
    detailed: Option<String>,
}

impl From<ItemDto> for Item {
    fn from(dto: ItemDto) -> Self {
        Item {
            item_id: dto.item_id,
            institution_name: dto.institution_name,
        }
    }
}

impl AccountDto {
    // The accounts payload carries no item id; the caller supplies it.
    fn into_account(self, item_id: &str) -> Account {
        Account {
            account_id: self.account_id,
            name: self.name,
            item_id: item_id.to_string(),
            account_type: self.account_type,
        }
    }
}

impl From<TransactionDto> for Transaction {
    fn from(dto: TransactionDto) -> Self {
        Transaction {
            transaction_id: dto.transaction_id,
            account_id: dto.account_id,
            name: dto.name,
            merchant_name: dto.merchant_name,
            amount: dto.amount,
            currency_code: dto.iso_currency_code,
            date: dto.date,
            category: dto.personal_finance_category.map(|c| TransactionCategory {
                primary: c.primary,
                detailed: c.detailed,
            }),
            payment_channel: dto.payment_channel,
            transaction_type: dto.transaction_type,
        }
    }
}

#[async_trait]
impl FinancialDataProvider for RestProvider {
    async fn list_items(&self) -> Result<Vec<Item>> {
        let response: ItemsResponse = self.fetch_json("/items", &[]).await?;
        Ok(response.items.into_iter().map(Item::from).collect())
    }

    async fn list_accounts(&self, item_id: &str) -> Result<Vec<Account>> {
        let path = format!("/items/{}/accounts", item_id);
        let response: AccountsResponse = self.fetch_json(&path, &[]).await?;
        Ok(response
            .accounts
            .into_iter()
            .map(|dto| dto.into_account(item_id))
            .collect())
    }

    async fn list_transactions(&self, item_id: &str, limit: usize) -> Result<Vec<Transaction>> {
        let path = format!("/items/{}/transactions", item_id);
        let query = [("limit", limit.to_string())];
        let response: TransactionsResponse = self.fetch_json(&path, &query).await?;
        Ok(response
            .transactions
            .into_iter()
            .map(Transaction::from)
            .collect())
    }
}
