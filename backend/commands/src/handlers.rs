/// Built-in explorer command handlers.
///
/// Each handler issues exactly one query. A missing primary record is the
/// normal "not found" branch and is answered privately; transport and
/// decoding failures are returned to the dispatcher.
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use gwscan_core::{fetch, AccountData, CommandError, QueryExecutor, Reply, TransactionData};
use gwscan_graphql::{ACCOUNT_QUERY, TRANSACTION_QUERY};

use crate::compose::{compose_account, compose_transaction, ReplyStyle};
use crate::dispatch::{CommandContext, CommandHandler};
use crate::types::CommandArgs;

// ---------------------------------------------------------------------------
// /account
// ---------------------------------------------------------------------------

pub struct AccountHandler {
    executor: Arc<dyn QueryExecutor>,
    style: ReplyStyle,
}

impl AccountHandler {
    pub fn new(executor: Arc<dyn QueryExecutor>, style: ReplyStyle) -> Self {
        Self { executor, style }
    }
}

#[async_trait]
impl CommandHandler for AccountHandler {
    async fn handle(
        &self,
        _ctx: &CommandContext,
        args: &CommandArgs,
    ) -> Result<Reply, CommandError> {
        let address = args.require("address")?;
        let data: AccountData =
            fetch(self.executor.as_ref(), ACCOUNT_QUERY, json!({ "address": address })).await?;

        let Some(account) = data.account else {
            info!(%address, "Account not found");
            return Ok(Reply::text(format!("Account \"{address}\" not found")).private());
        };

        Ok(Reply::card(compose_account(&account, &self.style)).private())
    }
}

// ---------------------------------------------------------------------------
// /transaction
// ---------------------------------------------------------------------------

pub struct TransactionHandler {
    executor: Arc<dyn QueryExecutor>,
    style: ReplyStyle,
}

impl TransactionHandler {
    pub fn new(executor: Arc<dyn QueryExecutor>, style: ReplyStyle) -> Self {
        Self { executor, style }
    }
}

#[async_trait]
impl CommandHandler for TransactionHandler {
    async fn handle(
        &self,
        _ctx: &CommandContext,
        args: &CommandArgs,
    ) -> Result<Reply, CommandError> {
        let hash = args.require("hash")?;
        let data: TransactionData =
            fetch(self.executor.as_ref(), TRANSACTION_QUERY, json!({ "hash": hash })).await?;

        let Some(tx) = data.transaction.as_ref() else {
            info!(%hash, "Transaction not found");
            return Ok(Reply::text(format!("Transaction \"{hash}\" not found")).private());
        };

        Ok(Reply::card(compose_transaction(tx, data.transfers(), &self.style)))
    }
}
