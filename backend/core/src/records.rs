//! Typed views of the explorer's query results.
//!
//! Every field is optional: the explorer returns null for anything it does not
//! know, and the reply composer substitutes placeholders. A `None` primary
//! record (`AccountData::account`, `TransactionData::transaction`) means the
//! entity does not exist, which is not the same as a null field inside a
//! present record.

use serde::{Deserialize, Serialize};

use crate::de::{opt_string_or_number, opt_u32_lenient};

// ---------------------------------------------------------------------------
// account
// ---------------------------------------------------------------------------

/// Result of the `account` query.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountData {
    #[serde(default)]
    pub account: Option<AccountRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountRecord {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub eth_address: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub transaction_count: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub token_transfer_count: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub nonce: Option<String>,
    #[serde(default)]
    pub account_udts: Option<Vec<AccountUdt>>,
}

impl AccountRecord {
    /// UDT balances, empty when the explorer omitted the list.
    pub fn udts(&self) -> &[AccountUdt] {
        self.account_udts.as_deref().unwrap_or_default()
    }
}

/// One token balance held by an account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountUdt {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub balance: Option<String>,
    #[serde(default)]
    pub udt: Option<UdtRecord>,
}

/// User-defined token metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UdtRecord {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub id: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default, deserialize_with = "opt_u32_lenient")]
    pub decimal: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
}

// ---------------------------------------------------------------------------
// transaction
// ---------------------------------------------------------------------------

/// Result of the `transaction` query together with its token transfers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionData {
    #[serde(default)]
    pub transaction: Option<TransactionRecord>,
    #[serde(default)]
    pub token_transfers: Option<TransferList>,
}

impl TransactionData {
    pub fn transfers(&self) -> &[TokenTransfer] {
        self.token_transfers
            .as_ref()
            .map(|list| list.entries.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub from_account: Option<AccountRef>,
    #[serde(default)]
    pub to_account: Option<AccountRef>,
    /// Present only for EVM (polyjuice) transactions.
    #[serde(default)]
    pub polyjuice: Option<PolyjuiceRecord>,
    #[serde(default)]
    pub block: Option<BlockRecord>,
}

impl TransactionRecord {
    pub fn from_address(&self) -> Option<&str> {
        self.from_account.as_ref().and_then(|a| a.eth_address.as_deref())
    }

    pub fn to_address(&self) -> Option<&str> {
        self.to_account.as_ref().and_then(|a| a.eth_address.as_deref())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountRef {
    #[serde(default)]
    pub eth_address: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolyjuiceRecord {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub value: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub input: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockRecord {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub number: Option<String>,
    #[serde(default)]
    pub hash: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

// ---------------------------------------------------------------------------
// token transfers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransferList {
    #[serde(default)]
    pub entries: Vec<TokenTransfer>,
}

/// A single ERC-20 style transfer emitted by a transaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenTransfer {
    #[serde(default)]
    pub from_address: Option<String>,
    #[serde(default)]
    pub to_address: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub amount: Option<String>,
    #[serde(default)]
    pub udt: Option<UdtRecord>,
}
