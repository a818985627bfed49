//! Query documents sent to the explorer. The selected fields are the
//! private contract with the backend; record types in `gwscan-core`
//! mirror them.

pub const ACCOUNT_QUERY: &str = r#"
query ($address: String!) {
  account(input: { address: $address }) {
    id
    eth_address
    type
    transaction_count
    token_transfer_count
    nonce
    account_udts {
      balance
      udt {
        id
        icon
        decimal
        name
        type
        symbol
      }
    }
  }
}
"#;

pub const TRANSACTION_QUERY: &str = r#"
query ($hash: String!) {
  transaction(input: { transaction_hash: $hash }) {
    hash
    from_account {
      eth_address
    }
    to_account {
      eth_address
    }
    type
    polyjuice {
      value
      status
      input
    }
    block {
      number
      hash
      timestamp
      status
    }
  }
  token_transfers(input: { transaction_hash: $hash }) {
    entries {
      from_address
      to_address
      amount
      udt {
        id
        decimal
        name
        symbol
      }
    }
  }
}
"#;
