/// Response composition — turn explorer records into reply cards.
///
/// Composition never fails: absent optional data becomes the `-`
/// placeholder, and sections tied to data the record does not carry are
/// left out entirely.
use gwscan_core::{
    AccountRecord, Card, DisplaySection, SectionGroup, TokenTransfer, TransactionRecord,
};
use gwscan_format::{format_value, normalize_timestamp, or_placeholder, PLACEHOLDER};

pub const GWSCAN_URL: &str = "https://www.gwscan.com";
pub const LOGO_URL: &str = "https://www.gwscan.com/icons/nervina-logo.svg";
pub const DEFAULT_COLOR: u32 = 0x0099ff;

/// Decimal places of the native CKB asset.
pub const CKB_DECIMALS: u32 = 8;
pub const CKB_SYMBOL: &str = "CKB";

/// Presentation settings shared by every composed card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyStyle {
    pub explorer_url: String,
    pub logo_url: String,
    pub color: u32,
}

impl Default for ReplyStyle {
    fn default() -> Self {
        Self {
            explorer_url: GWSCAN_URL.to_string(),
            logo_url: LOGO_URL.to_string(),
            color: DEFAULT_COLOR,
        }
    }
}

impl ReplyStyle {
    fn link(&self, kind: &str, id: &str) -> String {
        format!("{}/{kind}/{id}", self.explorer_url.trim_end_matches('/'))
    }

    fn card(&self, title: String, url: String) -> Card {
        Card::new(title, url, self.color).with_logo(self.logo_url.clone())
    }
}

// ---------------------------------------------------------------------------
// account
// ---------------------------------------------------------------------------

pub fn compose_account(account: &AccountRecord, style: &ReplyStyle) -> Card {
    let address = or_placeholder(account.eth_address.as_deref());
    let kind = or_placeholder(account.kind.as_deref());

    let mut sections = Vec::new();
    if let Some(count) = account.transaction_count.as_deref() {
        sections.push(DisplaySection::inline("Transactions", count));
    }
    if let Some(count) = account.token_transfer_count.as_deref() {
        sections.push(DisplaySection::inline("Token Transfers", count));
    }

    for holding in account.udts() {
        let udt = holding.udt.as_ref();
        let name = or_placeholder(udt.and_then(|u| u.name.as_deref()));
        let value = match holding.balance.as_deref() {
            Some(balance) => format_value(
                balance,
                udt.and_then(|u| u.decimal),
                udt.and_then(|u| u.symbol.as_deref()),
            ),
            None => PLACEHOLDER.to_string(),
        };
        sections.push(DisplaySection::inline(name, value));
    }

    style
        .card(format!("{kind} {address}"), style.link("address", &address))
        .with_sections(sections)
}

// ---------------------------------------------------------------------------
// transaction
// ---------------------------------------------------------------------------

pub fn compose_transaction(
    tx: &TransactionRecord,
    transfers: &[TokenTransfer],
    style: &ReplyStyle,
) -> Card {
    let hash = or_placeholder(tx.hash.as_deref());
    let kind = or_placeholder(tx.kind.as_deref());

    let mut sections = vec![
        DisplaySection::block("From", or_placeholder(tx.from_address())),
        DisplaySection::block("To", or_placeholder(tx.to_address())),
    ];

    if let Some(polyjuice) = &tx.polyjuice {
        let value = polyjuice.value.as_deref().unwrap_or("0");
        sections.push(DisplaySection::block(
            "Value",
            format_value(value, Some(CKB_DECIMALS), Some(CKB_SYMBOL)),
        ));
        sections.push(DisplaySection::block(
            "Tx Status",
            or_placeholder(polyjuice.status.as_deref()),
        ));
    }

    let block = tx.block.as_ref();
    sections.push(DisplaySection::block(
        "Block",
        or_placeholder(block.and_then(|b| b.number.as_deref())),
    ));
    sections.push(DisplaySection::block(
        "Block Status",
        or_placeholder(block.and_then(|b| b.status.as_deref())),
    ));
    sections.push(DisplaySection::block(
        "Time",
        normalize_timestamp(block.and_then(|b| b.timestamp.as_deref())),
    ));

    let groups = transfers
        .iter()
        .enumerate()
        .map(|(i, transfer)| compose_transfer(i + 1, transfer))
        .collect();

    style
        .card(format!("{kind} Transaction\n {hash}"), style.link("tx", &hash))
        .with_sections(sections)
        .with_groups(groups)
}

fn compose_transfer(position: usize, transfer: &TokenTransfer) -> SectionGroup {
    let udt = transfer.udt.as_ref();
    let amount = match transfer.amount.as_deref() {
        Some(amount) => format_value(
            amount,
            udt.and_then(|u| u.decimal),
            udt.and_then(|u| u.symbol.as_deref()),
        ),
        None => PLACEHOLDER.to_string(),
    };

    SectionGroup {
        title: format!("Token Transfer #{position}"),
        sections: vec![
            DisplaySection::inline("Token", or_placeholder(udt.and_then(|u| u.name.as_deref()))),
            DisplaySection::inline("Amount", amount),
            DisplaySection::block("From", or_placeholder(transfer.from_address.as_deref())),
            DisplaySection::block("To", or_placeholder(transfer.to_address.as_deref())),
        ],
    }
}
