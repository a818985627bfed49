pub mod de;
pub mod error;
pub mod records;
pub mod reply;
pub mod traits;

pub use error::{CommandError, QueryError, ValidationError};
pub use records::{
    AccountData, AccountRecord, AccountRef, AccountUdt, BlockRecord, PolyjuiceRecord,
    TokenTransfer, TransactionData, TransactionRecord, TransferList, UdtRecord,
};
pub use reply::{Card, DisplaySection, Reply, ReplyBody, SectionGroup};
pub use traits::{fetch, QueryExecutor};
