pub mod age;
pub mod item;
pub mod ledger;
pub mod loan;
pub mod snapshot;
pub mod user;

pub use age::AgeBracket;
pub use item::{Item, ItemStatus};
pub use ledger::{LedgerClass, LedgerEntry};
pub use loan::{Loan, LoanStatus};
pub use snapshot::Snapshot;
pub use user::{Role, User};
