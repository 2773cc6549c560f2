//! The built-in corpora.

mod english;
mod greek;
mod latin;
mod scholia;

use crate::models::CorpusTables;

pub use self::english::ENGLISH;
pub use self::greek::GREEK;
pub use self::latin::LATIN;
pub use self::scholia::SCHOLIA;

/// Every built-in corpus, in merge order.
pub const CORPORA: [CorpusTables; 4] = [GREEK, LATIN, ENGLISH, SCHOLIA];
