pub mod charset;
pub mod config;
pub mod date;
pub mod event;
pub mod eventkind;
pub mod eventprinter;
pub mod export;
pub mod filter;
pub mod fs;
pub mod gift;
pub mod jsonl;
pub mod listprinter;
pub mod method;
pub mod relation;
pub mod side;
pub mod sort;
pub mod stamp;
pub mod store;
pub mod summary;
pub mod summaryprinter;
pub mod util;
pub mod validate;
pub mod viewstate;
pub mod won;

pub use charset::Charset;
pub use config::Config;
pub use date::Date;
pub use event::Event;
pub use event::EventDraft;
pub use event::EventId;
pub use eventkind::EventKind;
pub use filter::Filter;
pub use fs::Fs;
pub use gift::GiftDraft;
pub use gift::GiftId;
pub use gift::GiftPatch;
pub use gift::GiftRecord;
pub use method::Method;
pub use relation::Relation;
pub use side::Side;
pub use sort::Sort;
pub use sort::SortKey;
pub use sort::SortOrder;
pub use stamp::Timestamp;
pub use store::Store;
pub use summary::Summary;
pub use viewstate::ViewState;
pub use won::Won;

pub type Eventlist = jsonl::Jsonl<Event>;
pub type Giftlist = jsonl::Jsonl<GiftRecord>;
