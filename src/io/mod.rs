//! IO adapters at the system boundary: the spreadsheet-shaped attendance
//! source and the message-shaped history and delivery transports. The core
//! consumes these through the traits defined here and never assumes more
//! than fully-materialised data.

pub mod messages;
pub mod sheet;

pub use messages::{FileSink, Message, MessageHistorySource, MessageSink, StaticHistory};
pub use sheet::{SheetSource, SheetTable, XlsxSheetSource, find_date_columns};
