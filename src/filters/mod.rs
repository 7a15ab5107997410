mod criteria;
mod engine;
mod filter_error;
mod record;
mod sort;

pub use criteria::{DistanceLimit, FilterCriteria, Kilometers};
pub use engine::{apply, contains_ignore_case, filter_records, normalize_query};
pub use filter_error::FilterError;
pub use record::{Filterable, RecordDate};
pub use sort::SortOrder;
