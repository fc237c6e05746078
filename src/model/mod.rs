mod command;
mod metadata;
mod query;
mod results;

pub use self::command::{CommandRequest, CommandResult, METADATA_COMMAND_PREFIX};
pub use self::metadata::{Metadata, TAG_FIELD, TAG_NAMESPACE};
pub use self::query::{DEFAULT_PAGE_SIZE, DEFAULT_QUERY, QueryState, SearchQuery};
pub use self::results::{Item, SearchResult};

#[cfg(test)]
#[path = "../tests/model/model_tests.rs"]
mod tests;
