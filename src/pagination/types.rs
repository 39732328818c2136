//! Pagination contract types
//!
//! The structural capability pair a paginated list endpoint satisfies. Any
//! query/result types implementing these two traits can be driven by
//! [`super::paginate`]; no inheritance between endpoint types is implied.

/// Query side of the cursor-pagination contract.
///
/// Implemented by every generated list query. The page walk overwrites the
/// cursor field in place between pages; `Clone` lets each fetch attempt own
/// a snapshot of the query while the walk keeps the evolving original.
pub trait PageQuery: Clone {
    /// Render the query's filter, sort, and cursor fields as query pairs.
    fn query_pairs(&self) -> Vec<(String, String)>;

    /// Overwrite the cursor field.
    ///
    /// A query whose cursor has never been set requests the first page for
    /// its filter set.
    fn set_cursor(&mut self, cursor: String);
}

/// Result side of the cursor-pagination contract.
pub trait PageResult {
    /// Item type carried by one page
    type Item;

    /// Cursor of the next page; `None` exactly when no subsequent page
    /// exists.
    fn next_cursor(&self) -> Option<String>;

    /// Consume the page, yielding its items in server order.
    fn into_items(self) -> Vec<Self::Item>;
}
