//! Pagination module
//!
//! # Overview
//!
//! Cursor-paginated list endpoints all share one shape: a query that can
//! carry a resumption cursor, and a page result carrying items plus an
//! optional next cursor. [`PageQuery`] and [`PageResult`] capture that shape
//! structurally, and [`paginate`] turns any conforming pair plus a fetch
//! operation into a lazy [`futures::Stream`] over all pages.
//!
//! ```rust,ignore
//! use futures::{pin_mut, StreamExt};
//! use nimbocast_sdk::pagination::paginate;
//!
//! let stream = paginate(query, |q| client.list_streams(q));
//! pin_mut!(stream);
//! while let Some(stream_info) = stream.next().await.transpose()? {
//!     // one item at a time, pages fetched on demand
//! }
//! ```

mod stream;
mod types;

pub use stream::paginate;
pub use types::{PageQuery, PageResult};
