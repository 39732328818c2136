//! Lazy page walking
//!
//! Turns "fetch one page" plus an initial query into one lazy stream of
//! items, stitching pages together via cursors.

use super::types::{PageQuery, PageResult};
use crate::error::Result;
use async_stream::try_stream;
use futures::Stream;
use std::future::Future;

/// Walk every page reachable from `query`, yielding items one at a time.
///
/// `fetch` receives a snapshot of the current query for each page; the
/// cursor advances in place between pages until a page reports no next
/// cursor.
///
/// - Items are yielded in server order, never reordered or deduplicated.
/// - A failed fetch yields exactly one terminal `Err` and no items from the
///   failing page. No retry happens here; retry policy lives beneath the
///   fetch operation.
/// - At most one fetch is in flight, and no page is fetched ahead of
///   consumption. Dropping the stream stops fetching immediately.
/// - Cursors are not validated; a server issuing cyclic cursors produces an
///   infinite stream. Bound iteration (e.g. with
///   [`futures::StreamExt::take`]) when the server is untrusted.
///
/// The query moves into the stream. To resume after an early stop, retain
/// the last-seen cursor and build a fresh query carrying it.
pub fn paginate<Q, R, F, Fut>(mut query: Q, mut fetch: F) -> impl Stream<Item = Result<R::Item>>
where
    Q: PageQuery,
    R: PageResult,
    F: FnMut(Q) -> Fut,
    Fut: Future<Output = Result<R>>,
{
    try_stream! {
        loop {
            let page = fetch(query.clone()).await?;
            let next = page.next_cursor();
            for item in page.into_items() {
                yield item;
            }
            match next {
                Some(cursor) => query.set_cursor(cursor),
                None => break,
            }
        }
    }
}
