use crate::Error;
use crate::transport::Transport;
use birdfeed_api::parse;
use serde_json::Value;
use std::collections::VecDeque;

/// The cursor value of a not-yet-fetched first page.
pub const FIRST_PAGE: i64 = -1;

/// The cursor value an endpoint returns when there are no more pages.
pub const TERMINAL: i64 = 0;

/// A lazy, single-pass iterator over a cursor-paginated endpoint.
///
/// One page is fetched each time the internal buffer empties, by appending
/// the current cursor to the base URL; elements are yielded in per-page
/// order, and pages are fetched strictly in cursor order. A fully-buffered
/// page never triggers a second fetch until the buffer is drained.
///
/// The iterator requires `&mut self`, so the buffer-check-then-fetch step is
/// exclusive by construction; sharing one instance across threads requires an
/// external lock. Once exhausted it cannot be restarted.
pub struct CursorIter<'a, C: ?Sized, T, M, P = fn(i64) -> bool> {
    transport: &'a C,
    url: String,
    map_page: M,
    should_continue: P,
    cursor: i64,
    buffer: VecDeque<T>,
    last_page_len: usize,
}

impl<'a, C, T, M> CursorIter<'a, C, T, M, fn(i64) -> bool>
where
    C: Transport + ?Sized,
    M: Fn(&Value) -> Result<Vec<T>, parse::Error>,
{
    /// A walk with the default policy: continue while the cursor indicates
    /// more data.
    pub fn new(transport: &'a C, url: String, map_page: M) -> Self {
        Self::with_policy(transport, url, map_page, |_| true)
    }
}

impl<'a, C, T, M, P> CursorIter<'a, C, T, M, P>
where
    C: Transport + ?Sized,
    M: Fn(&Value) -> Result<Vec<T>, parse::Error>,
    P: FnMut(i64) -> bool,
{
    /// A walk bounded by a continuation policy, consulted with the current
    /// cursor before every fetch (e.g. to stop after a number of pages).
    pub fn with_policy(transport: &'a C, url: String, map_page: M, should_continue: P) -> Self {
        Self {
            transport,
            url,
            map_page,
            should_continue,
            cursor: FIRST_PAGE,
            buffer: VecDeque::new(),
            last_page_len: 0,
        }
    }

    /// Optimistically true until an empty page with a terminal cursor has
    /// been observed: a freshly constructed iterator reports `true` even
    /// before the first fetch.
    pub fn has_next(&self) -> bool {
        self.cursor > TERMINAL || !self.buffer.is_empty() || self.cursor == FIRST_PAGE
    }

    /// The number of elements in the most recently fetched page.
    pub fn last_page_len(&self) -> usize {
        self.last_page_len
    }

    fn refill(&mut self) -> Result<(), Error> {
        let url = format!("{}&cursor={}", self.url, self.cursor);
        log::debug!("Fetching page: {}", url);

        let page = self
            .transport
            .get_json(&url)
            .map_err(|source| Error::Transport {
                url: url.clone(),
                source,
            })?;

        let results = (self.map_page)(&page).map_err(|source| Error::Payload {
            url: url.clone(),
            source,
        })?;

        self.cursor = page
            .get("next_cursor")
            .and_then(Value::as_i64)
            .ok_or(Error::MissingCursor { url })?;
        self.last_page_len = results.len();
        self.buffer.extend(results);

        Ok(())
    }
}

impl<'a, C, T, M, P> Iterator for CursorIter<'a, C, T, M, P>
where
    C: Transport + ?Sized,
    M: Fn(&Value) -> Result<Vec<T>, parse::Error>,
    P: FnMut(i64) -> bool,
{
    type Item = Result<T, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.buffer.is_empty() {
            let fetchable = self.cursor == FIRST_PAGE || self.cursor > TERMINAL;
            if !fetchable || !(self.should_continue)(self.cursor) {
                return None;
            }

            if let Err(error) = self.refill() {
                // The walk cannot safely resume after a failed fetch.
                self.cursor = TERMINAL;
                return Some(Err(error));
            }
        }

        self.buffer.pop_front().map(Ok)
    }
}
