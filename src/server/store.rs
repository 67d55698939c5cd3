use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use crate::datamodel::{Book, SEED_BOOKS};

/// The title every book gets when it is "edited".
///
/// `editBook` only takes the title to look up, so there is no new value to apply.
// FIXME: `editBook` should accept the new title as a second argument, but clients rely on the
// current shape of the mutation.
pub const EDITED_TITLE: &str = "New Title";

/// The in-memory collection of books, in insertion order.
///
/// Cloning the store hands out another handle to the same sequence.
/// Every operation holds the lock for its whole read-modify-return step.
#[derive(Clone, Debug, Default)]
pub struct BookStore {
    books: Arc<Mutex<Vec<Book>>>,
}

impl BookStore {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: Arc::new(Mutex::new(books)),
        }
    }

    /// Creates a store holding the fixed seed records.
    pub fn seeded() -> Self {
        Self::new(SEED_BOOKS.iter().map(Book::from).collect())
    }

    // A panic while holding the lock cannot leave the `Vec` half-modified.
    fn lock(&self) -> MutexGuard<'_, Vec<Book>> {
        self.books.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn all(&self) -> Vec<Book> {
        self.lock().clone()
    }

    pub fn find_by_author(&self, author: &str) -> Option<Book> {
        self.lock()
            .iter()
            .find(|book| book.author.as_deref() == Some(author))
            .cloned()
    }

    pub fn add(&self, book: Book) -> Book {
        let mut books = self.lock();
        books.push(book.clone());
        debug!(?book, len = books.len(), "added book");
        book
    }

    /// Renames the first book titled `title` to [`EDITED_TITLE`].
    pub fn edit_by_title(&self, title: &str) -> Option<Book> {
        let mut books = self.lock();
        let book = books
            .iter_mut()
            .find(|book| book.title.as_deref() == Some(title))?;
        book.title = Some(EDITED_TITLE.into());
        debug!(from = title, ?book, "edited book");
        Some(book.clone())
    }

    pub fn delete_by_title(&self, title: &str) -> Option<Book> {
        let mut books = self.lock();
        let idx = books
            .iter()
            .position(|book| book.title.as_deref() == Some(title))?;
        let book = books.remove(idx);
        debug!(?book, len = books.len(), "deleted book");
        Some(book)
    }
}
