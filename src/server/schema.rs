use async_graphql::{Context, EmptySubscription, Object, Schema, SimpleObject};

use crate::datamodel;

use super::store::BookStore;

pub type BooksSchema = Schema<Library, LibraryMutation, EmptySubscription>;

pub fn make_schema(store: BookStore) -> BooksSchema {
    Schema::build(Library, LibraryMutation, EmptySubscription)
        .data(store)
        .finish()
}

trait Store {
    fn store(&self) -> &BookStore;
}

impl Store for Context<'_> {
    fn store(&self) -> &BookStore {
        self.data_unchecked::<BookStore>()
    }
}

#[derive(SimpleObject, Debug)]
pub struct Book {
    title: Option<String>,
    author: Option<String>,
}

impl From<datamodel::Book> for Book {
    fn from(book: datamodel::Book) -> Self {
        Self {
            title: book.title,
            author: book.author,
        }
    }
}

pub struct Library;

#[Object(name = "Query")]
impl Library {
    async fn books(&self, ctx: &Context<'_>) -> Vec<Book> {
        ctx.store().all().into_iter().map(Book::from).collect()
    }

    async fn book(&self, ctx: &Context<'_>, author: String) -> Option<Book> {
        ctx.store().find_by_author(&author).map(Book::from)
    }
}

pub struct LibraryMutation;

#[Object(name = "Mutation")]
impl LibraryMutation {
    async fn add_book(&self, ctx: &Context<'_>, title: String, author: String) -> Book {
        ctx.store().add(datamodel::Book::new(title, author)).into()
    }

    /// Looks up a book by `title` and renames it to a fixed placeholder title.
    async fn edit_book(&self, ctx: &Context<'_>, title: String) -> Option<Book> {
        ctx.store().edit_by_title(&title).map(Book::from)
    }

    async fn delete_book(&self, ctx: &Context<'_>, title: String) -> Option<Book> {
        ctx.store().delete_by_title(&title).map(Book::from)
    }
}
