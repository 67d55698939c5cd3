/// A book record as held by the store.
///
/// Both fields are nullable in the schema, and neither is unique.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Book {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl Book {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            author: Some(author.into()),
        }
    }
}

pub struct SeedBook {
    pub title: &'static str,
    pub author: &'static str,
}

impl From<&SeedBook> for Book {
    fn from(seed: &SeedBook) -> Self {
        Book::new(seed.title, seed.author)
    }
}

pub static SEED_BOOKS: &[SeedBook] = &[
    SeedBook {
        title: "The Awakening",
        author: "Kate Chopin",
    },
    SeedBook {
        title: "City of Glass",
        author: "Paul Auster",
    },
];
