use cynic::http::ReqwestExt;
use cynic::serde;
use reqwest::Url;

pub struct Client {
    client: reqwest::Client,
    url: Url,
}

impl Client {
    pub fn new(url: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            url,
        }
    }

    pub async fn run<Op, Vars>(&self, op: cynic::Operation<Op, Vars>) -> cynic::GraphQlResponse<Op>
    where
        Vars: serde::Serialize,
        Op: serde::de::DeserializeOwned + 'static,
    {
        self.client
            .post(self.url.clone())
            .run_graphql(op)
            .await
            .unwrap()
    }
}

#[cynic::schema("books")]
mod schema {}

#[derive(cynic::QueryFragment, Debug, PartialEq)]
pub struct Book {
    pub title: Option<String>,
    pub author: Option<String>,
}

impl Book {
    pub fn new(title: &str, author: &str) -> Self {
        Self {
            title: Some(title.into()),
            author: Some(author.into()),
        }
    }
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query")]
pub struct AllBooks {
    pub books: Vec<Book>,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct AuthorVariables {
    pub author: String,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Query", variables = "AuthorVariables")]
pub struct BookByAuthor {
    #[arguments(author: $author)]
    pub book: Option<Book>,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct AddBookVariables {
    pub title: String,
    pub author: String,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Mutation", variables = "AddBookVariables")]
pub struct AddBook {
    #[arguments(title: $title, author: $author)]
    pub add_book: Book,
}

#[derive(cynic::QueryVariables, Debug)]
pub struct TitleVariables {
    pub title: String,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Mutation", variables = "TitleVariables")]
pub struct EditBook {
    #[arguments(title: $title)]
    pub edit_book: Option<Book>,
}

#[derive(cynic::QueryFragment, Debug)]
#[cynic(graphql_type = "Mutation", variables = "TitleVariables")]
pub struct DeleteBook {
    #[arguments(title: $title)]
    pub delete_book: Option<Book>,
}
