/// Input of a single post.
#[derive(Debug, Clone)]
pub(crate) struct Post {
    pub title: String,
    pub categories: Vec<String>,
    pub content: String,
}
