use serde::Serialize;

#[derive(Serialize, Debug)]
pub(super) struct PostPageData<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub date: String,
    pub categories: String,
    pub tags: String,
    pub content: &'a str,
}
