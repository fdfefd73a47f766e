#[derive(Debug)]
pub(crate) struct Context {
    pub author: String,

    pub handlebars: handlebars::Handlebars<'static>,
}

impl Context {
    pub fn new(author: String, handlebars: handlebars::Handlebars<'static>) -> Self {
        Self { author, handlebars }
    }
}
