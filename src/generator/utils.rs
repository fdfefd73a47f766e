pub(super) fn slugify(title: &str) -> String {
    title.to_lowercase().replace(' ', "-")
}

pub(super) fn categories_text<S: AsRef<str>>(categories: &[S]) -> String {
    categories
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(",")
}

pub(super) fn tags_text<S: AsRef<str>>(categories: &[S]) -> String {
    categories_text(categories).to_lowercase()
}
