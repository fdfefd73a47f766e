use std::path::Path;

use anyhow::Context;
use handlebars::Handlebars;
use log::debug;

const DEFAULT_POST_TEMPLATE: &str = include_str!("../template/post.hbs");

pub(crate) fn generate_renderer(template: Option<&Path>) -> anyhow::Result<Handlebars<'static>> {
    let mut handlebars = handlebars::Handlebars::new();
    // output is markdown, not html
    handlebars.register_escape_fn(handlebars::no_escape);

    match template {
        Some(template) => {
            debug!("Using template {template:?}");
            handlebars
                .register_template_file("post", template)
                .with_context(|| format!("{template:?}"))?;
        }
        None => {
            handlebars
                .register_template_string("post", DEFAULT_POST_TEMPLATE)
                .context("post.hbs")?;
        }
    }

    Ok(handlebars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Data {
        title: &'static str,
        author: &'static str,
        date: &'static str,
        categories: &'static str,
        tags: &'static str,
        content: &'static str,
    }

    const DATA: Data = Data {
        title: "Rust & <Friends>",
        author: "Benjamin",
        date: "2024-03-05 10:20:30 -0500",
        categories: "A,B",
        tags: "a,b",
        content: "# Heading\n\"quoted\" & <b>raw</b>",
    };

    #[test]
    fn default_template_is_not_escaped() {
        let handlebars = generate_renderer(None).unwrap();
        let out = handlebars.render("post", &DATA).unwrap();

        assert!(out.starts_with("---\ntitle: Rust & <Friends>\n"));
        assert!(out.contains("categories: [A,B]\n"));
        assert!(out.contains("tags: [a,b]\n"));
        assert!(out.contains("# Heading\n\"quoted\" & <b>raw</b>"));
        assert!(out.contains("![img](imagen_post)"));
        assert!(out.contains("## [Github repository](url_repositorio)"));
        assert!(out.contains("![meme](imagen_meme)"));
    }

    #[test]
    fn custom_template_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let template = dir.path().join("mine.hbs");
        std::fs::write(&template, "{{title}} by {{author}} [{{tags}}]").unwrap();

        let handlebars = generate_renderer(Some(template.as_path())).unwrap();
        let out = handlebars.render("post", &DATA).unwrap();

        assert_eq!(out, "Rust & <Friends> by Benjamin [a,b]");
    }

    #[test]
    fn missing_template_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(generate_renderer(Some(dir.path().join("nope.hbs").as_path())).is_err());
    }
}
