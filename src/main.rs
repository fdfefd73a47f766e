use anyhow::{bail, Context as _};
use clap::{command, Arg, ArgAction};
use context::Context;
use generator::create_post_file;
use metadata::Post;
use std::path::PathBuf;

mod context;
mod generator;
mod metadata;
mod renderer;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let matches = command!()
        .args(&[
            Arg::new("title")
                .help("Title of the post")
                .required(true),
            Arg::new("category")
                .help("Category of the post. Can be given multiple times; order is kept.")
                .short('c')
                .long("category")
                .action(ArgAction::Append),
            Arg::new("content")
                .help("Body of the post")
                .long("content")
                .conflicts_with("content_file"),
            Arg::new("content_file")
                .help("File to read the body of the post from")
                .long("content-file")
                .value_parser(clap::value_parser!(PathBuf)),
            Arg::new("path")
                .help("Directory to write the post into. Created if missing.")
                .short('p')
                .long("path")
                .value_parser(clap::value_parser!(PathBuf)),
            Arg::new("template")
                .help("Handlebars template used instead of the built-in one")
                .long("template")
                .value_parser(clap::value_parser!(PathBuf)),
        ])
        .get_matches();

    let title: &String = matches.get_one("title").unwrap();
    let categories: Vec<String> = matches
        .get_many::<String>("category")
        .map(|c| c.cloned().collect())
        .unwrap_or_default();

    let content = if let Some(content_file) = matches.get_one::<PathBuf>("content_file") {
        if !content_file.is_file() {
            bail!("content_file must be a file.");
        }
        std::fs::read_to_string(content_file)
            .with_context(|| format!("while reading {content_file:?}"))?
    } else {
        matches
            .get_one::<String>("content")
            .cloned()
            .unwrap_or_default()
    };

    let path: Option<&PathBuf> = matches.get_one("path");
    if path.map_or(false, |p| p.exists() && !p.is_dir()) {
        bail!("if path exists, it must be directory.");
    }

    let template: Option<&PathBuf> = matches.get_one("template");
    let handlebars = renderer::generate_renderer(template.map(PathBuf::as_path))?;

    let context = Context::new(
        std::env::var("POST_AUTHOR").unwrap_or("Benjamin".to_string()),
        handlebars,
    );
    let post = Post {
        title: title.to_owned(),
        categories,
        content,
    };

    create_post_file(
        &context,
        &post,
        path.map(PathBuf::as_path),
        &chrono::Local::now(),
    )?;

    Ok(())
}
