use std::{
    fmt::Display,
    fs::OpenOptions,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use chrono::{DateTime, NaiveDate, TimeZone};
use log::{debug, info};

use crate::{context::Context, metadata::Post};

mod data;
mod utils;

use data::PostPageData;
use utils::{categories_text, slugify, tags_text};

/// `{path/}{YYYY-MM-DD}-{slug}.md`
pub(crate) fn generate_filename(title: &str, path: Option<&Path>, date: NaiveDate) -> PathBuf {
    let filename = format!("{}-{}.md", date.format("%Y-%m-%d"), slugify(title));
    match path {
        Some(path) => path.join(filename),
        None => PathBuf::from(filename),
    }
}

/// Writes `post` into a new file under `path` (or the current directory) and
/// returns the path written. An existing file with the same name is overwritten.
pub(crate) fn create_post_file<Tz>(
    context: &Context,
    post: &Post,
    path: Option<&Path>,
    now: &DateTime<Tz>,
) -> anyhow::Result<PathBuf>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let filename = generate_filename(&post.title, path, now.date_naive());
    debug!("Generating {filename:?}");

    let data = PostPageData {
        title: &post.title,
        author: &context.author,
        date: now.format("%Y-%m-%d %H:%M:%S %z").to_string(),
        categories: categories_text(&post.categories),
        tags: tags_text(&post.categories),
        content: &post.content,
    };

    if let Some(dir) = path {
        if !dir.exists() {
            info!("Creating directory {dir:?}");
            fs_extra::dir::create_all(dir, false)
                .with_context(|| format!("while creating {dir:?}"))?;
        }
    }

    let fd = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&filename)
        .with_context(|| format!("while opening {filename:?}"))?;
    context
        .handlebars
        .render_to_write("post", &data, fd)
        .with_context(|| format!("while generating {filename:?}"))?;

    info!("Wrote {filename:?}");
    Ok(filename)
}
