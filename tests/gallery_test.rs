//! End-to-end tests for the gallery pipeline
//!
//! Builds real media trees in a tempdir, drives the full
//! config → scan → group → render → write path, and checks the emitted page.

use gallery_gen::infra::Config;
use gallery_gen::io::PageWriter;
use gallery_gen::services::GalleryBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_config(dir: &Path, posts: &Path, stories: &Path, output: &Path) -> PathBuf {
    let config_path = dir.join("gallery.toml");
    let content = format!(
        r#"
[media]
posts_dir = "{posts}"
stories_dir = "{stories}"

[output]
dir = "{output}"

[render]
variant_seed = 42
"#,
        posts = posts.display(),
        stories = stories.display(),
        output = output.display(),
    );
    fs::write(&config_path, content).unwrap();
    config_path
}

fn build_and_write(config_path: &Path) -> (String, PathBuf) {
    let config = Config::from_file(config_path).unwrap();
    let writer = PageWriter::new(config.output_dir(), config.output_file_name());
    let mut builder = GalleryBuilder::new(config);
    let html = builder.build();
    let path = writer.write(&html).unwrap();
    (html, path)
}

#[test]
fn test_full_build_writes_page() {
    let dir = tempdir().unwrap();
    let posts = dir.path().join("media/posts");
    let stories = dir.path().join("media/stories");
    fs::create_dir_all(&posts).unwrap();
    fs::create_dir_all(&stories).unwrap();

    for ts in [1000u64, 1002, 5000, 50000] {
        fs::write(posts.join(format!("{ts}_shot.jpg")), b"jpg").unwrap();
    }
    // No leading digits: never part of the gallery
    fs::write(posts.join("cover.jpg"), b"jpg").unwrap();
    fs::write(stories.join("777_story.png"), b"png").unwrap();

    let config_path = write_config(dir.path(), &posts, &stories, &dir.path().join("output"));
    let (html, page_path) = build_and_write(&config_path);

    assert!(page_path.exists());
    assert_eq!(fs::read_to_string(&page_path).unwrap(), html);
    assert!(html.starts_with("<!DOCTYPE html>"));

    // 50000 stands alone, 5000/1002/1000 cluster around the 5000 anchor
    assert!(html.contains("50000_shot.jpg"));
    let series_start = html.find("<div class=\"series").expect("series rendered");
    let series_end = html[series_start..].find("</div>").unwrap() + series_start;
    let series = &html[series_start..series_end];
    assert!(series.contains("5000_shot.jpg"));
    assert!(series.contains("1002_shot.jpg"));
    assert!(series.contains("1000_shot.jpg"));
    assert!(!series.contains("50000_shot.jpg"));

    assert!(!html.contains("cover.jpg"));
    assert!(html.contains("777_story.png"));
}

#[test]
fn test_empty_media_renders_empty_sections() {
    let dir = tempdir().unwrap();
    let posts = dir.path().join("media/posts");
    fs::create_dir_all(&posts).unwrap();
    // Stories root intentionally missing

    let config_path = write_config(
        dir.path(),
        &posts,
        &dir.path().join("media/stories"),
        &dir.path().join("output"),
    );
    let (html, page_path) = build_and_write(&config_path);

    assert!(page_path.exists());
    assert!(html.contains("<div id=\"posts\" class=\"grid active\">\n\n</div>"));
    assert!(html.contains("<div id=\"stories\" class=\"grid\">\n\n</div>"));
}

#[test]
fn test_output_directory_created_on_demand() {
    let dir = tempdir().unwrap();
    let posts = dir.path().join("media/posts");
    fs::create_dir_all(&posts).unwrap();
    fs::write(posts.join("123_a.jpg"), b"jpg").unwrap();

    let output = dir.path().join("deeply/nested/site");
    let config_path =
        write_config(dir.path(), &posts, &dir.path().join("media/stories"), &output);
    let (_, page_path) = build_and_write(&config_path);

    assert_eq!(page_path, output.join("index.html"));
    assert!(page_path.exists());
}

#[test]
fn test_seeded_build_is_reproducible() {
    let dir = tempdir().unwrap();
    let posts = dir.path().join("media/posts");
    fs::create_dir_all(&posts).unwrap();
    for ts in [1000u64, 60_000, 120_000, 500_000] {
        fs::write(posts.join(format!("{ts}_p.jpg")), b"jpg").unwrap();
    }

    let config_path = write_config(
        dir.path(),
        &posts,
        &dir.path().join("media/stories"),
        &dir.path().join("output"),
    );

    let (first, _) = build_and_write(&config_path);
    let (second, _) = build_and_write(&config_path);

    assert_eq!(first, second);
}
