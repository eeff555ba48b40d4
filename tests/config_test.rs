//! Integration tests for configuration loading

use gallery_gen::infra::Config;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();

    let config_content = r#"
[media]
posts_dir = "archive/posts"
stories_dir = "archive/stories"

[grouping]
max_items = 12
threshold_ms = 2500

[output]
dir = "public"
file_name = "gallery.html"

[page]
title = "TEST ARCHIVE"
heading = "TESTER"
stats_line = "1 POST"
bio_lines = ["one", "two"]
profile_image = "../me.jpg"

[render]
variant_seed = 7
"#;

    temp_file.write_all(config_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = Config::from_file(temp_file.path()).unwrap();

    assert_eq!(config.posts_dir(), Path::new("archive/posts"));
    assert_eq!(config.stories_dir(), Path::new("archive/stories"));
    assert_eq!(config.max_items(), 12);
    assert_eq!(config.threshold_ms(), 2500);
    assert_eq!(config.output_dir(), Path::new("public"));
    assert_eq!(config.output_file_name(), "gallery.html");
    assert_eq!(config.page_title(), "TEST ARCHIVE");
    assert_eq!(config.page_heading(), "TESTER");
    assert_eq!(config.bio_lines(), ["one".to_string(), "two".to_string()]);
    assert_eq!(config.profile_image(), "../me.jpg");
    assert_eq!(config.variant_seed(), Some(7));
}

#[test]
fn test_load_from_path_fallback() {
    let config = Config::load_from_path("/nonexistent/gallery.toml");
    assert_eq!(config.posts_dir(), Path::new("media/posts"));
    assert_eq!(config.max_items(), 30);
    assert_eq!(config.threshold_ms(), 5000);
    assert_eq!(config.variant_seed(), None);
}
