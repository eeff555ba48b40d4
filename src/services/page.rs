//! Full page assembly
//!
//! Wraps the two rendered grid fragments in the archive page: hero header,
//! POSTS/STORIES tab bar, masonry grid sections, embedded stylesheet and
//! the tab-switching script. Hero text comes from configuration.

/// Hero/header fields for the generated page
#[derive(Debug)]
pub struct PageContext<'a> {
    pub title: &'a str,
    pub heading: &'a str,
    pub stats_line: &'a str,
    pub bio_lines: &'a [String],
    pub profile_image: &'a str,
}

/// Embedded stylesheet: dark theme, three-column masonry with responsive
/// breakpoints, and the rand-N vertical-offset variant classes.
const PAGE_CSS: &str = r#"
body {
  font-family: Helvetica, Arial, sans-serif;
  background: #0b0b0b;
  color: white;
  margin: 0;
}

/* HERO HEADER */

.hero {
  display: flex;
  align-items: center;
  gap: 60px;
  padding: 100px 120px 60px;
}

.hero img {
  width: 140px;
  height: 140px;
  border-radius: 50%;
  object-fit: cover;
}

.hero-text h1 {
  font-size: 28px;
  font-weight: 400;
  letter-spacing: 4px;
  margin: 0 0 20px 0;
}

.stats {
  font-size: 12px;
  letter-spacing: 3px;
  opacity: 0.6;
  margin-bottom: 30px;
}

.bio {
  font-size: 16px;
  line-height: 1.6;
  font-weight: 300;
}

/* TABS */

.tabs {
  display: flex;
  gap: 60px;
  padding: 0 120px 50px;
  font-size: 11px;
  letter-spacing: 4px;
}

.tab {
  cursor: pointer;
  opacity: 0.35;
  transition: 0.4s;
}

.tab.active {
  opacity: 1;
}

/* MASONRY GRID */

.grid {
  display: none;
  column-count: 3;
  column-gap: 60px;
  padding: 0 120px 150px;
}

.grid.active {
  display: block;
}

.grid img {
  width: 100%;
  margin-bottom: 60px;
  transform: scale(0.95);
  opacity: 0.85;
  transition: transform 0.6s ease, opacity 0.6s ease;
  break-inside: avoid;
  cursor: pointer;
}

.grid img:hover {
  transform: scale(1.12);
  opacity: 1;
}

.series img {
  margin-bottom: 20px;
}

.rand-0 { margin-top: 0px; }
.rand-1 { margin-top: 60px; }
.rand-2 { margin-top: 120px; }

@media (max-width: 1200px) {
  .grid { column-count: 2; }
}

@media (max-width: 700px) {
  .grid { column-count: 1; }
  .hero { flex-direction: column; align-items: flex-start; padding: 60px 40px; }
  .tabs { padding: 0 40px 40px; }
  .grid { padding: 0 40px 100px; }
}
"#;

const TAB_SCRIPT: &str = r#"
function showTab(id, el) {
  document.querySelectorAll('.grid').forEach(g => g.classList.remove('active'));
  document.querySelectorAll('.tab').forEach(t => t.classList.remove('active'));
  document.getElementById(id).classList.add('active');
  el.classList.add('active');
}
"#;

/// Assemble the complete document around the two grid fragments.
pub fn render_page(ctx: &PageContext<'_>, posts_html: &str, stories_html: &str) -> String {
    let mut html = String::with_capacity(
        PAGE_CSS.len() + TAB_SCRIPT.len() + posts_html.len() + stories_html.len() + 2048,
    );

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"UTF-8\">\n");
    html.push_str(&format!(
        "<meta name=\"generator\" content=\"gallery-gen {} ({})\">\n",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH")
    ));
    html.push_str(&format!("<title>{}</title>\n", ctx.title));
    html.push_str("<style>");
    html.push_str(PAGE_CSS);
    html.push_str("</style>\n</head>\n<body>\n\n");

    html.push_str("<div class=\"hero\">\n");
    html.push_str(&format!("  <img src=\"{}\" />\n", ctx.profile_image));
    html.push_str("  <div class=\"hero-text\">\n");
    html.push_str(&format!("    <h1>{}</h1>\n", ctx.heading));
    html.push_str(&format!("    <div class=\"stats\">{}</div>\n", ctx.stats_line));
    html.push_str(&format!("    <div class=\"bio\">\n      {}\n    </div>\n", ctx.bio_lines.join("<br>\n      ")));
    html.push_str("  </div>\n</div>\n\n");

    html.push_str("<div class=\"tabs\">\n");
    html.push_str("  <div class=\"tab active\" onclick=\"showTab('posts', this)\">POSTS</div>\n");
    html.push_str("  <div class=\"tab\" onclick=\"showTab('stories', this)\">STORIES</div>\n");
    html.push_str("</div>\n\n");

    html.push_str(&format!("<div id=\"posts\" class=\"grid active\">\n{posts_html}\n</div>\n\n"));
    html.push_str(&format!("<div id=\"stories\" class=\"grid\">\n{stories_html}\n</div>\n\n"));

    html.push_str("<script>");
    html.push_str(TAB_SCRIPT);
    html.push_str("</script>\n\n</body>\n</html>\n");

    html
}
