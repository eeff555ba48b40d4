//! Group markup rendering
//!
//! Maps an ordered group list to the gallery grid fragment: singletons
//! become a bare `<img>`, series a `.series` wrapper with one `<img>` per
//! member. Each group gets a cosmetic `rand-N` layout class from a
//! seedable RNG so test output can be pinned.

use crate::domain::Group;
use chrono::{TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of `rand-N` layout variant classes defined in the page CSS
const VARIANT_COUNT: usize = 3;

/// Picks a layout variant per group.
///
/// Seeded from entropy by default; `with_seed` pins the sequence for
/// reproducible renders.
pub struct VariantPicker {
    rng: StdRng,
}

impl VariantPicker {
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Next variant index in `0..VARIANT_COUNT`.
    pub fn pick(&mut self) -> usize {
        self.rng.gen_range(0..VARIANT_COUNT)
    }
}

impl Default for VariantPicker {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the grid fragment for an ordered group list.
///
/// Image sources are emitted relative to the page (`../<collected path>`),
/// matching where the output file lives relative to the media roots.
pub fn render_groups(groups: &[Group], picker: &mut VariantPicker) -> String {
    let mut html = String::new();

    for group in groups {
        let variant = picker.pick();

        if group.is_series() {
            html.push_str(&format!("<div class=\"series rand-{variant}\">"));
            for image in group.members() {
                html.push_str(&format!(
                    "<img src=\"../{}\" loading=\"lazy\"{}/>",
                    image.path.display(),
                    title_attr(image.timestamp_ms)
                ));
            }
            html.push_str("</div>");
        } else {
            let image = group.anchor();
            html.push_str(&format!(
                "<img class=\"rand-{variant}\" src=\"../{}\" loading=\"lazy\"{}/>",
                image.path.display(),
                title_attr(image.timestamp_ms)
            ));
        }
    }

    html
}

/// Capture-time tooltip, empty when the timestamp is outside chrono's range
fn title_attr(timestamp_ms: u64) -> String {
    let Ok(millis) = i64::try_from(timestamp_ms) else {
        return String::new();
    };
    match Utc.timestamp_millis_opt(millis).single() {
        Some(dt) => format!(" title=\"{}\"", dt.format("%Y-%m-%d %H:%M:%S UTC")),
        None => String::new(),
    }
}
