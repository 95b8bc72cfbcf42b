use std::fmt::Write;

use crate::core::{BrowsePage, CarouselView, OverlayMatch, Row, SearchPage, SearchStatus};
use crate::models::Item;
use crate::utils::{ImageSize, image_url};

const LOADING: &str = "Loading...";

/// Writes pages as text. Output goes to stdout; logging stays on stderr.
#[derive(Debug, Clone)]
pub struct TextRenderer {
    image_base_url: String,
}

impl TextRenderer {
    pub fn new(image_base_url: impl Into<String>) -> Self {
        Self {
            image_base_url: image_base_url.into(),
        }
    }

    pub fn render_browse(&self, page: &BrowsePage) -> String {
        let mut out = String::new();

        if page.is_loading() {
            let _ = writeln!(out, "{LOADING}");
            return out;
        }

        match page.banner() {
            Some(banner) => self.write_banner(&mut out, banner),
            None => {
                let _ = writeln!(out, "{LOADING}\n");
            }
        }
        self.write_rows(&mut out, &page.rows());
        if let Some(overlay) = page.overlay() {
            self.write_overlay(&mut out, &overlay);
        }
        out
    }

    pub fn render_search(&self, page: &SearchPage) -> String {
        let mut out = String::new();

        match page.status() {
            SearchStatus::Idle => {}
            SearchStatus::Loading => {
                let _ = writeln!(out, "{LOADING}");
            }
            SearchStatus::NoResults => {
                let _ = writeln!(
                    out,
                    "No results found for \"{}\"",
                    page.keyword().unwrap_or_default()
                );
            }
            SearchStatus::Results => {
                self.write_rows(&mut out, &page.rows());
                if let Some(overlay) = page.overlay() {
                    self.write_overlay(&mut out, &overlay);
                }
            }
        }
        out
    }

    fn write_banner(&self, out: &mut String, item: &Item) {
        let _ = writeln!(out, "# {}", item.display_name);
        if !item.overview.is_empty() {
            let _ = writeln!(out, "{}", item.overview);
        }
        if let Some(path) = item.backdrop_path.as_deref() {
            let _ = writeln!(
                out,
                "{}",
                image_url(&self.image_base_url, ImageSize::Original, path)
            );
        }
        out.push('\n');
    }

    fn write_rows(&self, out: &mut String, rows: &[Row<'_>]) {
        for row in rows {
            match row {
                Row::Carousel(carousel) => self.write_carousel(out, carousel),
                Row::Placeholder(label) => {
                    let _ = writeln!(out, "## {label}\n  {LOADING}\n");
                }
            }
        }
    }

    fn write_carousel(&self, out: &mut String, carousel: &CarouselView) {
        let (page, pages) = carousel.page_indicator();
        let _ = writeln!(out, "## {} [{}/{}]", carousel.title(), page, pages);
        for card in carousel.cards() {
            let image = card
                .item
                .backdrop_path
                .as_deref()
                .map(|path| image_url(&self.image_base_url, ImageSize::W500, path))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "  [{}] {}  {}",
                card.visual_key, card.item.display_name, image
            );
        }
        out.push('\n');
    }

    fn write_overlay(&self, out: &mut String, overlay: &OverlayMatch<'_>) {
        let item = overlay.item;
        let _ = writeln!(out, "-- [{}] --", overlay.visual_key());
        match item.release_date {
            Some(date) => {
                let _ = writeln!(out, "{} ({})", item.display_name, date.format("%Y-%m-%d"));
            }
            None => {
                let _ = writeln!(out, "{}", item.display_name);
            }
        }
        if let Some(path) = item.backdrop_path.as_deref() {
            let _ = writeln!(
                out,
                "{}",
                image_url(&self.image_base_url, ImageSize::W500, path)
            );
        }
        if !item.overview.is_empty() {
            let _ = writeln!(out, "{}", item.overview);
        }
    }
}
