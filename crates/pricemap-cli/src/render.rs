//! Text rendering of the derived view, legend and detail panel.
//!
//! Every function returns a `String` so handlers decide where output goes and
//! tests can compare it without a terminal.

use std::fmt::Write as _;

use owo_colors::OwoColorize;
use pricemap_core::{
    color_at, color_for_price, FilterCriteria, PriceBounds, Rgb, Session, SortOrder, StoreRecord, ViewMode,
};
use rust_decimal::Decimal;

const GRID_COLUMNS: usize = 3;
const CARD_WIDTH: usize = 30;
const LEGEND_STEPS: u32 = 24;

/// Whether swatches are drawn with truecolor escapes or as plain text.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Palette {
    pub(crate) enabled: bool,
}

impl Palette {
    /// Price badge: white text on the price color, or `text [rgb(..)]` when
    /// color is off.
    fn badge(self, text: &str, color: Option<Rgb>) -> String {
        match color {
            Some(c) if self.enabled => format!(" {text} ")
                .white()
                .bold()
                .on_truecolor(c.r, c.g, c.b)
                .to_string(),
            Some(c) => format!("{text} [{c}]"),
            None => text.to_string(),
        }
    }

    fn block(self, color: Rgb) -> String {
        if self.enabled {
            " ".on_truecolor(color.r, color.g, color.b).to_string()
        } else {
            String::new()
        }
    }

    fn heading(self, text: &str) -> String {
        if self.enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}

/// Title line, result count, active sort and active filters.
pub(crate) fn header(session: &Session) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Milk Price Tracker");
    let _ = write!(out, "{}", session.summary());
    if let Some(criteria) = session.criteria() {
        if criteria.sort_order != SortOrder::Unsorted {
            let _ = write!(out, "  |  {}", criteria.sort_order.label());
        }
        let filters = describe_filters(criteria, session.bounds());
        if !filters.is_empty() {
            let _ = write!(out, "  |  {filters}");
        }
    }
    out.push('\n');
    out
}

fn describe_filters(criteria: &FilterCriteria, bounds: Option<PriceBounds>) -> String {
    let mut parts = Vec::new();
    if !criteria.search_text.is_empty() {
        parts.push(format!("search \"{}\"", criteria.search_text));
    }
    let full_range = bounds.is_some_and(|b| {
        b.min == criteria.min_price() && b.max == criteria.max_price()
    });
    if !full_range {
        parts.push(format!(
            "price {} - {}",
            money(criteria.min_price()),
            money(criteria.max_price())
        ));
    }
    if !criteria.state_filter.is_empty() {
        parts.push(format!("state {}", criteria.state_filter));
    }
    parts.join(", ")
}

/// Dataset price range with a green-to-red gradient bar.
pub(crate) fn legend(bounds: Option<PriceBounds>, palette: Palette) -> String {
    let Some(b) = bounds else {
        return "Price Range: no priced stores\n".to_string();
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", palette.heading("Price Range"));
    let _ = write!(out, "{} ", money(b.min));
    if palette.enabled {
        for step in 0..=LEGEND_STEPS {
            let fraction = f64::from(step) / f64::from(LEGEND_STEPS);
            out.push_str(&palette.block(color_at(fraction)));
        }
    } else {
        let _ = write!(
            out,
            "[{}] .. [{}]",
            color_for_price(b.min, b),
            color_for_price(b.max, b)
        );
    }
    let _ = writeln!(out, " {}", money(b.max));
    out
}

/// The derived view in the session's current layout.
pub(crate) fn stores(session: &Session, palette: Palette) -> String {
    let view = session.view();
    if view.is_empty() {
        return "No stores match the current filters.\n".to_string();
    }
    match session.view_mode() {
        ViewMode::Grid => grid(session, &view, palette),
        ViewMode::List => list(session, &view, palette),
    }
}

fn grid(session: &Session, view: &[&StoreRecord], palette: Palette) -> String {
    let mut out = String::new();
    for row in view.chunks(GRID_COLUMNS) {
        let mut names = Vec::with_capacity(row.len());
        let mut places = Vec::with_capacity(row.len());
        let mut prices = Vec::with_capacity(row.len());
        for record in row {
            let marker = if session.selection().is_selected(record) {
                '>'
            } else {
                ' '
            };
            names.push(format!("{marker} {}", fit(&record.name, CARD_WIDTH - 2)));
            places.push(format!("  {}", fit(&record.city_state(), CARD_WIDTH - 2)));
            let badge = palette.badge(&record.display_price(), session.color_for(record));
            prices.push(format!("  {badge}"));
        }
        let _ = writeln!(out, "{}", join_padded(&names));
        let _ = writeln!(out, "{}", join_padded(&places));
        let _ = writeln!(out, "{}", prices.join(&" ".repeat(CARD_WIDTH / 2)));
        out.push('\n');
    }
    out
}

fn list(session: &Session, view: &[&StoreRecord], palette: Palette) -> String {
    let mut out = String::new();
    for record in view {
        let marker = if session.selection().is_selected(record) {
            '>'
        } else {
            ' '
        };
        let badge = palette.badge(&record.display_price(), session.color_for(record));
        let _ = writeln!(
            out,
            "{marker} {:<28} {:<26} {:<26} {badge}",
            fit(&record.name, 28),
            fit(&record.city_state(), 26),
            fit(&record.address_line1, 26),
        );
    }
    out
}

/// Detail panel for one store, ending with its map search link.
pub(crate) fn detail(record: &StoreRecord, map_url: &str, palette: Palette) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", palette.heading(&record.name));
    out.push('\n');

    let _ = writeln!(out, "Address");
    let _ = writeln!(out, "  {}", record.address_line1);
    for extra in [&record.address_line2, &record.address_line3]
        .into_iter()
        .flatten()
        .filter(|line| !line.is_empty())
    {
        let _ = writeln!(out, "  {extra}");
    }
    let _ = writeln!(out, "  {} {}", record.city_state(), record.postal_code);
    if let Some(county) = record.county.as_deref().filter(|c| !c.is_empty()) {
        let _ = writeln!(out, "  {county} County");
    }
    out.push('\n');

    let _ = writeln!(out, "Price");
    let _ = writeln!(out, "  {}", record.display_price());
    if let Some(title) = record.product_title.as_deref() {
        let _ = writeln!(out, "  {title}");
    }
    out.push('\n');

    let _ = writeln!(out, "Store Details");
    let _ = writeln!(out, "  Store ID: {}", record.id);
    let _ = writeln!(out, "  Location: {}", record.location_description);
    if let Some(intersection) = record.intersection_description.as_deref() {
        let _ = writeln!(out, "  Intersection: {intersection}");
    }
    out.push('\n');

    let _ = writeln!(out, "View on map: {map_url}");
    out
}

/// State selector options, one per line, after the "All States" entry.
pub(crate) fn states(options: &[String]) -> String {
    let mut out = String::from("All States\n");
    for state in options {
        let _ = writeln!(out, "{state}");
    }
    out
}

fn money(value: Decimal) -> String {
    format!("${:.2}", value.round_dp(2))
}

/// Truncates to `width` characters, marking cut text with `~`.
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('~');
    cut
}

fn join_padded(cells: &[String]) -> String {
    cells
        .iter()
        .map(|c| format!("{c:<width$}", width = CARD_WIDTH))
        .collect::<String>()
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use pricemap_core::LoadState;

    use super::*;

    const PLAIN: Palette = Palette { enabled: false };

    fn store(id: &str, name: &str, city: &str, state: &str, price: &str) -> StoreRecord {
        StoreRecord {
            id: id.to_string(),
            name: name.to_string(),
            address_line1: format!("{id} Main St"),
            address_line2: None,
            address_line3: None,
            city: city.to_string(),
            state_name: state.to_string(),
            state_code: String::new(),
            postal_code: "55401".to_string(),
            country: "United States".to_string(),
            price: price.to_string(),
            location_description: "Downtown".to_string(),
            location_code: "DT".to_string(),
            intersection_description: None,
            county: None,
            product_title: None,
        }
    }

    fn session() -> Session {
        let mut session = Session::new();
        session.apply_load(LoadState::Ready(vec![
            store("1", "Target Uptown", "Minneapolis", "Minnesota", "$3.49"),
            store("2", "Target Midway", "Saint Paul", "Minnesota", "$2.99"),
            store("3", "Target Capitol Hill", "Denver", "Colorado", "$4.19"),
        ]));
        session
    }

    #[test]
    fn header_shows_counts_and_sort_label() {
        let mut session = session();
        session.criteria_mut().unwrap().sort_order = SortOrder::Descending;
        let text = header(&session);
        assert!(text.contains("Showing 3 of 3 locations"), "{text}");
        assert!(text.contains("Price: High to Low"), "{text}");
    }

    #[test]
    fn header_lists_active_filters() {
        let mut session = session();
        let criteria = session.criteria_mut().unwrap();
        criteria.state_filter = "Minnesota".to_string();
        criteria.search_text = "target".to_string();
        criteria.set_max_price(Decimal::new(300, 2));
        let text = header(&session);
        assert!(text.contains("Showing 1 of 3 locations"), "{text}");
        assert!(text.contains("search \"target\""), "{text}");
        assert!(text.contains("price $2.99 - $3.00"), "{text}");
        assert!(text.contains("state Minnesota"), "{text}");
    }

    #[test]
    fn list_marks_selected_store_and_shows_plain_swatch() {
        let mut session = session();
        session.set_view_mode(ViewMode::List);
        session.select("2");
        let text = stores(&session, PLAIN);
        let selected = text.lines().find(|l| l.contains("Target Midway")).unwrap();
        assert!(selected.starts_with('>'), "{selected}");
        assert!(selected.contains("$2.99 [rgb(0, 255, 0)]"), "{selected}");
        let other = text.lines().find(|l| l.contains("Target Uptown")).unwrap();
        assert!(other.starts_with(' '), "{other}");
    }

    #[test]
    fn grid_wraps_after_three_cards() {
        let mut session = session();
        session.criteria_mut().unwrap().sort_order = SortOrder::Ascending;
        let text = stores(&session, PLAIN);
        let first = text.lines().next().unwrap();
        assert!(first.contains("Target Midway"), "{first}");
        assert!(first.contains("Target Capitol Hill"), "{first}");
        assert!(text.contains("$4.19 [rgb(255, 0, 0)]"), "{text}");
    }

    #[test]
    fn empty_view_says_so() {
        let mut session = session();
        session.criteria_mut().unwrap().search_text = "nowhere".to_string();
        assert_eq!(stores(&session, PLAIN), "No stores match the current filters.\n");
    }

    #[test]
    fn legend_shows_bounds_and_endpoint_colors() {
        let session = session();
        let text = legend(session.bounds(), PLAIN);
        assert!(text.contains("$2.99 [rgb(0, 255, 0)] .. [rgb(255, 0, 0)] $4.19"), "{text}");
    }

    #[test]
    fn colored_legend_handles_extreme_price_span() {
        let mut session = Session::new();
        session.apply_load(LoadState::Ready(vec![
            store("1", "Target Free", "Austin", "Texas", "$0"),
            store("2", "Target Max", "Boise", "Idaho", "$79228162514264337593543950335"),
        ]));
        let palette = Palette { enabled: true };
        let text = legend(session.bounds(), palette);
        assert!(text.contains("48;2;0;255;0"), "{text:?}");
        assert!(text.contains("48;2;255;0;0"), "{text:?}");
        let rows = stores(&session, palette);
        assert!(rows.contains("Target Max"), "{rows:?}");
    }

    #[test]
    fn legend_without_bounds() {
        assert_eq!(legend(None, PLAIN), "Price Range: no priced stores\n");
    }

    #[test]
    fn colored_badge_uses_truecolor_escape() {
        let palette = Palette { enabled: true };
        let badge = palette.badge("$1.00", Some(Rgb { r: 10, g: 20, b: 0 }));
        assert!(badge.contains("48;2;10;20;0"), "{badge:?}");
    }

    #[test]
    fn detail_includes_optional_fields_only_when_present() {
        let mut record = store("9", "Target Loop", "Chicago", "Illinois", "$2.5");
        record.address_line2 = Some("Level 2".to_string());
        record.county = Some("Cook".to_string());
        let text = detail(&record, "https://maps.example/x", PLAIN);
        assert!(text.contains("  9 Main St\n  Level 2\n  Chicago, Illinois 55401\n"), "{text}");
        assert!(text.contains("Cook County"), "{text}");
        assert!(text.contains("  $2.50\n"), "{text}");
        assert!(text.contains("Store ID: 9"), "{text}");
        assert!(text.contains("Location: Downtown"), "{text}");
        assert!(!text.contains("Intersection"), "{text}");
        assert!(text.ends_with("View on map: https://maps.example/x\n"), "{text}");
    }

    #[test]
    fn states_starts_with_all_states() {
        let options = vec!["Colorado".to_string(), "Minnesota".to_string()];
        assert_eq!(states(&options), "All States\nColorado\nMinnesota\n");
    }

    #[test]
    fn fit_truncates_long_names() {
        assert_eq!(fit("abcdef", 4), "abc~");
        assert_eq!(fit("abc", 4), "abc");
    }
}
