//! Command handlers for the CLI.
//!
//! Called from `main` once the session holds a ready feed. Each handler
//! drives the session the way a user would (set filters, select a store)
//! and returns the text to print.

use anyhow::bail;
use pricemap_core::Session;

use crate::render::{self, Palette};
use crate::ListArgs;

/// Apply `args` to the session's criteria and render the view.
///
/// Price flags replace the dataset range as given. A single flag keeps the
/// other end of the dataset range, widened to include the flag's value.
///
/// # Errors
///
/// Returns an error if `--min-price` is above `--max-price`, or if
/// `--select` names a store that is not in the feed.
pub(crate) fn list(
    session: &mut Session,
    args: &ListArgs,
    map_search_base: &str,
    palette: Palette,
) -> anyhow::Result<String> {
    if let Some(criteria) = session.criteria_mut() {
        if let Some(search) = &args.search {
            criteria.search_text.clone_from(search);
        }
        if let Some(state) = &args.state {
            criteria.state_filter.clone_from(state);
        }
        let (lo, hi) = match (args.min_price, args.max_price) {
            (Some(min), Some(max)) if min > max => {
                bail!("--min-price {min} is above --max-price {max}")
            }
            (Some(min), Some(max)) => (min, max),
            (Some(min), None) => (min, criteria.max_price().max(min)),
            (None, Some(max)) => (criteria.min_price().min(max), max),
            (None, None) => (criteria.min_price(), criteria.max_price()),
        };
        criteria.set_range(lo, hi);
        criteria.sort_order = args.sort.into();
    }
    session.set_view_mode(args.view.into());

    if let Some(store_id) = &args.select {
        if !session.select(store_id) {
            bail!("store '{store_id}' not found in feed");
        }
    }

    let mut out = render::header(session);
    out.push('\n');
    out.push_str(&render::legend(session.bounds(), palette));
    out.push('\n');
    out.push_str(&render::stores(session, palette));

    if let (Some(record), Some(url)) = (session.selected(), session.selected_map_url(map_search_base)) {
        out.push_str("\n----------------------------------------\n");
        out.push_str(&render::detail(record, &url, palette));
    }
    tracing::debug!(shown = session.summary().shown, "rendered store view");
    Ok(out)
}

/// Select one store and render its detail panel.
///
/// # Errors
///
/// Returns an error if no store has `store_id`.
pub(crate) fn show(
    session: &mut Session,
    store_id: &str,
    map_search_base: &str,
    palette: Palette,
) -> anyhow::Result<String> {
    if !session.select(store_id) {
        bail!("store '{store_id}' not found in feed");
    }
    match (session.selected(), session.selected_map_url(map_search_base)) {
        (Some(record), Some(url)) => Ok(render::detail(record, &url, palette)),
        _ => bail!("store '{store_id}' not found in feed"),
    }
}

pub(crate) fn states(session: &Session) -> String {
    render::states(&session.state_options())
}

pub(crate) fn legend(session: &Session, palette: Palette) -> String {
    render::legend(session.bounds(), palette)
}
