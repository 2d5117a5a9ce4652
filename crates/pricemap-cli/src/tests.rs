use pricemap_core::{LoadState, StoreRecord};

use super::*;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("expected valid cli args")
}

#[test]
fn no_command_is_none() {
    let cli = parse(&["pricemap"]);
    assert!(cli.command.is_none());
    assert!(cli.feed_url.is_none());
    assert!(!cli.no_color);
}

#[test]
fn parses_list_defaults() {
    let cli = parse(&["pricemap", "list"]);
    let Some(Commands::List(args)) = cli.command else {
        panic!("expected list command");
    };
    assert!(args.search.is_none());
    assert!(args.min_price.is_none());
    assert_eq!(args.sort, SortArg::None);
    assert_eq!(args.view, ViewArg::Grid);
}

#[test]
fn parses_list_filters() {
    let cli = parse(&[
        "pricemap",
        "list",
        "--search",
        "uptown",
        "--min-price",
        "$2.00",
        "--max-price",
        "3.5",
        "--state",
        "Minnesota",
        "--sort",
        "desc",
        "--view",
        "list",
        "--select",
        "1375",
    ]);
    let Some(Commands::List(args)) = cli.command else {
        panic!("expected list command");
    };
    assert_eq!(args.search.as_deref(), Some("uptown"));
    assert_eq!(args.min_price, Some(Decimal::new(200, 2)));
    assert_eq!(args.max_price, Some(Decimal::new(35, 1)));
    assert_eq!(args.state.as_deref(), Some("Minnesota"));
    assert_eq!(args.sort, SortArg::Desc);
    assert_eq!(args.view, ViewArg::List);
    assert_eq!(args.select.as_deref(), Some("1375"));
}

#[test]
fn help_parses_without_loading_config() {
    let err = Cli::try_parse_from(["pricemap", "--help"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
}

#[test]
fn rejects_non_numeric_price() {
    let result = Cli::try_parse_from(["pricemap", "list", "--min-price", "cheap"]);
    assert!(result.is_err());
}

#[test]
fn parses_show_with_global_flags() {
    let cli = parse(&[
        "pricemap",
        "show",
        "2846",
        "--feed-url",
        "http://localhost:9000/stores.json",
        "--no-color",
    ]);
    assert!(matches!(
        cli.command,
        Some(Commands::Show { ref store_id }) if store_id == "2846"
    ));
    assert_eq!(
        cli.feed_url.as_deref(),
        Some("http://localhost:9000/stores.json")
    );
    assert!(cli.no_color);
}

#[test]
fn parses_states_and_legend() {
    assert!(matches!(parse(&["pricemap", "states"]).command, Some(Commands::States)));
    assert!(matches!(parse(&["pricemap", "legend"]).command, Some(Commands::Legend)));
}

#[test]
fn sort_and_view_args_map_to_core_types() {
    assert_eq!(SortOrder::from(SortArg::None), SortOrder::Unsorted);
    assert_eq!(SortOrder::from(SortArg::Asc), SortOrder::Ascending);
    assert_eq!(SortOrder::from(SortArg::Desc), SortOrder::Descending);
    assert_eq!(ViewMode::from(ViewArg::List), ViewMode::List);
}

fn store(id: &str, name: &str, city: &str, state: &str, price: &str) -> StoreRecord {
    StoreRecord {
        id: id.to_string(),
        name: name.to_string(),
        address_line1: "1 Main St".to_string(),
        address_line2: None,
        address_line3: None,
        city: city.to_string(),
        state_name: state.to_string(),
        state_code: String::new(),
        postal_code: "00000".to_string(),
        country: "United States".to_string(),
        price: price.to_string(),
        location_description: "Downtown".to_string(),
        location_code: "DT".to_string(),
        intersection_description: None,
        county: None,
        product_title: None,
    }
}

fn ready_session() -> Session {
    let mut session = Session::new();
    session.apply_load(LoadState::Ready(vec![
        store("a", "Target A", "Austin", "Texas", "$2.50"),
        store("b", "Target B", "Boise", "Idaho", "$4.00"),
        store("c", "Target C", "Cary", "North Carolina", "$1.00"),
    ]));
    session
}

const PLAIN: Palette = Palette { enabled: false };

#[test]
fn list_command_applies_filters_and_sort() {
    let mut session = ready_session();
    let args = ListArgs {
        min_price: Some(Decimal::new(200, 2)),
        sort: SortArg::Asc,
        view: ViewArg::List,
        ..ListArgs::default()
    };
    let out = commands::list(&mut session, &args, "https://m.example/", PLAIN).unwrap();
    assert!(out.contains("Showing 2 of 3 locations"), "{out}");
    let a = out.find("Target A").unwrap();
    let b = out.find("Target B").unwrap();
    assert!(a < b, "ascending order expected:\n{out}");
    assert!(!out.contains("Target C"), "{out}");
}

#[test]
fn list_command_with_select_appends_detail_panel() {
    let mut session = ready_session();
    let args = ListArgs {
        select: Some("b".to_string()),
        ..ListArgs::default()
    };
    let out = commands::list(&mut session, &args, "https://m.example/", PLAIN).unwrap();
    assert!(out.contains("Store ID: b"), "{out}");
    assert!(
        out.contains("View on map: https://m.example/1%20Main%20St%20Boise%20Idaho"),
        "{out}"
    );
}

#[test]
fn list_command_rejects_unknown_selection() {
    let mut session = ready_session();
    let args = ListArgs {
        select: Some("zzz".to_string()),
        ..ListArgs::default()
    };
    let err = commands::list(&mut session, &args, "https://m.example/", PLAIN).unwrap_err();
    assert!(err.to_string().contains("zzz"));
}

#[test]
fn show_command_renders_detail() {
    let mut session = ready_session();
    let out = commands::show(&mut session, "c", "https://m.example/", PLAIN).unwrap();
    assert!(out.starts_with("Target C\n"), "{out}");
    assert!(out.contains("$1.00"), "{out}");
}

#[test]
fn states_command_lists_sorted_states() {
    let session = ready_session();
    assert_eq!(
        commands::states(&session),
        "All States\nIdaho\nNorth Carolina\nTexas\n"
    );
}

#[test]
fn max_price_below_dataset_minimum_is_kept() {
    let mut session = ready_session();
    let args = ListArgs {
        max_price: Some(Decimal::new(50, 2)),
        ..ListArgs::default()
    };
    let out = commands::list(&mut session, &args, "https://m.example/", PLAIN).unwrap();
    assert!(out.contains("Showing 0 of 3 locations"), "{out}");
    assert!(!out.contains("Target C"), "{out}");
    let criteria = session.criteria().unwrap();
    assert_eq!(criteria.max_price(), Decimal::new(50, 2));
}

#[test]
fn min_price_above_dataset_maximum_is_kept() {
    let mut session = ready_session();
    let args = ListArgs {
        min_price: Some(Decimal::new(900, 2)),
        ..ListArgs::default()
    };
    let out = commands::list(&mut session, &args, "https://m.example/", PLAIN).unwrap();
    assert!(out.contains("Showing 0 of 3 locations"), "{out}");
    assert_eq!(session.criteria().unwrap().min_price(), Decimal::new(900, 2));
}

#[test]
fn min_price_above_max_price_is_rejected() {
    let mut session = ready_session();
    let args = ListArgs {
        min_price: Some(Decimal::new(300, 2)),
        max_price: Some(Decimal::new(200, 2)),
        ..ListArgs::default()
    };
    let err = commands::list(&mut session, &args, "https://m.example/", PLAIN).unwrap_err();
    assert!(err.to_string().contains("--min-price"), "{err}");
}
