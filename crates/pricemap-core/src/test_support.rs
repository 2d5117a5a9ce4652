//! Record fixtures shared by the unit tests.

use crate::store::StoreRecord;

pub(crate) fn record(id: &str, price: &str) -> StoreRecord {
    StoreRecord {
        id: id.to_string(),
        name: format!("Store {id}"),
        address_line1: "1 Main St".to_string(),
        address_line2: None,
        address_line3: None,
        city: "Springfield".to_string(),
        state_name: "Illinois".to_string(),
        state_code: "IL".to_string(),
        postal_code: "62701".to_string(),
        country: "US".to_string(),
        price: price.to_string(),
        location_description: "Downtown".to_string(),
        location_code: "D".to_string(),
        intersection_description: None,
        county: None,
        product_title: None,
    }
}

pub(crate) fn located(id: &str, name: &str, city: &str, state: &str, price: &str) -> StoreRecord {
    StoreRecord {
        name: name.to_string(),
        city: city.to_string(),
        state_name: state.to_string(),
        ..record(id, price)
    }
}

pub(crate) fn prices(view: &[&StoreRecord]) -> Vec<String> {
    view.iter().map(|r| r.price.clone()).collect()
}

pub(crate) fn ids(view: &[&StoreRecord]) -> Vec<String> {
    view.iter().map(|r| r.id.clone()).collect()
}
