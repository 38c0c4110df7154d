// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use serde_json::json;
use tagmap::TagMap;

#[derive(TagMap)]
pub struct Address {
    #[tag(api = "city")]
    pub city: String,

    #[tag(api = "geo.zip,omitempty")]
    pub zip: String,
}

#[derive(TagMap)]
pub struct Line {
    #[tag(api = "sku")]
    pub sku: String,
}

#[derive(TagMap)]
pub struct Order {
    #[tag(api = "ship_to", nested)]
    pub address: Address,

    #[tag(api = "lines", nested)]
    pub lines: Vec<Line>,

    #[tag(nested)]
    pub billing: Option<Box<Address>>,
}

fn main() {
    let order = Order {
        address: Address {
            city: "Oslo".to_string(),
            zip: String::new(),
        },
        lines: vec![Line { sku: "A-1".to_string() }],
        billing: None,
    };

    let map = tagmap::to_map(&order, "api").unwrap();
    assert_eq!(
        json!(map),
        json!({"ship_to": {"city": "Oslo"}, "lines": [{"sku": "A-1"}]})
    );
}
