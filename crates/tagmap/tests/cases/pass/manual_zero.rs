// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use serde::Serialize;
use tagmap::{IsZero, TagMap};

#[derive(Serialize)]
pub struct Money {
    cents: i64,
}

impl IsZero for Money {
    fn is_zero(&self) -> bool {
        self.cents == 0
    }
}

#[derive(TagMap)]
#[tagmap(manual_zero)]
pub struct Invoice {
    #[tag(api = "total,omitempty")]
    pub total: Money,

    #[tag(api = "number")]
    pub number: u32,
}

impl IsZero for Invoice {
    fn is_zero(&self) -> bool {
        false
    }
}

fn main() {
    let invoice = Invoice {
        total: Money { cents: 0 },
        number: 0,
    };

    let map = tagmap::to_map(&invoice, "api").unwrap();
    assert!(!map.contains_key("total"));
    assert_eq!(map["number"], 0);
}
