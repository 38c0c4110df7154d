// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use serde_json::json;
use tagmap::TagMap;

#[derive(TagMap)]
pub struct Account {
    #[tag(api = "account.id")]
    pub id: u64,

    #[tag(api = "account.owner", db = "owner_name")]
    pub owner: String,

    #[tag(api = "-", db = "secret")]
    pub secret: String,

    pub untouched: bool,
}

fn main() {
    let account = Account {
        id: 7,
        owner: "ann".to_string(),
        secret: "s3".to_string(),
        untouched: true,
    };

    let api = tagmap::to_map(&account, "api").unwrap();
    assert_eq!(json!(api), json!({"account": {"id": 7, "owner": "ann"}}));

    let db = tagmap::to_map(&account, "db").unwrap();
    assert_eq!(json!(db), json!({"owner_name": "ann", "secret": "s3"}));
}
