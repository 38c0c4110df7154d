// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use tagmap as rt;
use tagmap::TagMap;

#[derive(TagMap)]
#[tagmap(crate = "rt")]
pub struct Setting {
    #[tag(cfg = "key")]
    pub key: String,
}

fn main() {
    let map = rt::to_map(&Setting { key: "v".to_string() }, "cfg").unwrap();
    assert_eq!(map["key"], "v");
}
