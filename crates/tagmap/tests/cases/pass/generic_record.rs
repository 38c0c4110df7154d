// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use tagmap::TagMap;

#[derive(TagMap)]
pub struct Envelope<T, R> {
    #[tag(wire = "payload")]
    pub payload: T,

    #[tag(wire = "meta", nested)]
    pub meta: R,
}

#[derive(TagMap)]
pub struct Meta {
    #[tag(wire = "version")]
    pub version: u32,
}

fn main() {
    let envelope = Envelope {
        payload: vec![1_u8, 2, 3],
        meta: Meta { version: 2 },
    };

    let map = tagmap::to_map(&envelope, "wire").unwrap();
    assert_eq!(map["payload"][2], 3);
    assert_eq!(map["meta"]["version"], 2);
}
