// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use tagmap::{IsZero, TagMap};

pub struct Connection {
    port: u16,
}

impl IsZero for Connection {
    fn is_zero(&self) -> bool {
        self.port == 0
    }
}

#[derive(TagMap)]
pub struct Session {
    #[tag(api = "session.id")]
    pub id: u64,

    pub connection: Connection,

    #[tag(api = "-", log = "-")]
    pub shared: Arc<str>,

    pub window: (u8, u8),
}

#[derive(TagMap)]
pub struct Cached<T, C> {
    #[tag(api = "value")]
    pub value: T,

    pub cache: C,
}

fn main() {
    let session = Session {
        id: 1,
        connection: Connection { port: 8080 },
        shared: Arc::from("pool"),
        window: (0, 4),
    };
    let map = tagmap::to_map(&session, "api").unwrap();
    assert_eq!(map["session"]["id"], 1);

    let cached = Cached {
        value: "v".to_string(),
        cache: Connection { port: 1 },
    };
    let map = tagmap::to_map(&cached, "api").unwrap();
    assert_eq!(map["value"], "v");
}
