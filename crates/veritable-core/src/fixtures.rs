//! Shared fixture dataset served through `MemorySource`.
//!
//! Reproduces the classic discography/members tables the integration
//! tests assert against: `albums` (15 studio and live records) and
//! `members` (the four band members).

use crate::{
    source::{MemorySource, RawValue, Request},
    types::{Date, Decimal, Time},
};

macro_rules! raw {
    ( $( $v:expr ),* $(,)? ) => {
        vec![ $( RawValue::from($v) ),* ]
    };
}

/// Request served with the full albums table.
#[must_use]
pub fn albums_request() -> Request {
    Request::new("select * from albums")
}

/// Request served with the full members table.
#[must_use]
pub fn members_request() -> Request {
    Request::new("select * from members")
}

/// Parametrized request: albums whose title starts with 'A'.
#[must_use]
pub fn albums_like_a_request() -> Request {
    Request::with_params(
        "select release, title from albums where title like ?",
        vec!["A%".into()],
    )
}

/// Memory source preloaded with every fixture request.
#[must_use]
pub fn source() -> MemorySource {
    let mut source = MemorySource::new();

    source.register(
        albums_request(),
        &["id", "release", "title", "numberofsongs", "duration", "live"],
        albums_rows(),
    );

    source.register(
        members_request(),
        &["id", "name", "firstname", "surname", "birthdate", "size"],
        members_rows(),
    );

    source.register(
        albums_like_a_request(),
        &["release", "title"],
        vec![
            raw![Date::new(1991, 11, 18), "Achtung Baby"],
            raw![Date::new(2000, 10, 30), "All That You Can't Leave Behind"],
        ],
    );

    source
}

fn albums_rows() -> Vec<Vec<RawValue>> {
    vec![
        raw![1, Date::new(1980, 10, 20), "Boy", 12, Time::new(0, 42, 17), ()],
        raw![2, Date::new(1981, 10, 12), "October", 11, Time::new(0, 41, 8), ()],
        raw![3, Date::new(1983, 2, 28), "War", 10, Time::new(0, 42, 7), ()],
        raw![
            4,
            Date::new(1983, 11, 7),
            "Under a Blood Red Sky",
            8,
            Time::new(0, 33, 25),
            true
        ],
        raw![
            5,
            Date::new(1984, 10, 1),
            "The Unforgettable Fire",
            10,
            Time::new(0, 42, 42),
            ()
        ],
        raw![
            6,
            Date::new(1985, 5, 20),
            "Wide Awake in America",
            4,
            Time::new(0, 20, 30),
            true
        ],
        raw![
            7,
            Date::new(1987, 3, 9),
            "The Joshua Tree",
            11,
            Time::new(0, 50, 11),
            ()
        ],
        raw![
            8,
            Date::new(1988, 10, 10),
            "Rattle and Hum",
            17,
            Time::new(1, 12, 27),
            true
        ],
        raw![
            9,
            Date::new(1991, 11, 18),
            "Achtung Baby",
            12,
            Time::new(0, 55, 23),
            ()
        ],
        raw![10, Date::new(1993, 7, 5), "Zooropa", 10, Time::new(0, 51, 15), ()],
        raw![11, Date::new(1997, 3, 3), "Pop", 12, Time::new(1, 0, 8), ()],
        raw![
            12,
            Date::new(2000, 10, 30),
            "All That You Can't Leave Behind",
            11,
            Time::new(0, 49, 23),
            ()
        ],
        raw![
            13,
            Date::new(2004, 11, 22),
            "How to Dismantle an Atomic Bomb",
            11,
            Time::new(0, 49, 8),
            ()
        ],
        raw![
            14,
            Date::new(2009, 3, 2),
            "No Line on the Horizon",
            11,
            Time::new(0, 53, 44),
            ()
        ],
        raw![
            15,
            Date::new(2014, 9, 9),
            "Songs of Innocence",
            11,
            Time::new(0, 48, 11),
            ()
        ],
    ]
}

fn members_rows() -> Vec<Vec<RawValue>> {
    vec![
        raw![
            1,
            "Bono",
            "Paul",
            "Hewson",
            Date::new(1960, 5, 10),
            Decimal::new(175, 2)
        ],
        raw![
            2,
            "The Edge",
            "David",
            "Evans",
            Date::new(1961, 8, 8),
            Decimal::new(177, 2)
        ],
        raw![
            3,
            "Adam Clayton",
            "Adam",
            "Clayton",
            Date::new(1960, 3, 13),
            Decimal::new(178, 2)
        ],
        raw![
            4,
            "Larry Mullen",
            "Larry",
            "Mullen",
            Date::new(1961, 10, 31),
            Decimal::new(170, 2)
        ],
    ]
}
