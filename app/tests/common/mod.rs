//! FILENAME: tests/common/mod.rs
//! Shared fixtures for the dashboard integration tests.

use engine::{DatasetStore, Record};

/// A small resale dataset spanning three towns and three years.
///
/// Shape, for reference in assertions:
/// - ANG MO KIO: 4 records in 2020, 3 in 2021
/// - BEDOK: 2 in 2020, 1 in 2021, 2 in 2022
/// - CLEMENTI: 1 in 2021 (so (2020, CLEMENTI) is a valid, zero-match pair)
pub struct ResaleFixture;

impl ResaleFixture {
    #[rustfmt::skip]
    pub fn data() -> Vec<(u16, &'static str, &'static str, &'static str, f64, f64, u32)> {
        vec![
            (2020, "ANG MO KIO", "ANG MO KIO AVE 3",   "3 ROOM",    5000.0,  310.0, 640),
            (2020, "ANG MO KIO", "ANG MO KIO AVE 3",   "3 ROOM",    5200.0,  450.0, 655),
            (2020, "ANG MO KIO", "ANG MO KIO AVE 10",  "4 ROOM",    6100.0,  870.0, 700),
            (2020, "ANG MO KIO", "ANG MO KIO AVE 1",   "5 ROOM",    6500.0,  520.0, 760),
            (2020, "BEDOK",      "BEDOK NORTH RD",     "4 ROOM",    4800.0,  640.0, 720),
            (2020, "BEDOK",      "BEDOK RESERVOIR RD", "EXECUTIVE", 5600.0,  980.0, 810),
            (2021, "ANG MO KIO", "ANG MO KIO AVE 3",   "3 ROOM",    5150.0,  310.0, 630),
            (2021, "ANG MO KIO", "ANG MO KIO AVE 10",  "4 ROOM",    6300.0,  870.0, 690),
            (2021, "ANG MO KIO", "ANG MO KIO AVE 4",   "EXECUTIVE", 7100.0, 1200.0, 840),
            (2021, "BEDOK",      "BEDOK NORTH RD",     "4 ROOM",    4950.0,  640.0, 715),
            (2021, "CLEMENTI",   "CLEMENTI AVE 2",     "4 ROOM",    6900.0,  400.0, 600),
            (2022, "BEDOK",      "BEDOK NORTH RD",     "3 ROOM",    5050.0,  700.0, 700),
            (2022, "BEDOK",      "BEDOK SOUTH AVE 1",  "4 ROOM",    5250.0,  450.0, 710),
        ]
    }

    pub fn records() -> Vec<Record> {
        Self::data()
            .into_iter()
            .map(|(year, town, street, flat_type, price, mrt, lease)| {
                Record::new(
                    year,
                    town.to_string(),
                    street.to_string(),
                    flat_type.to_string(),
                    price,
                    mrt,
                    lease,
                )
            })
            .collect()
    }

    pub fn store() -> DatasetStore {
        DatasetStore::new(Self::records())
    }
}
