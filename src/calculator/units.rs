//! The static conversion table.
//!
//! Each entry maps a source unit to the factor for every target unit it
//! lists. Pairs that are not listed are unsupported; no inverse or
//! multi-hop lookup is attempted.

use std::collections::HashMap;

use lazy_static::lazy_static;

type Table = HashMap<&'static str, HashMap<&'static str, f64>>;

const CURRENCY: &[(&str, &[(&str, f64)])] = &[
    ("usd", &[("eur", 0.85), ("gbp", 0.73)]),
    ("eur", &[("usd", 1.18), ("gbp", 0.86)]),
    ("gbp", &[("usd", 1.37), ("eur", 1.16)]),
];

const LENGTH: &[(&str, &[(&str, f64)])] = &[
    (
        "meter",
        &[
            ("kilometer", 0.001),
            ("centimeter", 100.0),
            ("millimeter", 1000.0),
            ("inch", 39.3701),
            ("foot", 3.28084),
        ],
    ),
    (
        "kilometer",
        &[
            ("meter", 1000.0),
            ("centimeter", 100000.0),
            ("millimeter", 1000000.0),
            ("inch", 39370.1),
            ("foot", 3280.84),
        ],
    ),
    (
        "centimeter",
        &[
            ("meter", 0.01),
            ("kilometer", 0.00001),
            ("millimeter", 10.0),
            ("inch", 0.393701),
            ("foot", 0.0328084),
        ],
    ),
    (
        "millimeter",
        &[
            ("meter", 0.001),
            ("kilometer", 0.000001),
            ("centimeter", 0.1),
            ("inch", 0.0393701),
            ("foot", 0.00328084),
        ],
    ),
    (
        "inch",
        &[
            ("meter", 0.0254),
            ("kilometer", 0.0000254),
            ("centimeter", 2.54),
            ("millimeter", 25.4),
            ("foot", 0.0833333),
        ],
    ),
    (
        "foot",
        &[
            ("meter", 0.3048),
            ("kilometer", 0.0003048),
            ("centimeter", 30.48),
            ("millimeter", 304.8),
            ("inch", 12.0),
        ],
    ),
];

const MASS: &[(&str, &[(&str, f64)])] = &[
    (
        "kilogram",
        &[
            ("gram", 1000.0),
            ("milligram", 1000000.0),
            ("pound", 2.20462),
            ("ounce", 35.274),
        ],
    ),
    (
        "gram",
        &[
            ("kilogram", 0.001),
            ("milligram", 1000.0),
            ("pound", 0.00220462),
            ("ounce", 0.035274),
        ],
    ),
    (
        "milligram",
        &[
            ("kilogram", 0.000001),
            ("gram", 0.001),
            ("pound", 0.00000220462),
            ("ounce", 0.000035274),
        ],
    ),
    (
        "pound",
        &[
            ("kilogram", 0.453592),
            ("gram", 453.592),
            ("milligram", 453592.0),
            ("ounce", 16.0),
        ],
    ),
    (
        "ounce",
        &[
            ("kilogram", 0.0283495),
            ("gram", 28.3495),
            ("milligram", 28349.5),
            ("pound", 0.0625),
        ],
    ),
];

const VOLUME: &[(&str, &[(&str, f64)])] = &[
    (
        "liter",
        &[
            ("milliliter", 1000.0),
            ("cubic_meter", 0.001),
            ("gallon", 0.264172),
            ("quart", 1.05669),
        ],
    ),
    (
        "milliliter",
        &[
            ("liter", 0.001),
            ("cubic_meter", 0.000001),
            ("gallon", 0.000264172),
            ("quart", 0.00105669),
        ],
    ),
    (
        "cubic_meter",
        &[
            ("liter", 1000.0),
            ("milliliter", 1000000.0),
            ("gallon", 264.172),
            ("quart", 1056.69),
        ],
    ),
    (
        "gallon",
        &[
            ("liter", 3.78541),
            ("milliliter", 3785.41),
            ("cubic_meter", 0.00378541),
            ("quart", 4.0),
        ],
    ),
    (
        "quart",
        &[
            ("liter", 0.946353),
            ("milliliter", 946.353),
            ("cubic_meter", 0.000946353),
            ("gallon", 0.25),
        ],
    ),
];

lazy_static! {
    static ref TABLE: Table = {
        let mut table = Table::new();
        for family in [CURRENCY, LENGTH, MASS, VOLUME] {
            for &(from, targets) in family {
                table.insert(from, targets.iter().copied().collect());
            }
        }
        table
    };
}

/// Look up the multiplicative factor converting `from` into `to`.
pub fn conversion_factor(from: &str, to: &str) -> Option<f64> {
    TABLE.get(from)?.get(to).copied()
}
