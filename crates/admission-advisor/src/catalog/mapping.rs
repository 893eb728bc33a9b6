use std::collections::HashMap;
use std::sync::OnceLock;

/// City assigned to universities missing from the table.
pub const DEFAULT_CITY: &str = "თბილისი";

static UNIVERSITY_CITY_MAP: OnceLock<HashMap<u32, &'static str>> = OnceLock::new();

pub(crate) fn city_for_university(university_code: u32) -> &'static str {
    university_city_map()
        .get(&university_code)
        .copied()
        .unwrap_or(DEFAULT_CITY)
}

fn university_city_map() -> &'static HashMap<u32, &'static str> {
    UNIVERSITY_CITY_MAP.get_or_init(|| {
        const CODE_TO_CITY: &[(u32, &str)] = &[
            // Tbilisi
            (1, "თბილისი"),
            (2, "თბილისი"),
            (3, "თბილისი"),
            (4, "თბილისი"),
            (5, "თბილისი"),
            (6, "თბილისი"),
            (10, "თბილისი"),
            (12, "თბილისი"),
            (64, "თბილისი"),
            (85, "თბილისი"),
            (88, "თბილისი"),
            (98, "თბილისი"),
            (115, "თბილისი"),
            (120, "თბილისი"),
            (121, "თბილისი"),
            (122, "თბილისი"),
            // Regions
            (9, "ქუთაისი"),
            (71, "თელავი"),
            (97, "ზუგდიდი"),
            (114, "ბათუმი"),
            (129, "ბათუმი"),
        ];

        CODE_TO_CITY.iter().copied().collect()
    })
}
