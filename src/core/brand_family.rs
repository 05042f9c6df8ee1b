//! Brand families and the series tables used to group their models.

use lazy_static::lazy_static;
use regex::Regex;

/// Business priority of brands in the brand picker.
pub const DEFAULT_BRAND_ORDER: [&str; 19] = [
    "iPhone",
    "Samsung mobil",
    "iPad",
    "MacBook",
    "iMac",
    "Samsung Galaxy Tab",
    "Apple Watch",
    "OnePlus mobil",
    "Motorola mobil",
    "Google Pixel",
    "Huawei mobil",
    "Xiaomi mobil",
    "Nokia mobil",
    "Sony mobil",
    "Oppo mobil",
    "Realme mobil",
    "Lenovo tablet",
    "Nintendo",
    "PlayStation",
];

/// Closed set of model ordering strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrandFamily {
    IPhone,
    SamsungMobile,
    /// iPad, MacBook and iMac: newest release year first.
    YearBased,
    SamsungTab,
    Motorola,
    OnePlus,
    Generic,
}

const FAMILY_TABLE: [(&str, BrandFamily); 8] = [
    ("iphone", BrandFamily::IPhone),
    ("samsung mobil", BrandFamily::SamsungMobile),
    ("ipad", BrandFamily::YearBased),
    ("macbook", BrandFamily::YearBased),
    ("imac", BrandFamily::YearBased),
    ("samsung galaxy tab", BrandFamily::SamsungTab),
    ("motorola mobil", BrandFamily::Motorola),
    ("oneplus mobil", BrandFamily::OnePlus),
];

impl BrandFamily {
    /// Case-insensitive exact match on the brand name, `Generic` otherwise.
    pub fn classify(brand_name: &str) -> Self {
        let key = brand_name.trim().to_lowercase();
        FAMILY_TABLE
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, family)| *family)
            .unwrap_or(BrandFamily::Generic)
    }
}

/// Samsung phone lines, declared in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SamsungSeries {
    S,
    A,
    Z,
    Xcover,
    M,
    J,
    Note,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TabSeries {
    S,
    A,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MotorolaSeries {
    Edge,
    G,
    E,
    Other,
}

lazy_static! {
    // Evaluation order differs from display order: "Z Flip" and "Note" are
    // checked before the bare letter-number patterns.
    static ref SAMSUNG_SERIES: Vec<(Regex, SamsungSeries)> = vec![
        (Regex::new(r"(?i)\bz\s*(flip|fold)").unwrap(), SamsungSeries::Z),
        (Regex::new(r"(?i)x\s*cover").unwrap(), SamsungSeries::Xcover),
        (Regex::new(r"(?i)\bnote").unwrap(), SamsungSeries::Note),
        (Regex::new(r"(?i)\bs\d+").unwrap(), SamsungSeries::S),
        (Regex::new(r"(?i)\ba\d+").unwrap(), SamsungSeries::A),
        (Regex::new(r"(?i)\bm\d+").unwrap(), SamsungSeries::M),
        (Regex::new(r"(?i)\bj\d+").unwrap(), SamsungSeries::J),
    ];
    static ref TAB_SERIES: Vec<(Regex, TabSeries)> = vec![
        (Regex::new(r"(?i)tab\s*s\d+").unwrap(), TabSeries::S),
        (Regex::new(r"(?i)tab\s*a\d+").unwrap(), TabSeries::A),
    ];
    static ref MOTOROLA_SERIES: Vec<(Regex, MotorolaSeries)> = vec![
        (Regex::new(r"(?i)\bedge").unwrap(), MotorolaSeries::Edge),
        (Regex::new(r"(?i)\b(moto\s+)?g\s*\d+|\bmoto\s+g\b").unwrap(), MotorolaSeries::G),
        (Regex::new(r"(?i)\b(moto\s+)?e\s*\d+|\bmoto\s+e\b").unwrap(), MotorolaSeries::E),
    ];
    static ref IPHONE_X: Regex = Regex::new(r"(?i)\bx[sr]?\b").unwrap();
    static ref IPHONE_SE: Regex = Regex::new(r"(?i)\bse\b").unwrap();
    static ref IPHONE_SE_YEAR: Regex = Regex::new(r"\b(2020|2022)\b").unwrap();
    static ref NORD: Regex = Regex::new(r"(?i)\bnord").unwrap();
}

fn first_match<T: Copy>(table: &[(Regex, T)], name: &str, fallback: T) -> T {
    table
        .iter()
        .find(|(re, _)| re.is_match(name))
        .map(|(_, series)| *series)
        .unwrap_or(fallback)
}

pub fn samsung_series(name: &str) -> SamsungSeries {
    first_match(&SAMSUNG_SERIES, name, SamsungSeries::Other)
}

pub fn tab_series(name: &str) -> TabSeries {
    first_match(&TAB_SERIES, name, TabSeries::Other)
}

pub fn motorola_series(name: &str) -> MotorolaSeries {
    first_match(&MOTOROLA_SERIES, name, MotorolaSeries::Other)
}

/// Samsung S/Z sub-variant: base 0, Plus 1, Ultra 2.
pub fn samsung_variant(name: &str) -> u8 {
    let lowered = name.to_lowercase();
    if lowered.contains("ultra") {
        2
    } else if lowered.contains("plus") || lowered.contains('+') {
        1
    } else {
        0
    }
}

/// iPhone tier: base 0, Plus 1, Pro 2, Pro Max 3. Longest label is tested first.
pub fn iphone_variant(name: &str) -> u8 {
    let lowered = name.to_lowercase();
    if lowered.contains("pro max") {
        3
    } else if lowered.contains("pro") {
        2
    } else if lowered.contains("plus") {
        1
    } else {
        0
    }
}

/// Generation used for iPhone ordering. "X"/"XS"/"XR" and the 2020/2022 SE
/// count as generation 10.
pub fn iphone_generation(name: &str) -> Option<u32> {
    if IPHONE_SE.is_match(name) && IPHONE_SE_YEAR.is_match(name) {
        return Some(10);
    }
    if IPHONE_X.is_match(name) {
        return Some(10);
    }
    crate::core::extract::leading_number(name)
}

pub fn is_nord(name: &str) -> bool {
    NORD.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_family() {
        assert_eq!(BrandFamily::classify("iPhone"), BrandFamily::IPhone);
        assert_eq!(BrandFamily::classify("IPHONE"), BrandFamily::IPhone);
        assert_eq!(BrandFamily::classify("Samsung mobil"), BrandFamily::SamsungMobile);
        assert_eq!(BrandFamily::classify("MacBook"), BrandFamily::YearBased);
        assert_eq!(BrandFamily::classify("imac"), BrandFamily::YearBased);
        assert_eq!(BrandFamily::classify("Samsung Galaxy Tab"), BrandFamily::SamsungTab);
        assert_eq!(BrandFamily::classify("Motorola mobil"), BrandFamily::Motorola);
        assert_eq!(BrandFamily::classify("OnePlus mobil"), BrandFamily::OnePlus);
        assert_eq!(BrandFamily::classify("Nokia mobil"), BrandFamily::Generic);
        // exact match only
        assert_eq!(BrandFamily::classify("iPhone refurb"), BrandFamily::Generic);
        assert_eq!(BrandFamily::classify(""), BrandFamily::Generic);
    }

    #[test]
    fn test_samsung_series() {
        assert_eq!(samsung_series("Galaxy S24 Ultra"), SamsungSeries::S);
        assert_eq!(samsung_series("Galaxy A54 5G"), SamsungSeries::A);
        assert_eq!(samsung_series("Galaxy Z Flip5"), SamsungSeries::Z);
        assert_eq!(samsung_series("Galaxy Z Fold 4"), SamsungSeries::Z);
        assert_eq!(samsung_series("Galaxy Xcover 6 Pro"), SamsungSeries::Xcover);
        assert_eq!(samsung_series("Galaxy M52"), SamsungSeries::M);
        assert_eq!(samsung_series("Galaxy J7"), SamsungSeries::J);
        assert_eq!(samsung_series("Galaxy Note 20 Ultra"), SamsungSeries::Note);
        assert_eq!(samsung_series("Galaxy Core Prime"), SamsungSeries::Other);
        assert!(SamsungSeries::S < SamsungSeries::A);
        assert!(SamsungSeries::Note < SamsungSeries::Other);
    }

    #[test]
    fn test_tab_and_motorola_series() {
        assert_eq!(tab_series("Galaxy Tab S9 FE"), TabSeries::S);
        assert_eq!(tab_series("Galaxy Tab A7 Lite"), TabSeries::A);
        assert_eq!(tab_series("Galaxy Tab Active 3"), TabSeries::Other);

        assert_eq!(motorola_series("Edge 40 Pro"), MotorolaSeries::Edge);
        assert_eq!(motorola_series("Moto G84 5G"), MotorolaSeries::G);
        assert_eq!(motorola_series("Moto E13"), MotorolaSeries::E);
        assert_eq!(motorola_series("Razr 40"), MotorolaSeries::Other);
    }

    #[test]
    fn test_variants() {
        assert_eq!(samsung_variant("Galaxy S24 Ultra"), 2);
        assert_eq!(samsung_variant("Galaxy S24+"), 1);
        assert_eq!(samsung_variant("Galaxy S10 Plus"), 1);
        assert_eq!(samsung_variant("Galaxy S24"), 0);

        assert_eq!(iphone_variant("iPhone 13 Pro Max"), 3);
        assert_eq!(iphone_variant("iPhone 13 Pro"), 2);
        assert_eq!(iphone_variant("iPhone 14 Plus"), 1);
        assert_eq!(iphone_variant("iPhone 13 mini"), 0);
    }

    #[test]
    fn test_iphone_generation() {
        assert_eq!(iphone_generation("iPhone 14"), Some(14));
        assert_eq!(iphone_generation("iPhone X"), Some(10));
        assert_eq!(iphone_generation("iPhone XS Max"), Some(10));
        assert_eq!(iphone_generation("iPhone SE (2022)"), Some(10));
        assert_eq!(iphone_generation("iPhone SE 2020"), Some(10));
        assert_eq!(iphone_generation("iPhone SE"), None);
        assert_eq!(iphone_generation("iPhone 15 Pro 5G"), Some(15));
    }

    #[test]
    fn test_is_nord() {
        assert!(is_nord("OnePlus Nord CE 3"));
        assert!(is_nord("OnePlus Nord2 5G"));
        assert!(is_nord("OnePlus NordCE"));
        assert!(!is_nord("OnePlus 11"));
    }

    #[test]
    fn test_series_without_space_before_number() {
        let samsung = [
            ("Galaxy Note10", SamsungSeries::Note),
            ("Galaxy Note10+", SamsungSeries::Note),
            ("Galaxy Note20 Ultra", SamsungSeries::Note),
            ("Galaxy S23FE", SamsungSeries::S),
            ("Galaxy A14", SamsungSeries::A),
            ("Galaxy Z Flip5", SamsungSeries::Z),
            ("Galaxy ZFold4", SamsungSeries::Z),
            ("Galaxy XCover6 Pro", SamsungSeries::Xcover),
            ("Galaxy M33", SamsungSeries::M),
            ("Galaxy J5", SamsungSeries::J),
        ];
        for (name, expected) in samsung {
            assert_eq!(samsung_series(name), expected, "{}", name);
        }

        let motorola = [
            ("Edge30", MotorolaSeries::Edge),
            ("Motorola Edge40 Neo", MotorolaSeries::Edge),
            ("Moto G54", MotorolaSeries::G),
            ("Moto E22", MotorolaSeries::E),
        ];
        for (name, expected) in motorola {
            assert_eq!(motorola_series(name), expected, "{}", name);
        }

        let tab = [
            ("Galaxy TabS8", TabSeries::S),
            ("Galaxy Tab A9+", TabSeries::A),
        ];
        for (name, expected) in tab {
            assert_eq!(tab_series(name), expected, "{}", name);
        }
    }
}
