use crate::core::brand_family::{
    iphone_generation, iphone_variant, is_nord, motorola_series, samsung_series, samsung_variant,
    tab_series, BrandFamily, SamsungSeries,
};
use crate::core::collation::danish_cmp;
use crate::core::extract::{leading_number, number_or_missing, release_year};
use crate::core::priority::blank_last;
use crate::domain::model::Named;
use std::cmp::Ordering;

/// Model ordering for one brand, resolved once from the brand name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelComparator {
    family: BrandFamily,
}

impl ModelComparator {
    pub fn for_brand(brand_name: &str) -> Self {
        Self::for_family(BrandFamily::classify(brand_name))
    }

    pub fn for_family(family: BrandFamily) -> Self {
        Self { family }
    }

    pub fn family(&self) -> BrandFamily {
        self.family
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        blank_last(a, b)
            .then_with(|| family_order(self.family, a, b))
            .then_with(|| danish_cmp(a, b))
    }

    pub fn compare_named<T: Named + ?Sized>(&self, a: &T, b: &T) -> Ordering {
        self.compare(a.display_name(), b.display_name())
    }
}

/// Comparator for models of `brand_name`.
pub fn make_model_comparator<T: Named + ?Sized>(brand_name: &str) -> impl Fn(&T, &T) -> Ordering {
    let comparator = ModelComparator::for_brand(brand_name);
    move |a, b| comparator.compare_named(a, b)
}

fn family_order(family: BrandFamily, a: &str, b: &str) -> Ordering {
    match family {
        BrandFamily::IPhone => iphone_order(a, b),
        BrandFamily::SamsungMobile => samsung_order(a, b),
        BrandFamily::YearBased => year_order(a, b),
        BrandFamily::SamsungTab => tab_series(a)
            .cmp(&tab_series(b))
            .then_with(|| number_desc(a, b)),
        BrandFamily::Motorola => motorola_series(a)
            .cmp(&motorola_series(b))
            .then_with(|| number_desc(a, b)),
        BrandFamily::OnePlus => is_nord(a)
            .cmp(&is_nord(b))
            .then_with(|| number_desc(a, b)),
        BrandFamily::Generic => number_desc(a, b),
    }
}

fn number_desc(a: &str, b: &str) -> Ordering {
    number_or_missing(leading_number(b)).cmp(&number_or_missing(leading_number(a)))
}

// Newest generation first; inside a generation base, Plus, Pro, Pro Max.
fn iphone_order(a: &str, b: &str) -> Ordering {
    number_or_missing(iphone_generation(b))
        .cmp(&number_or_missing(iphone_generation(a)))
        .then_with(|| iphone_variant(a).cmp(&iphone_variant(b)))
}

fn samsung_order(a: &str, b: &str) -> Ordering {
    let (series_a, series_b) = (samsung_series(a), samsung_series(b));
    series_a
        .cmp(&series_b)
        .then_with(|| number_desc(a, b))
        .then_with(|| match series_a {
            SamsungSeries::S | SamsungSeries::Z => samsung_variant(a).cmp(&samsung_variant(b)),
            _ => Ordering::Equal,
        })
}

fn year_order(a: &str, b: &str) -> Ordering {
    number_or_missing(release_year(b))
        .cmp(&number_or_missing(release_year(a)))
        .then_with(|| number_desc(a, b))
}
