//! Danish alphabetic comparison.
//!
//! Uses the CLDR "da" tailoring shipped with ICU4X, so "æ", "ø" and "å"
//! sort after "z" in that order. When the collator cannot be built a
//! simple fold with the same letter placement is used instead.

use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use std::cmp::Ordering;

thread_local! {
    // Collator carries non-Sync data payloads, so each thread builds its own.
    static DANISH: Option<Collator> =
        Collator::try_new(&locale!("da").into(), CollatorOptions::new()).ok();
}

/// Danish-collated comparison, falling back to byte order on collator ties
/// so the result is a total order.
pub fn danish_cmp(a: &str, b: &str) -> Ordering {
    let collated = DANISH.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => folded_cmp(a, b),
    });
    collated.then_with(|| a.cmp(b))
}

fn folded_cmp(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b))
}

fn fold(s: &str) -> Vec<u32> {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'æ' | 'ä' => 'z' as u32 + 1,
            'ø' | 'ö' => 'z' as u32 + 2,
            'å' => 'z' as u32 + 3,
            other => other as u32,
        })
        .collect()
}
