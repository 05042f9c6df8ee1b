//! Mapping of free-text repair titles onto canonical slots.
//!
//! Staff type titles like "Skærm (OEM) - Original" or "Nyt batteri". The
//! rule table collapses those variants onto the labels of the repair priority
//! list so they cluster by repair category.

use crate::core::priority::PriorityList;
use regex::Regex;

/// Canonical order of repair options in the pickers.
pub const DEFAULT_REPAIR_TITLE_ORDER: [&str; 25] = [
    "Skærm (A+)",
    "Skærm (OEM)",
    "Skærm (Original)",
    "Skærm (Service Pack)",
    "Skærm",
    "Beskyttelsesglas",
    "Bagcover",
    "Batteri",
    "Batteri (Original)",
    "Ladestik",
    "Kamera (bag)",
    "Kamera (front)",
    "Kameraglas",
    "Højttaler",
    "Ørehøjttaler",
    "Mikrofon",
    "Tænd/sluk-knap",
    "Lydstyrkeknapper",
    "Face ID",
    "Vibrator",
    "Hjemknap",
    "Software",
    "Vandskade",
    "Rensning",
    "Diagnose",
];

#[derive(Debug, Clone)]
pub enum TitleMatcher {
    /// Every needle occurs in the lowercased title.
    AllOf(Vec<String>),
    /// At least one needle occurs in the lowercased title.
    AnyOf(Vec<String>),
    Pattern(Regex),
}

impl TitleMatcher {
    pub fn all_of(needles: &[&str]) -> Self {
        TitleMatcher::AllOf(needles.iter().map(|n| n.to_lowercase()).collect())
    }

    pub fn any_of(needles: &[&str]) -> Self {
        TitleMatcher::AnyOf(needles.iter().map(|n| n.to_lowercase()).collect())
    }

    /// `lowered` must already be lowercased.
    fn matches(&self, original: &str, lowered: &str) -> bool {
        match self {
            TitleMatcher::AllOf(needles) => {
                !needles.is_empty() && needles.iter().all(|n| lowered.contains(n.as_str()))
            }
            TitleMatcher::AnyOf(needles) => needles.iter().any(|n| lowered.contains(n.as_str())),
            TitleMatcher::Pattern(re) => re.is_match(original),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TitleRule {
    pub matcher: TitleMatcher,
    pub slot: String,
}

impl TitleRule {
    pub fn new(matcher: TitleMatcher, slot: impl Into<String>) -> Self {
        Self {
            matcher,
            slot: slot.into(),
        }
    }
}

/// Ordered rule table, first match wins.
#[derive(Debug, Clone, Default)]
pub struct TitleRuleSet {
    rules: Vec<TitleRule>,
}

impl TitleRuleSet {
    pub fn new(rules: Vec<TitleRule>) -> Self {
        Self { rules }
    }

    pub fn builtin() -> Self {
        use TitleMatcher as M;

        // Order matters: specific screen grades before the plain screen slot,
        // protective glass before anything mentioning "skærm".
        let rules = vec![
            TitleRule::new(M::any_of(&["beskyttelsesglas", "panserglas", "skærmbeskytter"]), "Beskyttelsesglas"),
            TitleRule::new(M::all_of(&["skærm", "a+"]), "Skærm (A+)"),
            TitleRule::new(M::all_of(&["skærm", "oem"]), "Skærm (OEM)"),
            TitleRule::new(M::all_of(&["skærm", "service"]), "Skærm (Service Pack)"),
            TitleRule::new(M::all_of(&["skærm", "orig"]), "Skærm (Original)"),
            TitleRule::new(M::any_of(&["skærm", "display", "lcd", "oled"]), "Skærm"),
            TitleRule::new(M::any_of(&["bagcover", "bagglas", "back cover", "bagside"]), "Bagcover"),
            TitleRule::new(M::all_of(&["batteri", "orig"]), "Batteri (Original)"),
            TitleRule::new(M::any_of(&["batteri", "battery"]), "Batteri"),
            TitleRule::new(M::any_of(&["ladestik", "ladeport", "usb-c", "lightning"]), "Ladestik"),
            TitleRule::new(M::any_of(&["kameraglas", "kamera glas", "linse"]), "Kameraglas"),
            TitleRule::new(M::any_of(&["frontkamera", "front kamera", "selfie", "kamera (front)"]), "Kamera (front)"),
            TitleRule::new(M::any_of(&["kamera", "camera"]), "Kamera (bag)"),
            TitleRule::new(M::any_of(&["ørehøjttaler", "øre højttaler", "earpiece"]), "Ørehøjttaler"),
            TitleRule::new(M::any_of(&["højttaler", "speaker"]), "Højttaler"),
            TitleRule::new(M::any_of(&["mikrofon", "microphone"]), "Mikrofon"),
            TitleRule::new(M::Pattern(Regex::new(r"(?i)\b(tænd|sluk|power)").unwrap()), "Tænd/sluk-knap"),
            TitleRule::new(M::any_of(&["lydstyrke", "volume"]), "Lydstyrkeknapper"),
            TitleRule::new(M::any_of(&["face id", "faceid"]), "Face ID"),
            TitleRule::new(M::any_of(&["vibrator", "vibration"]), "Vibrator"),
            TitleRule::new(M::any_of(&["hjemknap", "home knap", "touch id"]), "Hjemknap"),
            TitleRule::new(M::any_of(&["software", "opdatering", "gendannelse"]), "Software"),
            TitleRule::new(M::any_of(&["vandskade", "væskeskade"]), "Vandskade"),
            TitleRule::new(M::any_of(&["rens"]), "Rensning"),
            TitleRule::new(M::any_of(&["diagnose", "fejlfinding"]), "Diagnose"),
        ];
        Self { rules }
    }

    /// Rules of `self` evaluated before those of `other`.
    pub fn chain(mut self, other: TitleRuleSet) -> Self {
        self.rules.extend(other.rules);
        self
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Slot label of the first matching rule.
    pub fn classify(&self, title: &str) -> Option<&str> {
        let lowered = title.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.matcher.matches(title, &lowered))
            .map(|rule| rule.slot.as_str())
    }

    /// Exact list position first, then the slot of the first matching rule.
    pub fn rank(&self, order: &PriorityList, title: &str) -> Option<usize> {
        order
            .position(title)
            .or_else(|| self.classify(title).and_then(|slot| order.position(slot)))
    }
}
