use crate::core::brand_family::DEFAULT_BRAND_ORDER;
use crate::core::collation::danish_cmp;
use crate::core::model_sort::ModelComparator;
use crate::core::priority::{blank_last, make_priority_sorter, PriorityList, SENTINEL_RANK};
use crate::core::repair_rules::{TitleRuleSet, DEFAULT_REPAIR_TITLE_ORDER};
use crate::domain::model::Named;
use std::cmp::Ordering;

/// Lookup tables the engine ranks against. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct RankingTables {
    pub brand_order: PriorityList,
    pub repair_title_order: PriorityList,
    pub repair_rules: TitleRuleSet,
}

impl Default for RankingTables {
    fn default() -> Self {
        Self {
            brand_order: PriorityList::new(DEFAULT_BRAND_ORDER),
            repair_title_order: PriorityList::new(DEFAULT_REPAIR_TITLE_ORDER),
            repair_rules: TitleRuleSet::builtin(),
        }
    }
}

/// Orders brands, models and repair options for the staff pickers.
///
/// Every comparison is total: blank or unknown names rank last and never
/// produce an error.
#[derive(Debug, Clone, Default)]
pub struct RankingEngine {
    tables: RankingTables,
}

impl RankingEngine {
    pub fn new(tables: RankingTables) -> Self {
        Self { tables }
    }

    pub fn tables(&self) -> &RankingTables {
        &self.tables
    }

    /// Priority slot of a repair title, [`SENTINEL_RANK`] when nothing matches.
    pub fn rank_repair_title(&self, title: &str) -> usize {
        if title.trim().is_empty() {
            return SENTINEL_RANK;
        }
        self.tables
            .repair_rules
            .rank(&self.tables.repair_title_order, title)
            .unwrap_or(SENTINEL_RANK)
    }

    pub fn rank_brand(&self, name: &str) -> usize {
        if name.trim().is_empty() {
            return SENTINEL_RANK;
        }
        self.tables.brand_order.rank(name)
    }

    pub fn compare_repair_titles(&self, a: &str, b: &str) -> Ordering {
        let by_rank = make_priority_sorter(|t: &str| self.rank_repair_title(t), alphabetic);
        blank_last(a, b).then_with(|| by_rank(a, b))
    }

    pub fn compare_brand_names(&self, a: &str, b: &str) -> Ordering {
        let by_rank = make_priority_sorter(|n: &str| self.rank_brand(n), alphabetic);
        blank_last(a, b).then_with(|| by_rank(a, b))
    }

    pub fn compare_repairs<T: Named + ?Sized>(&self, a: &T, b: &T) -> Ordering {
        self.compare_repair_titles(a.display_name(), b.display_name())
    }

    pub fn compare_brands<T: Named + ?Sized>(&self, a: &T, b: &T) -> Ordering {
        self.compare_brand_names(a.display_name(), b.display_name())
    }

    /// Model comparator for the given brand; unknown brands get the generic
    /// number-then-name order.
    pub fn model_comparator(&self, brand_name: &str) -> ModelComparator {
        ModelComparator::for_brand(brand_name)
    }

    pub fn sort_brands<T: Named>(&self, brands: &mut [T]) {
        brands.sort_by(|a, b| self.compare_brands(a, b));
    }

    pub fn sort_repairs<T: Named>(&self, repairs: &mut [T]) {
        repairs.sort_by(|a, b| self.compare_repairs(a, b));
    }

    pub fn sort_models<T: Named>(&self, brand_name: &str, models: &mut [T]) {
        let comparator = self.model_comparator(brand_name);
        models.sort_by(|a, b| comparator.compare_named(a, b));
    }
}

fn alphabetic(a: &str, b: &str) -> Ordering {
    danish_cmp(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::repair_rules::{TitleMatcher, TitleRule};
    use crate::domain::model::{Brand, RepairOption};

    #[test]
    fn test_rank_repair_title_positions() {
        let engine = RankingEngine::default();
        assert_eq!(engine.rank_repair_title("Skærm (A+)"), 0);
        assert_eq!(engine.rank_repair_title("Batteri"), 7);
        assert_eq!(engine.rank_repair_title("Diagnose"), 24);
        assert_eq!(engine.rank_repair_title("Gavekort"), SENTINEL_RANK);
        assert_eq!(engine.rank_repair_title("   "), SENTINEL_RANK);
    }

    #[test]
    fn test_oem_variant_shares_slot() {
        let engine = RankingEngine::default();
        assert_eq!(
            engine.rank_repair_title("Skærm (OEM) - Original"),
            engine.rank_repair_title("Skærm (OEM)")
        );
    }

    #[test]
    fn test_sort_repairs() {
        let engine = RankingEngine::default();
        let mut repairs = vec![
            RepairOption::new("Diagnose"),
            RepairOption::default(),
            RepairOption::new("Batteri"),
            RepairOption::new("Skærm (A+)"),
        ];
        engine.sort_repairs(&mut repairs);
        let titles: Vec<&str> = repairs.iter().map(|r| r.display_name()).collect();
        assert_eq!(titles, vec!["Skærm (A+)", "Batteri", "Diagnose", ""]);
    }

    #[test]
    fn test_unknown_repairs_sort_alphabetically_after_known() {
        let engine = RankingEngine::default();
        let mut titles = vec!["Øvrigt", "Gavekort", "Ladestik", "Andet"];
        engine.sort_repairs(&mut titles);
        assert_eq!(titles, vec!["Ladestik", "Andet", "Gavekort", "Øvrigt"]);
    }

    #[test]
    fn test_sort_brands() {
        let engine = RankingEngine::default();
        let mut brands = vec![
            Brand::new("Zebra"),
            Brand::new("iPad"),
            Brand { id: Some(9), name: None },
            Brand::new("Acme"),
            Brand::new("iPhone"),
        ];
        engine.sort_brands(&mut brands);
        let names: Vec<&str> = brands.iter().map(|b| b.display_name()).collect();
        assert_eq!(names, vec!["iPhone", "iPad", "Acme", "Zebra", ""]);
    }

    #[test]
    fn test_injected_tables() {
        let tables = RankingTables {
            brand_order: PriorityList::new(["Nokia mobil", "iPhone"]),
            repair_title_order: PriorityList::new(["Diagnose", "Batteri"]),
            repair_rules: TitleRuleSet::new(vec![TitleRule::new(
                TitleMatcher::any_of(&["tjek"]),
                "Diagnose",
            )]),
        };
        let engine = RankingEngine::new(tables);

        assert_eq!(engine.rank_brand("Nokia mobil"), 0);
        assert_eq!(engine.rank_brand("Samsung mobil"), SENTINEL_RANK);
        assert_eq!(engine.rank_repair_title("Hurtigt tjek"), 0);
        assert_eq!(engine.rank_repair_title("Nyt batteri"), SENTINEL_RANK);

        // defaults are untouched
        assert_eq!(RankingEngine::default().rank_brand("iPhone"), 0);
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RankingEngine>();
    }
}
