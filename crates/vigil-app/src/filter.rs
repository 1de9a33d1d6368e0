// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

//! Generic search-and-filter reduction over a fixed, in-memory record list.
//!
//! A list carries one free-text criterion, matched case-insensitively as a
//! substring of any of its search fields, and any number of categorical
//! criteria, each an exact match on one field with a sentinel meaning "no
//! constraint". All criteria AND together. The visible subset is recomputed
//! on every change and always keeps the source order.

use tracing::debug;

use crate::{ExpandedRows, FilterError, RowKey, RowProjection, TableRow};

pub type FieldAccessor<T> = fn(&T) -> &str;

const SEARCH_CHIP_LABEL: &str = "search";

pub struct SearchField<T> {
    pub label: &'static str,
    pub get: FieldAccessor<T>,
}

pub struct CategoryFilter<T> {
    pub label: &'static str,
    pub sentinel: &'static str,
    pub options: Vec<&'static str>,
    pub get: FieldAccessor<T>,
}

impl<T> CategoryFilter<T> {
    pub fn new(
        label: &'static str,
        sentinel: &'static str,
        options: impl IntoIterator<Item = &'static str>,
        get: FieldAccessor<T>,
    ) -> Self {
        Self {
            label,
            sentinel,
            options: options.into_iter().collect(),
            get,
        }
    }

    fn resolve(&self, value: &str) -> Result<Option<&'static str>, FilterError> {
        if value == self.sentinel {
            return Ok(None);
        }
        self.options
            .iter()
            .copied()
            .find(|option| *option == value)
            .map(Some)
            .ok_or_else(|| FilterError::UnknownValue {
                filter: self.label,
                value: value.to_owned(),
            })
    }
}

/// Identifies one criterion of a list, for chips and clear actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CriterionSlot {
    Search,
    Category(usize),
}

/// Current value of every criterion. `None` selections are at the sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterCriteria {
    pub query: String,
    pub selections: Vec<Option<&'static str>>,
}

impl FilterCriteria {
    pub fn is_default(&self) -> bool {
        self.query.is_empty() && self.selections.iter().all(Option::is_none)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub slot: CriterionSlot,
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryState {
    pub label: &'static str,
    pub sentinel: &'static str,
    pub selected: Option<&'static str>,
    pub options: Vec<&'static str>,
}

impl CategoryState {
    pub fn display_value(&self) -> &'static str {
        self.selected.unwrap_or(self.sentinel)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSummary {
    pub chips: Vec<FilterChip>,
    pub visible: usize,
    pub total: usize,
}

impl FilterSummary {
    pub fn is_filtered(&self) -> bool {
        !self.chips.is_empty()
    }

    pub fn is_empty_result(&self) -> bool {
        self.visible == 0
    }

    pub fn count_label(&self) -> String {
        format!("{} of {}", self.visible, self.total)
    }

    pub fn showing_label(&self) -> String {
        format!("showing {}", self.count_label())
    }

    /// Text for the explicit empty state, naming the criteria that produced
    /// it. `None` while any row is visible.
    pub fn no_results_message(&self) -> Option<String> {
        if !self.is_empty_result() {
            return None;
        }
        if self.total == 0 {
            return Some("no records".to_owned());
        }

        let criteria = self
            .chips
            .iter()
            .map(|chip| match chip.slot {
                CriterionSlot::Search => format!("{} {:?}", chip.label, chip.value),
                CriterionSlot::Category(_) => format!("{} = {}", chip.label, chip.value),
            })
            .collect::<Vec<_>>();
        if criteria.is_empty() {
            Some("no results".to_owned())
        } else {
            Some(format!("no results for {}", criteria.join(" and ")))
        }
    }
}

pub struct FilterableList<T> {
    title: &'static str,
    records: Vec<T>,
    search: Vec<SearchField<T>>,
    categories: Vec<CategoryFilter<T>>,
    criteria: FilterCriteria,
    visible: Vec<usize>,
    expanded: ExpandedRows,
}

impl<T> FilterableList<T> {
    pub fn new(title: &'static str, records: Vec<T>) -> Self {
        let visible = (0..records.len()).collect();
        Self {
            title,
            records,
            search: Vec::new(),
            categories: Vec::new(),
            criteria: FilterCriteria::default(),
            visible,
            expanded: ExpandedRows::default(),
        }
    }

    pub fn search_on(mut self, label: &'static str, get: FieldAccessor<T>) -> Self {
        self.search.push(SearchField { label, get });
        self
    }

    pub fn filter_by(mut self, filter: CategoryFilter<T>) -> Self {
        self.categories.push(filter);
        self.criteria.selections.push(None);
        self
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn search_labels(&self) -> Vec<&'static str> {
        self.search.iter().map(|field| field.label).collect()
    }

    pub fn visible_indices(&self) -> &[usize] {
        &self.visible
    }

    pub fn visible(&self) -> impl Iterator<Item = &T> + '_ {
        self.visible.iter().map(|index| &self.records[*index])
    }

    pub fn category_states(&self) -> Vec<CategoryState> {
        self.categories
            .iter()
            .zip(&self.criteria.selections)
            .map(|(filter, selected)| CategoryState {
                label: filter.label,
                sentinel: filter.sentinel,
                selected: *selected,
                options: filter.options.clone(),
            })
            .collect()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.criteria.query = query.into();
        self.recompute();
    }

    /// Sets a categorical criterion. Passing the filter's sentinel removes
    /// the constraint.
    pub fn select(&mut self, index: usize, value: &str) -> Result<(), FilterError> {
        let filter = self
            .categories
            .get(index)
            .ok_or(FilterError::UnknownFilter { index })?;
        let resolved = filter.resolve(value)?;
        self.criteria.selections[index] = resolved;
        self.recompute();
        Ok(())
    }

    /// Advances a categorical criterion through sentinel, then each option in
    /// order, then back to the sentinel. Returns the value now shown.
    pub fn cycle(&mut self, index: usize) -> Result<&'static str, FilterError> {
        let filter = self
            .categories
            .get(index)
            .ok_or(FilterError::UnknownFilter { index })?;
        let next = match self.criteria.selections[index] {
            None => filter.options.first().copied(),
            Some(current) => filter
                .options
                .iter()
                .position(|option| *option == current)
                .and_then(|position| filter.options.get(position + 1).copied()),
        };
        let shown = next.unwrap_or(filter.sentinel);
        self.criteria.selections[index] = next;
        self.recompute();
        Ok(shown)
    }

    pub fn clear(&mut self, slot: CriterionSlot) -> Result<(), FilterError> {
        match slot {
            CriterionSlot::Search => self.criteria.query.clear(),
            CriterionSlot::Category(index) => {
                let selection = self
                    .criteria
                    .selections
                    .get_mut(index)
                    .ok_or(FilterError::UnknownFilter { index })?;
                *selection = None;
            }
        }
        self.recompute();
        Ok(())
    }

    /// Resets every criterion at once. Returns whether anything was active.
    pub fn clear_all(&mut self) -> bool {
        let was_active = !self.criteria.is_default();
        self.criteria.query.clear();
        self.criteria.selections.iter_mut().for_each(|slot| *slot = None);
        self.recompute();
        was_active
    }

    pub fn summary(&self) -> FilterSummary {
        let mut chips = Vec::new();
        if !self.criteria.query.is_empty() {
            chips.push(FilterChip {
                slot: CriterionSlot::Search,
                label: SEARCH_CHIP_LABEL,
                value: self.criteria.query.clone(),
            });
        }
        for (index, (filter, selected)) in self
            .categories
            .iter()
            .zip(&self.criteria.selections)
            .enumerate()
        {
            if let Some(value) = selected {
                chips.push(FilterChip {
                    slot: CriterionSlot::Category(index),
                    label: filter.label,
                    value: (*value).to_owned(),
                });
            }
        }

        FilterSummary {
            chips,
            visible: self.visible.len(),
            total: self.records.len(),
        }
    }

    pub fn expanded(&self) -> &ExpandedRows {
        &self.expanded
    }

    pub fn expanded_mut(&mut self) -> &mut ExpandedRows {
        &mut self.expanded
    }

    fn recompute(&mut self) {
        let needle = self.criteria.query.to_lowercase();
        self.visible = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches(record, &needle))
            .map(|(index, _)| index)
            .collect();
        debug!(
            list = self.title,
            visible = self.visible.len(),
            total = self.records.len(),
            "filter recomputed"
        );
    }

    fn matches(&self, record: &T, needle: &str) -> bool {
        let text_match = needle.is_empty()
            || self
                .search
                .iter()
                .any(|field| (field.get)(record).to_lowercase().contains(needle));
        text_match
            && self
                .categories
                .iter()
                .zip(&self.criteria.selections)
                .all(|(filter, selected)| match selected {
                    Some(value) => (filter.get)(record) == *value,
                    None => true,
                })
    }
}

/// Object-safe face of a filterable list, so one screen type can host lists
/// of any record type.
pub trait ListView {
    fn title(&self) -> &'static str;
    fn columns(&self) -> &'static [&'static str];
    fn query(&self) -> &str;
    fn set_query(&mut self, query: &str);
    fn search_labels(&self) -> Vec<&'static str>;
    fn category_states(&self) -> Vec<CategoryState>;
    fn cycle_category(&mut self, index: usize) -> Result<&'static str, FilterError>;
    fn select_category(&mut self, index: usize, value: &str) -> Result<(), FilterError>;
    fn clear(&mut self, slot: CriterionSlot) -> Result<(), FilterError>;
    fn clear_all(&mut self) -> bool;
    fn summary(&self) -> FilterSummary;
    fn rows(&self) -> Vec<RowProjection>;
    fn toggle_row(&mut self, key: RowKey) -> bool;
    fn collapse_all(&mut self) -> usize;
}

impl<T: TableRow> ListView for FilterableList<T> {
    fn title(&self) -> &'static str {
        self.title
    }

    fn columns(&self) -> &'static [&'static str] {
        T::columns()
    }

    fn query(&self) -> &str {
        &self.criteria.query
    }

    fn set_query(&mut self, query: &str) {
        FilterableList::set_query(self, query);
    }

    fn search_labels(&self) -> Vec<&'static str> {
        FilterableList::search_labels(self)
    }

    fn category_states(&self) -> Vec<CategoryState> {
        FilterableList::category_states(self)
    }

    fn cycle_category(&mut self, index: usize) -> Result<&'static str, FilterError> {
        self.cycle(index)
    }

    fn select_category(&mut self, index: usize, value: &str) -> Result<(), FilterError> {
        self.select(index, value)
    }

    fn clear(&mut self, slot: CriterionSlot) -> Result<(), FilterError> {
        FilterableList::clear(self, slot)
    }

    fn clear_all(&mut self) -> bool {
        FilterableList::clear_all(self)
    }

    fn summary(&self) -> FilterSummary {
        FilterableList::summary(self)
    }

    fn rows(&self) -> Vec<RowProjection> {
        self.visible()
            .map(|record| {
                let expanded = self.expanded.is_expanded(&record.row_key());
                RowProjection::project(record, expanded)
            })
            .collect()
    }

    fn toggle_row(&mut self, key: RowKey) -> bool {
        self.expanded.toggle(key)
    }

    fn collapse_all(&mut self) -> usize {
        self.expanded.collapse_all()
    }
}

#[cfg(test)]
mod tests {
    use super::{CategoryFilter, CriterionSlot, FilterableList, ListView};
    use crate::{FilterError, RowKey, TableCell, TableRow};

    #[derive(Debug, Clone, PartialEq)]
    struct Account {
        id: i64,
        name: &'static str,
        owner: &'static str,
        status: &'static str,
        tier: &'static str,
    }

    impl TableRow for Account {
        fn columns() -> &'static [&'static str] {
            &["id", "name", "owner", "status", "tier"]
        }

        fn row_key(&self) -> RowKey {
            RowKey::new("ACC", self.id)
        }

        fn cells(&self) -> Vec<TableCell> {
            vec![
                TableCell::text(self.row_key().to_string()),
                TableCell::text(self.name),
                TableCell::text(self.owner),
                TableCell::Badge(self.status),
                TableCell::Badge(self.tier),
            ]
        }

        fn details(&self) -> Vec<String> {
            if self.tier == "Gold" {
                vec![format!("{} escalation contact", self.owner)]
            } else {
                Vec::new()
            }
        }
    }

    fn accounts() -> FilterableList<Account> {
        let records = vec![
            Account {
                id: 1,
                name: "Payroll",
                owner: "Dana Ruiz",
                status: "Active",
                tier: "Gold",
            },
            Account {
                id: 2,
                name: "Backups",
                owner: "Sam Patel",
                status: "Inactive",
                tier: "Silver",
            },
            Account {
                id: 3,
                name: "CRM",
                owner: "Dana Ruiz",
                status: "Active",
                tier: "Silver",
            },
        ];
        FilterableList::new("Accounts", records)
            .search_on("name", |account| account.name)
            .search_on("owner", |account| account.owner)
            .filter_by(CategoryFilter::new(
                "Status",
                "All Status",
                ["Active", "Inactive"],
                |account: &Account| account.status,
            ))
            .filter_by(CategoryFilter::new(
                "Tier",
                "All Tiers",
                ["Gold", "Silver"],
                |account: &Account| account.tier,
            ))
    }

    fn visible_names(list: &FilterableList<Account>) -> Vec<&'static str> {
        list.visible().map(|account| account.name).collect()
    }

    #[test]
    fn defaults_show_every_record() {
        let list = accounts();
        assert_eq!(visible_names(&list), vec!["Payroll", "Backups", "CRM"]);
        let summary = list.summary();
        assert!(!summary.is_filtered());
        assert_eq!(summary.showing_label(), "showing 3 of 3");
    }

    #[test]
    fn query_matches_any_search_field_case_insensitively() {
        let mut list = accounts();
        list.set_query("RUIZ");
        assert_eq!(visible_names(&list), vec!["Payroll", "CRM"]);

        list.set_query("back");
        assert_eq!(visible_names(&list), vec!["Backups"]);
    }

    #[test]
    fn query_ignores_fields_not_marked_searchable() {
        let mut list = accounts();
        list.set_query("gold");
        assert!(visible_names(&list).is_empty());
    }

    #[test]
    fn categories_and_query_combine_with_and() {
        let mut list = accounts();
        list.select(0, "Active").expect("status option");
        list.select(1, "Silver").expect("tier option");
        assert_eq!(visible_names(&list), vec!["CRM"]);

        list.set_query("payroll");
        assert!(visible_names(&list).is_empty());
    }

    #[test]
    fn selecting_sentinel_removes_constraint() {
        let mut list = accounts();
        list.select(0, "Inactive").expect("status option");
        assert_eq!(visible_names(&list), vec!["Backups"]);

        list.select(0, "All Status").expect("sentinel");
        assert_eq!(list.criteria().selections[0], None);
        assert_eq!(visible_names(&list), vec!["Payroll", "Backups", "CRM"]);
    }

    #[test]
    fn unknown_values_and_filters_are_rejected() {
        let mut list = accounts();
        assert_eq!(
            list.select(0, "active"),
            Err(FilterError::UnknownValue {
                filter: "Status",
                value: "active".to_owned(),
            })
        );
        assert_eq!(
            list.select(5, "Active"),
            Err(FilterError::UnknownFilter { index: 5 })
        );
        assert_eq!(
            list.clear(CriterionSlot::Category(9)),
            Err(FilterError::UnknownFilter { index: 9 })
        );
        assert_eq!(list.summary().visible, 3);
    }

    #[test]
    fn cycle_walks_options_and_returns_to_sentinel() {
        let mut list = accounts();
        assert_eq!(list.cycle(1), Ok("Gold"));
        assert_eq!(visible_names(&list), vec!["Payroll"]);
        assert_eq!(list.cycle(1), Ok("Silver"));
        assert_eq!(list.cycle(1), Ok("All Tiers"));
        assert_eq!(list.criteria().selections[1], None);
        assert_eq!(visible_names(&list).len(), 3);
    }

    #[test]
    fn chips_name_each_active_criterion_and_clear_independently() {
        let mut list = accounts();
        list.set_query("dana");
        list.select(1, "Gold").expect("tier option");

        let summary = list.summary();
        let chips = summary
            .chips
            .iter()
            .map(|chip| (chip.slot, chip.label, chip.value.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            chips,
            vec![
                (CriterionSlot::Search, "search", "dana"),
                (CriterionSlot::Category(1), "Tier", "Gold"),
            ]
        );

        list.clear(CriterionSlot::Category(1)).expect("clear tier");
        assert_eq!(list.criteria().query, "dana");
        assert_eq!(visible_names(&list), vec!["Payroll", "CRM"]);

        list.clear(CriterionSlot::Search).expect("clear search");
        assert!(list.criteria().is_default());
    }

    #[test]
    fn clear_all_resets_everything_and_reports_activity() {
        let mut list = accounts();
        assert!(!list.clear_all());

        list.set_query("zzz");
        list.select(0, "Active").expect("status option");
        assert!(list.clear_all());
        assert!(list.criteria().is_default());
        assert_eq!(list.summary().count_label(), "3 of 3");
    }

    #[test]
    fn empty_result_message_names_the_criteria() {
        let mut list = accounts();
        list.set_query("zzz");
        list.select(0, "Inactive").expect("status option");

        let summary = list.summary();
        assert!(summary.is_empty_result());
        assert_eq!(
            summary.no_results_message().as_deref(),
            Some("no results for search \"zzz\" and Status = Inactive")
        );
        assert_eq!(summary.count_label(), "0 of 3");
    }

    #[test]
    fn empty_dataset_reports_no_records() {
        let list = FilterableList::<Account>::new("Accounts", Vec::new());
        assert_eq!(
            list.summary().no_results_message().as_deref(),
            Some("no records")
        );
    }

    #[test]
    fn rows_carry_expansion_state_by_key() {
        let mut list = accounts();
        assert!(list.toggle_row(RowKey::new("ACC", 1)));

        let rows = ListView::rows(&list);
        assert!(rows[0].expanded);
        assert!(rows[0].expandable());
        assert!(!rows[1].expanded);
        assert!(!rows[1].expandable());

        list.set_query("payroll");
        let rows = ListView::rows(&list);
        assert_eq!(rows.len(), 1);
        assert!(rows[0].expanded, "expansion survives refiltering");

        assert_eq!(list.collapse_all(), 1);
    }
}
