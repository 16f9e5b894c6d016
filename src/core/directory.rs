use super::{
    enrich,
    filter,
    models::Employee,
};

/// Holds the enriched roster plus the three filter inputs, and keeps a
/// derived filtered view in sync. Every input setter recomputes the view in
/// full; the roster is small enough that nothing incremental is warranted.
#[derive(Default)]
pub struct DirectoryStore {
    employees: Vec<Employee>,
    filtered: Vec<Employee>,
    search_query: String,
    department_filters: Vec<String>,
    rating_filters: Vec<u8>,
    loading: bool,
}

impl DirectoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn filtered(&self) -> &[Employee] {
        &self.filtered
    }

    pub fn get(&self, id: u32) -> Option<&Employee> {
        self.employees.iter().find(|employee| employee.id == id)
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn department_filters(&self) -> &[String] {
        &self.department_filters
    }

    pub fn rating_filters(&self) -> &[u8] {
        &self.rating_filters
    }

    pub fn has_active_filters(&self) -> bool {
        !self.department_filters.is_empty() || !self.rating_filters.is_empty()
    }

    /// Distinct departments observed in the roster, in first-appearance
    /// order. Feeds the filter panel.
    pub fn departments(&self) -> Vec<String> {
        let mut departments: Vec<String> = Vec::new();
        for employee in &self.employees {
            if let Some(department) = employee.department.as_deref() {
                if !departments.iter().any(|d| d == department) {
                    departments.push(department.to_string());
                }
            }
        }
        departments
    }

    /// Replaces the roster with a freshly fetched list, enriching each record
    /// once on the way in.
    pub fn ingest(&mut self, mut employees: Vec<Employee>) {
        for employee in &mut employees {
            enrich::enrich(employee);
        }
        self.employees = employees;
        self.recompute();
    }

    /// Inserts a lazily fetched single record (replacing any stale copy of
    /// the same id). Enrichment only fills missing fields, so a record that
    /// was already ingested keeps its assignments.
    pub fn upsert(&mut self, mut employee: Employee) {
        enrich::enrich(&mut employee);
        self.employees.retain(|existing| existing.id != employee.id);
        self.employees.push(employee);
        self.recompute();
    }

    pub fn set_search_query(&mut self, query: String) {
        self.search_query = query;
        self.recompute();
    }

    pub fn toggle_department(&mut self, department: &str) {
        match self.department_filters.iter().position(|d| d == department) {
            Some(index) => {
                self.department_filters.remove(index);
            }
            None => self.department_filters.push(department.to_string()),
        }
        self.recompute();
    }

    pub fn toggle_rating(&mut self, rating: u8) {
        match self.rating_filters.iter().position(|&r| r == rating) {
            Some(index) => {
                self.rating_filters.remove(index);
            }
            None => self.rating_filters.push(rating),
        }
        self.recompute();
    }

    /// Resets both filter sets. The search query is left alone, matching the
    /// dashboard's "clear filters" control.
    pub fn clear_filters(&mut self) {
        self.department_filters.clear();
        self.rating_filters.clear();
        self.recompute();
    }

    fn recompute(&mut self) {
        self.filtered = filter::apply_filters(
            &self.employees,
            &self.search_query,
            &self.department_filters,
            &self.rating_filters,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn employee(id: u32, first: &str, department: &str, rating: u8) -> Employee {
        Employee {
            id,
            first_name: first.to_string(),
            last_name: "Doe".to_string(),
            email: format!("{}@corp.test", first.to_lowercase()),
            age: 30,
            department: Some(department.to_string()),
            rating: Some(rating),
            ..Default::default()
        }
    }

    fn filtered_ids(store: &DirectoryStore) -> Vec<u32> {
        store.filtered().iter().map(|e| e.id).collect()
    }

    #[test]
    fn ingest_enriches_and_exposes_full_list() {
        let mut store = DirectoryStore::new();
        store.ingest(vec![Employee { id: 1, ..Default::default() }]);

        assert_eq!(store.employees().len(), 1);
        assert!(store.employees()[0].department.is_some());
        assert!(store.employees()[0].rating.is_some());
        assert_eq!(filtered_ids(&store), vec![1]);
    }

    #[test]
    fn empty_inputs_mean_filtered_equals_full_list() {
        let mut store = DirectoryStore::new();
        store.ingest(vec![
            employee(1, "Ann", "Engineering", 5),
            employee(2, "Bo", "Sales", 2),
        ]);
        assert_eq!(filtered_ids(&store), vec![1, 2]);
    }

    #[test]
    fn department_toggle_narrows_and_restores() {
        let mut store = DirectoryStore::new();
        store.ingest(vec![
            employee(1, "Ann", "Engineering", 5),
            employee(2, "Bo", "Sales", 2),
        ]);

        store.toggle_department("Engineering");
        assert_eq!(filtered_ids(&store), vec![1]);

        store.toggle_department("Engineering");
        assert_eq!(filtered_ids(&store), vec![1, 2]);
    }

    #[test]
    fn query_and_rating_recompute_on_change() {
        let mut store = DirectoryStore::new();
        store.ingest(vec![
            employee(1, "Ann", "Engineering", 5),
            employee(2, "Bo", "Sales", 2),
            employee(3, "Cam", "Engineering", 2),
        ]);

        store.set_search_query("corp.test".to_string());
        assert_eq!(filtered_ids(&store), vec![1, 2, 3]);

        store.toggle_rating(2);
        assert_eq!(filtered_ids(&store), vec![2, 3]);

        store.set_search_query("cam".to_string());
        assert_eq!(filtered_ids(&store), vec![3]);
    }

    #[test]
    fn clear_filters_keeps_query() {
        let mut store = DirectoryStore::new();
        store.ingest(vec![
            employee(1, "Ann", "Engineering", 5),
            employee(2, "Bo", "Sales", 2),
        ]);

        store.set_search_query("ann".to_string());
        store.toggle_department("Sales");
        store.toggle_rating(2);
        assert!(store.has_active_filters());
        assert!(filtered_ids(&store).is_empty());

        store.clear_filters();
        assert!(!store.has_active_filters());
        assert_eq!(store.search_query(), "ann");
        assert_eq!(filtered_ids(&store), vec![1]);
    }

    #[test]
    fn departments_are_distinct_in_first_appearance_order() {
        let mut store = DirectoryStore::new();
        store.ingest(vec![
            employee(1, "Ann", "Sales", 5),
            employee(2, "Bo", "Engineering", 2),
            employee(3, "Cam", "Sales", 3),
        ]);
        assert_eq!(store.departments(), vec!["Sales".to_string(), "Engineering".to_string()]);
    }

    #[test]
    fn upsert_replaces_stale_copy_and_keeps_assignments() {
        let mut store = DirectoryStore::new();
        store.ingest(vec![employee(1, "Ann", "Engineering", 5)]);

        // Lazily fetched record for a new id lands at the end.
        store.upsert(Employee { id: 9, first_name: "Ned".into(), ..Default::default() });
        assert_eq!(store.employees().len(), 2);
        assert!(store.get(9).unwrap().rating.is_some());

        // Re-upserting an enriched record does not re-roll its fields.
        let enriched = store.get(9).unwrap().clone();
        store.upsert(enriched.clone());
        assert_eq!(store.get(9).unwrap().department, enriched.department);
        assert_eq!(store.get(9).unwrap().rating, enriched.rating);
    }
}
