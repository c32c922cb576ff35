use uuid::Uuid;

use crate::models::Product;

/// In-memory, process-lifetime collection of products.
///
/// Insertion order is preserved and equals listing order. Records are never
/// mutated or removed after `append`.
#[derive(Debug, Default)]
pub struct ProductStore {
    records: Vec<Product>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[Product] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Linear scan; ids are generated fresh so at most one record matches.
    pub fn get(&self, id: Uuid) -> Option<&Product> {
        self.records.iter().find(|p| p.id == id)
    }

    /// Appends at the end. Ids are never reused, so no duplicate check.
    pub fn append(&mut self, product: Product) {
        self.records.push(product);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(name: &str) -> Product {
        Product::new(name.to_string(), String::new(), 9.99, 0)
    }

    #[test]
    fn new_store_is_empty() {
        let store = ProductStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.list().is_empty());
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut store = ProductStore::new();
        store.append(make("Widget"));
        store.append(make("Gadget"));
        store.append(make("Sensor"));

        let names: Vec<&str> = store.list().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Widget", "Gadget", "Sensor"],
            "Listing order must equal insertion order"
        );
    }

    #[test]
    fn get_finds_by_exact_id() {
        let mut store = ProductStore::new();
        let widget = make("Widget");
        let id = widget.id;
        store.append(widget);
        store.append(make("Gadget"));

        let found = store.get(id).expect("appended product must be retrievable");
        assert_eq!(found.name, "Widget");
    }

    #[test]
    fn get_unknown_id_is_none() {
        let mut store = ProductStore::new();
        assert!(store.get(Uuid::new_v4()).is_none(), "empty store has no matches");

        store.append(make("Widget"));
        assert!(store.get(Uuid::new_v4()).is_none());
    }
}
