use uuid::Uuid;

use crate::models::User;

/// In-memory, process-lifetime collection of users.
///
/// Insertion order is preserved and equals listing order. Records are never
/// mutated or removed after `append`.
#[derive(Debug, Default)]
pub struct UserStore {
    records: Vec<User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[User] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Linear scan; ids are generated fresh so at most one record matches.
    pub fn get(&self, id: Uuid) -> Option<&User> {
        self.records.iter().find(|u| u.id == id)
    }

    /// Appends at the end. Ids are never reused, so no duplicate check.
    pub fn append(&mut self, user: User) {
        self.records.push(user);
    }
}
