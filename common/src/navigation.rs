//! Previous/next navigation over the ids of the last listing.

use crate::model::Person;

/// Text shown in place of an id when the listing was empty.
pub const NO_RECORDS: &str = "No hay personas";

/// Ids in the order the last "list all" response returned them.
///
/// Both lookups wrap around. An id that is not in the list resolves to the
/// last id for [`previous`](IdList::previous) and to the first one for
/// [`next`](IdList::next). `None` means the list is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdList {
    ids: Vec<String>,
}

impl IdList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_people(people: &[Person]) -> Self {
        let mut list = Self::new();
        list.rebuild(people.iter().map(|p| p.id.as_str()));
        list
    }

    /// Replaces the whole list; nothing from the previous listing survives.
    pub fn rebuild<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = ids.into_iter().map(Into::into).collect();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ids
    }

    pub fn previous(&self, id: &str) -> Option<&str> {
        let last = self.ids.last()?;
        let found = self
            .ids
            .windows(2)
            .find(|pair| pair[1] == id)
            .map(|pair| pair[0].as_str());
        Some(found.unwrap_or(last.as_str()))
    }

    pub fn next(&self, id: &str) -> Option<&str> {
        let first = self.ids.first()?;
        let found = self
            .ids
            .windows(2)
            .find(|pair| pair[0] == id)
            .map(|pair| pair[1].as_str());
        Some(found.unwrap_or(first.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> IdList {
        let mut list = IdList::new();
        list.rebuild(["A", "B", "C"]);
        list
    }

    #[test]
    fn wraps_around_both_ends() {
        let list = abc();
        assert_eq!(list.previous("A"), Some("C"));
        assert_eq!(list.next("A"), Some("B"));
        assert_eq!(list.previous("B"), Some("A"));
        assert_eq!(list.next("B"), Some("C"));
        assert_eq!(list.previous("C"), Some("B"));
        assert_eq!(list.next("C"), Some("A"));
    }

    #[test]
    fn empty_list_has_no_neighbours() {
        let list = IdList::new();
        for id in ["", "0", "A"] {
            assert_eq!(list.previous(id), None);
            assert_eq!(list.next(id), None);
        }
    }

    #[test]
    fn unknown_ids_fall_back_asymmetrically() {
        let list = abc();
        for id in ["", "0", "Z"] {
            assert_eq!(list.previous(id), Some("C"));
            assert_eq!(list.next(id), Some("A"));
        }
    }

    #[test]
    fn next_undoes_previous_for_members() {
        let list = abc();
        for id in list.as_slice() {
            let prev = list.previous(id).unwrap();
            assert_eq!(list.next(prev), Some(id.as_str()));
        }
    }

    #[test]
    fn single_element_points_at_itself() {
        let mut list = IdList::new();
        list.rebuild(["solo"]);
        assert_eq!(list.previous("solo"), Some("solo"));
        assert_eq!(list.next("solo"), Some("solo"));
    }

    #[test]
    fn duplicates_resolve_to_the_first_match() {
        let mut list = IdList::new();
        list.rebuild(["A", "B", "A", "C"]);
        assert_eq!(list.previous("A"), Some("B"));
        assert_eq!(list.next("A"), Some("B"));
    }

    #[test]
    fn rebuild_replaces_instead_of_merging() {
        let mut list = abc();
        list.rebuild(vec!["X".to_string(), "Y".to_string()]);
        assert_eq!(list.as_slice(), ["X", "Y"]);
        assert_eq!(list.next("C"), Some("X"));
    }
}
