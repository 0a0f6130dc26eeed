/// Page ids the user has checked.
///
/// Behaves as a set: checking an id twice or unchecking an absent id is a no-op.
/// Ids are kept in the order they were first checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self { Self::default() }

    /// Apply one checkbox change. Returns true if membership changed.
    pub fn toggle(&mut self, id: &str, checked: bool) -> bool {
        let present = self.contains(id);
        match (checked, present) {
            (true, false) => {
                self.ids.push(id.to_string());
                true
            }
            (false, true) => {
                self.ids.retain(|existing| existing != id);
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, id: &str) -> bool { self.ids.iter().any(|existing| existing == id) }

    pub fn is_empty(&self) -> bool { self.ids.is_empty() }

    pub fn len(&self) -> usize { self.ids.len() }

    pub fn iter(&self) -> impl Iterator<Item = &str> { self.ids.iter().map(String::as_str) }
}
