use std::{
    borrow::Cow,
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

/// Assigns a stable integer to each distinct identifier text.
///
/// Ids start at 0, follow first-seen order and are never reused.
pub trait Interner {
    fn intern(&mut self, text: &str) -> usize;
}

/// Backticks used to quote raw identifiers are not part of the name.
pub fn normalize(text: &str) -> Cow<'_, str> {
    if text.contains('`') {
        Cow::Owned(text.replace('`', ""))
    } else {
        Cow::Borrowed(text)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdentifierTable {
    ids: HashMap<String, usize>,
    names: Vec<String>,
}

impl IdentifierTable {
    pub fn new() -> Self {
        IdentifierTable::default()
    }

    pub fn intern(&mut self, text: &str) -> usize {
        let name = normalize(text);
        if let Some(id) = self.ids.get(name.as_ref()) {
            return *id;
        }

        let id = self.names.len();
        self.names.push(name.to_string());
        self.ids.insert(name.into_owned(), id);
        id
    }

    pub fn get(&self, text: &str) -> Option<usize> {
        self.ids.get(normalize(text).as_ref()).copied()
    }

    pub fn name(&self, id: usize) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in id order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().enumerate().map(|(id, name)| (id, name.as_str()))
    }
}

impl Interner for IdentifierTable {
    fn intern(&mut self, text: &str) -> usize {
        IdentifierTable::intern(self, text)
    }
}

impl<T: Interner + ?Sized> Interner for &mut T {
    fn intern(&mut self, text: &str) -> usize {
        (**self).intern(text)
    }
}

/// An [`IdentifierTable`] shared by several runs, possibly on different
/// threads. Clones refer to the same table; lookups and assignments are
/// serialised by a mutex.
#[derive(Debug, Clone, Default)]
pub struct SharedIdentifierTable(Arc<Mutex<IdentifierTable>>);

impl SharedIdentifierTable {
    pub fn new() -> Self {
        SharedIdentifierTable::default()
    }

    fn lock(&self) -> MutexGuard<'_, IdentifierTable> {
        // The table is never left half-updated, so a poisoned lock is still usable.
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, text: &str) -> Option<usize> {
        self.lock().get(text)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn snapshot(&self) -> IdentifierTable {
        self.lock().clone()
    }
}

impl Interner for SharedIdentifierTable {
    fn intern(&mut self, text: &str) -> usize {
        self.lock().intern(text)
    }
}
