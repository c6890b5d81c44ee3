use crate::types::ImageRecord;

/// In-memory, ordered list of the images currently known to the session.
///
/// The owning view is the only writer. Each mutator is a single step, so a
/// reader never observes a half-applied change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageCollection {
    records: Vec<ImageRecord>,
}

impl ImageCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the collection with a freshly listed sequence.
    pub fn replace_all(&mut self, records: Vec<ImageRecord>) {
        self.records = records;
    }

    /// Add a newly uploaded record at the end. Duplicate keys are tolerated
    /// until the next refresh.
    pub fn append(&mut self, record: ImageRecord) {
        self.records.push(record);
    }

    /// Remove the first record with `object_key`. Missing keys are ignored.
    pub fn remove(&mut self, object_key: &str) -> bool {
        match self
            .records
            .iter()
            .position(|r| r.object_key == object_key)
        {
            Some(idx) => {
                self.records.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn snapshot(&self) -> &[ImageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, object_key: &str) -> bool {
        self.records.iter().any(|r| r.object_key == object_key)
    }
}
