use uuid::Uuid;

/// Source of fresh node/page ids
pub trait IdGenerator: Send {
    fn new_id(&mut self) -> String;
}

/// Random UUID v4 ids (the default for real documents)
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Sequential `<seed>-<n>` ids, deterministic for tests and fixtures
#[derive(Debug, Clone)]
pub struct SequentialIds {
    seed: String,
    count: u32,
}

impl SequentialIds {
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            count: 0,
        }
    }
}

impl IdGenerator for SequentialIds {
    fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut gen = SequentialIds::new("doc");

        let id1 = gen.new_id();
        let id2 = gen.new_id();
        let id3 = gen.new_id();

        assert_eq!(id1, "doc-1");
        assert_eq!(id2, "doc-2");
        assert_eq!(id3, "doc-3");
    }

    #[test]
    fn test_uuid_ids_are_unique() {
        let mut gen = UuidGenerator;
        let a = gen.new_id();
        let b = gen.new_id();

        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }
}
