use crc32fast::Hasher;

/// Derive a short, stable tree seed from an arbitrary label (page id, project name)
pub fn tree_seed(label: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(label.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential ID generator for nodes within one tree
#[derive(Debug, Clone)]
pub struct IDGenerator {
    seed: String,
    count: u64,
}

impl IDGenerator {
    pub fn new(label: &str) -> Self {
        Self::from_seed(tree_seed(label))
    }

    pub fn from_seed(seed: String) -> Self {
        Self { seed, count: 0 }
    }

    /// Resume numbering after `count` ids have already been handed out
    pub fn resume(seed: String, count: u64) -> Self {
        Self { seed, count }
    }

    /// Id reserved for the tree's root container
    pub fn root_id(&self) -> String {
        format!("{}-0", self.seed)
    }

    /// Generate next sequential ID
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_is_stable() {
        assert_eq!(tree_seed("page-1"), tree_seed("page-1"));
        assert_ne!(tree_seed("page-1"), tree_seed("page-2"));
    }

    #[test]
    fn test_sequential_ids() {
        let mut ids = IDGenerator::from_seed("abc".to_string());
        assert_eq!(ids.root_id(), "abc-0");
        assert_eq!(ids.new_id(), "abc-1");
        assert_eq!(ids.new_id(), "abc-2");
    }

    #[test]
    fn test_resume_continues_numbering() {
        let mut ids = IDGenerator::resume("abc".to_string(), 7);
        assert_eq!(ids.new_id(), "abc-8");
    }
}
