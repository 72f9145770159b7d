use crate::shared::core::identity::IdGenerator;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Hands out `id-0001`, `id-0002`, ... in call order.
#[derive(Debug, Default)]
pub struct SequenceIdGenerator {
    next: AtomicUsize,
}

impl SequenceIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn new_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        format!("id-{n:04}")
    }
}

#[cfg(test)]
mod sequence_id_generator_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_count_up_from_one() {
        let ids = SequenceIdGenerator::new();
        assert_eq!(ids.new_id(), "id-0001");
        assert_eq!(ids.new_id(), "id-0002");
    }
}
