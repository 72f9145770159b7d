use uuid::Uuid;

pub trait IdGenerator: Send + Sync {
    fn new_id(&self) -> String;
}

/// Random (v4) UUIDs rendered in hyphenated form.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
