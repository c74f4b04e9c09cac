use uuid::Uuid;

/// Supplies the identifiers a conversion stamps into its output.
///
/// GUIDs are a target-format requirement only; nothing looks them up.
pub trait IdSource {
    /// A fresh GUID for one emitted record.
    fn next_guid(&mut self) -> String;

    /// Eight lowercase hex characters for the output filename.
    fn file_tag(&mut self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_guid(&mut self) -> String {
        Uuid::new_v4().to_string()
    }

    fn file_tag(&mut self) -> String {
        Uuid::new_v4().simple().to_string()[..8].to_string()
    }
}

/// Deterministic, counter-based identifiers for reproducible output.
#[derive(Debug, Clone, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialIds {
    fn next_guid(&mut self) -> String {
        self.next += 1;
        format!("00000000-0000-4000-8000-{:012x}", self.next)
    }

    fn file_tag(&mut self) -> String {
        format!("{:08x}", self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_ids_have_expected_shape() {
        let mut ids = RandomIds;
        let guid = ids.next_guid();
        assert!(Uuid::parse_str(&guid).is_ok());
        let tag = ids.file_tag();
        assert_eq!(tag.len(), 8);
        assert!(tag.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn sequential_ids_repeat_across_instances() {
        let mut a = SequentialIds::new();
        let mut b = SequentialIds::new();
        assert_eq!(a.next_guid(), b.next_guid());
        assert_eq!(a.next_guid(), "00000000-0000-4000-8000-000000000002");
        assert!(Uuid::parse_str(&a.next_guid()).is_ok());
    }
}
