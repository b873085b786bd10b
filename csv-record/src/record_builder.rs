use super::mapping::Mapping;
use super::record::Record;
use once_cell::sync::Lazy;
use std::sync::Arc;

static EMPTY_VALUES: Lazy<Arc<[String]>> = Lazy::new(|| Vec::<String>::new().into());

#[derive(Clone, Debug, Default)]
pub struct RecordBuilder {
    values: Option<Vec<String>>,
    mapping: Option<Arc<Mapping>>,
    comment: Option<String>,
    record_number: u64,
    character_position: u64,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_values(self, values: impl Into<Option<Vec<String>>>) -> Self {
        Self {
            values: values.into(),
            ..self
        }
    }

    pub fn set_mapping(self, mapping: impl Into<Option<Arc<Mapping>>>) -> Self {
        Self {
            mapping: mapping.into(),
            ..self
        }
    }

    pub fn set_comment(self, comment: impl Into<Option<String>>) -> Self {
        Self {
            comment: comment.into(),
            ..self
        }
    }

    pub fn set_record_number(self, record_number: u64) -> Self {
        Self {
            record_number,
            ..self
        }
    }

    pub fn set_character_position(self, character_position: u64) -> Self {
        Self {
            character_position,
            ..self
        }
    }

    pub fn build(self) -> Record {
        Record::from_parts(
            match self.values {
                Some(values) if !values.is_empty() => values.into(),
                _ => EMPTY_VALUES.clone(),
            },
            self.mapping,
            self.comment,
            self.record_number,
            self.character_position,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn build_with_defaults() {
        let record = RecordBuilder::new().build();

        assert_eq!(record.size(), 0);
        assert_eq!(record.mapping(), None);
        assert_eq!(record.comment(), None);
        assert_eq!(record.record_number(), 0);
        assert_eq!(record.character_position(), 0);
    }

    #[test]
    fn normalize_absent_values() {
        let record = RecordBuilder::new().set_values(None).build();

        assert_eq!(record.values(), &[] as &[String]);
        assert!(record.is_consistent());
    }

    #[test]
    fn build_with_all_fields() {
        let mapping = Arc::new(Mapping::from_iter([("x".to_string(), 0)]));
        let record = RecordBuilder::new()
            .set_character_position(42)
            .set_comment("note".to_string())
            .set_mapping(mapping.clone())
            .set_record_number(7)
            .set_values(vec!["a".to_string()])
            .build();

        assert_eq!(record.values(), &["a".to_string()]);
        assert_eq!(record.mapping(), Some(mapping.as_ref()));
        assert_eq!(record.comment(), Some("note"));
        assert_eq!(record.record_number(), 7);
        assert_eq!(record.character_position(), 42);
    }

    #[test]
    fn share_mapping_with_owner() {
        let mapping = Arc::new(Mapping::from_iter([("x".to_string(), 0)]));
        let record = RecordBuilder::new().set_mapping(mapping.clone()).build();

        assert!(std::ptr::eq(record.mapping().unwrap(), mapping.as_ref()));
    }

    #[test]
    fn overwrite_field() {
        let record = RecordBuilder::new()
            .set_comment("first".to_string())
            .set_comment(None)
            .build();

        assert_eq!(record.comment(), None);
    }
}
