use super::error::RecordError;
use super::mapping::Mapping;
use super::record_builder::RecordBuilder;
use indexmap::IndexMap;
use std::{
    fmt::{self, Display, Formatter},
    slice,
    sync::Arc,
};

/// One row of field values with its position in the source stream.
///
/// Records are immutable. A header mapping, if any, is shared with the header
/// row that produced it and is never modified through the record.
///
/// A record whose mapping size differs from its value count is inconsistent.
/// Such records are still valid values; only name lookups that resolve past
/// the last value fail.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    values: Arc<[String]>,
    mapping: Option<Arc<Mapping>>,
    comment: Option<String>,
    record_number: u64,
    character_position: u64,
}

impl Record {
    pub fn new(
        values: impl Into<Option<Vec<String>>>,
        mapping: impl Into<Option<Arc<Mapping>>>,
        comment: impl Into<Option<String>>,
        record_number: u64,
        character_position: u64,
    ) -> Self {
        RecordBuilder::new()
            .set_values(values)
            .set_mapping(mapping)
            .set_comment(comment)
            .set_record_number(record_number)
            .set_character_position(character_position)
            .build()
    }

    pub(crate) fn from_parts(
        values: Arc<[String]>,
        mapping: Option<Arc<Mapping>>,
        comment: Option<String>,
        record_number: u64,
        character_position: u64,
    ) -> Self {
        Self {
            values,
            mapping,
            comment,
            record_number,
            character_position,
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn mapping(&self) -> Option<&Mapping> {
        self.mapping.as_deref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    pub fn record_number(&self) -> u64 {
        self.record_number
    }

    pub fn character_position(&self) -> u64 {
        self.character_position
    }

    pub fn size(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.values.iter()
    }

    pub fn get_by_index(&self, index: usize) -> Result<&str, RecordError> {
        self.values
            .get(index)
            .map(String::as_str)
            .ok_or(RecordError::IndexOutOfRange {
                index,
                size: self.size(),
            })
    }

    /// Returns a value by its column name.
    ///
    /// Fails with [`RecordError::InconsistentRecord`] if the name is mapped to
    /// an index past the last value.
    pub fn get_by_name(&self, name: &str) -> Result<&str, RecordError> {
        let mapping = self.mapping.as_ref().ok_or(RecordError::MissingMapping)?;
        let index = *mapping
            .get(name)
            .ok_or_else(|| RecordError::UnknownName {
                name: name.into(),
                expected: mapping.keys().cloned().collect(),
            })?;

        self.values.get(index).map(String::as_str).ok_or_else(|| {
            tracing::debug!(
                name,
                index,
                size = self.size(),
                record_number = self.record_number,
                "inconsistent record"
            );

            RecordError::InconsistentRecord {
                name: name.into(),
                index,
                size: self.size(),
            }
        })
    }

    /// Returns a value by a column key that displays as its header name,
    /// such as a field-less enum.
    pub fn get_by_column(&self, column: impl Display) -> Result<&str, RecordError> {
        self.get_by_name(&column.to_string())
    }

    pub fn is_mapped(&self, name: &str) -> bool {
        self.mapping
            .as_ref()
            .map(|mapping| mapping.contains_key(name))
            .unwrap_or(false)
    }

    /// Checks if a column is mapped and has a value.
    pub fn is_set(&self, name: &str) -> bool {
        self.mapping
            .as_ref()
            .and_then(|mapping| mapping.get(name))
            .map(|&index| index < self.size())
            .unwrap_or(false)
    }

    /// Checks if the record size matches the header size.
    ///
    /// Some programs export files that fail this check but are still parsable.
    pub fn is_consistent(&self) -> bool {
        self.mapping
            .as_ref()
            .map(|mapping| mapping.len() == self.size())
            .unwrap_or(true)
    }

    /// Puts mapped values into a map in header order, skipping columns past the
    /// last value.
    pub fn put_in<M: Extend<(String, String)>>(&self, mut map: M) -> M {
        if let Some(mapping) = &self.mapping {
            map.extend(mapping.iter().filter_map(|(name, &index)| {
                if let Some(value) = self.values.get(index) {
                    Some((name.clone(), value.clone()))
                } else {
                    tracing::trace!(name = name.as_str(), index, "skipped unset column");
                    None
                }
            }));
        }

        map
    }

    /// Copies mapped values into a new map independent of this record.
    pub fn to_ordered_map(&self) -> IndexMap<String, String> {
        self.put_in(IndexMap::with_capacity(self.size()))
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Display for Record {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(
            formatter,
            "Record [comment={:?}, mapping={:?}, record_number={}, values={:?}]",
            self.comment,
            self.mapping(),
            self.record_number,
            self.values
        )
    }
}
