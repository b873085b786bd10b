use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RecordError {
    MissingMapping,
    UnknownName {
        name: String,
        expected: Vec<String>,
    },
    InconsistentRecord {
        name: String,
        index: usize,
        size: usize,
    },
    IndexOutOfRange {
        index: usize,
        size: usize,
    },
}

impl Display for RecordError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::MissingMapping => write!(
                formatter,
                "no header mapping was specified, record values can't be accessed by name"
            ),
            Self::UnknownName { name, expected } => write!(
                formatter,
                "mapping for {} not found, expected one of {:?}",
                name, expected
            ),
            Self::InconsistentRecord { name, index, size } => write!(
                formatter,
                "index for header '{}' is {} but record only has {} values",
                name, index, size
            ),
            Self::IndexOutOfRange { index, size } => write!(
                formatter,
                "index {} is out of range for record with {} values",
                index, size
            ),
        }
    }
}

impl Error for RecordError {}
