//! Parcels: named, versioned groups of declarations.
//!
//! A parcel's nickname supplies the symbol prefixes that emitters put in
//! front of generated identifiers.

use std::cmp::Ordering;
use std::fmt;

/// Error constructing a parcel or version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParcelError {
    /// Names must be non-empty and purely alphabetic.
    InvalidName(String),
    /// Nicknames follow the same rule as names.
    InvalidNickname(String),
    /// Versions look like `v1`, `v1.2`, `v1.2.3`.
    InvalidVersion(String),
}

impl fmt::Display for ParcelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParcelError::InvalidName(s) => write!(f, "invalid parcel name '{s}'"),
            ParcelError::InvalidNickname(s) => write!(f, "invalid parcel nickname '{s}'"),
            ParcelError::InvalidVersion(s) => write!(f, "invalid version '{s}'"),
        }
    }
}

impl std::error::Error for ParcelError {}

/// A dotted version number written with a leading `v`.
///
/// Missing trailing components compare as zero, so `v1.2 == v1.2.0`.
#[derive(Clone, Debug)]
pub struct Version {
    numbers: Vec<u32>,
}

impl Version {
    /// Parse `v<int>(.<int>)*`.
    pub fn parse(text: &str) -> Result<Self, ParcelError> {
        let invalid = || ParcelError::InvalidVersion(text.to_owned());
        let digits = text.strip_prefix('v').ok_or_else(invalid)?;
        let numbers = digits
            .split('.')
            .map(|part| {
                if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                part.parse::<u32>().map_err(|_| invalid())
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Version { numbers })
    }

    /// The default version, `v0`.
    pub fn zero() -> Self {
        Version { numbers: vec![0] }
    }

    pub fn major(&self) -> u32 {
        self.numbers.first().copied().unwrap_or(0)
    }

    fn component(&self, i: usize) -> u32 {
        self.numbers.get(i).copied().unwrap_or(0)
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.numbers.len().max(other.numbers.len());
        (0..len)
            .map(|i| self.component(i).cmp(&other.component(i)))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("v")?;
        for (i, n) in self.numbers.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{n}")?;
        }
        Ok(())
    }
}

/// A prerequisite parcel with a minimum version.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prereq {
    pub name: String,
    pub version: Version,
}

impl Prereq {
    pub fn new(name: impl Into<String>, version: Option<Version>) -> Self {
        Prereq {
            name: name.into(),
            version: version.unwrap_or_default(),
        }
    }
}

/// A parcel definition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parcel {
    name: String,
    nickname: String,
    version: Version,
    prereqs: Vec<Prereq>,
    /// Defined by an include directory rather than the sources being compiled.
    included: bool,
}

fn is_valid_name(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic())
}

impl Parcel {
    /// Create a parcel; the nickname defaults to the name and the version
    /// to `v0`.
    pub fn new(
        name: &str,
        nickname: Option<&str>,
        version: Option<Version>,
        included: bool,
    ) -> Result<Self, ParcelError> {
        if !is_valid_name(name) {
            return Err(ParcelError::InvalidName(name.to_owned()));
        }
        let nickname = match nickname {
            Some(nick) if !is_valid_name(nick) => {
                return Err(ParcelError::InvalidNickname(nick.to_owned()))
            }
            Some(nick) => nick.to_owned(),
            None => name.to_owned(),
        };
        Ok(Parcel {
            name: name.to_owned(),
            nickname,
            version: version.unwrap_or_default(),
            prereqs: Vec::new(),
            included,
        })
    }

    #[must_use]
    pub fn with_prereq(mut self, prereq: Prereq) -> Self {
        self.prereqs.push(prereq);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn version(&self) -> &Version {
        &self.version
    }

    pub fn prereqs(&self) -> &[Prereq] {
        &self.prereqs
    }

    pub fn is_included(&self) -> bool {
        self.included
    }

    /// `Crust_` for nickname `Crust`.
    pub fn prefix_capitalized(&self) -> String {
        format!("{}_", self.nickname)
    }

    /// `crust_` for nickname `Crust`.
    pub fn prefix(&self) -> String {
        self.prefix_capitalized().to_ascii_lowercase()
    }

    /// `CRUST_` for nickname `Crust`.
    pub fn prefix_upper(&self) -> String {
        self.prefix_capitalized().to_ascii_uppercase()
    }
}
