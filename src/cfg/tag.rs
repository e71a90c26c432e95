use crate::cfg::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [InputTag] names the upstream producer of a collection,
/// described as `label[:instance[:process]]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct InputTag {
    /// Producer (module) label, always defined
    pub label: String,
    /// Product instance name, may be empty
    pub instance: String,
    /// Process name, may be empty
    pub process: String,
}

impl InputTag {
    /// Builds a new [InputTag] from a producer label only.
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            ..Default::default()
        }
    }

    /// Copies and returns [InputTag] with desired product instance name.
    pub fn with_instance(&self, instance: &str) -> Self {
        let mut s = self.clone();
        s.instance = instance.to_string();
        s
    }

    /// Copies and returns [InputTag] with desired process name.
    pub fn with_process(&self, process: &str) -> Self {
        let mut s = self.clone();
        s.process = process.to_string();
        s
    }
}

impl std::str::FromStr for InputTag {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let fields = trimmed.split(':').map(str::trim).collect::<Vec<_>>();

        if fields.len() > 3 {
            return Err(Error::InvalidInputTag(trimmed.to_string()));
        }

        let label = fields[0];
        if label.is_empty() {
            return Err(Error::InvalidInputTag(trimmed.to_string()));
        }

        Ok(Self {
            label: label.to_string(),
            instance: fields.get(1).copied().unwrap_or_default().to_string(),
            process: fields.get(2).copied().unwrap_or_default().to_string(),
        })
    }
}

impl std::fmt::Display for InputTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)?;
        if !self.instance.is_empty() || !self.process.is_empty() {
            write!(f, ":{}", self.instance)?;
        }
        if !self.process.is_empty() {
            write!(f, ":{}", self.process)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for InputTag {
    type Error = Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<InputTag> for String {
    fn from(tag: InputTag) -> Self {
        tag.to_string()
    }
}
