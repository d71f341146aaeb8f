//! Variant records and table-driven enum lookups.

use std::any::type_name;
use std::fmt;

use cs_core::errors::{Error, Result};
use cs_text::ConvertExt;

// ── DataValue ─────────────────────────────────────────────────────────────────

/// A typed value attached to a variant under a name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DataValue {
    /// Text.
    Str(&'static str),
    /// Integer.
    Int(i64),
    /// Floating point.
    Float(f64),
    /// Boolean.
    Bool(bool),
}

impl DataValue {
    fn kind(&self) -> &'static str {
        match self {
            DataValue::Str(_) => "string",
            DataValue::Int(_) => "integer",
            DataValue::Float(_) => "float",
            DataValue::Bool(_) => "bool",
        }
    }
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Str(s) => f.write_str(s),
            DataValue::Int(i) => write!(f, "{i}"),
            DataValue::Float(x) => write!(f, "{x}"),
            DataValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

macro_rules! impl_try_from_data_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {$(
        impl TryFrom<DataValue> for $ty {
            type Error = Error;

            fn try_from(value: DataValue) -> Result<Self> {
                match value {
                    DataValue::$variant(v) => Ok(v),
                    other => Err(Error::InvalidArgument(format!(
                        "data value {other} is a {}, not {}",
                        other.kind(),
                        stringify!($ty),
                    ))),
                }
            }
        }
    )*};
}

impl_try_from_data_value!(&'static str => Str, i64 => Int, f64 => Float, bool => Bool);

// ── VariantInfo ───────────────────────────────────────────────────────────────

/// Metadata for one enum variant, built in a `const` context.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VariantInfo {
    /// The variant's identifier.
    pub name: &'static str,
    /// The variant's numeric value (flag bits for flag enums).
    pub value: i64,
    /// Explicit display order.
    pub order: Option<i32>,
    /// Explicit human-readable description.
    pub description: Option<&'static str>,
    /// Alternative name accepted by [`EnumMetadata::from_alias`].
    pub alias: Option<&'static str>,
    /// Describe with the split words' original capitals instead of sentence
    /// case.
    pub camel_case: bool,
    /// Named data values.
    pub data: &'static [(&'static str, DataValue)],
}

impl VariantInfo {
    /// A record with only a name and value.
    pub const fn new(name: &'static str, value: i64) -> Self {
        Self {
            name,
            value,
            order: None,
            description: None,
            alias: None,
            camel_case: false,
            data: &[],
        }
    }

    /// Set the display order.
    pub const fn with_order(self, order: i32) -> Self {
        Self {
            order: Some(order),
            ..self
        }
    }

    /// Set the description.
    pub const fn with_description(self, description: &'static str) -> Self {
        Self {
            description: Some(description),
            ..self
        }
    }

    /// Set the alias.
    pub const fn with_alias(self, alias: &'static str) -> Self {
        Self {
            alias: Some(alias),
            ..self
        }
    }

    /// Keep capitals when deriving the description from the name.
    pub const fn camel_case(self) -> Self {
        Self {
            camel_case: true,
            ..self
        }
    }

    /// Attach named data.
    pub const fn with_data(self, data: &'static [(&'static str, DataValue)]) -> Self {
        Self { data, ..self }
    }
}

// ── EnumMetadata ──────────────────────────────────────────────────────────────

/// A fieldless enum whose variants are described by a static table.
///
/// Implementors supply [`VARIANTS`](Self::VARIANTS) in declaration order;
/// every other method is provided.  A variant missing from the table has no
/// metadata: its name and value string are empty and it sorts last.
pub trait EnumMetadata: Copy + PartialEq + 'static {
    /// Every variant with its metadata, in declaration order.
    const VARIANTS: &'static [(Self, VariantInfo)];

    /// All variants in declaration order.
    fn values() -> impl Iterator<Item = Self> {
        Self::VARIANTS.iter().map(|(variant, _)| *variant)
    }

    /// This variant's metadata record.
    fn info(self) -> Option<&'static VariantInfo> {
        Self::VARIANTS
            .iter()
            .find(|(variant, _)| *variant == self)
            .map(|(_, info)| info)
    }

    /// The variant's identifier.
    fn name(self) -> &'static str {
        self.info().map_or("", |info| info.name)
    }

    /// The numeric value as a decimal string.
    fn to_value_string(self) -> String {
        self.info()
            .map_or_else(String::new, |info| info.value.to_string())
    }

    /// Display order.
    ///
    /// An explicit order wins.  Unordered variants sort after every ordered
    /// one, keeping declaration order: the last unordered variant gets
    /// `i32::MAX - 1`, the one before it `i32::MAX - 2`, and so on.  A variant
    /// missing from the table gets `i32::MAX`.
    fn order(self) -> i32 {
        let Some(index) = Self::VARIANTS.iter().position(|(v, _)| *v == self) else {
            return i32::MAX;
        };
        let (_, info) = &Self::VARIANTS[index];
        info.order.unwrap_or_else(|| {
            let unordered_after = Self::VARIANTS[index + 1..]
                .iter()
                .filter(|(_, later)| later.order.is_none())
                .count();
            i32::MAX - 1 - i32::try_from(unordered_after).unwrap_or(i32::MAX - 1)
        })
    }

    /// The data value stored under `name`.
    fn data(self, name: &str) -> Option<DataValue> {
        self.info()?
            .data
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| *value)
    }

    /// The data value stored under `name`, converted to `T`.
    ///
    /// # Errors
    /// [`Error::NotFound`] when there is no such entry, and
    /// [`Error::InvalidArgument`] when it holds a different kind of value.
    fn data_as<T>(self, name: &str) -> Result<T>
    where
        T: TryFrom<DataValue, Error = Error>,
    {
        let value = self.data(name).ok_or_else(|| Error::NotFound {
            kind: "enum data",
            name: format!("{}.{name}", self.name()),
        })?;
        T::try_from(value)
    }

    /// Human-readable description: the explicit one if set, otherwise the
    /// name split at capitals, in sentence case unless the variant is marked
    /// camel case.
    fn description(self) -> String {
        match self.info() {
            Some(VariantInfo {
                description: Some(text),
                ..
            }) => (*text).to_string(),
            Some(info) if info.camel_case => info.name.split_by_uppercase(),
            Some(info) => info.name.to_sentence_case(true),
            None => String::new(),
        }
    }

    /// Parse a variant from its name or its numeric value.  Surrounding
    /// whitespace is ignored; names are case-sensitive.
    ///
    /// # Errors
    /// [`Error::Parse`] when nothing matches.
    fn parse_name(text: &str) -> Result<Self> {
        let key = text.trim();
        let numeric = key.parse::<i64>().ok();
        Self::VARIANTS
            .iter()
            .find(|(_, info)| info.name == key || Some(info.value) == numeric)
            .map(|(variant, _)| *variant)
            .ok_or_else(|| Error::Parse {
                value: text.to_string(),
                target: type_name::<Self>(),
            })
    }

    /// Return `true` if `text` parses to this variant.
    fn matches(self, text: &str) -> bool {
        Self::parse_name(text).is_ok_and(|parsed| parsed == self)
    }

    /// The variant carrying `alias`.
    ///
    /// # Errors
    /// [`Error::NotFound`] when no variant has that alias.
    fn from_alias(alias: &str) -> Result<Self> {
        Self::VARIANTS
            .iter()
            .find(|(_, info)| info.alias == Some(alias))
            .map(|(variant, _)| *variant)
            .ok_or_else(|| Error::NotFound {
                kind: type_name::<Self>(),
                name: alias.to_string(),
            })
    }
}

/// Stable-sort `items` by the display order of the enum each one carries.
pub fn sort_by_order<T, E, F>(items: &mut [T], key: F)
where
    E: EnumMetadata,
    F: Fn(&T) -> E,
{
    items.sort_by_key(|item| key(item).order());
}
