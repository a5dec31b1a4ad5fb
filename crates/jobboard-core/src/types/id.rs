//! Job identifier newtype.
//!
//! Identifiers have the form `CSJ-XXXXXXXX` where the suffix is eight
//! uppercase hexadecimal characters taken from a random UUID v4. With the
//! `sqlx` feature enabled, [`JobId`] encodes and decodes as PostgreSQL
//! `TEXT`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Prefix shared by every job identifier.
pub const JOB_ID_PREFIX: &str = "CSJ-";

/// Number of hexadecimal characters after the prefix.
pub const JOB_ID_SUFFIX_LEN: usize = 8;

/// Unique identifier for a job posting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JobId(String);

/// Returned when a string is not a well-formed job identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid job id '{0}': expected CSJ- followed by 8 uppercase hex characters")]
pub struct InvalidJobId(pub String);

impl JobId {
    /// Generate a fresh identifier from a random UUID.
    pub fn generate() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Derive an identifier from the first eight hex digits of `uuid`.
    pub fn from_uuid(uuid: Uuid) -> Self {
        let hex = uuid.simple().to_string();
        Self(format!(
            "{JOB_ID_PREFIX}{}",
            hex[..JOB_ID_SUFFIX_LEN].to_ascii_uppercase()
        ))
    }

    /// Wrap a stored identifier without checking its format.
    ///
    /// Rows written before the format was enforced may carry other shapes.
    pub fn from_stored(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Whether `value` matches `CSJ-` followed by eight uppercase hex digits.
    pub fn is_well_formed(value: &str) -> bool {
        match value.strip_prefix(JOB_ID_PREFIX) {
            Some(suffix) => {
                suffix.len() == JOB_ID_SUFFIX_LEN
                    && suffix
                        .bytes()
                        .all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b))
            }
            None => false,
        }
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for JobId {
    type Err = InvalidJobId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_well_formed(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidJobId(s.to_string()))
        }
    }
}

impl AsRef<str> for JobId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<JobId> for String {
    fn from(id: JobId) -> String {
        id.0
    }
}

#[cfg(feature = "sqlx")]
impl sqlx::Type<sqlx::Postgres> for JobId {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "sqlx")]
impl<'q> sqlx::Encode<'q, sqlx::Postgres> for JobId {
    fn encode_by_ref(
        &self,
        buf: &mut <sqlx::Postgres as sqlx::Database>::ArgumentBuffer<'q>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <String as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(feature = "sqlx")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for JobId {
    fn decode(
        value: <sqlx::Postgres as sqlx::Database>::ValueRef<'r>,
    ) -> Result<Self, sqlx::error::BoxDynError> {
        <String as sqlx::Decode<'r, sqlx::Postgres>>::decode(value).map(Self)
    }
}
