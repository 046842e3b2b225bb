// Copyright (C) 2020-2026  The Blockhouse Technology Limited (TBTL).
//
// This program is free software: you can redistribute it and/or modify it
// under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or (at your
// option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public
// License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Implementation of SD-JWT combined serialization construction and parsing.

use bherror::Error;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FormatError;

pub(crate) const COMBINED_DELIMITER: &str = "~";

/// A struct representing an SD-JWT in the combined format.
///
/// A combined serialization is composed of the following:
/// - an Issuer-signed JWT,
/// - zero or more Disclosures,
/// - an optional Key Binding JWT (KB-JWT).
///
/// Instances are created either from caller-supplied parts via
/// [`CombinedSdJwt::new`], or by parsing a combined serialization via
/// [`CombinedSdJwt::parse`]. An instance is immutable once built and is
/// therefore safe to share freely between threads.
///
/// The combined serialization of the instance is computed at construction
/// time and returned by [`CombinedSdJwt::as_str`] without further work.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct CombinedSdJwt {
    credential_jwt: String,
    disclosures: Vec<String>,
    binding_jwt: String,
    serialized: String,
}

impl CombinedSdJwt {
    /// Create a new instance of a [`CombinedSdJwt`] from the provided parts.
    ///
    /// Empty Disclosures are dropped, preserving the relative order of the
    /// remaining ones. An empty `binding_jwt` denotes that no Key Binding
    /// JWT is present, in which case the combined serialization does not end
    /// with the `~` (tilde) character.
    ///
    /// # Note
    /// This function never fails. No checks are carried out on any of the
    /// provided parts, e.g. there is not a check on the `credential_jwt`
    /// signature, nor is an empty `credential_jwt` rejected.
    ///
    /// # Examples
    ///
    /// A combined serialization without Disclosures and without a KB-JWT:\
    /// `<Issuer-signed JWT>`.
    ///
    /// A combined serialization with Disclosures and a KB-JWT:\
    /// `<Issuer-signed JWT>~<Disclosure 1>~<Disclosure N>~<KB-JWT>`.
    pub fn new(credential_jwt: String, disclosures: Vec<String>, binding_jwt: String) -> Self {
        let disclosures: Vec<String> = disclosures
            .into_iter()
            .filter(|disclosure| !disclosure.is_empty())
            .collect();

        let serialized = serialize(&credential_jwt, &disclosures, &binding_jwt);

        Self {
            credential_jwt,
            disclosures,
            binding_jwt,
            serialized,
        }
    }

    /// Parse a [`CombinedSdJwt`] from the provided combined serialization.
    ///
    /// An empty input denotes the deliberate absence of an SD-JWT and parses
    /// to `Ok(None)` rather than an error.
    ///
    /// Otherwise, the input is split on every `~` (tilde character) and must
    /// contain at least two elements, i.e. at least one `~`. Every element
    /// before the last one must be non-empty. The input ending with a `~`
    /// denotes that no Key Binding JWT is present; this is decided by the
    /// final character of the raw input, not by the split elements.
    ///
    /// # Note
    /// No checks are carried out on any of the parsed parts, e.g. there is
    /// not a check on the `credential_jwt` signature.
    ///
    /// # Examples
    ///
    /// A combined serialization without a KB-JWT:\
    /// `<Issuer-signed JWT>~<Disclosure 1>~<Disclosure N>~`.
    ///
    /// A combined serialization with a KB-JWT:\
    /// `<Issuer-signed JWT>~<Disclosure 1>~<Disclosure N>~<KB-JWT>`.
    pub fn parse(input: &str) -> crate::Result<Option<Self>, FormatError> {
        if input.is_empty() {
            tracing::debug!("empty combined serialization, no SD-JWT present");
            return Ok(None);
        }

        let elements: Vec<&str> = input.split(COMBINED_DELIMITER).collect();
        let last_index = elements.len() - 1;

        // Only the very last element may be empty.
        for (index, element) in elements[..last_index].iter().enumerate() {
            if element.is_empty() {
                return Err(Error::root(FormatError::EmptyElement(index)));
            }
        }

        if elements.len() < 2 {
            return Err(Error::root(FormatError::InvalidElementCount(
                elements.len(),
            )));
        }

        let credential_jwt = elements[0];

        let binding_jwt = if input.ends_with(COMBINED_DELIMITER) {
            ""
        } else {
            elements[last_index]
        };

        let disclosures = elements[1..last_index]
            .iter()
            .map(|&disclosure| disclosure.to_owned())
            .collect();

        Ok(Some(Self::new(
            credential_jwt.to_owned(),
            disclosures,
            binding_jwt.to_owned(),
        )))
    }

    /// Returns the Issuer-signed JWT.
    pub fn credential_jwt(&self) -> &str {
        &self.credential_jwt
    }

    /// Returns the Disclosures, in the order in which they were provided or
    /// encountered.
    pub fn disclosures(&self) -> &[String] {
        &self.disclosures
    }

    /// Returns the Key Binding JWT, or an empty string when it is absent.
    pub fn binding_jwt(&self) -> &str {
        &self.binding_jwt
    }

    /// Returns the combined serialization of the instance.
    pub fn as_str(&self) -> &str {
        &self.serialized
    }

    /// Consumes the instance, returning the Issuer-signed JWT, the
    /// Disclosures and the Key Binding JWT.
    pub fn into_parts(self) -> (String, Vec<String>, String) {
        (self.credential_jwt, self.disclosures, self.binding_jwt)
    }
}

impl std::fmt::Display for CombinedSdJwt {
    /// Writes the combined serialization of the instance.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.serialized)
    }
}

impl Serialize for CombinedSdJwt {
    /// Serializes the instance as its combined serialization string.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.serialized)
    }
}

impl<'de> Deserialize<'de> for CombinedSdJwt {
    /// Deserializes an instance from a combined serialization string.
    ///
    /// Unlike [`CombinedSdJwt::parse`], an empty string is rejected here; an
    /// absent SD-JWT in a JSON document is expressed by `null` or by leaving
    /// the field out, not by an empty string.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let serialized = String::deserialize(deserializer)?;

        Self::parse(&serialized)
            .map_err(de::Error::custom)?
            .ok_or_else(|| de::Error::custom("combined serialization is empty"))
    }
}

fn serialize(credential_jwt: &str, disclosures: &[String], binding_jwt: &str) -> String {
    let mut serialized = credential_jwt.to_owned();

    for disclosure in disclosures {
        serialized.push_str(COMBINED_DELIMITER);
        serialized.push_str(disclosure);
    }

    if !binding_jwt.is_empty() {
        serialized.push_str(COMBINED_DELIMITER);
        serialized.push_str(binding_jwt);
    }

    serialized
}
