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

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! This crate implements the combined format serialization of Selective
//! Disclosure JSON Web Tokens, as introduced by the [Selective Disclosure
//! for JWTs (SD-JWT)][1] IETF draft.
//!
//! A combined serialization joins an Issuer-signed JWT, zero or more
//! Disclosures and an optional Key Binding JWT (KB-JWT) with the `~` (tilde)
//! character:
//!
//! ```text
//! <Issuer-signed JWT>~<Disclosure 1>~...~<Disclosure N>~<KB-JWT>
//! ```
//!
//! A trailing `~` with nothing after it denotes that no KB-JWT is present.
//!
//! The crate provides the structural (de)composition of the combined
//! serialization only, through the [`CombinedSdJwt`] type. All tokens are
//! treated as opaque strings: JWT signing, signature and disclosure-digest
//! verification, and any interpretation of claims belong to the surrounding
//! layers. In particular, token contents must not themselves contain the
//! `~` character; the codec neither escapes nor checks for this.
//!
//! [1]: <https://datatracker.ietf.org/doc/html/draft-ietf-oauth-selective-disclosure-jwt>
//!
//! # Example
//!
//! ```rust
//! use bh_sd_jwt_combined::CombinedSdJwt;
//!
//! let presentation =
//!     "eyJhbGciOiAiRVMyNTYifQ.eyJfc2QiOiBbXX0.c2ln~WyJzYWx0IiwgIlVTIl0~";
//!
//! let combined = CombinedSdJwt::parse(presentation).unwrap().unwrap();
//!
//! assert_eq!(combined.credential_jwt(), "eyJhbGciOiAiRVMyNTYifQ.eyJfc2QiOiBbXX0.c2ln");
//! assert_eq!(combined.disclosures(), ["WyJzYWx0IiwgIlVTIl0"]);
//! // the trailing `~` denotes an absent Key Binding JWT
//! assert!(combined.binding_jwt().is_empty());
//! ```

pub use combined::CombinedSdJwt;
pub use error::{FormatError, Result};

mod combined;
mod error;
