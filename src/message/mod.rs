// Copyright 2022 Matthew Ingwersen.
//
// Licensed under the Apache License, Version 2.0 (the "License"); you
// may not use this file except in compliance with the License. You may
// obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or
// implied. See the License for the specific language governing
// permissions and limitations under the License.

//! Shallow traversal of on-the-wire DNS messages.
//!
//! Nothing here decodes a message. The functions in this module only
//! know enough about the format of RFC 1035 § 4 to move a cursor past
//! each field, which is all that is needed to find where the TTLs are.

mod constants;
mod error;
mod name;
pub mod reader;
mod walker;
pub use constants::TTL_LEN;
pub use error::{Error, Field, Result};
pub use name::skip_name;
pub use walker::{walk, Counts};
