// SPDX-License-Identifier: MPL-2.0
//! Authentication session state.
//!
//! - [`session`] - the persisted [`SessionState`] (CBOR, data dir)
//! - [`store`] - the [`AuthStore`] orchestrating auth calls and persistence

mod session;
mod store;

pub use session::SessionState;
pub use store::AuthStore;
