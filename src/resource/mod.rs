//! Resource records served by the console's REST collections.
//!
//! Every record shown as a card implements [`Resource`], which names its
//! collection and exposes the text used to estimate card height.

mod account;
mod vcenter;
mod vdi;

pub use account::Account;
pub use vcenter::{VCenter, VCenterDraft};
pub use vdi::{Vdi, VdiDraft};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// A record type backed by one REST collection.
pub trait Resource:
    Clone + fmt::Debug + Send + Sync + Serialize + DeserializeOwned + 'static
{
    /// Short kind label used in notifications ("VDI").
    const KIND: &'static str;
    /// Human-readable name used in notifications ("Virtual Center").
    const TITLE: &'static str;
    /// Collection segment under the API root ("vdis").
    const COLLECTION: &'static str;

    /// Payload posted to create a record.
    type Draft: Serialize + fmt::Debug + Send;

    /// Server-assigned identifier, absent until the record is persisted.
    fn id(&self) -> Option<u64>;

    /// Text whose length approximates the rendered card height.
    fn weight_text(&self) -> &str;

    /// Local record shown while a create request is in flight.
    fn from_draft(draft: &Self::Draft, author: Option<&Account>) -> Self;
}
