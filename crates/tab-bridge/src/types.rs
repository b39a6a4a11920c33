//! Data types for tab handling.

use page_protocol_types::TabId;
use url::Url;

/// A tab as the host browser reports it after creation.
///
/// Unlike [`page_protocol_types::TabReference`] this is not serializable and
/// never crosses a context boundary; it is what a [`crate::TabHost`] hands
/// back and what [`crate::build_tab_reference`] converts from.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeTab {
    pub id: TabId,
    pub window_id: Option<i64>,
    pub url: Url,
}
