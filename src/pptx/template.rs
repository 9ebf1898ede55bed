//! Static package parts.
//!
//! A minimal but valid presentation needs a slide master, a blank layout, a
//! notes master, a theme, and the presentation property parts. These never
//! vary between generated decks, so they are embedded at compile time.

/// Theme part (/ppt/theme/theme1.xml)
pub const THEME_XML: &str = include_str!("../../resources/theme1.xml");

/// Slide master part (/ppt/slideMasters/slideMaster1.xml)
pub const SLIDE_MASTER_XML: &str = include_str!("../../resources/slideMaster1.xml");

/// Blank slide layout part (/ppt/slideLayouts/slideLayout1.xml)
pub const SLIDE_LAYOUT_XML: &str = include_str!("../../resources/slideLayout1.xml");

/// Notes master part (/ppt/notesMasters/notesMaster1.xml)
pub const NOTES_MASTER_XML: &str = include_str!("../../resources/notesMaster1.xml");

/// Presentation properties part (/ppt/presProps.xml)
pub const PRES_PROPS_XML: &str = include_str!("../../resources/presProps.xml");

/// View properties part (/ppt/viewProps.xml)
pub const VIEW_PROPS_XML: &str = include_str!("../../resources/viewProps.xml");

/// Table styles part (/ppt/tableStyles.xml)
pub const TABLE_STYLES_XML: &str = include_str!("../../resources/tableStyles.xml");
