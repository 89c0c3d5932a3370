//! ==============================================================================
//! lib.rs - shared render contract for the deeplink header
//! ==============================================================================
//!
//! purpose:
//!     describes the header as plain data: the links it shows, the labels on
//!     its buttons, and the stylesheet class names it attaches to. the web
//!     crate renders exactly what is described here.
//!
//! relationships:
//!     - used by: web (NavLink, HeaderBar)
//!
//! design rationale:
//!     keeping the tree as data means the defaults and ordering can be checked
//!     with plain native tests, without a browser or a router.
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};

/// product name shown in the logo link
pub const PRODUCT_NAME: &str = "DeepLink";

/// target used when a link is given no path
pub const ROOT_PATH: &str = "/";

/// display text used when a link is given no name
pub const DEFAULT_LINK_NAME: &str = "default";

// ==============================================================================
// stylesheet class names
// ==============================================================================

/// class names the stylesheet keys on. the rules themselves live in style.css.
pub mod class {
    pub const HEADER: &str = "header";
    pub const LOGO: &str = "header-logo";
    pub const LOGO_LINK: &str = "header-logo__link";
    pub const NAV: &str = "header-nav";
    pub const NAV_LIST: &str = "header-nav__list";
    pub const NAV_ITEM: &str = "header-nav__item";
    pub const NAV_LINK: &str = "header__link";
    pub const POST: &str = "header-post";
    pub const POST_BUTTON: &str = "header-post__button";
    pub const USER: &str = "header-user";
    pub const USER_BUTTON: &str = "header-user__button";
    pub const USER_FIELD: &str = "button-paragraph";

    /// every class name, in render order
    pub const ALL: [&str; 12] = [
        HEADER,
        LOGO,
        LOGO_LINK,
        NAV,
        NAV_LIST,
        NAV_ITEM,
        NAV_LINK,
        POST,
        POST_BUTTON,
        USER,
        USER_BUTTON,
        USER_FIELD,
    ];
}

// ==============================================================================
// link spec
// ==============================================================================

/// display name + target path for one navigable link
///
/// defaults are applied when the spec is built, so a constructed value always
/// has a non-empty name and target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawLinkSpec")]
pub struct LinkSpec {
    name: String,
    target: String,
}

impl LinkSpec {
    /// build a link, falling back to the defaults for missing or blank values
    pub fn new(name: Option<String>, target: Option<String>) -> Self {
        Self {
            name: non_blank(name).unwrap_or_else(|| DEFAULT_LINK_NAME.to_string()),
            target: non_blank(target).unwrap_or_else(|| ROOT_PATH.to_string()),
        }
    }

    /// link with the given name and the root target
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(Some(name.into()), None)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Default for LinkSpec {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// wire form of a link; passed through `LinkSpec::new` so defaults still apply
#[derive(Deserialize)]
struct RawLinkSpec {
    name: Option<String>,
    target: Option<String>,
}

impl From<RawLinkSpec> for LinkSpec {
    fn from(raw: RawLinkSpec) -> Self {
        Self::new(raw.name, raw.target)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

// ==============================================================================
// header layout
// ==============================================================================

/// the two placeholder fields inside the user button
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserBadge {
    pub username: String,
    pub tag: String,
}

impl Default for UserBadge {
    fn default() -> Self {
        Self {
            username: "Username".to_string(),
            tag: "Tag".to_string(),
        }
    }
}

/// everything the header bar renders, in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderLayout {
    /// logo link, always to the root path
    pub logo: LinkSpec,
    /// nav list entries
    pub nav: Vec<LinkSpec>,
    /// text on the post button
    pub post_label: String,
    pub user: UserBadge,
}

/// nav entries in display order
pub const NAV_ENTRIES: [&str; 4] = ["Home", "Notifications", "Messages", "Profile"];

impl Default for HeaderLayout {
    fn default() -> Self {
        Self {
            logo: LinkSpec::new(Some(PRODUCT_NAME.to_string()), Some(ROOT_PATH.to_string())),
            // every entry uses the root target for now
            nav: NAV_ENTRIES.iter().map(|name| LinkSpec::named(*name)).collect(),
            post_label: "Post".to_string(),
            user: UserBadge::default(),
        }
    }
}

impl HeaderLayout {
    /// labels of the nav entries, in order
    pub fn nav_names(&self) -> Vec<&str> {
        self.nav.iter().map(LinkSpec::name).collect()
    }

    /// number of buttons in the bar (post + user)
    pub fn button_count(&self) -> usize {
        2
    }
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_link_keeps_given_values() {
        for (name, target) in [("Home", "/"), ("Messages", "/messages"), ("a b", "/x?y=1")] {
            let link = LinkSpec::new(Some(name.to_string()), Some(target.to_string()));
            assert_eq!(link.name(), name);
            assert_eq!(link.target(), target);
        }
    }

    #[test]
    fn test_link_defaults_when_absent() {
        let link = LinkSpec::new(None, None);
        assert_eq!(link.name(), "default");
        assert_eq!(link.target(), "/");
        assert_eq!(link, LinkSpec::default());
    }

    #[test]
    fn test_link_defaults_when_blank() {
        let link = LinkSpec::new(Some(String::new()), Some("   ".to_string()));
        assert_eq!(link.name(), DEFAULT_LINK_NAME);
        assert_eq!(link.target(), ROOT_PATH);
    }

    #[test]
    fn test_deserialized_link_gets_defaults() {
        let link: LinkSpec = serde_json::from_str(r#"{"name":""}"#).unwrap();
        assert_eq!(link, LinkSpec::default());
    }

    #[test]
    fn test_named_link_targets_root() {
        let link = LinkSpec::named("Profile");
        assert_eq!(link.name(), "Profile");
        assert_eq!(link.target(), "/");
    }

    #[test]
    fn test_header_logo() {
        let layout = HeaderLayout::default();
        assert_eq!(layout.logo.name(), "DeepLink");
        assert_eq!(layout.logo.target(), "/");
    }

    #[test]
    fn test_header_nav_order() {
        let layout = HeaderLayout::default();
        assert_eq!(
            layout.nav_names(),
            vec!["Home", "Notifications", "Messages", "Profile"]
        );
        assert!(layout.nav.iter().all(|link| link.target() == ROOT_PATH));
    }

    #[test]
    fn test_header_buttons() {
        let layout = HeaderLayout::default();
        assert_eq!(layout.button_count(), 2);
        assert_eq!(layout.post_label, "Post");
        assert_eq!(layout.user.username, "Username");
        assert_eq!(layout.user.tag, "Tag");
    }

    #[test]
    fn test_header_is_deterministic() {
        assert_eq!(HeaderLayout::default(), HeaderLayout::default());
    }

    #[test]
    fn test_class_names_distinct() {
        let unique: HashSet<&str> = class::ALL.iter().copied().collect();
        assert_eq!(unique.len(), class::ALL.len());
        assert!(class::ALL.iter().all(|c| !c.is_empty()));
    }

    #[test]
    fn test_layout_serialization() {
        let json = serde_json::to_string(&HeaderLayout::default()).unwrap();
        assert!(json.contains("\"name\":\"Notifications\""));
        assert!(json.contains("\"post_label\":\"Post\""));

        let back: HeaderLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(back, HeaderLayout::default());
    }
}
