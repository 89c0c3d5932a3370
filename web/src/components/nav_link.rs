//! Single navigation link

use leptos::prelude::*;
use leptos_router::components::A;
use shared::{class, LinkSpec};

/// Link to `to` labelled `name`. Missing or blank props fall back to
/// `"default"` and `"/"`.
#[component]
pub fn NavLink(
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] to: Option<String>,
) -> impl IntoView {
    let link = LinkSpec::new(name, to);
    let label = link.name().to_string();

    view! {
        <A href=link.target().to_string() attr:class=class::NAV_LINK>
            {label}
        </A>
    }
}
