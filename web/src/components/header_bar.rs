//! Header bar component

use leptos::prelude::*;
use leptos_router::components::A;
use shared::{class, HeaderLayout, UserBadge};

use super::NavLink;

#[component]
pub fn HeaderBar() -> impl IntoView {
    let HeaderLayout {
        logo,
        nav,
        post_label,
        user: UserBadge { username, tag },
    } = HeaderLayout::default();

    view! {
        <header class=class::HEADER>
            <div class=class::LOGO>
                <A href=logo.target().to_string() attr:class=class::LOGO_LINK>
                    {logo.name().to_string()}
                </A>
            </div>

            <nav class=class::NAV>
                <ul class=class::NAV_LIST>
                    {nav
                        .into_iter()
                        .map(|link| {
                            view! {
                                <li class=class::NAV_ITEM>
                                    <NavLink
                                        name=link.name().to_string()
                                        to=link.target().to_string()
                                    />
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>

            // buttons are inert
            <div class=class::POST>
                <button class=class::POST_BUTTON>{post_label}</button>
            </div>

            <div class=class::USER>
                <button class=class::USER_BUTTON>
                    <p class=class::USER_FIELD>{username}</p>
                    <p class=class::USER_FIELD>{tag}</p>
                </button>
            </div>
        </header>
    }
}
