use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{HomeView, ProfileView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/profile", ProfileView)] Profile {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            nav { class: "topbar",
                h1 { class: "brand", "Mentor" }
                ul {
                    li { Link { to: Route::Home {}, "Learn" } }
                    li { Link { to: Route::Profile {}, "Profile" } }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
