use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{CampsiteView, DirectoryView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DirectoryView)] Directory {},
        #[route("/campsite/:campsite_id", CampsiteView)] Campsite { campsite_id: u64 },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "masthead",
                h1 { "Campsites" }
                nav { class: "masthead-nav",
                    Link { to: Route::Directory {}, "Directory" }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
