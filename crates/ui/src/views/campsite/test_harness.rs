use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use chrono::TimeZone;
use chrono::Utc;
use directory_core::fixed_clock;
use directory_core::model::{Campsite, CampsiteId, Rating, ValidatedComment};
use services::DirectoryService;
use storage::repository::{NewCommentRecord, Storage};

use crate::context::{AppContext, UiApp};
use crate::views::{CampsiteView, DirectoryView};

use super::form::CommentFormTestHandles;

#[derive(Clone)]
struct TestApp {
    directory: Arc<DirectoryService>,
}

impl UiApp for TestApp {
    fn directory(&self) -> Arc<DirectoryService> {
        Arc::clone(&self.directory)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    campsite_id: u64,
    form_handles: Option<CommentFormTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| AppContext::new(&app));
    use_context_provider(|| props.campsite_id);
    if let Some(handles) = props.form_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[component]
fn DirectoryRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| AppContext::new(&app));
    rsx! { Router::<DirectoryTestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum DirectoryTestRoute {
    #[route("/", DirectoryRoot)]
    Root {},
}

#[component]
fn DirectoryRoot() -> Element {
    rsx! { DirectoryView {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let campsite_id = use_context::<u64>();
    rsx! { CampsiteView { campsite_id } }
}

pub(crate) struct ViewHarness {
    pub(crate) dom: VirtualDom,
    pub(crate) storage: Storage,
    pub(crate) form_handles: Option<CommentFormTestHandles>,
    built: bool,
}

impl ViewHarness {
    pub(crate) fn rebuild(&mut self) {
        // `VirtualDom::rebuild` wipes all component state, so only run it for
        // the initial build; afterwards re-render the existing scopes.
        if !self.built {
            self.dom.rebuild_in_place();
            self.built = true;
        }
        drive_dom(&mut self.dom);
    }

    pub(crate) async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub(crate) fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub(crate) fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub(crate) fn setup_view_harness(campsite_id: u64, storage: Storage) -> ViewHarness {
    build_harness(campsite_id, storage, None)
}

pub(crate) fn setup_view_harness_with_form(campsite_id: u64, storage: Storage) -> ViewHarness {
    build_harness(campsite_id, storage, Some(CommentFormTestHandles::default()))
}

pub(crate) fn setup_directory_harness(storage: Storage) -> ViewHarness {
    let directory = Arc::new(DirectoryService::new(
        fixed_clock(),
        Arc::clone(&storage.campsites),
        Arc::clone(&storage.comments),
    ));
    let app = Arc::new(TestApp { directory });

    let dom = VirtualDom::new_with_props(
        DirectoryRouterHarness,
        ViewHarnessProps {
            app,
            campsite_id: 0,
            form_handles: None,
        },
    );

    ViewHarness {
        dom,
        storage,
        form_handles: None,
        built: false,
    }
}

fn build_harness(
    campsite_id: u64,
    storage: Storage,
    form_handles: Option<CommentFormTestHandles>,
) -> ViewHarness {
    let directory = Arc::new(DirectoryService::new(
        fixed_clock(),
        Arc::clone(&storage.campsites),
        Arc::clone(&storage.comments),
    ));
    let app = Arc::new(TestApp { directory });

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            campsite_id,
            form_handles: form_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        storage,
        form_handles,
        built: false,
    }
}

pub(crate) fn sample_campsite(id: u64) -> Campsite {
    Campsite::new(
        CampsiteId::new(id),
        "React Lake Campground",
        "Nestled in the foothills, along the shores of the lake.",
        "/assets/images/react-lake.jpg",
    )
}

pub(crate) async fn seed_comment(
    storage: &Storage,
    campsite_id: u64,
    author: &str,
    text: &str,
    rating: u8,
) {
    let record = NewCommentRecord::from_validated(
        CampsiteId::new(campsite_id),
        ValidatedComment {
            rating: Rating::new(rating).expect("rating in range"),
            author: author.to_string(),
            text: text.to_string(),
        },
        Utc.with_ymd_and_hms(2023, 5, 1, 9, 0, 0).unwrap(),
    );
    storage
        .comments
        .append_comment(record)
        .await
        .expect("seed comment");
}
