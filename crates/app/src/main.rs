use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use directory_core::Clock;
use directory_core::model::{Campsite, CampsiteId, Rating, ValidatedComment};
use services::DirectoryService;
use storage::repository::Storage;
use ui::{App, AppContext, UiApp};

#[derive(Debug)]
enum ArgsError {
    UnknownArg(String),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
        }
    }
}

impl std::error::Error for ArgsError {}

struct DesktopApp {
    directory: Arc<DirectoryService>,
}

impl UiApp for DesktopApp {
    fn directory(&self) -> Arc<DirectoryService> {
        Arc::clone(&self.directory)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app");
    eprintln!();
    eprintln!("Launches the campsite directory with a seeded in-memory dataset.");
}

fn parse_args() -> Result<(), ArgsError> {
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }
    Ok(())
}

fn seed_campsites() -> Vec<Campsite> {
    vec![
        Campsite::new(
            CampsiteId::new(1),
            "React Lake Campground",
            "Nestled in the foothills of the Chrome Mountains, this campground \
             on the shores of the pristine React Lake is a favorite for fly fishers.",
            "/assets/images/react-lake.jpg",
        ),
        Campsite::new(
            CampsiteId::new(2),
            "Chrome River Campground",
            "Spend a few sunny days and starry nights beneath a canopy of \
             old-growth firs at this enchanting spot by the Chrome River.",
            "/assets/images/chrome-river.jpg",
        ),
        Campsite::new(
            CampsiteId::new(3),
            "Breadcrumb Trail Campground",
            "Let the breadcrumbs lead you to this off-the-beaten-path, \
             hike-in-only campground.",
            "/assets/images/breadcrumb-trail.jpg",
        ),
        Campsite::new(
            CampsiteId::new(4),
            "Redux Woods Campground",
            "You'll never want to leave this hidden gem, deep within the \
             lush Redux Woods.",
            "/assets/images/redux-woods.jpg",
        ),
    ]
}

async fn seed_directory(
    storage: &Storage,
    directory: &DirectoryService,
) -> Result<(), Box<dyn std::error::Error>> {
    for campsite in seed_campsites() {
        storage.campsites.upsert_campsite(&campsite).await?;
    }

    let comments: [(u64, u8, &str, &str); 4] = [
        (1, 5, "Lazlo Paulsen", "What a magnificent view!"),
        (1, 4, "Kehlan Mack", "This was our first time camping and it was a great experience."),
        (2, 3, "Harriet Conn", "The river was high, but the fishing was good."),
        (4, 5, "Barbara Kirk", "So peaceful. We will be back."),
    ];
    for (campsite_id, rating, author, text) in comments {
        let draft = ValidatedComment {
            rating: Rating::new(rating)?,
            author: author.to_string(),
            text: text.to_string(),
        };
        directory
            .post_comment(CampsiteId::new(campsite_id), draft)
            .await?;
    }

    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    parse_args().map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // The directory is in-memory only; seed it fresh on every launch so the
    // app opens with something to browse.
    let storage = Storage::in_memory();
    let clock = Clock::default_clock();
    let directory = Arc::new(DirectoryService::new(
        clock,
        Arc::clone(&storage.campsites),
        Arc::clone(&storage.comments),
    ));
    seed_directory(&storage, &directory).await?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { directory });
    let context = AppContext::new(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev
    // setups. Explicitly disable it so the app doesn't behave like a modal
    // window.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Campsites")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
