mod app;

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            // Example: RUST_LOG=shelf_core::controller=debug
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shelf_core=info,shelf_gui=info".into()),
        )
        .init();
}

fn main() -> iced::Result {
    init_logging();

    iced::application("Your own library", app::update, app::view).run_with(app::initialize)
}
