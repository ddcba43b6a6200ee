mod app;
mod effects;
mod logging;
mod render;

fn main() -> anyhow::Result<()> {
    logging::initialize();
    app::run()
}
