mod app;
mod effects;
mod logging;
mod storage;

fn main() -> anyhow::Result<()> {
    app::run()
}
