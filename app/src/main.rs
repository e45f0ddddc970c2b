use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use todo_app::{logging, App, Command, Config, Transport, UreqTransport};
use todo_core::Action;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    logging::init(&config.log_filter);
    info!(base_url = %config.base_url, "starting todo client");

    let mut app = App::mount(config.client(), UreqTransport::new());
    app.settle().await;
    show(&app);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        match Command::parse(&line) {
            Command::Quit => break,
            Command::Refresh => app.dispatch(Action::Refresh),
            Command::Add(title) => {
                app.dispatch(Action::TitleInput(title));
                app.dispatch(Action::Submit);
            }
        }
        app.settle().await;
        show(&app);
    }

    app.unmount();
    Ok(())
}

fn show<T: Transport>(app: &App<T>) {
    println!("{}\n", app.render().outline());
}
