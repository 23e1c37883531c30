use chrono::NaiveDate;
use weeks_core::config::Config;

pub fn run(
    config: Config,
    port: Option<u16>,
    no_open: bool,
    pinned_today: Option<NaiveDate>,
) -> anyhow::Result<()> {
    let port = port.unwrap_or(config.ui.port);
    let open_browser = config.ui.open_browser && !no_open;

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move {
        let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{port}")).await?;
        let actual_port = listener.local_addr()?.port();
        println!("Life in weeks → http://localhost:{actual_port}  (Ctrl-C to stop)");

        tokio::select! {
            res = weeks_server::serve_on(config, pinned_today, listener, open_browser) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    })
}
