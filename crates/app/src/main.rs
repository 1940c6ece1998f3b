mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = settings::Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "expenses={level},server={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    tracing::info!("Using data file {}", settings.data_file);
    let engine = match engine::Engine::builder().path(&settings.data_file).build() {
        Ok(engine) => engine,
        Err(err) => {
            tracing::error!("failed to load {}: {err}", settings.data_file);
            return Err(err.into());
        }
    };
    tracing::info!("Loaded {} expenses", engine.list().len());

    let listener = match tokio::net::TcpListener::bind(settings.address()).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!("failed to bind server listener: {err}");
            return Err(err.into());
        }
    };

    server::run_with_listener(engine, listener).await?;
    Ok(())
}
