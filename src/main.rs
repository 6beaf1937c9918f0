use maildrop::{config::AppConfig, App, Result};

#[tokio::main]
async fn main() -> Result<()> {
    // We have a different logging mechanism for production
    #[cfg(not(debug_assertions))]
    {
        maildrop::init_production_tracing();
    }
    #[cfg(debug_assertions)]
    {
        maildrop::init_dbg_tracing();
    }

    let config = AppConfig::from_env()?;
    let app = App::build_from_config(&config).await?;

    maildrop::web::serve(app).await?;

    Ok(())
}
