mod config;
mod site;

use crate::config::ServerConfig;
use crate::site::{serve_embedded, SiteAssets};
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info, warn};
use std::io;
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Logs a failed browser launch; the site keeps running either way.
fn report_browser_open(url: &str, result: io::Result<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!("could not open browser at {}: {}", url, e);
            false
        }
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env().map_err(|e| {
        error!("{}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;
    let url = config.site_url();

    if STATIC_DIR.get_file("index.html").is_none() {
        error!("frontend build not embedded; run `trunk build` in frontend/ and rebuild");
    }

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            report_browser_open(&url_clone, webbrowser::open(&url_clone));
        });
    }

    info!("Site running at {}", url);

    let assets = web::Data::new(SiteAssets::new(&STATIC_DIR, &config.base_path));
    HttpServer::new(move || {
        App::new()
            .app_data(assets.clone())
            .default_service(web::route().to(serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_launch_failure_is_reported_not_fatal() {
        let err = io::Error::new(io::ErrorKind::NotFound, "no browser found");
        assert!(!report_browser_open("http://127.0.0.1:8080/Bois_Saveurs/", Err(err)));
        assert!(report_browser_open("http://127.0.0.1:8080/Bois_Saveurs/", Ok(())));
    }
}
