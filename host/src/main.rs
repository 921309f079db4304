mod config;
mod embedded;

use actix_web::{web, App, HttpResponse, HttpServer};
use clap::Parser;
use env_logger::Env;
use log::info;
use serde_json::json;
use std::thread;
use std::time::Duration;

use crate::config::HostArgs;
use crate::embedded::serve_embedded;

async fn healthz() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/healthz", web::get().to(healthz))
        .default_service(web::route().to(serve_embedded));
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let args = HostArgs::parse();
    let url = args.url();

    if args.open_browser() {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(err) = webbrowser::open(&url) {
                log::warn!("Could not open browser at {}: {}", url, err);
            }
        });
    }

    info!("Serving ParamparaSmriti at {}", url);

    HttpServer::new(|| App::new().configure(configure))
        .bind((args.host.as_str(), args.port))?
        .run()
        .await
}
