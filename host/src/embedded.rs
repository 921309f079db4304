//! The compiled web client, baked into the binary at build time.
//!
//! Unknown paths fall back to `index.html` so the client can be opened at any
//! URL. When the bundle was not built, every path answers 404.

use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir};
use log::debug;
use mime_guess::from_path;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    serve_from(&STATIC_DIR, req.path())
}

fn serve_from(dir: &Dir<'_>, request_path: &str) -> HttpResponse {
    let path = request_path.trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match dir.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match dir.get_file("index.html") {
            Some(index) => {
                debug!("No bundled file for {}, serving index.html", request_path);
                HttpResponse::Ok()
                    .content_type("text/html; charset=utf-8")
                    .body(index.contents().to_vec())
            }
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::http::{header, StatusCode};
    use include_dir::{DirEntry, File};

    static BUNDLE: Dir = Dir::new(
        "",
        &[
            DirEntry::File(File::new("index.html", b"<html>smriti</html>")),
            DirEntry::File(File::new("smriti-frontend.js", b"export default 1;")),
        ],
    );

    static EMPTY: Dir = Dir::new("", &[]);

    fn content_type(resp: &HttpResponse) -> String {
        resp.headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string()
    }

    #[actix_web::test]
    async fn root_serves_index() {
        let resp = serve_from(&BUNDLE, "/");
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(content_type(&resp).starts_with("text/html"));
        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(&body[..], b"<html>smriti</html>");
    }

    #[actix_web::test]
    async fn assets_get_their_mime_type() {
        let resp = serve_from(&BUNDLE, "/smriti-frontend.js");
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(content_type(&resp).contains("javascript"));
    }

    #[actix_web::test]
    async fn unknown_path_falls_back_to_index() {
        let resp = serve_from(&BUNDLE, "/search/anything");
        assert_eq!(resp.status(), StatusCode::OK);
        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(&body[..], b"<html>smriti</html>");
    }

    #[actix_web::test]
    async fn missing_bundle_is_not_found() {
        let resp = serve_from(&EMPTY, "/");
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
