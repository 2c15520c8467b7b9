//! Serves the embedded frontend build under the site base path.
//!
//! Paths below the base path map onto files of the frontend build. Unknown
//! paths fall back to `index.html` so the single-page app can render them.
//! Requests outside the base path are redirected to the site root.

use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use include_dir::Dir;
use log::debug;
use mime_guess::from_path;

/// Frontend build plus the path prefix it is published under.
pub struct SiteAssets {
    pub dir: &'static Dir<'static>,
    pub base_path: String,
}

impl SiteAssets {
    pub fn new(dir: &'static Dir<'static>, base_path: &str) -> Self {
        Self {
            dir,
            base_path: base_path.trim_end_matches('/').to_string(),
        }
    }

    /// File path inside the build for a request path, or `None` when the
    /// request lies outside the base path.
    pub fn asset_path<'a>(&self, request_path: &'a str) -> Option<&'a str> {
        let rest = request_path.strip_prefix(self.base_path.as_str())?;
        if !rest.is_empty() && !rest.starts_with('/') {
            // "/Bois_SaveursX" is not below "/Bois_Saveurs".
            return None;
        }
        let file_path = rest.trim_start_matches('/');
        Some(if file_path.is_empty() { "index.html" } else { file_path })
    }
}

pub async fn serve_embedded(req: HttpRequest, assets: web::Data<SiteAssets>) -> HttpResponse {
    let Some(file_path) = assets.asset_path(req.path()) else {
        debug!("redirecting {} to site root", req.path());
        return HttpResponse::Found()
            .insert_header((header::LOCATION, format!("{}/", assets.base_path)))
            .finish();
    };

    match assets.dir.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match assets.dir.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}
