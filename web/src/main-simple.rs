//! Static file server for the landing page
//!
//! Serves the built Leptos WASM app from `dist/`. Unknown paths fall back to
//! `index.html` so client-side routes resolve.
//!
//! Environment:
//! - `HELLO_SOLANA_ADDR` - bind address (default `127.0.0.1:8080`)
//! - `HELLO_SOLANA_DIST` - directory to serve (default `dist`)

use std::env;
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Component, Path, PathBuf};

const DEFAULT_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_DIST: &str = "dist";
const NOT_FOUND_BODY: &[u8] = b"<!DOCTYPE html><html><body><h1>Error: Index not found</h1></body></html>";

fn main() {
    let addr = env::var("HELLO_SOLANA_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let dist = PathBuf::from(env::var("HELLO_SOLANA_DIST").unwrap_or_else(|_| DEFAULT_DIST.to_string()));

    let listener = match TcpListener::bind(&addr) {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    println!("HelloSolana server running at http://{}", addr);
    println!("Serving from {}/ directory", dist.display());
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream, &dist),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

/// Map a request target (path plus optional query) to a file under `dist`.
///
/// Directories, missing files, and paths that try to climb out of `dist`
/// resolve to `index.html`.
fn resolve_path(dist: &Path, target: &str) -> PathBuf {
    let path = target.split_once('?').map_or(target, |(p, _)| p);
    let relative = Path::new(path.trim_start_matches('/'));

    let escapes = relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if path.is_empty() || relative.as_os_str().is_empty() || escapes {
        return dist.join("index.html");
    }

    let candidate = dist.join(relative);
    if candidate.is_file() {
        candidate
    } else {
        dist.join("index.html")
    }
}

fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

fn handle_client(mut stream: TcpStream, dist: &Path) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let target = request_line.split_whitespace().nth(1).unwrap_or("/");
    let file_path = resolve_path(dist, target);

    let (status, body, mime) = match fs::read(&file_path) {
        Ok(contents) => ("200 OK", contents, content_type(&file_path)),
        Err(e) => {
            eprintln!("Failed to read {}: {}", file_path.display(), e);
            ("404 NOT FOUND", NOT_FOUND_BODY.to_vec(), "text/html; charset=utf-8")
        }
    };

    let headers = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nAccess-Control-Allow-Origin: *\r\nContent-Length: {}\r\n\r\n",
        status,
        mime,
        body.len()
    );

    if let Err(e) = stream.write_all(headers.as_bytes()) {
        eprintln!("Failed to write headers: {}", e);
        return;
    }

    if let Err(e) = stream.write_all(&body) {
        eprintln!("Failed to write file contents: {}", e);
    }

    if let Err(e) = stream.flush() {
        eprintln!("Failed to flush response: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dist(name: &str) -> PathBuf {
        let dir = env::temp_dir().join(format!("hello-solana-dist-{}-{}", name, std::process::id()));
        fs::create_dir_all(dir.join("assets")).unwrap();
        fs::write(dir.join("index.html"), "<html></html>").unwrap();
        fs::write(dir.join("app_bg.wasm"), [0u8, 97, 115, 109]).unwrap();
        dir
    }

    #[test]
    fn test_existing_file_is_served() {
        let dist = temp_dist("existing");
        assert_eq!(resolve_path(&dist, "/app_bg.wasm"), dist.join("app_bg.wasm"));
        assert_eq!(resolve_path(&dist, "/app_bg.wasm?v=2"), dist.join("app_bg.wasm"));
        fs::remove_dir_all(&dist).ok();
    }

    #[test]
    fn test_routes_fall_back_to_index() {
        let dist = temp_dist("fallback");
        assert_eq!(resolve_path(&dist, "/"), dist.join("index.html"));
        assert_eq!(resolve_path(&dist, "/some/client/route"), dist.join("index.html"));
        assert_eq!(resolve_path(&dist, "/assets"), dist.join("index.html"));
        fs::remove_dir_all(&dist).ok();
    }

    #[test]
    fn test_parent_traversal_is_rejected() {
        let dist = temp_dist("traversal");
        assert_eq!(resolve_path(&dist, "/../Cargo.toml"), dist.join("index.html"));
        fs::remove_dir_all(&dist).ok();
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type(Path::new("index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("app.js")), "application/javascript");
        assert_eq!(content_type(Path::new("app_bg.wasm")), "application/wasm");
        assert_eq!(content_type(Path::new("blob")), "application/octet-stream");
    }
}
