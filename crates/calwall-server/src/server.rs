// File: crates/calwall-server/src/server.rs
// Summary: Listener plus a fixed pool of render workers.
// Notes:
// - Every worker blocks on the shared listener and owns its own `Renderer`;
//   nothing is shared between requests except the read-only `FontHandle`.

use std::net::SocketAddr;
use std::sync::Arc;
use std::thread::JoinHandle;

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use tiny_http::{Header, Request, Response, Server};

use calwall_core::{FontHandle, Renderer};

use crate::config::ServerConfig;
use crate::handler::{self, Limits, Reply};

/// A bound server with its workers running.
pub struct RunningServer {
    server: Arc<Server>,
    workers: Vec<JoinHandle<()>>,
    addr: Option<SocketAddr>,
}

impl RunningServer {
    /// Bind `cfg.bind` and start `cfg.workers` render threads.
    pub fn start(cfg: &ServerConfig, fonts: FontHandle) -> Result<Self> {
        let server = Server::http(cfg.bind.as_str())
            .map_err(|e| anyhow!("failed to bind {}: {e}", cfg.bind))?;
        let server = Arc::new(server);
        let addr = server.server_addr().to_ip();
        let limits = Limits { max_dimension: cfg.max_dimension };

        let mut workers = Vec::with_capacity(cfg.workers);
        for id in 0..cfg.workers {
            let server = Arc::clone(&server);
            let fonts = fonts.clone();
            let handle = std::thread::Builder::new()
                .name(format!("calwall-worker-{id}"))
                .spawn(move || worker_loop(id, &server, &fonts, limits))
                .context("failed to spawn worker thread")?;
            workers.push(handle);
        }
        tracing::info!(bind = %cfg.bind, ?addr, workers = cfg.workers, "listening");
        Ok(Self { server, workers, addr })
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.addr
    }

    /// Block until every worker exits.
    pub fn join(self) {
        for w in self.workers {
            if w.join().is_err() {
                tracing::error!("worker thread panicked");
            }
        }
    }

    /// Wake every worker, let it finish its current request, and join.
    pub fn shutdown(self) {
        for _ in 0..self.workers.len() {
            self.server.unblock();
        }
        self.join();
    }
}

fn worker_loop(id: usize, server: &Server, fonts: &FontHandle, limits: Limits) {
    let renderer = Renderer::new(fonts);
    tracing::debug!(worker = id, "worker ready");
    loop {
        match server.recv() {
            Ok(request) => serve_one(request, &renderer, limits),
            Err(err) => {
                tracing::debug!(worker = id, %err, "listener closed");
                break;
            }
        }
    }
}

fn serve_one(request: Request, renderer: &Renderer, limits: Limits) {
    let method = request.method().as_str().to_string();
    let url = request.url().to_string();
    let started = std::time::Instant::now();

    let reply = handler::handle(&method, &url, Utc::now(), renderer, limits);
    let status = reply.status;
    let bytes = reply.body.len();

    if let Err(err) = request.respond(into_response(reply)) {
        tracing::warn!(%err, %url, "failed to send response");
    }
    tracing::info!(%method, %url, status, bytes, elapsed_ms = started.elapsed().as_millis() as u64, "request");
}

fn into_response(reply: Reply) -> Response<std::io::Cursor<Vec<u8>>> {
    let mut response = Response::from_data(reply.body).with_status_code(reply.status);
    let headers = std::iter::once(("Content-Type", reply.content_type)).chain(reply.headers);
    for (name, value) in headers {
        match Header::from_bytes(name.as_bytes(), value.as_bytes()) {
            Ok(h) => response.add_header(h),
            Err(()) => tracing::warn!(name, value, "skipping invalid header"),
        }
    }
    response
}
